use std::time::Instant;

use reqwest::Client;
use tracing::{instrument, Level};
use url::Url;

use crate::date_key::DateKey;

pub fn make_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .gzip(true)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
}

/// ex. `https://universalis.com/20250907/mass.htm`
pub fn readings_url(base_url: &Url, date: DateKey) -> Result<Url, url::ParseError> {
    base_url.join(&format!("{date}/mass.htm"))
}

/// Raw html of the mass page for `date`. Any non-success status is an error.
#[instrument(skip(client, base_url, date), fields(
    date = %date,
    base = %base_url,
), level = Level::TRACE)]
pub async fn readings_page(
    client: &Client,
    base_url: &Url,
    date: DateKey,
) -> crate::Result<String> {
    let url = readings_url(base_url, date)?;
    let start = Instant::now();
    let res = client.get(url).send().await?.error_for_status()?;
    let text = res.text().await?;
    log::trace!("Got text of readings page in \t {:?}", start.elapsed());
    Ok(text)
}
