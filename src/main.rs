#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod date_key;
mod error;
mod fetch;
mod parse;
mod server;

use std::env;

use crate::{config::Config, date_key::DateKey, fetch::make_client, parse::Readings};

pub use error::Result;

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// `mass_readings serve` runs the http api on HOST:PORT.
/// `mass_readings [YYYYMMDD]` prints the readings for one day, today by default.
#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let config = Config::from_env()?;
    log::debug!("{config:?}");
    match env::args().nth(1).as_deref() {
        Some("serve") => server::serve(config).await?,
        arg => {
            let date = match arg {
                Some(arg) => arg.parse()?,
                None => DateKey::today(),
            };
            let client = make_client()?;
            let readings = Readings::load(&client, &config.base_url, date).await?;
            println!("{}", serde_json::to_string_pretty(&readings)?);
        }
    }
    Ok(())
}
