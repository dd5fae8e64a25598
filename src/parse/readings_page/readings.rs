use scraper::{ElementRef, Html};
use url::Url;

use super::node::nodes;
use super::section::{OpenSection, Section};
use super::walk::walk;
use crate::date_key::DateKey;
use crate::parse::{Error, Result};
use crate::{fetch, static_selector};

/// Everything read off one day's mass page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Readings {
    success: bool,
    date: DateKey,
    readings: Vec<Section>,
}

impl Readings {
    #[inline]
    #[must_use]
    pub const fn date(&self) -> DateKey {
        self.date
    }

    #[inline]
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.readings
    }

    pub fn from_html(html: &Html, date: DateKey) -> Result<Self> {
        static_selector!(CONTAINER_SELECTOR <- "#innertexst");
        let container = html.select(&CONTAINER_SELECTOR).next().ok_or_else(|| {
            Error::html_parse_error("Readings container #innertexst not found")
        })?;
        Ok(Self::from_html_element(container, date))
    }

    pub fn from_html_element(container: ElementRef<'_>, date: DateKey) -> Self {
        let readings = walk(nodes(container))
            .into_iter()
            .map(OpenSection::close)
            .collect();
        Self {
            success: true,
            date,
            readings,
        }
    }

    /// Fetches and parses the page for `date`. A fetch failure ends the whole load.
    pub async fn load(client: &reqwest::Client, base_url: &Url, date: DateKey) -> crate::Result<Self> {
        let page = fetch::readings_page(client, base_url, date).await?;
        let start = std::time::Instant::now();
        let html = Html::parse_document(&page);
        let readings = Self::from_html(&html, date)?;
        log::debug!(
            "Parsed {} sections for {date} in {:?}",
            readings.readings.len(),
            start.elapsed()
        );
        Ok(readings)
    }
}
