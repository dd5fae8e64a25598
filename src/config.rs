use std::{env, net::SocketAddr};

use url::Url;

use crate::error::Error;

pub const DEFAULT_BASE_URL: &str = "https://universalis.com/";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3000";

/// Settings read from the environment at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Site the `<date>/mass.htm` pages are fetched from.
    pub base_url: Url,
    pub addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        Self::from_vars(
            env::var("READINGS_BASE_URL").ok(),
            env::var("HOST").ok(),
            env::var("PORT").ok(),
        )
    }

    fn from_vars(
        base_url: Option<String>,
        host: Option<String>,
        port: Option<String>,
    ) -> crate::Result<Self> {
        let base_url = base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let mut base_url = Url::parse(base_url)
            .map_err(|e| Error::config_error(format!("READINGS_BASE_URL {base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config_error(format!(
                "READINGS_BASE_URL {base_url} cannot be a base url"
            )));
        }
        // join() replaces the last segment unless the path ends in a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let host = host.as_deref().unwrap_or(DEFAULT_HOST);
        let port = port.as_deref().unwrap_or(DEFAULT_PORT);
        let addr = format!("{host}:{port}")
            .parse()
            .map_err(|e| Error::config_error(format!("HOST/PORT {host}:{port}: {e}")))?;

        Ok(Self { base_url, addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(None, None, None).unwrap();
        assert_eq!(config.base_url.as_str(), "https://universalis.com/");
        assert_eq!(config.addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_base_url_gains_trailing_slash() {
        let config =
            Config::from_vars(Some("http://localhost:8080/mirror".into()), None, None).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/mirror/");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            Config::from_vars(Some("not a url".into()), None, None),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::from_vars(Some("mailto:someone@example.com".into()), None, None),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::from_vars(None, Some("0.0.0.0".into()), Some("http".into())),
            Err(Error::Config(_))
        ));
    }
}
