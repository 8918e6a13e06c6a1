use anyhow::{ensure, Context};

const DEFAULT_CHANNEL_CAPACITY: usize = 32;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Debug)]
pub struct Config {
    /// Mailbox depth of every actor.
    pub channel_capacity: usize,
    /// Tracing filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let channel_capacity = match std::env::var("FILMORATE_CHANNEL_CAPACITY") {
            Ok(raw) => raw.parse().context("FILMORATE_CHANNEL_CAPACITY")?,
            Err(_) => DEFAULT_CHANNEL_CAPACITY,
        };
        ensure!(channel_capacity > 0, "FILMORATE_CHANNEL_CAPACITY must be greater than zero");

        let log_filter =
            std::env::var("FILMORATE_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            channel_capacity,
            log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.channel_capacity, 32);
        assert_eq!(config.log_filter, "info");
    }
}
