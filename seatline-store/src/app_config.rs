use serde::Deserialize;
use std::env;

use crate::allocation::{DEFAULT_SEATS_PER_SECTION, MAX_SEATS_PER_SECTION};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StoreConfig {
    pub seats_per_section: u32,
    pub origin: String,
    pub destination: String,
    pub price: f64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seats_per_section: DEFAULT_SEATS_PER_SECTION,
            origin: seatline_catalog::fare::DEFAULT_ORIGIN.to_string(),
            destination: seatline_catalog::fare::DEFAULT_DESTINATION.to_string(),
            price: seatline_catalog::fare::DEFAULT_PRICE,
        }
    }
}

impl StoreConfig {
    /// Seats per section must be in `1..=MAX_SEATS_PER_SECTION`
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if !(1..=MAX_SEATS_PER_SECTION).contains(&self.seats_per_section) {
            return Err(config::ConfigError::Message(format!(
                "store.seats_per_section must be between 1 and {}, got {}",
                MAX_SEATS_PER_SECTION, self.seats_per_section
            )));
        }
        Ok(())
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::from_builder(Self::builder(&run_mode)?)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        let config: Config = builder.build()?.try_deserialize()?;
        config.store.validate()?;
        Ok(config)
    }

    fn builder(
        run_mode: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        let defaults = StoreConfig::default();

        let builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 50051)?
            .set_default("store.seats_per_section", i64::from(defaults.seats_per_section))?
            .set_default("store.origin", defaults.origin)?
            .set_default("store.destination", defaults.destination)?
            .set_default("store.price", defaults.price)?
            // Files are optional; defaults above cover every key
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `SEATLINE_SERVER__PORT=8080` sets `server.port`
            .add_source(
                config::Environment::with_prefix("SEATLINE")
                    .prefix_separator("_")
                    .separator("__"),
            );

        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_files() {
        let config = Config::from_builder(Config::builder("test-no-such-mode").unwrap()).unwrap();

        assert_eq!(config.server.port, 50051);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.store, StoreConfig::default());
        assert_eq!(config.store.seats_per_section, 50);
    }

    #[test]
    fn test_overrides_apply_over_defaults() {
        let builder = Config::builder("test-no-such-mode")
            .unwrap()
            .set_override("store.seats_per_section", 2)
            .unwrap()
            .set_override("server.port", 8080)
            .unwrap();
        let config = Config::from_builder(builder).unwrap();

        assert_eq!(config.store.seats_per_section, 2);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.origin, "London");
    }

    fn load_with_seats(seats: i64) -> Result<Config, config::ConfigError> {
        let builder = Config::builder("test-no-such-mode")
            .unwrap()
            .set_override("store.seats_per_section", seats)
            .unwrap();
        Config::from_builder(builder)
    }

    #[test]
    fn test_rejects_out_of_range_seats_per_section() {
        assert!(load_with_seats(0).is_err());
        assert!(load_with_seats(i64::from(MAX_SEATS_PER_SECTION) + 1).is_err());
        assert!(load_with_seats(i64::from(u32::MAX)).is_err());

        let config = load_with_seats(i64::from(MAX_SEATS_PER_SECTION)).unwrap();
        assert_eq!(config.store.seats_per_section, MAX_SEATS_PER_SECTION);
        assert_eq!(load_with_seats(1).unwrap().store.seats_per_section, 1);
    }

    #[test]
    fn test_store_config_validate() {
        let mut store = StoreConfig::default();
        assert!(store.validate().is_ok());

        store.seats_per_section = 0;
        let err = store.validate().unwrap_err();
        assert!(err.to_string().contains("seats_per_section"));
    }
}
