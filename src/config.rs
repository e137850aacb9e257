use crate::constants::*;
use std::env;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogueSource {
    #[default]
    RestCountries, // Live REST Countries API
    File,          // JSON file loaded once at startup
}

impl std::str::FromStr for CatalogueSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "restcountries" | "rest" => Ok(CatalogueSource::RestCountries),
            "file" => Ok(CatalogueSource::File),
            _ => Err(format!(
                "Invalid catalogue source: {}. Use 'restcountries' or 'file'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub catalogue: CatalogueConfig,
    pub selector: SelectorConfig,
}

#[derive(Debug, Clone)]
pub struct CatalogueConfig {
    pub source: CatalogueSource,

    /// REST Countries API root, without trailing slash
    pub base_url: String,

    /// Path to a JSON catalogue; required when `source` is `File`
    pub file: Option<String>,

    pub timeout_secs: u64,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            source: CatalogueSource::default(),
            base_url: RESTCOUNTRIES_BASE_URL.to_string(),
            file: None,
            timeout_secs: DEFAULT_CATALOGUE_TIMEOUT_SECS,
        }
    }
}

impl CatalogueConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let source: CatalogueSource = env::var("CATALOGUE_SOURCE")
            .unwrap_or_else(|_| "restcountries".to_string())
            .parse()?;
        let file = env::var("CATALOGUE_FILE").ok();

        if source == CatalogueSource::File && file.is_none() {
            return Err("CATALOGUE_FILE must be set when CATALOGUE_SOURCE=file".to_string());
        }

        Ok(Self {
            source,
            base_url: env::var("RESTCOUNTRIES_BASE_URL").unwrap_or(defaults.base_url),
            file,
            timeout_secs: env::var("CATALOGUE_TIMEOUT_SECS")
                .unwrap_or_else(|_| defaults.timeout_secs.to_string())
                .parse()
                .map_err(|_| "Invalid CATALOGUE_TIMEOUT_SECS")?,
        })
    }
}

/// Defaults applied to selection requests that leave fields unset.
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Minimum distance (km) from the reference, or spread target without one
    pub min_distance_km: f64,

    /// Countries returned per selection
    pub count: usize,

    /// Largest `count` a caller may ask for
    pub max_count: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            min_distance_km: DEFAULT_MIN_DISTANCE_KM,
            count: DEFAULT_SELECTION_COUNT,
            max_count: DEFAULT_MAX_SELECTION_COUNT,
        }
    }
}

impl SelectorConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let config = Self {
            min_distance_km: env::var("SELECTION_MIN_DISTANCE_KM")
                .unwrap_or_else(|_| defaults.min_distance_km.to_string())
                .parse()
                .map_err(|_| "Invalid SELECTION_MIN_DISTANCE_KM")?,

            count: env::var("SELECTION_COUNT")
                .unwrap_or_else(|_| defaults.count.to_string())
                .parse()
                .map_err(|_| "Invalid SELECTION_COUNT")?,

            max_count: env::var("SELECTION_MAX_COUNT")
                .unwrap_or_else(|_| defaults.max_count.to_string())
                .parse()
                .map_err(|_| "Invalid SELECTION_MAX_COUNT")?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.min_distance_km.is_finite() || self.min_distance_km <= 0.0 {
            return Err("SELECTION_MIN_DISTANCE_KM must be positive".to_string());
        }
        if self.count == 0 {
            return Err("SELECTION_COUNT must be at least 1".to_string());
        }
        if self.count > self.max_count {
            return Err("SELECTION_COUNT must not exceed SELECTION_MAX_COUNT".to_string());
        }
        Ok(())
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            catalogue: CatalogueConfig::from_env()?,
            selector: SelectorConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "HOST",
        "PORT",
        "CATALOGUE_SOURCE",
        "CATALOGUE_FILE",
        "RESTCOUNTRIES_BASE_URL",
        "CATALOGUE_TIMEOUT_SECS",
        "SELECTION_MIN_DISTANCE_KM",
        "SELECTION_COUNT",
        "SELECTION_MAX_COUNT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_catalogue_source_parsing() {
        assert_eq!(
            "RestCountries".parse::<CatalogueSource>().unwrap(),
            CatalogueSource::RestCountries
        );
        assert_eq!("file".parse::<CatalogueSource>().unwrap(), CatalogueSource::File);
        assert!("postgres".parse::<CatalogueSource>().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults_from_empty_env() {
        clear_env();

        let selector = SelectorConfig::from_env().unwrap();
        assert_eq!(selector.min_distance_km, 1500.0);
        assert_eq!(selector.count, 3);
        assert_eq!(selector.max_count, 25);

        let catalogue = CatalogueConfig::from_env().unwrap();
        assert_eq!(catalogue.source, CatalogueSource::RestCountries);
        assert_eq!(catalogue.base_url, RESTCOUNTRIES_BASE_URL);
        assert_eq!(catalogue.timeout_secs, 10);
    }

    #[test]
    #[serial]
    fn test_selector_overrides_and_validation() {
        clear_env();
        env::set_var("SELECTION_MIN_DISTANCE_KM", "2500");
        env::set_var("SELECTION_COUNT", "5");
        let selector = SelectorConfig::from_env().unwrap();
        assert_eq!(selector.min_distance_km, 2500.0);
        assert_eq!(selector.count, 5);

        env::set_var("SELECTION_COUNT", "0");
        assert!(SelectorConfig::from_env().is_err());

        env::set_var("SELECTION_COUNT", "30");
        assert!(SelectorConfig::from_env().is_err());

        env::set_var("SELECTION_COUNT", "3");
        env::set_var("SELECTION_MIN_DISTANCE_KM", "-1");
        assert!(SelectorConfig::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_file_source_requires_path() {
        clear_env();
        env::set_var("CATALOGUE_SOURCE", "file");
        assert!(CatalogueConfig::from_env().is_err());

        env::set_var("CATALOGUE_FILE", "/tmp/countries.json");
        let catalogue = CatalogueConfig::from_env().unwrap();
        assert_eq!(catalogue.source, CatalogueSource::File);
        assert_eq!(catalogue.file.as_deref(), Some("/tmp/countries.json"));

        clear_env();
    }

    #[test]
    fn test_server_address() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            catalogue: CatalogueConfig::default(),
            selector: SelectorConfig::default(),
        };
        assert_eq!(config.server_address(), "127.0.0.1:8080");
    }
}
