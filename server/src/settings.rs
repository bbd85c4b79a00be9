use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Runtime configuration: coded defaults, overridden by an optional
/// `config.toml`, overridden by environment variables (`API_BASE_URL`,
/// `API_VERSION`, `HOST`, `PORT`, `SECURE_COOKIES`).
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub api_base_url: String,
    pub api_version: String,
    pub host: String,
    pub port: u16,
    pub secure_cookies: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".into(),
            api_version: "v1".into(),
            host: "0.0.0.0".into(),
            port: 3000,
            secure_cookies: false,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("api_base_url", "http://localhost:8080")?
            .set_default("api_version", "v1")?
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3000)?
            .set_default("secure_cookies", false)?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::default())
            .build()?;

        config.try_deserialize()
    }

    /// Address the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::set_var;

    #[test]
    fn test_settings() {
        set_var("API_VERSION", "v2");
        set_var("PORT", "4000");
        let settings = Settings::new().unwrap_or_default();
        assert_eq!(settings.api_base_url, "http://localhost:8080");
        assert_eq!(settings.api_version, "v2");
        assert_eq!(settings.bind_address(), "0.0.0.0:4000");
        assert!(!settings.secure_cookies);
    }
}
