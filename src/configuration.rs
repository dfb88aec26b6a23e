use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Defaults, then an optional `trivia.toml`, then `TRIVIA_*` environment variables
/// (a `.env` file is read into the environment first).
pub fn get_configuration() -> Result<Settings, ConfigError> {
    dotenv::dotenv().ok();
    Config::builder()
        .set_default("database_url", "sqlite:trivia.db")?
        .set_default("host", "0.0.0.0")?
        .set_default("port", 5000)?
        .add_source(File::with_name("trivia").required(false))
        .add_source(Environment::with_prefix("TRIVIA"))
        .build()?
        .try_deserialize()
}
