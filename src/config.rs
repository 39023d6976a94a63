use config::ConfigError;
use serde::Deserialize;

/// Runtime configuration, sourced from the process environment.
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default = "default_smtp_server")]
    pub smtp_server: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub sender_email: Option<String>,
    #[serde(default)]
    pub sender_password: Option<String>,
    #[serde(default = "default_db_path")]
    pub db_path: String,
    #[serde(default)]
    pub admin_email: Option<String>,
}

fn default_smtp_server() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_db_path() -> String {
    "invoices.db".to_string()
}

impl Config {
    /// Loads the configuration from the environment, reading a `.env` file
    /// first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        config::Config::builder()
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()
    }
}
