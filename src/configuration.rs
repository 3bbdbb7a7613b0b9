use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_port: u16,
    pub app_host: String,
    pub backoffice: BackofficeSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
}

/// Shared-secret gate in front of the backoffice routes. A single password,
/// a cookie flag and its lifetime; this is not a per-user auth system.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct BackofficeSettings {
    pub password: String,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default = "default_cookie_ttl")]
    pub cookie_ttl_seconds: u64,
}

fn default_cookie_name() -> String {
    "backoffice-auth".to_string()
}

fn default_cookie_ttl() -> u64 {
    60 * 60 * 24 * 7 // 7 days
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port,
        )
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let mut settings = config::Config::default();

    // Add configuration values from a file named `configuration`
    // with the .yaml extension
    settings.merge(config::File::with_name("configuration"))?;

    let mut config: Settings = settings.try_deserialize()?;

    // The admin password may be rotated without touching the config file
    if let Ok(password) = std::env::var("BACKOFFICE_PASSWORD") {
        config.backoffice.password = password;
    }

    Ok(config)
}
