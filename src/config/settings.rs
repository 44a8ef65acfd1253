use serde::{Deserialize, Serialize};
use validator::Validate;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:1213";
pub const DEFAULT_LOG_FILTER: &str = "volume_manager=info,tower_http=debug";

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct Settings {
    #[validate]
    pub server: ServerSettings,
    #[validate]
    pub log: LogSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct ServerSettings {
    #[validate(custom = "validate_socket_addr")]
    pub bind_address: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directives, overridden by `RUST_LOG`
    #[validate(length(min = 1))]
    pub filter: String,
}

impl Settings {
    pub fn load() -> Result<Self, config::ConfigError> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let config_builder = config::Config::builder()
            .set_default("server.bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("log.filter", DEFAULT_LOG_FILTER)?
            .add_source(config::File::with_name("config/default").required(false))
            // Add configuration from environment variables (i.e. `APP_SERVER__BIND_ADDRESS=0.0.0.0:8080`)
            .add_source(config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"))
            // Optional local configuration file
            .add_source(config::File::with_name("config/local").required(false));

        config_builder.build()?.try_deserialize()
    }

    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()?;
        self.server.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            },
            log: LogSettings {
                filter: DEFAULT_LOG_FILTER.to_string(),
            },
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.bind_address.parse()
    }
}

fn validate_socket_addr(addr: &str) -> Result<(), validator::ValidationError> {
    addr.parse::<SocketAddr>()
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("invalid_socket_address"))
}
