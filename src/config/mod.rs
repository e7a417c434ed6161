// Configuration module entry point
// Loads layered configuration and owns the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;
use std::path::PathBuf;

pub use state::AppState;
pub use types::Config;

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

/// Environment variable prefix, e.g. `FOODSTATS_SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "FOODSTATS";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Missing files are fine; defaults cover every required key
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 4567)?
            .set_default("data.dir", ".")?
            .set_default("data.route", "/foodstats")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.connection_timeout", 30)?
            .set_default("http.server_name", "foodstats-mock")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.data.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let cfg = Config::load_from("does-not-exist/config").unwrap();
        assert_eq!(cfg.server.port, 4567);
        assert_eq!(cfg.data.route, "/foodstats");
        assert_eq!(cfg.data.dir, ".");
        assert_eq!(cfg.logging.access_log_format, "common");
        assert!(cfg.server.workers.is_none());
        assert!(cfg.performance.max_connections.is_none());
        assert_eq!(cfg.performance.connection_timeout, 30);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mock.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9090\nworkers = 2\n\n[data]\ndir = \"/srv/chunks\"\n\n[performance]\nconnection_timeout = 5\n",
        )
        .unwrap();

        let base = dir.path().join("mock");
        let cfg = Config::load_from(base.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.workers, Some(2));
        assert_eq!(cfg.data_dir(), PathBuf::from("/srv/chunks"));
        assert_eq!(cfg.data.route, "/foodstats");
        assert_eq!(cfg.performance.connection_timeout, 5);
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = Config::load_from("does-not-exist/config").unwrap();
        assert_eq!(
            cfg.socket_addr().unwrap(),
            "127.0.0.1:4567".parse::<SocketAddr>().unwrap()
        );
        cfg.server.host = "not a host".to_string();
        assert!(cfg.socket_addr().is_err());
    }
}
