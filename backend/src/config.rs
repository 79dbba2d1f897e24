//! Command line and environment configuration of the static server.

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "smelly-cat-server", about = "Serves the smelly-cat site", version)]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "SMELLY_CAT_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "SMELLY_CAT_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Don't open the site in a browser on startup.
    #[arg(long)]
    pub no_browser: bool,
}

impl ServerConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_localhost_8080() {
        let config = ServerConfig::try_parse_from(["smelly-cat-server"]).unwrap();
        assert_eq!(config.port, 8080);
        assert!(!config.no_browser);
    }

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "smelly-cat-server",
            "--host",
            "0.0.0.0",
            "--port",
            "3000",
            "--no-browser",
        ])
        .unwrap();
        assert_eq!(config.url(), "http://0.0.0.0:3000");
        assert!(config.no_browser);
    }
}
