// Server address resolution. The environment is read once, at the entry
// point; everything below receives an explicit `Config`.

/// Environment variable holding the `host:port` of the reducer service.
pub const SERVER_ENV_VAR: &str = "REDUCER_SERVER";

/// Used when `REDUCER_SERVER` is unset or blank.
pub const DEFAULT_SERVER: &str = "localhost:8888";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    server: String,
}

impl Config {
    pub fn new(server: impl Into<String>) -> Self {
        Config {
            server: server.into(),
        }
    }

    /// Build the config from `REDUCER_SERVER`, falling back to
    /// `localhost:8888`.
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(SERVER_ENV_VAR).ok())
    }

    pub fn resolve(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => Config::new(v.trim()),
            _ => Config::new(DEFAULT_SERVER),
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    /// `http://host:port`, or the configured value as-is when it already
    /// names a scheme.
    pub fn base_url(&self) -> String {
        let server = self.server.trim_end_matches('/');
        if server.starts_with("http://") || server.starts_with("https://") {
            server.to_string()
        } else {
            format!("http://{}", server)
        }
    }
}
