use manifesto_core::dashboard::SelectionPolicy;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running locally with no setup:
/// the server listens on `127.0.0.1:5000` and keeps its data in
/// `politicians.db` in the working directory.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// SQLite database URL (default: `sqlite://politicians.db`).
    pub database_url: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// What a dashboard dropdown refresh does to the current selection.
    pub selection_policy: SelectionPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            database_url: "sqlite://politicians.db".into(),
            request_timeout_secs: 30,
            selection_policy: SelectionPolicy::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                   |
    /// |------------------------|---------------------------|
    /// | `HOST`                 | `127.0.0.1`               |
    /// | `PORT`                 | `5000`                    |
    /// | `DATABASE_URL`         | `sqlite://politicians.db` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                      |
    /// | `DASHBOARD_SELECTION`  | `keep` (or `reset`)       |
    ///
    /// Panics on malformed values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = std::env::var("HOST").unwrap_or(defaults.host);

        let port: u16 = std::env::var("PORT")
            .map(|v| v.parse().expect("PORT must be a valid u16"))
            .unwrap_or(defaults.port);

        let database_url = std::env::var("DATABASE_URL").unwrap_or(defaults.database_url);

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .map(|v| v.parse().expect("REQUEST_TIMEOUT_SECS must be a valid u64"))
            .unwrap_or(defaults.request_timeout_secs);

        let selection_policy = std::env::var("DASHBOARD_SELECTION")
            .map(|v| {
                v.parse()
                    .unwrap_or_else(|e| panic!("DASHBOARD_SELECTION is invalid: {e}"))
            })
            .unwrap_or(defaults.selection_policy);

        Self {
            host,
            port,
            database_url,
            request_timeout_secs,
            selection_policy,
        }
    }
}
