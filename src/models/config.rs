use std::net::SocketAddr;
use std::path::PathBuf;

pub const ADDR_VAR: &str = "LANDESARCHIV_STUB_ADDR";
pub const FIXTURE_VAR: &str = "LANDESARCHIV_STUB_FIXTURE";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: {source}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Stub server configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct StubConfig {
    pub bind_addr: SocketAddr,
    pub fixture_path: PathBuf,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            fixture_path: PathBuf::from("fixtures/example.zip"),
        }
    }
}

impl StubConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.bind_addr =
                value
                    .trim()
                    .parse()
                    .map_err(|source| ConfigError::InvalidBindAddr {
                        var: ADDR_VAR,
                        value: value.clone(),
                        source,
                    })?;
        }

        if let Some(value) = lookup(FIXTURE_VAR) {
            config.fixture_path = PathBuf::from(value);
        }

        Ok(config)
    }
}
