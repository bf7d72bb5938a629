use std::env;

const DEFAULT_SERVER_URL: &str = "127.0.0.1:1323";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set in the environment or .env file")]
    Missing(&'static str),

    #[error("{name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_url: String,
    pub database_url: String,
    pub max_connections: u32,
}

impl Config {
    /// Reads the configuration from the environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let server_url = lookup("SERVER_URL").unwrap_or_else(|| DEFAULT_SERVER_URL.to_owned());

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                value,
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            server_url,
            database_url,
            max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let vars: HashMap<_, _> = vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply() {
        let config =
            Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/wallet")])).unwrap();

        assert_eq!(config.server_url, "127.0.0.1:1323");
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn database_url_is_required() {
        assert_eq!(
            Config::from_lookup(lookup(&[])),
            Err(ConfigError::Missing("DATABASE_URL"))
        );
    }

    #[test]
    fn max_connections_must_be_a_number() {
        let err = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/wallet"),
            ("DATABASE_MAX_CONNECTIONS", "lots"),
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                value: "lots".into()
            }
        );
    }
}
