use anyhow::{Context, Result};
use std::str::FromStr;

use super::{
    config_model::{Database, DotEnvyConfig, Server},
    stage::Stage,
};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BODY_LIMIT_MB: u64 = 1;
const DEFAULT_DATABASE_URL: &str = "./mailroom.sqlite";
const DEFAULT_MAX_CONNECTIONS: u32 = 8;

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    from_lookup(|key| std::env::var(key).ok())
}

/// Builds the config from any key lookup. Unset keys fall back to defaults,
/// set-but-unparseable keys are an error.
pub fn from_lookup<F>(lookup: F) -> Result<DotEnvyConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let server = Server {
        port: parse_or(&lookup, "SERVER_PORT", DEFAULT_PORT)?,
        body_limit: parse_or(&lookup, "SERVER_BODY_LIMIT", DEFAULT_BODY_LIMIT_MB)?,
    };

    let database = Database {
        url: lookup("DATABASE_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
        max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
    };

    let stage = match lookup("STAGE").filter(|value| !value.trim().is_empty()) {
        Some(raw) => Stage::try_from(raw.as_str()).context("STAGE is invalid")?,
        None => Stage::default(),
    };

    Ok(DotEnvyConfig {
        server,
        database,
        stage,
    })
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} is invalid")),
        None => Ok(default),
    }
}
