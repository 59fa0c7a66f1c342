use std::str::FromStr;

use anyhow::{Context, Result, anyhow};

use super::{
    config_model::{BackendServer, Database, DotEnvyConfig},
    stage::Stage,
};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BODY_LIMIT_MIB: u64 = 10;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    load_from(|key| std::env::var(key).ok())
}

pub(crate) fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<DotEnvyConfig> {
    let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let port = match lookup("SERVER_PORT").or_else(|| lookup("PORT")) {
        Some(raw) => parse_var("SERVER_PORT", &raw)?,
        None => DEFAULT_PORT,
    };

    let backend_server = BackendServer {
        port,
        body_limit: var_or(&lookup, "SERVER_BODY_LIMIT", DEFAULT_BODY_LIMIT_MIB)?,
        timeout: var_or(&lookup, "SERVER_TIMEOUT", DEFAULT_TIMEOUT_SECS)?,
    };

    let database = Database {
        url: lookup("DATABASE_URL").ok_or_else(|| anyhow!("DATABASE_URL is missing"))?,
        max_connections: var_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
    };

    let stage = match lookup("STAGE") {
        Some(raw) => Stage::try_from(raw.as_str())?,
        None => Stage::default(),
    };

    Ok(DotEnvyConfig {
        backend_server,
        database,
        stage,
    })
}

fn var_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => parse_var(key, &raw),
        None => Ok(default),
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("{} is invalid", key))
}
