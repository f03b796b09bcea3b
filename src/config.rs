use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub public_rps: u32,
    pub session_rps: u32,
    pub session_ttl_seconds: u64,
    pub session_sweep_interval_seconds: u64,
    pub max_resample_attempts: u32,
    pub adaptive_difficulty: bool,
    pub question_bank_seed: Option<u64>,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            public_rps: get_env_parse_or("PUBLIC_RPS", 50)?,
            session_rps: get_env_parse_or("SESSION_RPS", 20)?,
            session_ttl_seconds: get_env_parse_or("SESSION_TTL_SECONDS", 7200)?,
            session_sweep_interval_seconds: get_env_parse_or("SESSION_SWEEP_INTERVAL_SECONDS", 60)?,
            max_resample_attempts: get_env_parse_or("MAX_RESAMPLE_ATTEMPTS", 32)?,
            adaptive_difficulty: get_env_parse_or("ADAPTIVE_DIFFICULTY", false)?,
            question_bank_seed: get_env_parse_opt("QUESTION_BANK_SEED")?,
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse_opt<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        _ => Ok(None),
    }
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    Ok(get_env_parse_opt(name)?.unwrap_or(default))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
