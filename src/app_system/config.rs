use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use crate::order_actor::OrderCodeGenerator;

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub actor_buffer: usize,
    pub order_code_range: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            static_dir: PathBuf::from("static"),
            actor_buffer: 32,
            order_code_range: OrderCodeGenerator::DEFAULT_UPPER_BOUND,
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        None => Ok(default),
    }
}

fn positive<T: PartialOrd + Default + Display>(key: &str, value: T) -> Result<T> {
    if value > T::default() {
        Ok(value)
    } else {
        Err(anyhow!("{key} must be greater than zero, got {value}"))
    }
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let host = lookup("STOREFRONT_HOST").unwrap_or(defaults.host);
        let port = parse_or(&lookup, "PORT", defaults.port)?;
        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);
        let actor_buffer = positive(
            "ACTOR_BUFFER",
            parse_or(&lookup, "ACTOR_BUFFER", defaults.actor_buffer)?,
        )?;
        let order_code_range = positive(
            "ORDER_CODE_RANGE",
            parse_or(&lookup, "ORDER_CODE_RANGE", defaults.order_code_range)?,
        )?;

        Ok(Self {
            host,
            port,
            static_dir,
            actor_buffer,
            order_code_range,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
