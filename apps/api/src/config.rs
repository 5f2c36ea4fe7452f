use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::llm_client::{DEFAULT_API_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

/// Default upload ceiling for resume PDFs (5 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub auth_url: String,
    pub auth_api_key: String,
    pub llm: LlmSettings,
    pub prompts_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub s3: Option<S3Settings>,
    pub port: u16,
    pub rust_log: String,
}

/// Completion provider settings.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub max_concurrency: usize,
}

/// Object storage for archiving uploaded PDFs. Absent when `S3_BUCKET` is unset.
#[derive(Debug, Clone)]
pub struct S3Settings {
    pub bucket: String,
    pub endpoint: Option<String>,
    pub region: String,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        let temperature: f32 = parse_or(&lookup, "LLM_TEMPERATURE", DEFAULT_TEMPERATURE)?;
        if !(0.0..=2.0).contains(&temperature) {
            bail!("LLM_TEMPERATURE must be between 0.0 and 2.0, got {temperature}");
        }

        let max_concurrency: usize = parse_or(&lookup, "LLM_MAX_CONCURRENCY", 8)?;
        if max_concurrency == 0 {
            bail!("LLM_MAX_CONCURRENCY must be at least 1");
        }

        let timeout_secs: u64 = parse_or(&lookup, "LLM_TIMEOUT_SECS", 60)?;
        if timeout_secs == 0 {
            bail!("LLM_TIMEOUT_SECS must be at least 1");
        }

        let llm = LlmSettings {
            api_key: require("LLM_API_KEY")?,
            api_url: lookup("LLM_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            model: lookup("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature,
            timeout_secs,
            max_concurrency,
        };

        let s3 = lookup("S3_BUCKET")
            .filter(|b| !b.trim().is_empty())
            .map(|bucket| S3Settings {
                bucket,
                endpoint: lookup("S3_ENDPOINT"),
                region: lookup("S3_REGION").unwrap_or_else(|| "us-east-1".to_string()),
                access_key_id: lookup("AWS_ACCESS_KEY_ID"),
                secret_access_key: lookup("AWS_SECRET_ACCESS_KEY"),
            });

        Ok(Config {
            database_url: require("DATABASE_URL")?,
            auth_url: require("AUTH_URL")?.trim_end_matches('/').to_string(),
            auth_api_key: require("AUTH_API_KEY")?,
            llm,
            prompts_dir: lookup("PROMPTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/prompts"))),
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            s3,
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
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
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        None => Ok(default),
    }
}
