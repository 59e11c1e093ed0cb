use crate::cli::CliArgs;
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_LOG_FILTER, DEFAULT_MAX_RESPONSE_BYTES, DEFAULT_REQUEST_TIMEOUT_MS,
    ENV_API_BASE_URL, ENV_API_KEY, ENV_LOG, ENV_MAX_RESPONSE_BYTES, ENV_REQUEST_TIMEOUT_MS,
    MIN_MAX_RESPONSE_BYTES, MIN_REQUEST_TIMEOUT_MS, MISSING_API_KEY_MESSAGE,
};
use crate::error::AppError;
use std::collections::HashMap;
use std::fmt;

/// Point-in-time copy of the process environment.
///
/// Resolution never touches `std::env` directly; callers capture a snapshot
/// once and hand it in, which keeps [`RuntimeConfig::resolve`] pure.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Non-unicode variables are skipped.
    #[must_use]
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(name, value)| {
                    Some((name.into_string().ok()?, value.into_string().ok()?))
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Flag,
    Env,
    Default,
}

impl ConfigSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flag => "flag",
            Self::Env => "env",
            Self::Default => "default",
        }
    }
}

#[derive(Clone)]
pub struct RuntimeConfig {
    pub api_key: String,
    pub api_key_source: ConfigSource,
    pub base_url: String,
    pub base_url_source: ConfigSource,
    pub request_timeout_ms: u64,
    pub max_response_bytes: usize,
    pub log_filter: String,
}

impl fmt::Debug for RuntimeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeConfig")
            .field("api_key", &"<redacted>")
            .field("api_key_source", &self.api_key_source)
            .field("base_url", &self.base_url)
            .field("base_url_source", &self.base_url_source)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .field("max_response_bytes", &self.max_response_bytes)
            .field("log_filter", &self.log_filter)
            .finish()
    }
}

impl RuntimeConfig {
    /// Merges flags, environment and defaults into a validated config.
    ///
    /// For each field the first non-blank source wins: flag, then environment,
    /// then the built-in default. All rules are checked before failing so the
    /// returned error lists every violation.
    pub fn resolve(args: &CliArgs, env: &EnvSnapshot) -> Result<Self, AppError> {
        let mut violations = Vec::<String>::new();

        let api_key = first_present(args.api_key.as_deref(), env.get(ENV_API_KEY));
        if api_key.is_none() {
            violations.push(MISSING_API_KEY_MESSAGE.to_string());
        }

        let (base_url, base_url_source) =
            first_present(args.base_url.as_deref(), env.get(ENV_API_BASE_URL))
                .unwrap_or((DEFAULT_BASE_URL, ConfigSource::Default));
        if let Err(violation) = validate_base_url(base_url) {
            violations.push(violation);
        }

        let Some((api_key, api_key_source)) = api_key else {
            return Err(AppError::InvalidConfig { violations });
        };
        if !violations.is_empty() {
            return Err(AppError::InvalidConfig { violations });
        }

        let request_timeout_ms = get_env_u64(env, ENV_REQUEST_TIMEOUT_MS)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS)
            .max(MIN_REQUEST_TIMEOUT_MS);
        let max_response_bytes = get_env_usize(env, ENV_MAX_RESPONSE_BYTES)
            .unwrap_or(DEFAULT_MAX_RESPONSE_BYTES)
            .max(MIN_MAX_RESPONSE_BYTES);
        let log_filter = env.get(ENV_LOG).unwrap_or(DEFAULT_LOG_FILTER).to_string();

        Ok(Self {
            api_key: api_key.to_string(),
            api_key_source,
            base_url: base_url.to_string(),
            base_url_source,
            request_timeout_ms,
            max_response_bytes,
            log_filter,
        })
    }

    /// Linkup issues UUID-shaped keys; anything else is almost certainly a paste error.
    #[must_use]
    pub fn api_key_looks_valid(&self) -> bool {
        uuid::Uuid::parse_str(&self.api_key).is_ok()
    }
}

fn first_present<'a>(
    flag: Option<&'a str>,
    env: Option<&'a str>,
) -> Option<(&'a str, ConfigSource)> {
    non_blank(flag)
        .map(|value| (value, ConfigSource::Flag))
        .or_else(|| non_blank(env).map(|value| (value, ConfigSource::Env)))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn validate_base_url(raw: &str) -> Result<(), String> {
    match url::Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        Ok(url) => Err(format!(
            "Base URL '{raw}' must be an http(s) URL (got scheme '{}').",
            url.scheme()
        )),
        Err(error) => Err(format!("Base URL '{raw}' must be an absolute URL ({error}).")),
    }
}

fn get_env_usize(env: &EnvSnapshot, name: &str) -> Option<usize> {
    env.get(name).and_then(|v| v.trim().parse::<usize>().ok())
}

fn get_env_u64(env: &EnvSnapshot, name: &str) -> Option<u64> {
    env.get(name).and_then(|v| v.trim().parse::<u64>().ok())
}
