use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub latency: LatencyConfig,
    /// How long the "copied" indicator stays lit after a copy.
    pub copied_indicator: Duration,
    /// Sessions untouched for this long are evicted.
    pub session_idle_ttl: Duration,
    pub session_sweep_interval: Duration,
}

/// Simulated completion delay per panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyConfig {
    pub profile: Duration,
    pub job_fit: Duration,
    pub content: Duration,
    pub career: Duration,
    pub chat: Duration,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            profile: Duration::from_millis(2000),
            job_fit: Duration::from_millis(2000),
            content: Duration::from_millis(2000),
            career: Duration::from_millis(2500),
            chat: Duration::from_millis(1500),
        }
    }
}

impl LatencyConfig {
    /// No delay anywhere. Used by tests that don't care about timing.
    #[cfg(test)]
    pub fn instant() -> Self {
        Self {
            profile: Duration::ZERO,
            job_fit: Duration::ZERO,
            content: Duration::ZERO,
            career: Duration::ZERO,
            chat: Duration::ZERO,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            latency: LatencyConfig::default(),
            copied_indicator: Duration::from_millis(2000),
            session_idle_ttl: Duration::from_secs(30 * 60),
            session_sweep_interval: Duration::from_secs(60),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = LatencyConfig::default();
        let fallback = Config::default();

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            latency: LatencyConfig {
                profile: millis_env("PROFILE_DELAY_MS", defaults.profile)?,
                job_fit: millis_env("JOB_FIT_DELAY_MS", defaults.job_fit)?,
                content: millis_env("CONTENT_DELAY_MS", defaults.content)?,
                career: millis_env("CAREER_DELAY_MS", defaults.career)?,
                chat: millis_env("CHAT_DELAY_MS", defaults.chat)?,
            },
            copied_indicator: millis_env("COPIED_INDICATOR_MS", fallback.copied_indicator)?,
            session_idle_ttl: secs_env("SESSION_IDLE_TTL_SECS", fallback.session_idle_ttl)?,
            session_sweep_interval: secs_env(
                "SESSION_SWEEP_INTERVAL_SECS",
                fallback.session_sweep_interval,
            )?,
        })
    }
}

fn millis_env(key: &str, default: Duration) -> Result<Duration> {
    match std::env::var(key) {
        Ok(raw) => parse_millis(&raw)
            .with_context(|| format!("{key} must be a whole number of milliseconds")),
        Err(_) => Ok(default),
    }
}

fn secs_env(key: &str, default: Duration) -> Result<Duration> {
    match std::env::var(key) {
        Ok(raw) => {
            let secs = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{key} must be a whole number of seconds"))?;
            anyhow::ensure!(secs > 0, "{key} must be greater than zero");
            Ok(Duration::from_secs(secs))
        }
        Err(_) => Ok(default),
    }
}

fn parse_millis(raw: &str) -> Result<Duration> {
    let ms = raw.trim().parse::<u64>()?;
    Ok(Duration::from_millis(ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_latencies_match_panels() {
        let latency = LatencyConfig::default();
        assert_eq!(latency.profile, Duration::from_millis(2000));
        assert_eq!(latency.career, Duration::from_millis(2500));
        assert_eq!(latency.chat, Duration::from_millis(1500));
    }

    #[test]
    fn test_parse_millis_accepts_padded_numbers() {
        assert_eq!(parse_millis(" 250 ").unwrap(), Duration::from_millis(250));
    }

    #[test]
    fn test_parse_millis_rejects_garbage() {
        assert!(parse_millis("fast").is_err());
        assert!(parse_millis("-5").is_err());
    }

    #[test]
    fn test_default_session_expiry() {
        let config = Config::default();
        assert_eq!(config.session_idle_ttl, Duration::from_secs(1800));
        assert!(config.session_sweep_interval < config.session_idle_ttl);
    }

    #[test]
    fn test_instant_latency_is_zero() {
        let latency = LatencyConfig::instant();
        assert_eq!(latency.content, Duration::ZERO);
        assert_eq!(latency.chat, Duration::ZERO);
    }
}
