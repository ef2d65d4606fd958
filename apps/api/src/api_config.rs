use std::env;
use std::time::Duration;

use idbridge_core::AppError;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(120);

/// Process configuration read from the environment.
#[derive(Clone)]
pub struct ApiConfig {
    pub okta_domain: String,
    pub okta_api_token: String,
    pub okta_issuer: Option<String>,
    pub okta_audience: Option<String>,
    pub port: u16,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
    pub idle_timeout: Duration,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let value = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let okta_domain = value("OKTA_DOMAIN")
            .ok_or_else(|| AppError::Validation("OKTA_DOMAIN is required".to_owned()))?;
        let okta_api_token = value("OKTA_API_TOKEN")
            .ok_or_else(|| AppError::Validation("OKTA_API_TOKEN is required".to_owned()))?;

        let port = match value("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|error| AppError::Validation(format!("invalid PORT '{raw}': {error}")))?,
            None => DEFAULT_PORT,
        };

        let read_timeout =
            duration_or_default("READ_TIMEOUT", value("READ_TIMEOUT"), DEFAULT_READ_TIMEOUT)?;
        let write_timeout =
            duration_or_default("WRITE_TIMEOUT", value("WRITE_TIMEOUT"), DEFAULT_WRITE_TIMEOUT)?;
        let idle_timeout =
            duration_or_default("IDLE_TIMEOUT", value("IDLE_TIMEOUT"), DEFAULT_IDLE_TIMEOUT)?;

        Ok(Self {
            okta_domain,
            okta_api_token,
            okta_issuer: value("OKTA_ISSUER"),
            okta_audience: value("OKTA_AUDIENCE"),
            port,
            read_timeout,
            write_timeout,
            idle_timeout,
        })
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ApiConfig")
            .field("okta_domain", &self.okta_domain)
            .field("okta_api_token", &"<redacted>")
            .field("okta_issuer", &self.okta_issuer)
            .field("okta_audience", &self.okta_audience)
            .field("port", &self.port)
            .field("read_timeout", &self.read_timeout)
            .field("write_timeout", &self.write_timeout)
            .field("idle_timeout", &self.idle_timeout)
            .finish()
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn duration_or_default(
    name: &str,
    raw: Option<String>,
    default: Duration,
) -> Result<Duration, AppError> {
    match raw {
        Some(raw) => parse_duration(&raw)
            .ok_or_else(|| AppError::Validation(format!("invalid {name} '{raw}'"))),
        None => Ok(default),
    }
}

/// Parses durations such as `500ms`, `10s`, `2m`, `1h` or `1m30s`.
fn parse_duration(raw: &str) -> Option<Duration> {
    let mut remaining = raw.trim();
    if remaining.is_empty() {
        return None;
    }

    let mut total = Duration::ZERO;
    while !remaining.is_empty() {
        let digits_end = remaining
            .find(|character: char| !character.is_ascii_digit())
            .unwrap_or(remaining.len());
        if digits_end == 0 {
            return None;
        }
        let amount = remaining[..digits_end].parse::<u64>().ok()?;
        remaining = &remaining[digits_end..];

        let unit_end = remaining
            .find(|character: char| character.is_ascii_digit())
            .unwrap_or(remaining.len());
        let component = match &remaining[..unit_end] {
            "ms" => Duration::from_millis(amount),
            "s" => Duration::from_secs(amount),
            "m" => Duration::from_secs(amount.checked_mul(60)?),
            "h" => Duration::from_secs(amount.checked_mul(3600)?),
            _ => return None,
        };
        remaining = &remaining[unit_end..];
        total = total.checked_add(component)?;
    }

    Some(total)
}
