use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use serde::Serialize;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub region: String,
    pub model_id: String,
    pub credentials: CredentialSource,
    /// Upper bound on one model call. `None` waits for as long as it takes.
    pub request_timeout: Option<Duration>,
    pub log_format: LogFormat,
}

#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    Inline {
        access_key_id: String,
        secret_access_key: String,
        session_token: Option<String>,
    },
    Profile {
        profile_name: String,
    },
    DefaultChain,
}

// Secrets must never reach a log line, even through `{:?}`.
impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline { access_key_id, .. } => f
                .debug_struct("Inline")
                .field("access_key_id", &redact_access_key(access_key_id))
                .finish_non_exhaustive(),
            Self::Profile { profile_name } => f
                .debug_struct("Profile")
                .field("profile_name", profile_name)
                .finish(),
            Self::DefaultChain => f.write_str("DefaultChain"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Json,
    Fmt,
}

/// Redacted config info safe to log.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigInfo {
    pub bind_addr: String,
    pub region: String,
    pub model_id: String,
    pub credential_type: String,
    pub profile_name: Option<String>,
    pub access_key_hint: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get("RHEUM_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| eyre::eyre!("invalid RHEUM_BIND_ADDR: {e}"))?;

        let request_timeout = get("RHEUM_REQUEST_TIMEOUT_SECS")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| eyre::eyre!("invalid RHEUM_REQUEST_TIMEOUT_SECS {raw:?}: {e}"))
            })
            .transpose()?
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        let log_format = match get("RHEUM_LOG_FORMAT").as_deref() {
            None | Some("fmt") => LogFormat::Fmt,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(eyre::eyre!(
                    "invalid RHEUM_LOG_FORMAT {other:?}: expected \"json\" or \"fmt\""
                ));
            }
        };

        let credentials = match (
            get("RHEUM_ACCESS_KEY_ID"),
            get("RHEUM_SECRET_ACCESS_KEY"),
            get("RHEUM_AWS_PROFILE"),
        ) {
            (Some(access_key_id), Some(secret_access_key), _) => CredentialSource::Inline {
                access_key_id,
                secret_access_key,
                session_token: get("RHEUM_SESSION_TOKEN"),
            },
            (Some(_), None, _) | (None, Some(_), _) => {
                return Err(eyre::eyre!(
                    "RHEUM_ACCESS_KEY_ID and RHEUM_SECRET_ACCESS_KEY must be set together"
                ));
            }
            (None, None, Some(profile_name)) => CredentialSource::Profile { profile_name },
            (None, None, None) => CredentialSource::DefaultChain,
        };

        Ok(Self {
            bind_addr,
            region: get("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            model_id: get("RHEUM_MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            credentials,
            request_timeout,
            log_format,
        })
    }

    pub fn config_info(&self) -> ConfigInfo {
        let (credential_type, profile_name, access_key_hint) = match &self.credentials {
            CredentialSource::Inline { access_key_id, .. } => (
                "inline".to_string(),
                None,
                Some(redact_access_key(access_key_id)),
            ),
            CredentialSource::Profile { profile_name } => {
                ("profile".to_string(), Some(profile_name.clone()), None)
            }
            CredentialSource::DefaultChain => ("default_chain".to_string(), None, None),
        };

        ConfigInfo {
            bind_addr: self.bind_addr.to_string(),
            region: self.region.clone(),
            model_id: self.model_id.clone(),
            credential_type,
            profile_name,
            access_key_hint,
            request_timeout_secs: self.request_timeout.map(|d| d.as_secs()),
            log_format: self.log_format,
        }
    }
}

fn redact_access_key(key: &str) -> String {
    if key.len() <= 8 || !key.is_ascii() {
        return "****".to_string();
    }
    let prefix = &key[..4];
    let suffix = &key[key.len() - 4..];
    format!("{prefix}...{suffix}")
}
