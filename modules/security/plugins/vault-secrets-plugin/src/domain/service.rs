//! HTTP client side of the Vault secrets plugin.

use std::time::Duration;

use anyhow::Context;
use reqwest::{StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use security_sdk::{SecretBundle, SecretsError};
use serde::Deserialize;
use tracing::debug;

use crate::config::VaultSecretsPluginConfig;

const TOKEN_HEADER: &str = "x-vault-token";
const NAMESPACE_HEADER: &str = "x-vault-namespace";

/// KV v2 read response. Only `data.data` is of interest.
#[derive(Deserialize)]
struct KvReadResponse {
    data: KvData,
}

#[derive(Deserialize)]
struct KvData {
    data: SecretBundle,
}

/// Vault KV v2 secrets service.
///
/// Every call performs one `GET /v1/{mount}/data/{path}`; nothing is cached.
pub struct Service {
    client: reqwest::Client,
    url: Url,
    path: String,
    token: SecretString,
    namespace: Option<String>,
}

impl Service {
    /// # Errors
    ///
    /// Returns an error if `address` is not an `http(s)` URL, `timeout_secs`
    /// is zero, or the HTTP client cannot be built.
    pub fn from_config(cfg: VaultSecretsPluginConfig, token: SecretString) -> anyhow::Result<Self> {
        let url = read_url(&cfg.address, &cfg.mount, &cfg.path)?;
        if cfg.timeout_secs == 0 {
            anyhow::bail!("vault 'timeout_secs' must be greater than zero");
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .context("failed to build vault http client")?;

        Ok(Self {
            client,
            url,
            path: cfg.path,
            token,
            namespace: cfg.namespace.filter(|ns| !ns.is_empty()),
        })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Reads the secret at the configured path.
    ///
    /// # Errors
    ///
    /// * [`SecretsError::Unauthorized`] on 401 or 403
    /// * [`SecretsError::Unavailable`] on transport failures, 404 and any other
    ///   non-success status
    /// * [`SecretsError::Decode`] if the body is not a KV v2 read response
    #[tracing::instrument(skip_all, fields(path = %self.path))]
    pub async fn fetch(&self) -> Result<SecretBundle, SecretsError> {
        let mut request = self
            .client
            .get(self.url.clone())
            .header(TOKEN_HEADER, self.token.expose_secret());
        if let Some(namespace) = &self.namespace {
            request = request.header(NAMESPACE_HEADER, namespace);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SecretsError::unavailable(format!("vault request failed: {e}")))?;

        let status = response.status();
        match status {
            s if s.is_success() => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(SecretsError::unauthorized(format!(
                    "vault rejected the token ({status})"
                )));
            }
            StatusCode::NOT_FOUND => {
                return Err(SecretsError::unavailable(format!(
                    "no secret at path '{}'",
                    self.path
                )));
            }
            _ => {
                return Err(SecretsError::unavailable(format!(
                    "vault responded with {status}"
                )));
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SecretsError::unavailable(format!("failed to read vault response: {e}")))?;
        let parsed: KvReadResponse = serde_json::from_slice(&body)
            .map_err(|e| SecretsError::decode(format!("unexpected vault response: {e}")))?;

        debug!(key_count = parsed.data.data.len(), "Read secret from vault");
        Ok(parsed.data.data)
    }
}

fn read_url(address: &str, mount: &str, path: &str) -> anyhow::Result<Url> {
    let base = Url::parse(address).with_context(|| format!("invalid vault address '{address}'"))?;
    if !matches!(base.scheme(), "http" | "https") {
        anyhow::bail!("vault address must use http or https, got '{}'", base.scheme());
    }

    let mount = mount.trim_matches('/');
    let path = path.trim_matches('/');
    if mount.is_empty() || path.is_empty() {
        anyhow::bail!("vault 'mount' and 'path' must not be empty");
    }

    let joined = format!(
        "{}/v1/{mount}/data/{path}",
        address.trim_end_matches('/')
    );
    Url::parse(&joined).with_context(|| format!("invalid vault secret url '{joined}'"))
}
