//! HTTP implementation of [`RuleStore`].

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use bindctl_core::{Rule, RuleId, RuleStore};

use crate::config::ClientConfig;
use crate::{Error, Result};

/// Header carrying the ACL token (`X-Consul-Token`).
pub const TOKEN_HEADER: &str = "x-consul-token";

type StoreResult<T> = bindctl_core::Result<T>;

/// Rule store backed by the coordination service's HTTP API.
///
/// Each trait method issues exactly one request and does not retry.
#[derive(Debug, Clone)]
pub struct HttpRuleStore {
    http: reqwest::Client,
    base: Url,
}

impl HttpRuleStore {
    /// Create a client from `config`.
    ///
    /// Fails if the address is not an `http://` or `https://` URL or the
    /// token cannot be sent as a header value.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base = Url::parse(&config.address)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https") && !url.cannot_be_a_base())
            .ok_or_else(|| {
                Error::invalid_config(format!(
                    "address {:?} must start with http:// or https://",
                    config.address
                ))
            })?;

        let mut headers = HeaderMap::new();
        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(token)
                .map_err(|_| Error::invalid_config("token contains invalid characters"))?;
            value.set_sensitive(true);
            headers.insert(TOKEN_HEADER, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        tracing::debug!(address = %base, "Created binding rule client");
        Ok(Self { http, base })
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn address(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // `new` only accepts http(s) URLs, which always have path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn rule_url(&self, id: &RuleId) -> Url {
        self.endpoint(&["v1", "acl", "binding-rule", id.as_str()])
    }

    fn collection_url(&self) -> Url {
        self.endpoint(&["v1", "acl", "binding-rule"])
    }

    fn list_url(&self) -> Url {
        self.endpoint(&["v1", "acl", "binding-rules"])
    }
}

#[async_trait]
impl RuleStore for HttpRuleStore {
    async fn read(&self, id: &RuleId) -> StoreResult<Option<Rule>> {
        let url = self.rule_url(id);
        tracing::debug!(%url, "GET binding rule");
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(transport("GET", url.as_str()))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = check_status(response).await?;
        // The service answers `null` for a rule that disappeared.
        decode::<Option<Rule>>(response).await
    }

    async fn list(&self, provider: Option<&str>) -> StoreResult<Vec<Rule>> {
        let url = self.list_url();
        tracing::debug!(%url, provider = ?provider, "GET binding rules");
        let mut request = self.http.get(url.clone());
        if let Some(name) = provider {
            request = request.query(&[("idp", name)]);
        }
        let response = request.send().await.map_err(transport("GET", url.as_str()))?;
        let response = check_status(response).await?;
        Ok(decode::<Option<Vec<Rule>>>(response).await?.unwrap_or_default())
    }

    async fn create(&self, rule: &Rule) -> StoreResult<Rule> {
        let url = self.collection_url();
        tracing::debug!(%url, "PUT new binding rule");
        let response = self
            .http
            .put(url.clone())
            .json(&rule.without_meta())
            .send()
            .await
            .map_err(transport("PUT", url.as_str()))?;
        decode(check_status(response).await?).await
    }

    async fn update(&self, rule: &Rule) -> StoreResult<Rule> {
        let url = self.rule_url(&rule.id);
        tracing::debug!(%url, "PUT binding rule");
        let response = self
            .http
            .put(url.clone())
            .json(rule)
            .send()
            .await
            .map_err(transport("PUT", url.as_str()))?;
        decode(check_status(response).await?).await
    }

    async fn delete(&self, id: &RuleId) -> StoreResult<()> {
        let url = self.rule_url(id);
        tracing::debug!(%url, "DELETE binding rule");
        let response = self
            .http
            .delete(url.clone())
            .send()
            .await
            .map_err(transport("DELETE", url.as_str()))?;
        check_status(response).await?;
        Ok(())
    }
}

/// Turns a non-success response into [`bindctl_core::Error::RemoteRejected`]
/// carrying the response body verbatim.
async fn check_status(response: Response) -> StoreResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .map_err(transport("read body of", &url))?;
    tracing::debug!(%url, status = status.as_u16(), "Request rejected");
    let message = if body.is_empty() {
        status.to_string()
    } else {
        body
    };
    Err(bindctl_core::Error::rejected(status.as_u16(), message))
}

async fn decode<T: DeserializeOwned>(response: Response) -> StoreResult<T> {
    let url = response.url().to_string();
    let bytes = response
        .bytes()
        .await
        .map_err(transport("read body of", &url))?;
    serde_json::from_slice(&bytes).map_err(|e| {
        bindctl_core::Error::transport_with_source(format!("invalid response from {url}"), e)
    })
}

fn transport<'a>(
    verb: &'a str,
    url: &'a str,
) -> impl FnOnce(reqwest::Error) -> bindctl_core::Error + 'a {
    move |e| bindctl_core::Error::transport_with_source(format!("{verb} {url}: {e}"), e)
}
