// Lease client - sequential requests against the pool manager HTTP API.

use std::time::Duration;

use reqwest::{StatusCode, Url};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::resource::{Resource, ResourceState};

/// Client for one pool manager, carrying the owner identity it leases under.
///
/// Every operation issues a single request at a time; acquire's backoff is a
/// plain sleep on the calling task, so there is never more than one request
/// in flight per client invocation.
pub struct Client {
    http: reqwest::Client,
    base: String,
    owner: String,
    retry_wait: Duration,
    max_retries: u32,
}

impl Client {
    /// Builds a client from `config`, validating the host URL up front.
    pub fn new(config: &Config) -> Result<Self> {
        let base = config.host.trim_end_matches('/').to_string();
        Url::parse(&base).map_err(|err| Error::InvalidHost {
            url: config.host.clone(),
            reason: err.to_string(),
        })?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base,
            owner: config.owner.clone(),
            retry_wait: config.retry_wait,
            max_retries: config.max_retries,
        })
    }

    /// Leases one `rtype` resource, moving it from `state` to `busy`.
    ///
    /// A 404 means nothing matched right now; an unknown type and an
    /// all-busy pool are indistinguishable, so the request is simply
    /// repeated after a fixed wait until the retry budget runs out. Any
    /// other non-200 answer fails immediately.
    pub async fn acquire(&self, rtype: &str, state: ResourceState) -> Result<Resource> {
        let mut attempts: u32 = 0;
        loop {
            if let Some(resource) = self.try_acquire(rtype, state).await? {
                info!("acquired {} after {} attempt(s)", resource.name, attempts + 1);
                return Ok(resource);
            }
            attempts += 1;
            if attempts > self.max_retries {
                return Err(Error::PoolExhausted {
                    rtype: rtype.to_string(),
                    attempts,
                });
            }
            warn!(
                "no {} resource free, retry {}/{} in {:?}",
                rtype, attempts, self.max_retries, self.retry_wait
            );
            sleep(self.retry_wait).await;
        }
    }

    async fn try_acquire(&self, rtype: &str, state: ResourceState) -> Result<Option<Resource>> {
        let response = self
            .http
            .post(format!("{}/acquire", self.base))
            .query(&[
                ("type", rtype),
                ("state", state.as_str()),
                ("dest", ResourceState::Busy.as_str()),
                ("owner", self.owner.as_str()),
            ])
            .send()
            .await?;
        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                let resource: Resource = serde_json::from_str(&body)?;
                Ok(Some(resource))
            }
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(protocol_error("acquire", status, response).await),
        }
    }

    /// Returns a held resource to the pool, clearing ownership.
    pub async fn release(&self, name: &str, dest: ResourceState) -> Result<()> {
        let response = self
            .http
            .post(format!("{}/release", self.base))
            .query(&[
                ("name", name),
                ("dest", dest.as_str()),
                ("owner", self.owner.as_str()),
            ])
            .send()
            .await?;
        if response.status() != StatusCode::OK {
            return Err(protocol_error("release", response.status(), response).await);
        }
        debug!("released {} to {}", name, dest);
        Ok(())
    }

    /// Refreshes the manager's view of a held resource. One heartbeat probe.
    pub async fn update(&self, name: &str, state: ResourceState) -> Result<()> {
        let response = self
            .http
            .post(format!("{}/update", self.base))
            .query(&[
                ("name", name),
                ("state", state.as_str()),
                ("owner", self.owner.as_str()),
            ])
            .send()
            .await?;
        if response.status() != StatusCode::OK {
            return Err(protocol_error("update", response.status(), response).await);
        }
        debug!("updated {} to {}", name, state);
        Ok(())
    }
}

/// Turns a non-success response into a protocol error, preferring the body
/// text over the canonical status reason when the manager sent one.
async fn protocol_error(
    operation: &'static str,
    status: StatusCode,
    response: reqwest::Response,
) -> Error {
    let reason = match response.text().await {
        Ok(body) if !body.trim().is_empty() => body.trim().to_string(),
        _ => status.canonical_reason().unwrap_or("unknown").to_string(),
    };
    Error::Protocol {
        operation,
        status: status.as_u16(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unparseable_host() {
        let config = Config::new("not a url", "tester");
        assert!(matches!(
            Client::new(&config),
            Err(Error::InvalidHost { .. })
        ));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = Config::new("http://localhost:8080/", "tester");
        let client = Client::new(&config).unwrap();
        assert_eq!(client.base, "http://localhost:8080");
    }
}
