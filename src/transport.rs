//! HTTP transport with a fixed base address and an outbound mutator chain.

use crate::error::{Error, Result};
use crate::pipeline::{self, RequestMutator};
use reqwest::{Method, Request, Response, Url};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// A configured HTTP transport.
///
/// Cloning is cheap; every clone shares the same underlying client, base
/// address and mutators. The client is released when the owning
/// [`UserlessContext`](crate::UserlessContext) is disposed, after which
/// sends fail with [`Error::Disposed`].
#[derive(Clone)]
pub struct Transport {
    inner: Arc<Inner>,
}

struct Inner {
    http_client: RwLock<Option<reqwest::Client>>,
    base_url: Url,
    mutators: Vec<Arc<dyn RequestMutator>>,
}

impl Transport {
    pub(crate) fn new(
        http_client: reqwest::Client,
        base_url: Url,
        mutators: Vec<Arc<dyn RequestMutator>>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                http_client: RwLock::new(Some(http_client)),
                base_url,
                mutators,
            }),
        }
    }

    /// The base address relative paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Whether the underlying client has been released.
    pub fn is_disposed(&self) -> bool {
        self.inner
            .http_client
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    /// Send a GET for `path` (relative to the base address) with the given
    /// query parameters, in order. Mutators run after the parameters are set.
    ///
    /// Paths that would leave the base address (absolute URLs, `//host`,
    /// `/rooted` paths outside the base path, `..` escapes) are rejected with
    /// [`Error::Config`] before anything is sent.
    ///
    /// The response is returned as-is; status handling is up to the caller.
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Response> {
        let mut url = self.resolve(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let mut request = Request::new(Method::GET, url);
        pipeline::apply(&self.inner.mutators, &mut request);

        // Clone the handle out so the lock is never held across the send.
        let http_client = self
            .inner
            .http_client
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(Error::Disposed)?;

        debug!(path = path, "Sending GET request");

        Ok(http_client.execute(request).await?)
    }

    /// Resolve `path` against the base address, refusing anything outside it.
    fn resolve(&self, path: &str) -> Result<Url> {
        let base = &self.inner.base_url;
        let url = base
            .join(path)
            .map_err(|e| Error::Config(format!("invalid request path {path:?}: {e}")))?;

        if url.origin() != base.origin() || !url.path().starts_with(base.path()) {
            return Err(Error::Config(format!(
                "request path {path:?} resolves outside the base URL"
            )));
        }
        Ok(url)
    }

    /// Drop the underlying client. Returns `false` if it was already gone.
    pub(crate) fn release(&self) -> bool {
        self.inner
            .http_client
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some()
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.inner.base_url.as_str())
            .field("mutators", &self.inner.mutators.len())
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
