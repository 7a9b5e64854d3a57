//! Userless context: owns the authenticated transport.

use crate::error::{Error, Result};
use crate::pipeline::{QueryAppender, RequestMutator};
use crate::settings::UserlessAccessSettings;
use crate::transport::Transport;
use crate::venues::VenuesClient;
use reqwest::Url;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Root address of the Foursquare API.
pub const FOURSQUARE_API_BASE_URL: &str = "https://api.foursquare.com/";

/// Current crate version.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for constructing a [`UserlessContext`].
pub struct UserlessContextBuilder {
    settings: UserlessAccessSettings,
    http_client: Option<reqwest::Client>,
    base_url: String,
    timeout: Duration,
    user_agent_suffix: Option<String>,
    mutators: Vec<Arc<dyn RequestMutator>>,
}

impl UserlessContextBuilder {
    /// Create a new builder with the given credentials.
    pub fn new(settings: UserlessAccessSettings) -> Self {
        Self {
            settings,
            http_client: None,
            base_url: FOURSQUARE_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent_suffix: None,
            mutators: Vec::new(),
        }
    }

    /// Use an existing HTTP client as the base handler.
    ///
    /// When set, [`timeout`](Self::timeout) and
    /// [`user_agent_suffix`](Self::user_agent_suffix) are ignored.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set the API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent suffix.
    pub fn user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Register an extra mutator. Extra mutators run after the credential
    /// parameters have been appended.
    pub fn mutator(mut self, mutator: impl RequestMutator + 'static) -> Self {
        self.mutators.push(Arc::new(mutator));
        self
    }

    /// Build the context.
    pub fn build(self) -> Result<UserlessContext> {
        if self.settings.client_id().is_empty() {
            return Err(Error::MissingArgument { name: "client_id" });
        }
        if self.settings.client_secret().is_empty() {
            return Err(Error::MissingArgument {
                name: "client_secret",
            });
        }

        let base_url = parse_base_url(&self.base_url)?;

        if base_url.scheme() != "https" {
            warn!(
                base_url = %base_url,
                "API base URL is not using HTTPS. Credentials will be sent in clear text."
            );
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .user_agent(user_agent(self.user_agent_suffix.as_deref()))
                .build()
                .map_err(Error::Http)?,
        };

        let mut mutators: Vec<Arc<dyn RequestMutator>> = vec![
            Arc::new(QueryAppender::new("client_id", self.settings.client_id())),
            Arc::new(QueryAppender::new(
                "client_secret",
                self.settings.client_secret(),
            )),
        ];
        mutators.extend(self.mutators);

        debug!(
            base_url = %base_url,
            client_id = self.settings.client_id(),
            mutators = mutators.len(),
            "Built userless transport"
        );

        Ok(UserlessContext {
            transport: Transport::new(http_client, base_url, mutators),
        })
    }
}

/// `BonVoyage-Rust/<version> (<os>; <arch>)`, then the caller's suffix.
fn user_agent(suffix: Option<&str>) -> String {
    let ua = format!(
        "BonVoyage-Rust/{SDK_VERSION} ({}; {})",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
    match suffix {
        Some(s) if !s.is_empty() => format!("{ua} {s}"),
        _ => ua,
    }
}

/// Parse the base URL, making sure relative joins keep its path.
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url =
        Url::parse(raw).map_err(|e| Error::Config(format!("invalid base URL {raw:?}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(Error::Config(format!("base URL {raw:?} cannot be a base")));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Owns an HTTP transport that authenticates every request with client
/// credentials.
///
/// The transport is released exactly once, either by [`dispose`](Self::dispose)
/// or when the context is dropped.
///
/// # Example
///
/// ```rust,no_run
/// use bonvoyage::{UserlessAccessSettings, UserlessContext};
///
/// #[tokio::main]
/// async fn main() -> Result<(), bonvoyage::Error> {
///     let settings = UserlessAccessSettings::new("client-id", "client-secret");
///     let context = UserlessContext::builder(settings).build()?;
///
///     let venues = context.venues().search("Seattle, WA", "4d4b7105d754a06374d81259").await?;
///     for venue in &venues {
///         println!("{}: {}", venue.id, venue.name);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct UserlessContext {
    transport: Transport,
}

impl UserlessContext {
    /// Create a context over an existing HTTP client.
    pub fn new(http_client: reqwest::Client, settings: UserlessAccessSettings) -> Result<Self> {
        Self::builder(settings).http_client(http_client).build()
    }

    /// Create a new context builder.
    pub fn builder(settings: UserlessAccessSettings) -> UserlessContextBuilder {
        UserlessContextBuilder::new(settings)
    }

    /// The configured transport.
    pub fn transport(&self) -> Transport {
        self.transport.clone()
    }

    /// A venues client over this context's transport.
    pub fn venues(&self) -> VenuesClient {
        VenuesClient::new(self.transport())
    }

    /// Release the underlying HTTP client.
    ///
    /// Returns `true` on the first call and `false` afterwards.
    pub fn dispose(&self) -> bool {
        let released = self.transport.release();
        if released {
            debug!(base_url = %self.transport.base_url(), "Disposed userless transport");
        }
        released
    }

    /// Whether the context has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.transport.is_disposed()
    }
}

impl Drop for UserlessContext {
    fn drop(&mut self) {
        self.dispose();
    }
}
