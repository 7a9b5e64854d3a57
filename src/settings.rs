//! Client credentials for userless access.

/// Client id / client secret pair used for userless requests.
#[derive(Clone, PartialEq, Eq)]
pub struct UserlessAccessSettings {
    client_id: String,
    client_secret: String,
}

impl UserlessAccessSettings {
    /// Create settings from a client id and client secret.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// The application's client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The application's client secret.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl std::fmt::Debug for UserlessAccessSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserlessAccessSettings")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}
