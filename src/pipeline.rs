//! Outbound request mutators applied by a [`Transport`](crate::Transport)
//! before every send.

use reqwest::Request;

/// Trait for outbound request mutators.
///
/// Mutators run in registration order on every request, after the request
/// URL has been resolved against the base address.
pub trait RequestMutator: Send + Sync {
    /// Modify the request before it is sent.
    fn mutate(&self, request: &mut Request);
}

impl<F> RequestMutator for F
where
    F: Fn(&mut Request) + Send + Sync,
{
    fn mutate(&self, request: &mut Request) {
        self(request)
    }
}

/// Appends a fixed query parameter to every outgoing request, after any
/// parameters already present.
#[derive(Clone)]
pub struct QueryAppender {
    name: String,
    value: String,
}

impl QueryAppender {
    /// Create a mutator that appends `name=value`.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for QueryAppender {
    // Values are credentials more often than not.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryAppender")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl RequestMutator for QueryAppender {
    fn mutate(&self, request: &mut Request) {
        request
            .url_mut()
            .query_pairs_mut()
            .append_pair(&self.name, &self.value);
    }
}

/// Apply every mutator in order.
pub(crate) fn apply(mutators: &[std::sync::Arc<dyn RequestMutator>], request: &mut Request) {
    for mutator in mutators {
        mutator.mutate(request);
    }
}
