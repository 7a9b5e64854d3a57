//! Venue search.

use crate::error::{Error, Result};
use crate::transport::Transport;
use crate::types::CompactVenue;
use serde_json::Value;
use tracing::debug;

const SEARCH_PATH: &str = "v2/venues/search";

/// Smallest accepted `limit`.
pub const MIN_SEARCH_LIMIT: u32 = 1;

/// Largest accepted `limit`, also the default.
pub const MAX_SEARCH_LIMIT: u32 = 50;

/// Typed access to the venues endpoints.
#[derive(Debug, Clone)]
pub struct VenuesClient {
    transport: Transport,
}

impl VenuesClient {
    /// Create a venues client over a configured transport.
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Search for venues near a place, returning up to 50 results.
    ///
    /// See [`search_with_limit`](Self::search_with_limit).
    pub async fn search(&self, place_name: &str, category_id: &str) -> Result<Vec<CompactVenue>> {
        self.search_with_limit(place_name, category_id, MAX_SEARCH_LIMIT)
            .await
    }

    /// Search for venues near a place.
    ///
    /// `place_name` is a place in the world (e.g. "San Francisco, CA") sent as
    /// `near`. `category_id` restricts results to a category; a top-level
    /// category also matches its sub-categories. `limit` must be within 1..=50.
    ///
    /// An empty `place_name` or `category_id` is treated as missing and fails
    /// with [`Error::MissingArgument`]; a `limit` outside the range fails with
    /// [`Error::OutOfRange`]. Neither sends a request.
    ///
    /// Venues come back in the order the API returned them.
    pub async fn search_with_limit(
        &self,
        place_name: &str,
        category_id: &str,
        limit: u32,
    ) -> Result<Vec<CompactVenue>> {
        validate_search(place_name, category_id, limit)?;

        debug!(
            near = place_name,
            category_id = category_id,
            limit = limit,
            "Searching venues"
        );

        let limit = limit.to_string();
        let response = self
            .transport
            .get(
                SEARCH_PATH,
                &[
                    ("near", place_name),
                    ("categoryId", category_id),
                    ("limit", limit.as_str()),
                ],
            )
            .await?;

        if !response.status().is_success() {
            return Err(Error::from_response(response).await);
        }

        let body = response.text().await?;
        let venues = parse_venues(&body)?;

        debug!(count = venues.len(), "Venue search complete");
        Ok(venues)
    }
}

fn validate_search(place_name: &str, category_id: &str, limit: u32) -> Result<()> {
    if place_name.is_empty() {
        return Err(Error::MissingArgument { name: "place_name" });
    }
    if category_id.is_empty() {
        return Err(Error::MissingArgument {
            name: "category_id",
        });
    }
    if limit < MIN_SEARCH_LIMIT {
        return Err(Error::OutOfRange {
            name: "limit",
            value: limit,
            message: "cannot be lower than 1",
        });
    }
    if limit > MAX_SEARCH_LIMIT {
        return Err(Error::OutOfRange {
            name: "limit",
            value: limit,
            message: "cannot be greater than 50",
        });
    }
    Ok(())
}

/// Unwrap `response.venues` from the envelope.
fn parse_venues(body: &str) -> Result<Vec<CompactVenue>> {
    let mut envelope: Value = serde_json::from_str(body)?;

    let response = envelope
        .get_mut("response")
        .filter(|v| !v.is_null())
        .ok_or(Error::MissingField { path: "response" })?;
    let venues = response
        .get_mut("venues")
        .filter(|v| !v.is_null())
        .ok_or(Error::MissingField {
            path: "response.venues",
        })?
        .take();

    Ok(serde_json::from_value(venues)?)
}
