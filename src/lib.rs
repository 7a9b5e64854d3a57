//! Rust client for the Foursquare venues API.
//!
//! Requests are authenticated in userless mode: the application's client id
//! and client secret are appended to every request by the transport, so
//! clients built on top of it never deal with credentials.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bonvoyage::{UserlessAccessSettings, UserlessContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), bonvoyage::Error> {
//!     let settings = UserlessAccessSettings::new("your-client-id", "your-client-secret");
//!     let context = UserlessContext::builder(settings).build()?;
//!
//!     // Food venues near Seattle, at most 10 of them
//!     let venues = context
//!         .venues()
//!         .search_with_limit("Seattle, WA", "4d4b7105d754a06374d81259", 10)
//!         .await?;
//!
//!     for venue in &venues {
//!         println!("{} ({})", venue.name, venue.id);
//!     }
//!     Ok(())
//! }
//! ```

mod context;
mod error;
mod pipeline;
mod settings;
mod transport;
mod types;
mod venues;

pub use context::{UserlessContext, UserlessContextBuilder, FOURSQUARE_API_BASE_URL, SDK_VERSION};
pub use error::{Error, Result};
pub use pipeline::{QueryAppender, RequestMutator};
pub use settings::UserlessAccessSettings;
pub use transport::Transport;
pub use types::*;
pub use venues::{VenuesClient, MAX_SEARCH_LIMIT, MIN_SEARCH_LIMIT};
