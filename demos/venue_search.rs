//! Venue search example.
//!
//! Lists venues of a category near a place.
//!
//! Run with:
//! `FOURSQUARE_CLIENT_ID=id FOURSQUARE_CLIENT_SECRET=secret cargo run --example venue_search -- "Seattle, WA" 4d4b7105d754a06374d81259 10`

use bonvoyage::{UserlessAccessSettings, UserlessContext};

#[tokio::main]
async fn main() -> Result<(), bonvoyage::Error> {
    let client_id =
        std::env::var("FOURSQUARE_CLIENT_ID").expect("FOURSQUARE_CLIENT_ID must be set");
    let client_secret =
        std::env::var("FOURSQUARE_CLIENT_SECRET").expect("FOURSQUARE_CLIENT_SECRET must be set");

    let mut args = std::env::args().skip(1);
    let place = args.next().unwrap_or_else(|| "Seattle, WA".to_string());
    // Top-level "Food" category
    let category = args
        .next()
        .unwrap_or_else(|| "4d4b7105d754a06374d81259".to_string());
    let limit: u32 = args.next().and_then(|l| l.parse().ok()).unwrap_or(10);

    let context = UserlessContext::builder(UserlessAccessSettings::new(client_id, client_secret))
        .user_agent_suffix("venue_search-example")
        .build()?;

    let venues = context
        .venues()
        .search_with_limit(&place, &category, limit)
        .await?;

    println!("{} venues near {}:", venues.len(), place);
    for venue in &venues {
        let category = venue
            .primary_category()
            .map(|c| c.name.as_str())
            .unwrap_or("-");
        let address = venue
            .location
            .as_ref()
            .and_then(|l| l.address.as_deref())
            .unwrap_or("");
        println!("  {:<40} {:<20} {}", venue.name, category, address);
    }

    Ok(())
}
