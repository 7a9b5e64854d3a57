//! API types for the venues endpoints.

use serde::Deserialize;

/// A venue as returned by venue search.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompactVenue {
    /// Unique venue identifier.
    pub id: String,
    /// Venue name.
    pub name: String,
    /// Where the venue is.
    #[serde(default)]
    pub location: Option<Location>,
    /// Categories, primary first when the API marks one.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Contact details.
    #[serde(default)]
    pub contact: Option<Contact>,
    /// Venue website.
    #[serde(default)]
    pub url: Option<String>,
    /// Whether the venue has been claimed by its owner.
    #[serde(default)]
    pub verified: Option<bool>,
    /// Check-in statistics.
    #[serde(default)]
    pub stats: Option<VenueStats>,
    /// Identifier for attributing referrals.
    #[serde(default)]
    pub referral_id: Option<String>,
}

impl CompactVenue {
    /// The category flagged as primary, if any.
    pub fn primary_category(&self) -> Option<&Category> {
        self.categories.iter().find(|c| c.primary)
    }
}

/// Venue location.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    /// Street address.
    pub address: Option<String>,
    /// Cross street.
    pub cross_street: Option<String>,
    /// Latitude.
    pub lat: Option<f64>,
    /// Longitude.
    pub lng: Option<f64>,
    /// Distance in meters from the search point.
    pub distance: Option<u64>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// ISO country code.
    pub cc: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or province.
    pub state: Option<String>,
    /// Country name.
    pub country: Option<String>,
    /// Display lines for the address.
    pub formatted_address: Vec<String>,
}

/// Venue category.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category identifier, usable as the `category_id` search argument.
    pub id: String,
    /// Category name.
    pub name: String,
    /// Plural name.
    #[serde(default)]
    pub plural_name: Option<String>,
    /// Short name.
    #[serde(default)]
    pub short_name: Option<String>,
    /// Category icon.
    #[serde(default)]
    pub icon: Option<CategoryIcon>,
    /// Whether this is the venue's primary category.
    #[serde(default)]
    pub primary: bool,
}

/// Icon pieces; a full URL is `prefix + size + suffix`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CategoryIcon {
    /// URL prefix.
    pub prefix: String,
    /// File suffix, e.g. `.png`.
    pub suffix: String,
}

impl CategoryIcon {
    /// Icon URL at the given pixel size (32, 44, 64, 88).
    pub fn url(&self, size: u32) -> String {
        format!("{}{}{}", self.prefix, size, self.suffix)
    }
}

/// Venue contact details.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    /// Phone number.
    pub phone: Option<String>,
    /// Phone number formatted for display.
    pub formatted_phone: Option<String>,
    /// Twitter handle.
    pub twitter: Option<String>,
}

/// Venue statistics.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct VenueStats {
    /// Total check-ins.
    pub checkins_count: u64,
    /// Distinct users.
    pub users_count: u64,
    /// Tips left.
    pub tip_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_venue() {
        let venue: CompactVenue =
            serde_json::from_value(json!({"id": "v1", "name": "Cafe A"})).unwrap();
        assert_eq!(venue.id, "v1");
        assert_eq!(venue.name, "Cafe A");
        assert!(venue.location.is_none());
        assert!(venue.categories.is_empty());
        assert!(venue.primary_category().is_none());
    }

    #[test]
    fn test_full_venue() {
        let venue: CompactVenue = serde_json::from_value(json!({
            "id": "4b4b6a6af964a520cc9b26e3",
            "name": "Victrola Coffee Roasters",
            "location": {
                "address": "411 15th Ave E",
                "crossStreet": "at E Harrison St",
                "lat": 47.6225,
                "lng": -122.3127,
                "postalCode": "98112",
                "cc": "US",
                "city": "Seattle",
                "state": "WA",
                "country": "United States",
                "formattedAddress": ["411 15th Ave E (at E Harrison St)", "Seattle, WA 98112"]
            },
            "categories": [
                {
                    "id": "4bf58dd8d48988d16d941735",
                    "name": "Café",
                    "pluralName": "Cafés",
                    "shortName": "Café",
                    "icon": {
                        "prefix": "https://ss3.4sqi.net/img/categories_v2/food/cafe_",
                        "suffix": ".png"
                    },
                    "primary": true
                }
            ],
            "contact": {"phone": "2063251001", "formattedPhone": "(206) 325-1001"},
            "verified": true,
            "stats": {"checkinsCount": 12000, "usersCount": 3400, "tipCount": 150},
            "referralId": "v-1520000000",
            "hasPerk": false
        }))
        .unwrap();

        let location = venue.location.as_ref().unwrap();
        assert_eq!(location.cross_street.as_deref(), Some("at E Harrison St"));
        assert_eq!(location.formatted_address.len(), 2);
        assert!(location.distance.is_none());

        let category = venue.primary_category().unwrap();
        assert_eq!(category.short_name.as_deref(), Some("Café"));
        assert_eq!(
            category.icon.as_ref().unwrap().url(64),
            "https://ss3.4sqi.net/img/categories_v2/food/cafe_64.png"
        );

        assert_eq!(
            venue.contact.unwrap().formatted_phone.as_deref(),
            Some("(206) 325-1001")
        );
        assert_eq!(venue.verified, Some(true));
        assert_eq!(venue.stats.unwrap().users_count, 3400);
        assert_eq!(venue.referral_id.as_deref(), Some("v-1520000000"));
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let result = serde_json::from_value::<CompactVenue>(json!({"id": "v1"}));
        assert!(result.is_err());
    }
}
