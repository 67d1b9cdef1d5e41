use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::warn;

/// A sellable item as read from the store. Optional fields were simply
/// never filled in by the seller.
#[derive(Debug, Clone)]
pub struct Listing {
    pub id: String,
    pub owner_handle: String,
    pub name: String,
    /// Rich text (HTML) entered by the seller.
    pub description: String,
    pub images: Vec<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub condition: Option<String>,
    pub in_stock: bool,
    /// Stored as text (RFC 3339 or a bare date). Kept raw so one malformed
    /// row degrades to exclusion instead of failing the whole page.
    pub created_at: String,
}

impl Listing {
    /// Creation instant, or `None` when the stored text is unparseable.
    pub fn created_at_parsed(&self) -> Option<NaiveDateTime> {
        parse_created_at(&self.created_at)
    }

    /// Price used for ordering. Listings without a price sort as zero.
    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}

/// What the add-listing form submitted, before it becomes a [`Listing`].
/// Price is kept raw so the form can re-render exactly what was typed.
#[derive(Debug, Clone, Default)]
pub struct ListingDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub condition: String,
    pub category: String,
    pub location: String,
    pub image_url: String,
    pub in_stock: bool,
}

impl ListingDraft {
    pub fn from_params(params: &std::collections::HashMap<String, String>) -> Self {
        let field = |key: &str| params.get(key).map(|v| v.trim().to_string()).unwrap_or_default();
        Self {
            name: field("name"),
            description: params.get("description").cloned().unwrap_or_default(),
            price: field("price"),
            condition: field("condition"),
            category: field("category"),
            location: field("location"),
            image_url: field("image_url"),
            in_stock: params.contains_key("in_stock"),
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push("Listing name is required.".to_string());
        }
        if !self.price.is_empty() && self.parsed_price().is_none() {
            errors.push("Price must be a non-negative number.".to_string());
        }
        errors
    }

    fn parsed_price(&self) -> Option<f64> {
        match self.price.parse::<f64>() {
            Ok(p) if p.is_finite() && p >= 0.0 => Some(p),
            _ => None,
        }
    }

    /// Build the record to insert. The id is derived from the owner and
    /// name, so the same seller re-using a name collides deliberately.
    pub fn into_listing(self, owner_handle: &str, created_at: DateTime<chrono::Utc>) -> Listing {
        let price = self.parsed_price();
        let images = if self.image_url.is_empty() {
            Vec::new()
        } else {
            vec![self.image_url]
        };
        let non_empty = |s: String| if s.is_empty() { None } else { Some(s) };

        Listing {
            id: crate::domain::listing_id::generate_listing_id(owner_handle, &self.name),
            owner_handle: owner_handle.to_string(),
            name: self.name,
            description: self.description,
            images,
            price,
            category: non_empty(self.category),
            location: non_empty(self.location),
            condition: non_empty(self.condition),
            in_stock: self.in_stock,
            created_at: created_at.to_rfc3339(),
        }
    }
}

/// Lenient timestamp parse: RFC 3339 first, then a couple of bare shapes
/// that show up in hand-entered or migrated rows.
pub fn parse_created_at(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d.and_time(NaiveTime::MIN));
    }
    warn!("unparseable created_at: {raw:?}");
    None
}
