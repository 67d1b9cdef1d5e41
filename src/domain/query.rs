use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::warn;

use crate::domain::listing::Listing;

/// Display order for the listings grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    DateDesc,
    DateAsc,
    PriceAsc,
    PriceDesc,
}

impl SortBy {
    pub fn from_param(raw: &str) -> Self {
        match raw {
            "date_asc" => SortBy::DateAsc,
            "price_asc" => SortBy::PriceAsc,
            "price_desc" => SortBy::PriceDesc,
            // Unknown values fall back to the default rather than erroring.
            _ => SortBy::DateDesc,
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            SortBy::DateDesc => "date_desc",
            SortBy::DateAsc => "date_asc",
            SortBy::PriceAsc => "price_asc",
            SortBy::PriceDesc => "price_desc",
        }
    }
}

/// The current set of filter/sort choices driving what subset of listings
/// is shown. Built fresh from the query string on every request, never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub search_term: String,
    pub in_stock_only: bool,
    pub sold_only: bool,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub category: String,
    pub location: String,
    pub condition: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort_by: SortBy,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            in_stock_only: true,
            sold_only: false,
            date_from: None,
            date_to: None,
            category: String::new(),
            location: String::new(),
            condition: String::new(),
            min_price: None,
            max_price: None,
            sort_by: SortBy::DateDesc,
        }
    }
}

impl FilterCriteria {
    /// Build criteria from decoded query parameters.
    ///
    /// A bare page load (no `filtered` marker) gets the defaults. Once the
    /// filter form has been submitted, checkbox state is read literally:
    /// an unchecked box simply does not appear in the params. The form
    /// keeps `in_stock_only` and `sold_only` mutually exclusive, but if
    /// both arrive anyway they are both applied, which matches no listing.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        if !params.contains_key("filtered") {
            return Self::default();
        }

        Self {
            search_term: trimmed(params, "search_term"),
            in_stock_only: checkbox(params, "in_stock_only"),
            sold_only: checkbox(params, "sold_only"),
            date_from: parse_date(params, "date_from"),
            date_to: parse_date(params, "date_to"),
            category: trimmed(params, "category"),
            location: trimmed(params, "location"),
            condition: trimmed(params, "condition"),
            min_price: parse_price(params, "min_price"),
            max_price: parse_price(params, "max_price"),
            sort_by: params
                .get("sort_by")
                .map(|s| SortBy::from_param(s))
                .unwrap_or(SortBy::DateDesc),
        }
    }

    /// Filter and order a candidate set. This is the source of truth for
    /// what the page shows: the DB fetch may have pushed some predicates
    /// into SQL already, but everything is re-checked here so the final
    /// set and order never depend on what the store did.
    pub fn apply(&self, records: Vec<Listing>) -> Vec<Listing> {
        let mut kept: Vec<Listing> = records.into_iter().filter(|l| self.matches(l)).collect();

        // Vec::sort_by is stable, so equal keys keep their input order.
        match self.sort_by {
            SortBy::DateDesc => {
                kept.sort_by(|a, b| b.created_at_parsed().cmp(&a.created_at_parsed()))
            }
            SortBy::DateAsc => {
                kept.sort_by(|a, b| a.created_at_parsed().cmp(&b.created_at_parsed()))
            }
            SortBy::PriceAsc => {
                kept.sort_by(|a, b| a.price_or_zero().total_cmp(&b.price_or_zero()))
            }
            SortBy::PriceDesc => {
                kept.sort_by(|a, b| b.price_or_zero().total_cmp(&a.price_or_zero()))
            }
        }

        kept
    }

    /// AND of per-field predicates; a predicate whose criteria field is
    /// empty/None is skipped entirely.
    fn matches(&self, listing: &Listing) -> bool {
        if !self.search_term.is_empty() && !contains_ci(&listing.name, &self.search_term) {
            return false;
        }
        if self.in_stock_only && !listing.in_stock {
            return false;
        }
        if self.sold_only && listing.in_stock {
            return false;
        }

        if self.date_from.is_some() || self.date_to.is_some() {
            // A record whose timestamp can't be read is excluded from
            // range-filtered results rather than failing the page.
            let Some(created) = listing.created_at_parsed() else {
                warn!(
                    listing_id = %listing.id,
                    "excluding listing with malformed created_at from date-filtered results"
                );
                return false;
            };
            let day = created.date();
            if self.date_from.is_some_and(|from| day < from) {
                return false;
            }
            if self.date_to.is_some_and(|to| day > to) {
                return false;
            }
        }

        if !self.category.is_empty() && !opt_contains_ci(listing.category.as_deref(), &self.category)
        {
            return false;
        }
        if !self.location.is_empty() && !opt_contains_ci(listing.location.as_deref(), &self.location)
        {
            return false;
        }
        if !self.condition.is_empty()
            && !opt_contains_ci(listing.condition.as_deref(), &self.condition)
        {
            return false;
        }

        // Price bounds are inclusive; a listing without a price can't
        // satisfy either bound.
        if let Some(min) = self.min_price {
            match listing.price {
                Some(p) if p >= min => {}
                _ => return false,
            }
        }
        if let Some(max) = self.max_price {
            match listing.price {
                Some(p) if p <= max => {}
                _ => return false,
            }
        }

        true
    }
}

/// Case-insensitive substring match (not prefix, not tokenized).
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// A record missing the field is excluded when the filter is active.
fn opt_contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| contains_ci(h, needle))
}

fn trimmed(params: &HashMap<String, String>, key: &str) -> String {
    params.get(key).map(|v| v.trim().to_string()).unwrap_or_default()
}

fn checkbox(params: &HashMap<String, String>, key: &str) -> bool {
    params.contains_key(key)
}

fn parse_date(params: &HashMap<String, String>, key: &str) -> Option<NaiveDate> {
    let raw = params.get(key)?.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(d) => Some(d),
        Err(_) => {
            warn!("ignoring malformed {key}: {raw:?}");
            None
        }
    }
}

fn parse_price(params: &HashMap<String, String>, key: &str) -> Option<f64> {
    let raw = params.get(key)?.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(p) if p.is_finite() && p >= 0.0 => Some(p),
        _ => {
            warn!("ignoring malformed {key}: {raw:?}");
            None
        }
    }
}
