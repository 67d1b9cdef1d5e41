use maud::{html, Markup};

use crate::db::sessions::SessionUser;
use crate::domain::listing::Listing;
use crate::domain::query::FilterCriteria;
use crate::templates::components::{filter_form, listing_card};
use crate::templates::desktop_layout;

pub fn listings_page(
    session: Option<&SessionUser>,
    criteria: &FilterCriteria,
    client_id: &str,
    listings: &[Listing],
    load_failed: bool,
) -> Markup {
    desktop_layout(
        "Listings",
        session,
        html! {
            main class="container" {
                h1 { "Listings" }
                div class="listings-layout" {
                    aside { (filter_form(criteria, client_id)) }
                    (listings_grid(listings, load_failed))
                }
            }
        },
    )
}

/// Just the grid; also served on its own as the htmx refresh partial.
pub fn listings_grid(listings: &[Listing], load_failed: bool) -> Markup {
    html! {
        section id="listings-grid" class="grid" {
            @if load_failed {
                p class="alert error" { "Could not load listings. Please try again later." }
            } @else if listings.is_empty() {
                p { "No listings found." }
            } @else {
                @for listing in listings {
                    (listing_card(listing))
                }
            }
        }
    }
}
