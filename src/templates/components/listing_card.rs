use maud::{html, Markup};

use crate::domain::listing::Listing;

/// One card in the listings grid: first image, name, seller, price and
/// stock badge, linking through to the detail page.
pub fn listing_card(listing: &Listing) -> Markup {
    let details_url = format!("/u/{}/{}", listing.owner_handle, listing.id);

    html! {
        div class="card listing-card" {
            a href=(details_url) {
                @match listing.images.first() {
                    Some(url) => { img src=(url) alt=(listing.name) loading="lazy"; },
                    None => { div class="no-image" { "No image" } },
                }
            }
            div class="card-body" {
                h2 { a href=(details_url) { (listing.name) } }
                p class="seller" {
                    "Sold by "
                    a href=(format!("/u/{}", listing.owner_handle)) { (listing.owner_handle) }
                }
                @if let Some(price) = listing.price {
                    p class="price" { (format!("${price:.2}")) }
                }
                @if !listing.in_stock {
                    span class="badge sold" { "Sold" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Listing {
        Listing {
            id: "abc123defg".into(),
            owner_handle: "jsmith".into(),
            name: "Lamp".into(),
            description: String::new(),
            images: Vec::new(),
            price: Some(10.0),
            category: None,
            location: None,
            condition: None,
            in_stock: true,
            created_at: "2024-01-01T00:00:00+00:00".into(),
        }
    }

    #[test]
    fn renders_first_image_when_present() {
        let mut listing = lamp();
        listing.images = vec!["/img/lamp.jpg".into(), "/img/lamp2.jpg".into()];
        let html = listing_card(&listing).into_string();
        assert!(html.contains("src=\"/img/lamp.jpg\""));
        assert!(!html.contains("lamp2"));
    }

    #[test]
    fn renders_placeholder_without_images() {
        let html = listing_card(&lamp()).into_string();
        assert!(html.contains("No image"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn sold_badge_only_when_out_of_stock() {
        let mut listing = lamp();
        assert!(!listing_card(&listing).into_string().contains("Sold</span>"));
        listing.in_stock = false;
        assert!(listing_card(&listing).into_string().contains("Sold</span>"));
    }
}
