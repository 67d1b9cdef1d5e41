use maud::{html, Markup, PreEscaped};

use crate::db::sessions::SessionUser;
use crate::db::users::UserRow;
use crate::domain::listing::Listing;
use crate::templates::desktop_layout;

/// Full detail page for one listing: images, seller-entered description,
/// the optional classifiers, and a seller card.
pub fn listing_details_page(
    session: Option<&SessionUser>,
    listing: &Listing,
    seller: Option<&UserRow>,
) -> Markup {
    desktop_layout(
        &listing.name,
        session,
        html! {
            main class="container listing-details" {
                div class="columns" {
                    div class="main-column" {
                        @if listing.images.is_empty() {
                            div class="no-image" { "No images available." }
                        } @else {
                            div class="image-strip" {
                                @for (i, url) in listing.images.iter().enumerate() {
                                    img src=(url) alt=(format!("{} - image {}", listing.name, i + 1));
                                }
                            }
                        }
                        h1 { (listing.name) }
                        // The description is seller-entered rich text.
                        div class="description" { (PreEscaped(&listing.description)) }
                    }

                    aside class="side-column" {
                        section class="card" {
                            h3 { "Product Information" }
                            @match listing.price {
                                Some(price) => p class="price" { (format!("${price:.2}")) },
                                None => p class="price" { "Price not listed" },
                            }
                            @if !listing.in_stock {
                                span class="badge sold" { "Sold" }
                            }
                            ul {
                                @if let Some(category) = &listing.category {
                                    li { "Category: " (category) }
                                }
                                @if let Some(condition) = &listing.condition {
                                    li { "Condition: " (condition) }
                                }
                                @if let Some(location) = &listing.location {
                                    li { "Location: " (location) }
                                }
                            }
                        }

                        section class="card seller" {
                            h3 { "Seller" }
                            @match seller {
                                Some(user) => {
                                    a href=(format!("/u/{}", user.handle)) { (user.handle) }
                                    p { (user.first_name) " " (user.last_name) }
                                },
                                None => p { a href=(format!("/u/{}", listing.owner_handle)) { (listing.owner_handle) } },
                            }
                        }
                    }
                }
            }
        },
    )
}
