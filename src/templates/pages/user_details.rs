use chrono::DateTime;
use maud::{html, Markup};

use crate::db::sessions::SessionUser;
use crate::db::users::UserRow;
use crate::domain::listing::Listing;
use crate::templates::components::listing_card;
use crate::templates::desktop_layout;

pub fn user_details_page(
    session: Option<&SessionUser>,
    user: &UserRow,
    listings: &[Listing],
) -> Markup {
    let joined = DateTime::from_timestamp(user.created_at, 0)
        .map(|dt| dt.format("%B %e, %Y").to_string());

    desktop_layout(
        &user.handle,
        session,
        html! {
            main class="container user-details" {
                div class="profile-header" {
                    @match &user.profile_picture {
                        Some(url) => { img src=(url) alt=(user.handle) class="avatar large"; },
                        None => { div class="avatar large placeholder" {} },
                    }
                    div {
                        h1 { (user.handle) }
                        h2 { (user.first_name) " " (user.last_name) }
                        @if let Some(joined) = joined {
                            p { "Joined: " (joined) }
                        }
                    }
                }

                h2 { "Listings by " (user.handle) }
                @if listings.is_empty() {
                    p { "This user has no listings yet." }
                } @else {
                    section class="grid" {
                        @for listing in listings {
                            (listing_card(listing))
                        }
                    }
                }
            }
        },
    )
}
