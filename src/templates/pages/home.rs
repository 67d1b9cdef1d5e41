use maud::{html, Markup};

use crate::db::sessions::SessionUser;
use crate::templates::desktop_layout;

pub fn home_page(session: Option<&SessionUser>) -> Markup {
    desktop_layout(
        "Home",
        session,
        html! {
            main class="container hero" {
                h1 { "Welcome to Husky Haggles" }
                p class="lead" { "Buy, sell, and trade listings with your community!" }
                div class="hero-actions" {
                    a href="/listings" { button { "Browse Listings" } }
                    a href="/users" { button class="outlined" { "View Users" } }
                }
            }
        },
    )
}
