use maud::{html, Markup, DOCTYPE};

use crate::db::sessions::SessionUser;

pub fn desktop_layout(title: &str, session: Option<&SessionUser>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Husky Haggles" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {};
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    a href="/" class="brand" { h3 { "Husky Haggles" } }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/listings" { "Listings" } }
                            li { a href="/users" { "Users" } }
                        }
                    }
                    @match session {
                        Some(user) => div class="inline" {
                            a href=(format!("/u/{}", user.handle)) { (user.handle) }
                            " "
                            a href="/listings/new" { "Sell something" }
                            form action="/logout" method="post" class="inline" {
                                button type="submit" { "Log out" }
                            }
                        },
                        None => div class="inline" {
                            a href="/signup" { "Create account" }
                            " "
                            a href="/login" { button { "Sign in" } }
                        },
                    }
                }
                (content)
            }
        }
    }
}
