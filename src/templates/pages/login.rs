use maud::{html, Markup};

use crate::templates::desktop_layout;

pub fn login_page(error: Option<&str>) -> Markup {
    desktop_layout(
        "Sign in",
        None,
        html! {
            main class="container narrow" {
                h1 { "Sign in" }

                @if let Some(error) = error {
                    div class="alert error" role="alert" { (error) }
                }

                form action="/login" method="post" {
                    label { "Username or email"
                        input type="text" name="handle_or_email" required;
                    }
                    label { "Password"
                        input type="password" name="password" required;
                    }
                    button type="submit" { "Sign in" }
                }

                p { "New here? " a href="/signup" { "Create an account" } }
            }
        },
    )
}
