use maud::{html, Markup};

use crate::db::sessions::SessionUser;
use crate::db::users::UserRow;
use crate::templates::components::user_card;
use crate::templates::desktop_layout;

pub fn users_page(session: Option<&SessionUser>, users: &[UserRow]) -> Markup {
    desktop_layout(
        "Users",
        session,
        html! {
            main class="container" {
                h1 { "Users" }
                @if users.is_empty() {
                    p { "No users found." }
                } @else {
                    section class="grid" {
                        @for user in users {
                            (user_card(user))
                        }
                    }
                }
            }
        },
    )
}
