use maud::{html, Markup};

use crate::db::users::UserRow;

pub fn user_card(user: &UserRow) -> Markup {
    html! {
        div class="card user-card" {
            a href=(format!("/u/{}", user.handle)) {
                @match &user.profile_picture {
                    Some(url) => { img src=(url) alt=(user.handle) class="avatar"; },
                    None => { div class="avatar placeholder" {} },
                }
                h2 { (user.handle) }
            }
        }
    }
}
