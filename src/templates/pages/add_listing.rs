use maud::{html, Markup};

use crate::db::sessions::SessionUser;
use crate::domain::listing::ListingDraft;
use crate::templates::components::error_alert;
use crate::templates::desktop_layout;

pub fn add_listing_page(session: &SessionUser, draft: &ListingDraft, errors: &[String]) -> Markup {
    desktop_layout(
        "Add Listing",
        Some(session),
        html! {
            main class="container" {
                h1 { "Add New Listing" }

                (error_alert(errors))

                form action="/listings" method="post" class="add-listing" {
                    div class="columns" {
                        div class="main-column" {
                            label { "Listing Name"
                                input type="text" name="name" value=(draft.name) required;
                            }
                            label { "Description"
                                textarea name="description" rows="8" { (draft.description) }
                            }
                        }
                        div class="side-column" {
                            label { "Price ($)"
                                input type="number" name="price" min="0" step="0.01" value=(draft.price);
                            }
                            label { "Condition"
                                input type="text" name="condition" value=(draft.condition);
                            }
                            label { "Category"
                                input type="text" name="category" value=(draft.category);
                            }
                            label { "Location"
                                input type="text" name="location" value=(draft.location);
                            }
                            label { "Image URL"
                                input type="url" name="image_url" value=(draft.image_url);
                            }
                            label {
                                input type="checkbox" name="in_stock" checked[draft.in_stock];
                                "In stock"
                            }
                        }
                    }
                    button type="submit" { "Create Listing" }
                }
            }
        },
    )
}
