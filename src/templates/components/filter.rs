use maud::{html, Markup};

use crate::domain::query::{FilterCriteria, SortBy};

/// The filter form for the listings page.
///
/// Every change re-fetches just the grid via htmx; without JS the form
/// degrades to a plain GET of /listings. The hidden `filtered` marker
/// distinguishes "form submitted with boxes unchecked" from "no form at
/// all", since unchecked checkboxes don't appear in a query string. The
/// hidden `cid` identifies this tab so the server can drop grid renders
/// this tab has already superseded.
pub fn filter_form(criteria: &FilterCriteria, client_id: &str) -> Markup {
    let sort_options = [
        (SortBy::DateDesc, "Date Posted (Newest First)"),
        (SortBy::DateAsc, "Date Posted (Oldest First)"),
        (SortBy::PriceAsc, "Price (Low to High)"),
        (SortBy::PriceDesc, "Price (High to Low)"),
    ];

    html! {
        form
            action="/listings"
            method="get"
            class="filter-form card"
            hx-get="/listings/grid"
            hx-target="#listings-grid"
            hx-swap="outerHTML"
            hx-trigger="change, submit"
        {
            h3 { "Filter Listings" }
            input type="hidden" name="filtered" value="1";
            input type="hidden" name="cid" value=(client_id);

            label { "Search by name"
                input type="text" name="search_term" value=(criteria.search_term);
            }

            // The two stock boxes are mutually exclusive; checking one
            // unchecks the other.
            label {
                input
                    type="checkbox"
                    name="in_stock_only"
                    id="in_stock_only"
                    checked[criteria.in_stock_only]
                    onchange="if (this.checked) document.getElementById('sold_only').checked = false";
                "In Stock Only"
            }
            label {
                input
                    type="checkbox"
                    name="sold_only"
                    id="sold_only"
                    checked[criteria.sold_only]
                    onchange="if (this.checked) document.getElementById('in_stock_only').checked = false";
                "Sold Only"
            }

            label { "Date From"
                input type="date" name="date_from"
                    value=(criteria.date_from.map(|d| d.to_string()).unwrap_or_default());
            }
            label { "Date To"
                input type="date" name="date_to"
                    value=(criteria.date_to.map(|d| d.to_string()).unwrap_or_default());
            }

            label { "Category"
                input type="text" name="category" value=(criteria.category);
            }
            label { "Location"
                input type="text" name="location" value=(criteria.location);
            }
            label { "Condition"
                input type="text" name="condition" value=(criteria.condition);
            }

            label { "Minimum Price"
                input type="number" name="min_price" min="0" step="0.01"
                    value=(criteria.min_price.map(|p| p.to_string()).unwrap_or_default());
            }
            label { "Maximum Price"
                input type="number" name="max_price" min="0" step="0.01"
                    value=(criteria.max_price.map(|p| p.to_string()).unwrap_or_default());
            }

            label { "Sort By"
                select name="sort_by" {
                    @for (sort, label) in sort_options {
                        option value=(sort.as_param()) selected[criteria.sort_by == sort] {
                            (label)
                        }
                    }
                }
            }

            div class="filter-actions" {
                a href="/listings" { "Clear" }
                button type="submit" { "Apply" }
            }
        }
    }
}
