use maud::{html, Markup};

pub mod error;
pub mod rating;
pub mod review_card;
pub mod stats_panel;

pub use error::error_page;
pub use rating::{rating_badge, stars};
pub use review_card::{review_card, ReviewRow};
pub use stats_panel::stats_panel;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// `check_in` -> `check in`
pub fn category_label(category: &str) -> String {
    category.replace('_', " ")
}
