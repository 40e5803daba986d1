use maud::{html, Markup};

/// Five stars for a 0–10 score, half the score rounded.
pub fn stars(rating: f64) -> Markup {
    let filled = (rating / 2.0).round() as i64;
    html! {
        span class="stars" aria-label=(format!("{rating:.1} out of 10")) {
            @for star in 1..=5 {
                @if star <= filled {
                    span class="star filled" { "★" }
                } @else {
                    span class="star" { "☆" }
                }
            }
        }
    }
}

pub fn rating_badge(rating: f64) -> Markup {
    let tier = if rating >= 9.0 {
        "excellent"
    } else if rating >= 7.0 {
        "good"
    } else {
        "low"
    };

    html! {
        span class=(format!("rating-badge {tier}")) { (format!("{rating:.1}")) }
    }
}
