use crate::catalog::PropertyDetails;
use crate::domain::{NormalizedReview, RatingSummary};
use crate::templates::components::{category_label, stars};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct PropertyVm {
    pub details: &'static PropertyDetails,
    /// Approved reviews only, newest first.
    pub reviews: Vec<NormalizedReview>,
    pub summary: RatingSummary,
}

pub fn property_page(vm: &PropertyVm) -> Markup {
    let d = vm.details;

    desktop_layout(
        d.name,
        html! {
            main class="container" {
                img src=(d.image) alt=(d.name) style="width: 100%; max-height: 420px; object-fit: cover;";

                h1 { (d.name) }
                p class="muted" { (d.location) }

                div class="stat-grid" {
                    div class="stat" { div class="label" { "Bedrooms" } div class="value" { (d.bedrooms) } }
                    div class="stat" { div class="label" { "Bathrooms" } div class="value" { (d.bathrooms) } }
                    div class="stat" { div class="label" { "Guests" } div class="value" { (d.max_guests) } }
                }

                section class="card" {
                    h2 { "About this property" }
                    p { (d.description) }
                }

                section class="card" {
                    h2 { "Amenities" }
                    ul {
                        @for a in d.amenities {
                            li { (a) }
                        }
                    }
                }

                (reviews_section(vm))
            }
        },
    )
}

fn reviews_section(vm: &PropertyVm) -> Markup {
    let shown = vm.reviews.len();

    html! {
        section id="guest-reviews" {
            h2 { "Guest Reviews" }
            p id="approved-count" class="muted" {
                (shown) " approved review" (if shown == 1 { "" } else { "s" }) " displayed"
            }

            @if vm.reviews.is_empty() {
                div class="card" {
                    p class="muted" { "No guest reviews yet." }
                }
            } @else {
                (summary_card(&vm.summary))

                @for review in &vm.reviews {
                    article class="card" {
                        h3 { (review.guest_name) }
                        p class="muted" { (review.submitted_date.format("%B %Y")) }
                        (stars(review.average_rating))
                        " " strong { (format!("{:.1}", review.average_rating)) }
                        blockquote { (review.public_review) }
                        span class="channel" { (review.channel) }
                    }
                }
            }
        }
    }
}

fn summary_card(summary: &RatingSummary) -> Markup {
    let plural = if summary.count == 1 { "" } else { "s" };

    html! {
        div class="card" {
            div class="value" { (format!("{:.1}", summary.average)) }
            (stars(summary.average))
            p class="muted" { "Based on " (summary.count) " review" (plural) }

            @for (category, avg) in &summary.categories {
                div {
                    div class="label" { (category_label(category)) " " (format!("{avg:.1}")) }
                    div class="bar" {
                        div style=(format!("width: {:.0}%", avg * 10.0)) {}
                    }
                }
            }
        }
    }
}
