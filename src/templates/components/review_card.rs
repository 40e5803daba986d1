use crate::domain::NormalizedReview;
use crate::templates::components::{category_label, rating_badge};
use maud::{html, Markup};

/// A review row on the manager dashboard.
pub struct ReviewRow {
    pub review: NormalizedReview,
    pub is_approved: bool,
}

pub fn review_card(row: &ReviewRow, return_to: &str) -> Markup {
    let review = &row.review;
    let card_class = if row.is_approved {
        "card review approved"
    } else {
        "card review"
    };

    html! {
        article class=(card_class) id=(format!("review-{}", review.id)) {
            header class="review-head" {
                div {
                    (rating_badge(review.average_rating))
                    span class="channel" { (review.channel) }
                    h3 { (review.listing_name) }
                }

                form action=(format!("/dashboard/reviews/{}/approval", review.id)) method="post" {
                    input type="hidden" name="approved" value=(if row.is_approved { "false" } else { "true" });
                    input type="hidden" name="return_to" value=(return_to);
                    @if row.is_approved {
                        button type="submit" class="btn primary" { "✓ Approved" }
                    } @else {
                        button type="submit" class="btn" { "Approve" }
                    }
                }
            }

            p class="review-body" { (review.public_review) }

            @if !review.review_category.is_empty() {
                div class="categories" {
                    @for cat in &review.review_category {
                        div class="category" {
                            div class="label" { (category_label(&cat.category)) }
                            div class="score" {
                                @match cat.rating {
                                    Some(r) => (r),
                                    None => "–",
                                }
                            }
                        }
                    }
                }
            }

            footer class="meta" {
                span { (review.guest_name) }
                span { (review.submitted_date.format("%b %d, %Y")) }
                span { (review.property_id) }
                span class="muted" { (review.status.as_str()) }
            }
        }
    }
}
