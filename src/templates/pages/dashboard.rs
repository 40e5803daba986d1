use crate::domain::{Filters, PropertyStatsEntry, Sort, SortField, SortOrder};
use crate::reviews::DataSource;
use crate::templates::components::{review_card, stats_panel, ReviewRow};
use crate::templates::desktop_layout;
use maud::{html, Markup};

const MIN_RATING_CHOICES: &[(&str, &str)] = &[
    ("9", "9+ Excellent"),
    ("8", "8+ Great"),
    ("7", "7+ Good"),
    ("6", "6+ Fair"),
];

pub struct DashboardVm {
    pub source: DataSource,
    /// Stats over every review, regardless of the filters.
    pub stats: Vec<PropertyStatsEntry>,
    pub total_reviews: usize,
    pub approved_count: usize,
    /// Filtered and sorted.
    pub rows: Vec<ReviewRow>,
    /// (propertyId, listing name)
    pub properties: Vec<(String, String)>,
    pub channels: Vec<String>,
    pub filters: Filters,
    pub sort: Sort,
    pub return_to: String,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "Manager Dashboard",
        html! {
            main class="container" {
                h1 { "Manager Dashboard" }
                p class="muted" { "Review analytics & approval" }

                @if vm.source == DataSource::Fallback {
                    p class="notice" id="fallback-notice" {
                        "Live review data is unavailable. Showing the bundled sample dataset."
                    }
                }

                (stats_panel(&vm.stats))
                (filter_form(vm))

                @if vm.rows.is_empty() {
                    section class="card" {
                        p class="muted" { "No reviews match your filters" }
                    }
                }

                @for row in &vm.rows {
                    (review_card(row, &vm.return_to))
                }
            }
        },
    )
}

fn filter_form(vm: &DashboardVm) -> Markup {
    let property = vm.filters.property.as_deref();
    let channel = vm.filters.channel.as_deref();
    let min_rating = vm.filters.min_rating.map(|m| m.to_string());
    let custom_min = min_rating
        .as_deref()
        .filter(|m| !MIN_RATING_CHOICES.iter().any(|(v, _)| v == m));

    html! {
        section class="card" id="filters" {
            h2 { "Filters & Sorting" }

            form action="/dashboard" method="get" class="filters" {
                label {
                    div class="label" { "Property" }
                    select name="property" {
                        option value="" { "All Properties" }
                        @for (id, name) in &vm.properties {
                            option value=(id) selected[property == Some(id.as_str())] { (name) }
                        }
                    }
                }

                label {
                    div class="label" { "Channel" }
                    select name="channel" {
                        option value="" { "All Channels" }
                        @for c in &vm.channels {
                            option value=(c) selected[channel == Some(c.as_str())] { (c) }
                        }
                    }
                }

                label {
                    div class="label" { "Min Rating" }
                    select name="minRating" {
                        option value="" { "All Ratings" }
                        @for (value, text) in MIN_RATING_CHOICES {
                            option value=(value) selected[min_rating.as_deref() == Some(*value)] { (text) }
                        }
                        @if let Some(m) = custom_min {
                            option value=(m) selected { (m) "+" }
                        }
                    }
                }

                label {
                    div class="label" { "Sort By" }
                    select name="sort" {
                        option value="date" selected[vm.sort.field == SortField::Date] { "Date" }
                        option value="rating" selected[vm.sort.field == SortField::Rating] { "Rating" }
                    }
                }

                label {
                    div class="label" { "Order" }
                    select name="order" {
                        option value="desc" selected[vm.sort.order == SortOrder::Desc] { "Desc" }
                        option value="asc" selected[vm.sort.order == SortOrder::Asc] { "Asc" }
                    }
                }

                button type="submit" class="btn primary" { "Apply" }
            }

            p class="muted" id="review-count" {
                strong { (vm.rows.len()) } " of " (vm.total_reviews) " reviews · "
                strong { (vm.approved_count) } " approved"

                " · "
                a href=(dashboard_url(&vm.filters, Sort { order: vm.sort.order.flipped(), ..vm.sort })) {
                    "Reverse order (" (vm.sort.order.flipped().as_str()) ")"
                }
                @if !vm.filters.is_empty() {
                    " · " a href="/dashboard" { "Clear filters" }
                }
            }
        }
    }
}

/// Dashboard link that reproduces the given filters and sort.
pub fn dashboard_url(filters: &Filters, sort: Sort) -> String {
    let mut qs = url::form_urlencoded::Serializer::new(String::new());
    if let Some(p) = &filters.property {
        qs.append_pair("property", p);
    }
    if let Some(c) = &filters.channel {
        qs.append_pair("channel", c);
    }
    if let Some(m) = filters.min_rating {
        qs.append_pair("minRating", &m.to_string());
    }
    qs.append_pair("sort", sort.field.as_str());
    qs.append_pair("order", sort.order.as_str());

    format!("/dashboard?{}", qs.finish())
}
