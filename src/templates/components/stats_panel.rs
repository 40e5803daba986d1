use crate::domain::{PropertyStatsEntry, Trend};
use maud::{html, Markup};

fn trend_icon(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "▲",
        Trend::Down => "▼",
        Trend::Stable => "–",
    }
}

/// "Property Performance" panel on the dashboard.
pub fn stats_panel(stats: &[PropertyStatsEntry]) -> Markup {
    html! {
        section class="card" id="property-stats" {
            h2 { "Property Performance" }

            @if stats.is_empty() {
                p class="muted" { "No reviews yet." }
            }

            @for property in stats {
                div class="property-stats" {
                    div class="property-head" {
                        h3 { (property.property_name) }
                        span class=(format!("trend {}", property.trend.as_str())) {
                            (trend_icon(property.trend)) " " (property.trend.as_str())
                        }
                    }

                    div class="stat-grid" {
                        div class="stat" {
                            div class="label" { "Avg Rating" }
                            div class="value" { (format!("{:.1}", property.avg_rating)) }
                        }
                        div class="stat" {
                            div class="label" { "Reviews" }
                            div class="value" { (property.total_reviews) }
                        }
                        div class="stat wide" {
                            div class="label" { "Channels" }
                            @for (channel, count) in &property.channel_breakdown {
                                span class="chip" { (channel) " (" (count) ")" }
                            }
                        }
                    }

                    a href=(format!("/property/{}", property.property_id)) { "Public page →" }
                }
            }
        }
    }
}
