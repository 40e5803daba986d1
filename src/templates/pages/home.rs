// templates/pages/home.rs

use crate::catalog::PropertyDetails;
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn home_page(properties: &[PropertyDetails]) -> Markup {
    desktop_layout(
        "Home",
        html! {
            main class="container" {
                h1 { "Guest Reviews" }

                (card("Manager Dashboard", html! {
                    p { "Review analytics, filtering and approval of reviews for public display." }
                    a class="btn primary" href="/dashboard" { "Open dashboard" }
                }))

                (card("Properties", html! {
                    ul {
                        @for p in properties {
                            li {
                                a href=(format!("/property/{}", p.id)) { (p.name) }
                                " · " span class="muted" { (p.location) }
                            }
                        }
                    }
                }))
            }
        },
    )
}
