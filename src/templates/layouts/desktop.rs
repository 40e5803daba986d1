use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #09090b; color: #e4e4e7; }
a { color: #06b6d4; }
header.site { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; border-bottom: 1px solid #27272a; background: #18181b; }
header.site nav ul { display: flex; gap: 1.25rem; list-style: none; margin: 0; padding: 0; }
.container { max-width: 1100px; margin: 0 auto; padding: 1.5rem; }
.narrow { max-width: 720px; }
.card { background: #18181b; border: 1px solid #27272a; padding: 1.25rem; margin-bottom: 1.25rem; }
.card.approved { border-color: #06b6d4; }
.muted { color: #a1a1aa; }
.btn { padding: 0.5rem 1rem; border: 1px solid #3f3f46; background: #27272a; color: #fff; cursor: pointer; font-weight: 600; }
.btn.primary { background: #06b6d4; color: #09090b; border-color: #06b6d4; }
.rating-badge { display: inline-block; padding: 0.25rem 0.75rem; font-weight: 800; border: 1px solid #3f3f46; margin-right: 0.5rem; }
.rating-badge.excellent { color: #06b6d4; border-color: #06b6d4; }
.rating-badge.low { color: #a1a1aa; }
.chip, .channel { display: inline-block; font-size: 0.75rem; padding: 0.2rem 0.6rem; margin: 0 0.4rem 0.4rem 0; background: #06b6d4; color: #09090b; font-weight: 700; text-transform: uppercase; }
.review-head, .property-head { display: flex; justify-content: space-between; align-items: flex-start; }
.categories, .stat-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 0.75rem; margin: 1rem 0; }
.category, .stat { background: #09090b; border: 1px solid #27272a; padding: 0.6rem; }
.stat.wide { grid-column: span 2; }
.label { font-size: 0.75rem; color: #06b6d4; text-transform: uppercase; font-weight: 700; }
.value { font-size: 1.5rem; font-weight: 800; }
.meta { display: flex; gap: 1.5rem; font-size: 0.85rem; border-top: 1px solid #27272a; padding-top: 0.75rem; }
.trend.up { color: #06b6d4; }
.trend.down, .trend.stable { color: #a1a1aa; }
.filters { display: grid; grid-template-columns: repeat(5, 1fr); gap: 0.75rem; align-items: end; }
.filters select { width: 100%; padding: 0.4rem; background: #09090b; color: #fff; border: 1px solid #27272a; }
.stars .filled { color: #06b6d4; }
.bar { background: #27272a; height: 0.6rem; }
.bar > div { background: #06b6d4; height: 0.6rem; }
.notice { border-left: 3px solid #eab308; padding-left: 0.75rem; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header class="site" {
                    strong { "Guest Reviews" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/dashboard" { "Dashboard" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
