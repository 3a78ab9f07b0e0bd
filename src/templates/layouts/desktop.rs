use maud::{html, Markup, PreEscaped, DOCTYPE};

const SITE_NAME: &str = "OffMarketLots.com";

const STYLES: &str = r#"
  body { margin: 0; font-family: system-ui, -apple-system, sans-serif; color: #111827; background: #fff; }
  a { color: inherit; }
  .container { max-width: 1120px; margin: 0 auto; padding: 0 1rem; }
  .hero { background: linear-gradient(90deg, #2563eb, #1e40af); color: #fff; }
  .hero.dark { background: linear-gradient(90deg, #111827, #1f2937); }
  .grid { display: grid; gap: 1.5rem; }
  .grid-2 { grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); }
  .grid-3 { grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); }
  .grid-4 { grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); }
  .card { border: 2px solid #e5e7eb; border-radius: 0.75rem; padding: 1.5rem; background: #fff; }
  .muted { color: #6b7280; }
  .badge { background: #e5e7eb; padding: 2px 8px; border-radius: 9999px; font-size: 0.85em; }
  table { width: 100%; border-collapse: collapse; }
  th { text-align: left; padding: 10px 8px; border-bottom: 2px solid #e5e7eb; background: #f9fafb; }
  td { padding: 8px; border-bottom: 1px solid #f3f4f6; }
  .empty { text-align: center; color: #6b7280; padding: 2rem 0; }
  .row { display: flex; justify-content: space-between; padding: 0.5rem 0; border-bottom: 1px solid #374151; }
  .row:last-child { border-bottom: none; }
  header.site { display: flex; align-items: center; gap: 0.75rem; padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (SITE_NAME) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                header class="site" {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#2563eb"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    a href="/" style="font-weight: 600; text-decoration: none;" { (SITE_NAME) }
                }
                (content)
            }
        }
    }
}
