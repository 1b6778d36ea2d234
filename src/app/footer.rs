use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::config::{GITHUB_URL, LINKEDIN_URL, SITE_OWNER};

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let built = DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.with_timezone(&Utc))
        .ok();
    let year = built.map(|t| t.year()).unwrap_or(2024);
    view! {
        <footer class="site-footer">
            <div class="mx-auto max-w-6xl px-4 py-6 flex flex-col sm:flex-row items-center justify-between gap-2 text-sm">
                <span>{format!("© {year} {SITE_OWNER}")}</span>
                <span class="flex gap-4">
                    <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" class="neon-link">
                        "GitHub"
                    </a>
                    <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer" class="neon-link">
                        "LinkedIn"
                    </a>
                </span>
                {built
                    .map(|t| {
                        view! {
                            <span class="text-muted">
                                "Built " {t.format("%Y-%m-%d %H:%M UTC").to_string()}
                            </span>
                        }
                    })}
            </div>
        </footer>
    }
}
