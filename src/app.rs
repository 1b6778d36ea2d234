mod contact;
mod dialog;
mod footer;
mod header;
mod homepage;
mod projects;
mod resume;
mod reveal;
mod scroll;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SITE_OWNER;
use dialog::{provide_dialogs, DialogHost};
use footer::Footer;
use header::Header;
use homepage::HomePage;
use projects::ProjectPage;
use resume::CVPage;
use scroll::ScrollTop;
use theme::{provide_theme, SERVER_THEME};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme=SERVER_THEME.as_str()>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/neon-portfolio.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();
    provide_dialogs();

    view! {
        <Title formatter=|title| format!("{SITE_OWNER} - {title}") />
        <Meta name="description" content=format!("{SITE_OWNER}'s portfolio: projects, certificates and resume.") />

        <Router>
            <a href="#main" class="skip-link">
                "Skip to content"
            </a>
            <Header />
            <main id="main" class="flex flex-col flex-grow mx-auto w-full max-w-6xl px-4">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/resume") view=CVPage />
                    <Route path=path!("/projects/:name") view=ProjectPage />
                </Routes>
            </main>
            <Footer />
            <ScrollTop />
            <DialogHost />
        </Router>
    }
}
