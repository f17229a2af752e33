mod homepage;
mod navbar;
mod theme_toggle;
mod words;

pub use theme_toggle::{provide_theme, use_theme, ThemeContext};

use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::site::{SITE_DESCRIPTION, SITE_OWNER};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Lilita+One&family=Open+Sans:wght@400;500;700&display=swap"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let ThemeContext { theme, .. } = provide_theme();

    view! {
        <Html {..} data-theme=move || theme.get().as_str() />
        <Title text=format!("{SITE_OWNER} | Portfolio") />
        <Meta name="description" content=SITE_DESCRIPTION />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
