//! App Root Component
//!
//! Routing and the theme provider.

use leptos::*;
use leptos_router::*;

use crate::pages::insights::{Insights, DEFAULT_HASHTAG};
use crate::state::theme::{provide_theme, ThemeState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Theme context for all components
    provide_theme();
    let theme = use_context::<ThemeState>().expect("ThemeState not found");

    view! {
        <Router>
            <div class=move || if theme.is_dark() { "app dark" } else { "app light" }>
                <main class="container">
                    <Routes>
                        <Route path="/" view=RedirectToDefault />
                        <Route path="/insights" view=RedirectToDefault />
                        <Route path="/insights/:hashtag" view=Insights />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Send bare routes to the default hashtag's insights page
#[component]
fn RedirectToDefault() -> impl IntoView {
    view! { <Redirect path=format!("/insights/{}", DEFAULT_HASHTAG) /> }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href=format!("/insights/{}", DEFAULT_HASHTAG) class="back-link">
                "Go to Insights"
            </A>
        </div>
    }
}
