use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;
mod state;
pub mod status_page;

pub use state::State;

use components::ToastContainer;
use contexts::toast::ToastProvider;
use pages::{NotFoundPage, StatusPageEditorPage};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .or_else(|| web_sys::window()?.location().origin().ok())
        .unwrap_or_default();

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

/// Domain under which status pages are served, as `<slug>.<domain>`.
pub fn status_page_domain() -> &'static str {
    option_env!("STATUS_PAGE_DOMAIN").unwrap_or("status.example.com")
}

#[function_component]
pub fn App() -> Html {
    use_effect_with((), |_| logs::init_logging());

    html! {
        <ToastProvider>
            <BrowserRouter>
                <div class="min-h-screen bg-white dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
                    <ToastContainer />
                    <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </BrowserRouter>
        </ToastProvider>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/:workspace/status-pages/edit")]
    StatusPageEditor { workspace: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::StatusPageEditor { workspace } => html! {
            <StatusPageEditorPage {workspace} />
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
