// web_app/app.rs - Root application component
//
// Sets up meta tags, the toast context, and routing.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::components::{provide_toaster, Footer, NavBar, ToastViewport};
use crate::web_app::pages::DirectoryPage;

pub const APP_TITLE: &str = "Local Directory";
pub const APP_DESCRIPTION: &str = "Find and support local businesses near you";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();
    provide_toaster();

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content=APP_DESCRIPTION />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/local_directory.css" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=DirectoryPage />
                <Route path=path!("/directory") view=DirectoryPage />
            </Routes>
        </Router>

        <ToastViewport />
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <NavBar />
            <div class="flex-1 flex items-center justify-center">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                    <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                    <a
                        href="/"
                        class="px-6 py-3 bg-emerald-600 text-white rounded-lg hover:bg-emerald-700 transition-colors"
                    >
                        "Back to the directory"
                    </a>
                </div>
            </div>
            <Footer />
        </div>
    }
}
