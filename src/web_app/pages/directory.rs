// web_app/pages/directory.rs - Directory search page
//
// Composes the filter bar and the results grid, loads categories once on
// mount, and re-queries businesses whenever a filter changes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::*;
use crate::web_app::model::{CategoryFilter, DirectoryFilters};
use crate::web_app::server_fns::{list_categories, query_businesses};
use crate::web_app::state::{
    DirectoryState, FetchOutcome, FetchPlan, ResultsView, SKELETON_CARD_COUNT,
};

pub const EMPTY_MESSAGE: &str = "No businesses found matching your criteria.";
pub const EMPTY_HINT: &str = "Try adjusting your search or filters to find what you're looking for.";

pub const FETCH_ERROR_TITLE: &str = "Error fetching businesses";
pub const FETCH_ERROR_DESCRIPTION: &str = "Please try again later.";

/// Main directory page component
#[component]
pub fn DirectoryPage() -> impl IntoView {
    let state = RwSignal::new(DirectoryState::new());
    let toaster = use_toaster();

    // Filter state, fed by the filter bar callbacks
    let search_text = RwSignal::new(String::new());
    let category = RwSignal::new(CategoryFilter::All);
    let location = RwSignal::new(String::new());

    // Memo so that re-setting an identical value does not trigger a fetch
    let filters = Memo::new(move |_| DirectoryFilters {
        search: search_text.get(),
        category: category.get(),
        location: location.get(),
    });

    // Category loader: runs once when the page mounts in the browser
    Effect::new(move |_| {
        if !state.try_update(|s| s.begin_categories_load()).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            let result = list_categories().await;
            let failure = state.try_update(|s| s.finish_categories_load(result)).flatten();
            if let Some(message) = failure {
                leptos::logging::error!("Error fetching categories: {}", message);
            }
        });
    });

    // Business fetcher: one query per filter change
    Effect::new(move |_| {
        let current = filters.get();
        let Some(FetchPlan::Fetch { ticket, query }) = state.try_update(|s| s.begin_fetch(&current))
        else {
            return;
        };

        spawn_local(async move {
            let result = query_businesses(query).await;
            match state.try_update(|s| s.finish_fetch(ticket, result)) {
                Some(FetchOutcome::Failed { message }) => {
                    leptos::logging::error!("Error fetching businesses: {}", message);
                    toaster.toast(FETCH_ERROR_TITLE, FETCH_ERROR_DESCRIPTION, ToastVariant::Destructive);
                }
                Some(FetchOutcome::Stale) => {
                    leptos::logging::debug_warn!(
                        "Discarded response for fetch #{}",
                        ticket.sequence()
                    );
                }
                Some(FetchOutcome::Applied { .. }) | None => {}
            }
        });
    });

    let on_search_change = Callback::new(move |value: String| search_text.set(value));
    let on_category_change =
        Callback::new(move |value: String| category.set(CategoryFilter::from_select_value(&value)));
    let on_location_change = Callback::new(move |value: String| location.set(value));

    let categories = Signal::derive(move || state.with(|s| s.categories().to_vec()));
    let businesses = Signal::derive(move || state.with(|s| s.businesses().to_vec()));
    let results_view = Memo::new(move |_| state.with(|s| s.view()));

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900 flex flex-col">
            <NavBar />

            <main class="flex-1 w-full max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <section class="mb-8">
                    <h1 class="text-3xl font-bold text-gray-900">"Find Local Businesses"</h1>
                    <p class="mt-2 text-gray-600">
                        "Search by name or product, narrow by category, or look near a city or state."
                    </p>
                </section>

                <section class="bg-white rounded-2xl shadow-sm p-6 mb-8 border border-gray-100">
                    <DirectoryFilterBar
                        categories=categories
                        on_search_change=on_search_change
                        on_category_change=on_category_change
                        on_location_change=on_location_change
                    />
                </section>

                <section class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || match results_view.get() {
                        ResultsView::Loading => view! {
                            <For
                                each=|| 0..SKELETON_CARD_COUNT
                                key=|position| *position
                                children=|_| view! { <BusinessCardSkeleton /> }
                            />
                        }.into_any(),
                        ResultsView::Results => view! {
                            <For
                                each=move || businesses.get()
                                key=|business| business.id
                                children=|business| view! { <BusinessCard business=business /> }
                            />
                        }.into_any(),
                        ResultsView::Empty => view! {
                            <EmptyState message=EMPTY_MESSAGE hint=EMPTY_HINT />
                        }.into_any(),
                    }}
                </section>
            </main>

            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_copy() {
        assert_eq!(EMPTY_MESSAGE, "No businesses found matching your criteria.");
        assert!(!EMPTY_HINT.is_empty());
    }

    #[test]
    fn test_fetch_error_copy() {
        assert!(FETCH_ERROR_TITLE.contains("businesses"));
        assert!(FETCH_ERROR_DESCRIPTION.contains("try again"));
    }
}
