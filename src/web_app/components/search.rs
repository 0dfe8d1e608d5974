// web_app/components/search.rs - Directory filter controls
//
// The filter bar owns no state: every keystroke or selection is reported
// through a callback and the page decides what to do with it.

use leptos::prelude::*;

use crate::web_app::model::ALL_CATEGORIES;

/// Options for the category `<select>`: the "all" sentinel, then each name
pub fn category_options(categories: &[String]) -> Vec<(String, String)> {
    std::iter::once((ALL_CATEGORIES.to_string(), "All Categories".to_string()))
        .chain(categories.iter().map(|name| (name.clone(), name.clone())))
        .collect()
}

/// Search text, category, and location inputs
#[component]
pub fn DirectoryFilterBar(
    /// Category names offered by the select
    categories: Signal<Vec<String>>,
    /// Called with the new search text on every input
    on_search_change: Callback<String>,
    /// Called with the selected category value ("all" for no filter)
    on_category_change: Callback<String>,
    /// Called with the new location text on every input
    on_location_change: Callback<String>,
) -> impl IntoView {
    let input_class = "w-full px-4 py-3 border-2 border-gray-200 rounded-xl \
                       focus:ring-4 focus:ring-emerald-100 focus:border-emerald-500 \
                       outline-none transition-all shadow-sm";

    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <div class="relative">
                <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                    <span class="text-gray-400">"🔍"</span>
                </div>
                <input
                    type="search"
                    placeholder="Search businesses, products..."
                    class=format!("{} pl-10", input_class)
                    on:input=move |ev| on_search_change.run(event_target_value(&ev))
                />
            </div>

            <select
                class=format!("{} bg-white cursor-pointer", input_class)
                on:change=move |ev| on_category_change.run(event_target_value(&ev))
            >
                {move || {
                    category_options(&categories.get())
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()
                }}
            </select>

            <input
                type="text"
                placeholder="City or state"
                class=input_class
                on:input=move |ev| on_location_change.run(event_target_value(&ev))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_options_start_with_all() {
        let options = category_options(&["Automotive".to_string(), "Retail".to_string()]);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0], ("all".to_string(), "All Categories".to_string()));
        assert_eq!(options[2].0, "Retail");
    }

    #[test]
    fn test_category_options_without_categories() {
        let options = category_options(&[]);
        assert_eq!(options, vec![("all".to_string(), "All Categories".to_string())]);
    }
}
