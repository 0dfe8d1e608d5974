// web_app/components/common.rs - Page chrome and reusable atomic components
//
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;

/// Top navigation bar
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <a href="/" class="flex items-center gap-2">
                    <span class="text-2xl">"📍"</span>
                    <span class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-emerald-600 to-teal-600">
                        "Local Directory"
                    </span>
                </a>
                <nav class="text-sm text-gray-500">
                    <a href="/directory" class="hover:text-gray-900 transition-colors">"Browse"</a>
                </nav>
            </div>
        </header>
    }
}

/// Site footer
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white border-t border-gray-200 mt-12 py-8">
            <div class="max-w-7xl mx-auto px-4 text-center text-gray-500 text-sm">
                <p>"© 2025 Local Directory. Supporting the businesses in your neighborhood."</p>
            </div>
        </footer>
    }
}

/// Split a 0-5 rating into (full, half, empty) star counts
pub fn star_counts(rating: f64) -> (usize, bool, usize) {
    let rating = if rating.is_finite() { rating.clamp(0.0, 5.0) } else { 0.0 };
    let full_stars = rating.floor() as usize;
    let has_half = (rating - rating.floor()) >= 0.5;
    let empty_stars = 5 - full_stars - usize::from(has_half);
    (full_stars, has_half, empty_stars)
}

/// Star rating display component
///
/// Displays a star rating (0-5) with filled and empty stars.
#[component]
pub fn StarRating(
    /// The rating value (0.0 to 5.0)
    rating: f64,
    /// Whether to show the numeric value
    #[prop(default = true)]
    show_value: bool,
) -> impl IntoView {
    let (full_stars, has_half, empty_stars) = star_counts(rating);

    view! {
        <div class="flex items-center gap-0.5" title=format!("Rating: {:.1}", rating)>
            {(0..full_stars).map(|_| view! {
                <span class="text-yellow-400">"★"</span>
            }).collect_view()}

            {has_half.then(|| view! {
                <div class="relative inline-block">
                    <span class="text-gray-200">"★"</span>
                    <span class="absolute top-0 left-0 overflow-hidden w-1/2 text-yellow-400">"★"</span>
                </div>
            })}

            {(0..empty_stars).map(|_| view! {
                <span class="text-gray-200">"★"</span>
            }).collect_view()}

            <Show when=move || show_value>
                <span class="ml-2 text-sm font-bold text-gray-700">
                    {format!("{:.1}", rating)}
                </span>
            </Show>
        </div>
    }
}

/// Centered message shown when a search yields no businesses
#[component]
pub fn EmptyState(
    /// Main message
    message: &'static str,
    /// Secondary hint below the message
    hint: &'static str,
) -> impl IntoView {
    view! {
        <div class="col-span-full flex flex-col items-center justify-center text-center py-16">
            <p class="text-lg font-medium text-gray-700">{message}</p>
            <p class="mt-2 text-sm text-gray-500">{hint}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_counts() {
        let test_cases: [(f64, usize, bool, usize); 7] = [
            (0.0, 0, false, 5),
            (2.4, 2, false, 3),
            (2.5, 2, true, 2),
            (3.0, 3, false, 2),
            (4.5, 4, true, 0),
            (4.9, 4, true, 0),
            (5.0, 5, false, 0),
        ];

        for (rating, full, half, empty) in test_cases {
            assert_eq!(star_counts(rating), (full, half, empty), "rating {}", rating);
        }
    }

    #[test]
    fn test_star_counts_out_of_range() {
        assert_eq!(star_counts(7.0), (5, false, 0));
        assert_eq!(star_counts(-1.0), (0, false, 5));
        assert_eq!(star_counts(f64::NAN), (0, false, 5));
    }
}
