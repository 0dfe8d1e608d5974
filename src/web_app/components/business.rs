// web_app/components/business.rs - Business display components
//
// - BusinessCard: one search result
// - BusinessCardSkeleton: placeholder with the same silhouette, shown while loading

use leptos::prelude::*;

use super::common::StarRating;
use crate::web_app::model::Business;
use crate::web_app::query::display_category;

const DESCRIPTION_PREVIEW_CHARS: usize = 140;

/// "City, ST 12345" from whichever address parts are present
pub fn location_line(business: &Business) -> Option<String> {
    let city_state = [business.city.as_deref(), business.state.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    let line = match business.zip_code.as_deref().filter(|z| !z.trim().is_empty()) {
        Some(zip) if !city_state.is_empty() => format!("{} {}", city_state, zip),
        Some(zip) => zip.to_string(),
        None => city_state,
    };

    (!line.is_empty()).then_some(line)
}

/// Cut text to `max_chars` characters, appending an ellipsis when cut
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

/// Website links are shown without scheme and trailing slash
pub fn website_label(url: &str) -> &str {
    url.trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
}

/// Result card for one business
#[component]
pub fn BusinessCard(
    /// The business to display
    business: Business,
) -> impl IntoView {
    let rating: f64 = business.rating.try_into().unwrap_or(0.0);
    let category = display_category(&business.category);
    let location = location_line(&business);
    let description = business
        .description
        .as_deref()
        .map(|d| truncate_description(d, DESCRIPTION_PREVIEW_CHARS));

    view! {
        <article class="group bg-white rounded-xl shadow-sm hover:shadow-xl transition-all duration-300 \
                        border border-gray-100 flex flex-col h-full overflow-hidden">
            {match business.image_url.clone() {
                Some(src) => view! {
                    <img src=src alt=business.name.clone() class="h-48 w-full object-cover" />
                }.into_any(),
                None => view! {
                    <div class="h-48 bg-gray-100 flex items-center justify-center text-gray-300">
                        <span class="text-4xl">"🏪"</span>
                    </div>
                }.into_any(),
            }}

            <div class="p-5 flex flex-col flex-1">
                <div class="flex justify-between items-start mb-2 gap-2">
                    <h3 class="font-bold text-gray-900 text-lg line-clamp-2">{business.name.clone()}</h3>
                    <span class="text-xs font-medium bg-emerald-50 text-emerald-700 px-2 py-1 rounded-full whitespace-nowrap">
                        {category}
                    </span>
                </div>

                <StarRating rating=rating />

                {description.map(|d| view! {
                    <p class="text-gray-600 text-sm mt-3 line-clamp-3 flex-1">{d}</p>
                })}

                {location.map(|loc| view! {
                    <p class="text-sm text-gray-500 mt-3">"📍 " {loc}</p>
                })}

                <div class="flex items-center gap-2 flex-wrap mt-4 pt-3 border-t border-gray-100">
                    {business.phone.clone().map(|phone| view! {
                        <a href=format!("tel:{}", phone) class="text-xs px-3 py-1.5 bg-gray-100 rounded-lg hover:bg-gray-200">
                            "📞 " {phone.clone()}
                        </a>
                    })}
                    {business.email.clone().map(|email| view! {
                        <a href=format!("mailto:{}", email) class="text-xs px-3 py-1.5 bg-gray-100 rounded-lg hover:bg-gray-200">
                            "✉ Email"
                        </a>
                    })}
                    {business.website.clone().map(|url| {
                        let label = website_label(&url).to_string();
                        view! {
                            <a href=url target="_blank" rel="noopener noreferrer"
                               class="text-xs px-3 py-1.5 bg-gray-100 rounded-lg hover:bg-gray-200">
                                "🌐 " {label}
                            </a>
                        }
                    })}
                </div>
            </div>
        </article>
    }
}

/// Placeholder card: image block, text lines, action-row blocks
#[component]
pub fn BusinessCardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-100 overflow-hidden animate-pulse" aria-hidden="true">
            <div class="h-48 bg-gray-200"></div>
            <div class="p-5 space-y-3">
                <div class="h-5 bg-gray-200 rounded w-3/4"></div>
                <div class="h-4 bg-gray-200 rounded w-1/3"></div>
                <div class="h-3 bg-gray-200 rounded w-full"></div>
                <div class="h-3 bg-gray-200 rounded w-5/6"></div>
                <div class="flex gap-2 pt-3">
                    <div class="h-7 bg-gray-200 rounded-lg w-24"></div>
                    <div class="h-7 bg-gray-200 rounded-lg w-20"></div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn create_test_business() -> Business {
        let epoch = chrono::DateTime::from_timestamp(0, 0).unwrap();
        Business {
            id: Uuid::nil(),
            name: "Bean There Coffee".to_string(),
            description: Some("Roastery".to_string()),
            category: "food_and_drink".to_string(),
            address: None,
            city: Some("Austin".to_string()),
            state: Some("TX".to_string()),
            zip_code: Some("78701".to_string()),
            phone: None,
            email: None,
            website: None,
            image_url: None,
            products: None,
            rating: Decimal::new(48, 1),
            owner_id: Uuid::nil(),
            created_at: epoch,
            updated_at: epoch,
        }
    }

    #[test]
    fn test_location_line_full() {
        assert_eq!(location_line(&create_test_business()).as_deref(), Some("Austin, TX 78701"));
    }

    #[test]
    fn test_location_line_partial() {
        let mut business = create_test_business();
        business.state = None;
        business.zip_code = None;
        assert_eq!(location_line(&business).as_deref(), Some("Austin"));

        business.city = None;
        assert_eq!(location_line(&business), None);

        business.zip_code = Some("78701".to_string());
        assert_eq!(location_line(&business).as_deref(), Some("78701"));
    }

    #[test]
    fn test_truncate_description_is_char_safe() {
        assert_eq!(truncate_description("short", 10), "short");
        assert_eq!(truncate_description("café au lait", 4), "café...");
    }

    #[test]
    fn test_website_label() {
        assert_eq!(website_label("https://beanthere.example/"), "beanthere.example");
        assert_eq!(website_label("http://x.example"), "x.example");
    }
}
