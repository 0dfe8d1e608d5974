// web_app/query/terms.rs - Search-term expansion and category normalization
//
// Both helpers are pure and deterministic so the same query is produced
// in the browser and on the server.

/// Groups of interchangeable search words. Matching any member of a group
/// pulls the rest of the group into the expansion.
const SYNONYM_GROUPS: &[&[&str]] = &[
    &["coffee", "cafe", "espresso", "latte", "roastery"],
    &["restaurant", "food", "dining", "eatery", "bistro"],
    &["bakery", "bread", "pastry", "cakes"],
    &["bar", "pub", "brewery", "taproom"],
    &["mechanic", "auto repair", "garage", "car service"],
    &["plumber", "plumbing", "pipes"],
    &["electrician", "electrical", "wiring"],
    &["salon", "hair", "barber", "stylist"],
    &["gym", "fitness", "workout", "training"],
    &["doctor", "clinic", "medical", "physician"],
    &["dentist", "dental", "orthodontist"],
    &["vet", "veterinarian", "animal hospital", "pet care"],
    &["grocery", "market", "supermarket", "produce"],
    &["florist", "flowers", "bouquet"],
    &["lawyer", "attorney", "legal"],
];

/// Expand raw search text into an ordered, deduplicated list of terms.
///
/// The trimmed input always comes first (case preserved). Synonyms are
/// appended in group order when the whole input, or any single word of it,
/// belongs to a group. Blank input expands to nothing.
pub fn expand_search_terms(text: &str) -> Vec<String> {
    let original = text.trim();
    if original.is_empty() {
        return Vec::new();
    }

    let lowered = original.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    let mut terms = vec![original.to_string()];
    let mut seen = vec![lowered.clone()];

    for group in SYNONYM_GROUPS {
        let hit = group
            .iter()
            .any(|member| *member == lowered || words.contains(member));
        if !hit {
            continue;
        }
        for member in group.iter() {
            if !seen.iter().any(|s| s == member) {
                seen.push(member.to_string());
                terms.push(member.to_string());
            }
        }
    }

    terms
}

/// Convert a category display label into its canonical stored value.
///
/// `"Food & Drink"` becomes `"food_and_drink"`, `"Health-Care "` becomes
/// `"health_care"`. Already-canonical values pass through unchanged.
pub fn normalize_category(label: &str) -> String {
    let lowered = label.trim().to_lowercase().replace('&', " and ");

    let mut canonical = String::with_capacity(lowered.len());
    let mut pending_separator = false;
    for ch in lowered.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !canonical.is_empty() {
                canonical.push('_');
            }
            pending_separator = false;
            canonical.push(ch);
        } else {
            pending_separator = true;
        }
    }
    canonical
}

/// Inverse of [`normalize_category`] for display purposes
pub fn display_category(value: &str) -> String {
    value
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            if word.eq_ignore_ascii_case("and") {
                return "&".to_string();
            }
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
