//! Mapping from classifier business categories to provider place types.
//!
//! The vision classifier emits free-text categories ("coffee shop",
//! "hardware store"). Typed search tiers need the provider's fixed type
//! vocabulary, so common phrasings are mapped explicitly and anything
//! unrecognized falls back to a snake_case slug of the raw text.

/// Maps a free-text business category to the closest provider place type.
///
/// Returns `None` for blank input so callers can degrade a typed search to
/// an untyped one instead of sending an empty `type` parameter.
#[must_use]
pub fn place_type_for_category(category: &str) -> Option<String> {
    let trimmed = category.trim().to_lowercase();
    if trimmed.is_empty() {
        return None;
    }

    let mapped = match trimmed.as_str() {
        "cafe" | "café" | "coffee shop" | "coffee house" | "coffeehouse" => "cafe",
        "restaurant" | "diner" | "eatery" | "bistro" => "restaurant",
        "bar" | "pub" | "tavern" => "bar",
        "bakery" | "patisserie" => "bakery",
        "hardware store" => "hardware_store",
        "bookstore" | "book store" | "book shop" => "book_store",
        "pharmacy" | "drugstore" | "drug store" => "pharmacy",
        "supermarket" | "grocery store" | "grocery" => "supermarket",
        "convenience store" | "corner store" => "convenience_store",
        "clothing store" | "boutique" => "clothing_store",
        "shoe store" => "shoe_store",
        "florist" | "flower shop" => "florist",
        "gym" | "fitness center" | "fitness studio" => "gym",
        "hair salon" | "barber shop" | "barbershop" => "hair_care",
        "laundromat" | "laundry" | "dry cleaner" => "laundry",
        "pet store" | "pet shop" => "pet_store",
        "liquor store" | "bottle shop" => "liquor_store",
        other => return Some(slugify(other)),
    };

    Some(mapped.to_string())
}

/// Lowercase snake_case slug of a category string, ASCII only.
fn slugify(category: &str) -> String {
    category
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c
            } else if c == ' ' || c == '_' || c == '-' {
                '_'
            } else {
                '\0'
            }
        })
        .filter(|&c| c != '\0')
        .collect::<String>()
        .split('_')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_synonyms_map_to_provider_types() {
        assert_eq!(place_type_for_category("coffee shop").as_deref(), Some("cafe"));
        assert_eq!(place_type_for_category("Coffee Shop").as_deref(), Some("cafe"));
        assert_eq!(
            place_type_for_category("hardware store").as_deref(),
            Some("hardware_store")
        );
        assert_eq!(place_type_for_category("barbershop").as_deref(), Some("hair_care"));
    }

    #[test]
    fn provider_native_types_pass_through() {
        assert_eq!(place_type_for_category("cafe").as_deref(), Some("cafe"));
        assert_eq!(place_type_for_category("bakery").as_deref(), Some("bakery"));
    }

    #[test]
    fn unknown_category_becomes_slug() {
        assert_eq!(
            place_type_for_category("Vinyl Record Shop").as_deref(),
            Some("vinyl_record_shop")
        );
        assert_eq!(
            place_type_for_category("tea  house").as_deref(),
            Some("tea_house")
        );
    }

    #[test]
    fn blank_category_yields_none() {
        assert!(place_type_for_category("").is_none());
        assert!(place_type_for_category("   ").is_none());
    }

    #[test]
    fn slugify_strips_non_ascii() {
        assert_eq!(slugify("crêperie"), "crperie");
    }
}
