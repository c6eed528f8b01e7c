//! Prompt builders for storefront classification and review summarization.
//!
//! Both prompts demand a bare JSON object so the answers deserialize
//! straight into domain types. The models still fence their output in
//! markdown now and then; the client strips that before parsing.

use placelens_core::{Coordinate, Review};

pub(crate) fn classify_prompt(hint: Coordinate) -> String {
    format!(
        "You are identifying the business storefront in a photo taken near {hint}. \
         Read signage, window lettering, and awnings. Respond with a single JSON \
         object with these keys: \"name\" (the business name as written on its \
         signage), \"category\" (a short business category such as \"cafe\" or \
         \"hardware store\"), \"description\" (one sentence describing the \
         storefront, or null), \"location_text\" (any street number, street name, \
         or address text readable in the photo, or null). Respond with JSON only, \
         no prose."
    )
}

pub(crate) fn summarize_prompt(place_name: &str, category: &str, reviews: &[Review]) -> String {
    let mut prompt = format!(
        "Summarize the visitor reviews below for {place_name}, a {category}. \
         Respond with a single JSON object with these keys: \"summary\" (two or \
         three sentences), \"pros\" (short strings), \"cons\" (short strings), \
         \"recommendations\" (short strings a first-time visitor can act on), \
         \"sentiment\" (exactly one of \"positive\", \"neutral\", \"negative\"). \
         Respond with JSON only, no prose.\n\nReviews:\n"
    );

    for (index, review) in reviews.iter().enumerate() {
        let number = index + 1;
        match review.rating {
            Some(rating) => {
                prompt.push_str(&format!("{number}. ({rating} stars) {}\n", review.text));
            }
            None => {
                prompt.push_str(&format!("{number}. {}\n", review.text));
            }
        }
    }

    prompt
}
