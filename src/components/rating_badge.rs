use leptos::prelude::*;

use crate::format::format_rating;
use crate::model::RatingBucket;

/// Pill badge showing a rating out of 10, colored by its bucket.
#[component]
pub fn RatingBadge(rating: f64) -> impl IntoView {
    let bucket = RatingBucket::from_rating(rating);

    view! {
        <span class=format!("rating-badge {}", bucket.css_class())>
            {format!("{}/10", format_rating(rating))}
        </span>
    }
}
