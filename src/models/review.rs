// src/models/review.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i64,       // Generated by the store, strictly increasing, never reused
    pub place: String, // Name of the reviewed place
    pub text: String,  // Free-form review body, the only mutable field
    pub rating: u8,    // Stars, 1..=5
}

impl Review {
    pub fn stars(&self) -> String {
        star_string(self.rating)
    }
}

/// Renders a rating as `rating` filled stars followed by `5 - rating` empty ones.
pub fn star_string(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    let mut out = "★".repeat(filled);
    out.push_str(&"☆".repeat(5 - filled));
    out
}
