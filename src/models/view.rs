//! View-models and wire types shared between the Actix handlers and the
//! Leptos components. Everything here is a plain serde value: commands
//! produce them on the server, the client only deserializes and renders.
use serde::{Deserialize, Serialize};

use crate::models::place::{Coordinates, Place};
use crate::sentiment::Sentiment;

/// One review as displayed in the list: star string and sentiment label
/// are computed server-side so the client stays a dumb renderer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewCard {
    pub id: i64,
    pub text: String,
    pub rating: u8,
    pub stars: String,
    pub sentiment: Sentiment,
}

/// Everything the review panel needs for one place, in insertion order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlaceSnapshot {
    pub place: String,
    pub count: i64,
    pub reviews: Vec<ReviewCard>,
}

/// Input for the external map renderer: fixed center and zoom plus one
/// marker per known place.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    pub markers: Vec<Place>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CountBar {
    pub place: String,
    pub count: i64,
}

/// Per-place review counts plus the integer-only axis ticks `0..=max`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CountChart {
    pub bars: Vec<CountBar>,
    pub ticks: Vec<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubmitReviewRequest {
    pub place: String,
    pub text: String,
    pub rating: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EditReviewRequest {
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedReview {
    pub id: i64,
}

/// Non-fatal outcome surfaced to the user as an inline banner.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Warning {
    pub warning: String,
}
