//! Command layer: every user action maps to one command that validates,
//! mutates the store at most once, and returns a typed result. The
//! rendering side re-reads a snapshot afterwards instead of rerunning
//! the world.
#[cfg(feature = "ssr")]
mod commands_impl {
    use crate::db::Database;
    use crate::directory::PlaceDirectory;
    use crate::export;
    use crate::models::view::{CountBar, CountChart, PlaceSnapshot, ReviewCard};
    use crate::recommend::{self, AgeBracket, Gender};
    use crate::sentiment::{SentimentModel, WordListModel};
    use leptos::logging::log;
    use std::sync::Arc;
    use thiserror::Error;

    /// Storage failures bubble up unchanged; there is no retry policy.
    #[derive(Error, Debug)]
    pub enum DashboardError {
        #[error("storage error: {0}")]
        Store(#[from] rusqlite::Error),
    }

    /// What an out-of-table (age, gender) input means.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum UnknownDemographic {
        EmptyList,
        Reject,
    }

    /// What an out-of-range rating means.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum BadRating {
        Reject,
        Clamp,
    }

    /// How out-of-range inputs are resolved, chosen at construction
    /// instead of hard-coded.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Policy {
        pub unknown_demographic: UnknownDemographic,
        pub bad_rating: BadRating,
    }

    impl Default for Policy {
        fn default() -> Self {
            Policy {
                unknown_demographic: UnknownDemographic::EmptyList,
                bad_rating: BadRating::Reject,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SubmitResult {
        Saved { id: i64 },
        EmptyText,
        UnknownPlace,
        BadRating,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum EditResult {
        Updated,
        EmptyText,
        Missing,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum RemoveResult {
        Removed,
        Missing,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ExportResult {
        File(String),
        Empty,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RecommendResult {
        Places(Vec<String>),
        UnknownDemographic,
    }

    /// The one object handlers talk to: owns the store, the place
    /// directory, the sentiment model, and the input policy.
    #[derive(Clone)]
    pub struct Dashboard {
        db: Database,
        directory: Arc<PlaceDirectory>,
        model: Arc<dyn SentimentModel>,
        policy: Policy,
    }

    impl Dashboard {
        pub fn new(db: Database) -> Self {
            Self::with_parts(
                db,
                PlaceDirectory::new(),
                Arc::new(WordListModel::default()),
                Policy::default(),
            )
        }

        pub fn with_parts(
            db: Database,
            directory: PlaceDirectory,
            model: Arc<dyn SentimentModel>,
            policy: Policy,
        ) -> Self {
            Dashboard {
                db,
                directory: Arc::new(directory),
                model,
                policy,
            }
        }

        pub fn directory(&self) -> &PlaceDirectory {
            &self.directory
        }

        /// Validates and persists a new review. Rejections happen before
        /// any store access, so a rejected submit changes nothing.
        pub async fn submit_review(
            &self,
            place: &str,
            text: &str,
            rating: u8,
        ) -> Result<SubmitResult, DashboardError> {
            let text = text.trim();
            if text.is_empty() {
                return Ok(SubmitResult::EmptyText);
            }
            if !self.directory.contains(place) {
                return Ok(SubmitResult::UnknownPlace);
            }
            let rating = if (1..=5).contains(&rating) {
                rating
            } else {
                match self.policy.bad_rating {
                    BadRating::Reject => return Ok(SubmitResult::BadRating),
                    BadRating::Clamp => rating.clamp(1, 5),
                }
            };

            let id = self.db.insert_review(place, text, rating).await?;
            log!("[COMMAND] Review {} submitted for '{}'", id, place);
            Ok(SubmitResult::Saved { id })
        }

        /// Rewrites the text of an existing review; a missing id is a
        /// no-op reported as `Missing`.
        pub async fn edit_review(
            &self,
            id: i64,
            new_text: &str,
        ) -> Result<EditResult, DashboardError> {
            let new_text = new_text.trim();
            if new_text.is_empty() {
                return Ok(EditResult::EmptyText);
            }
            if self.db.update_review(id, new_text).await? {
                Ok(EditResult::Updated)
            } else {
                log!("[COMMAND] Edit target {} not found", id);
                Ok(EditResult::Missing)
            }
        }

        pub async fn remove_review(&self, id: i64) -> Result<RemoveResult, DashboardError> {
            if self.db.delete_review(id).await? {
                Ok(RemoveResult::Removed)
            } else {
                log!("[COMMAND] Delete target {} not found", id);
                Ok(RemoveResult::Missing)
            }
        }

        /// The review panel view-model: cards in insertion order with the
        /// star string and sentiment label already rendered.
        pub async fn place_snapshot(&self, place: &str) -> Result<PlaceSnapshot, DashboardError> {
            let reviews = self.db.fetch_reviews(place).await?;
            let cards: Vec<ReviewCard> = reviews
                .into_iter()
                .map(|review| ReviewCard {
                    id: review.id,
                    stars: review.stars(),
                    rating: review.rating,
                    sentiment: self.model.classify(&review.text),
                    text: review.text,
                })
                .collect();
            Ok(PlaceSnapshot {
                place: place.to_string(),
                count: cards.len() as i64,
                reviews: cards,
            })
        }

        /// CSV for one place; a place with zero reviews yields `Empty`
        /// (surfaced as a warning, no file).
        pub async fn export_csv(&self, place: &str) -> Result<ExportResult, DashboardError> {
            let reviews = self.db.fetch_reviews(place).await?;
            if reviews.is_empty() {
                return Ok(ExportResult::Empty);
            }
            Ok(ExportResult::File(export::reviews_to_csv(&reviews)))
        }

        /// Recommendation lookup from the raw selector labels; unknown
        /// labels resolve per policy.
        pub fn recommendations(&self, age_label: &str, gender_label: &str) -> RecommendResult {
            match (
                AgeBracket::from_label(age_label),
                Gender::from_label(gender_label),
            ) {
                (Some(age), Some(gender)) => RecommendResult::Places(
                    recommend::recommend(age, gender)
                        .iter()
                        .map(|name| name.to_string())
                        .collect(),
                ),
                _ => match self.policy.unknown_demographic {
                    UnknownDemographic::EmptyList => RecommendResult::Places(Vec::new()),
                    UnknownDemographic::Reject => RecommendResult::UnknownDemographic,
                },
            }
        }

        /// Per-place review counts in directory order, zero bars included,
        /// with integer-only axis ticks.
        pub async fn chart(&self) -> Result<CountChart, DashboardError> {
            let mut bars = Vec::new();
            for place in self.directory.places() {
                let count = self.db.count_for_place(&place.name).await?;
                bars.push(CountBar {
                    place: place.name.clone(),
                    count,
                });
            }
            let max = bars.iter().map(|bar| bar.count).max().unwrap_or(0);
            Ok(CountChart {
                ticks: (0..=max).collect(),
                bars,
            })
        }
    }

}

#[cfg(feature = "ssr")]
pub use commands_impl::{
    BadRating, Dashboard, DashboardError, EditResult, ExportResult, Policy, RecommendResult,
    RemoveResult, SubmitResult, UnknownDemographic,
};
