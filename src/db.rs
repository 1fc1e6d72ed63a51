#[cfg(feature = "ssr")]
mod db_impl {
    use crate::models::review::Review;
    use leptos::logging;
    use leptos::logging::log;
    use rusqlite::{params, Connection, Error};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[cfg(test)]
    mod tests {
        use super::*;

        // Helper function to create an in-memory test store
        async fn create_test_db() -> Database {
            let db = Database::new(":memory:").unwrap();
            db.create_schema().await.unwrap();
            db
        }

        #[tokio::test]
        async fn test_schema_creation() {
            let db = create_test_db().await;

            let conn = db.conn.lock().await;
            let mut stmt = conn
                .prepare("SELECT name FROM sqlite_master WHERE type='table'")
                .unwrap();
            let tables: Vec<String> = stmt
                .query_map([], |row| row.get(0))
                .unwrap()
                .collect::<Result<_, _>>()
                .unwrap();

            assert!(tables.contains(&"reviews".to_string()));
        }

        #[tokio::test]
        async fn test_review_lifecycle() {
            let db = create_test_db().await;

            // Insert
            let id = db
                .insert_review("성심당 본점", "빵이 정말 맛있어요!", 5)
                .await
                .unwrap();
            assert!(id > 0);

            // Fetch
            let reviews = db.fetch_reviews("성심당 본점").await.unwrap();
            assert_eq!(reviews.len(), 1);
            assert_eq!(reviews[0].id, id);
            assert_eq!(reviews[0].text, "빵이 정말 맛있어요!");
            assert_eq!(reviews[0].rating, 5);

            // Update mutates the text only
            assert!(db.update_review(id, "크로와상도 최고!").await.unwrap());
            let reviews = db.fetch_reviews("성심당 본점").await.unwrap();
            assert_eq!(reviews[0].text, "크로와상도 최고!");
            assert_eq!(reviews[0].rating, 5);
            assert_eq!(reviews[0].place, "성심당 본점");

            // Delete removes exactly that row
            assert!(db.delete_review(id).await.unwrap());
            assert!(db.fetch_reviews("성심당 본점").await.unwrap().is_empty());
        }

        #[tokio::test]
        async fn test_fetch_unknown_place_is_empty_not_error() {
            let db = create_test_db().await;
            assert!(db.fetch_reviews("없는 장소").await.unwrap().is_empty());
            assert_eq!(db.count_for_place("없는 장소").await.unwrap(), 0);
        }

        #[tokio::test]
        async fn test_fetch_preserves_insertion_order() {
            let db = create_test_db().await;
            db.insert_review("대전시청", "첫번째", 3).await.unwrap();
            db.insert_review("대전아트센터", "다른 장소", 4).await.unwrap();
            db.insert_review("대전시청", "두번째", 5).await.unwrap();

            let reviews = db.fetch_reviews("대전시청").await.unwrap();
            let texts: Vec<&str> = reviews.iter().map(|r| r.text.as_str()).collect();
            assert_eq!(texts, ["첫번째", "두번째"]);
            assert!(reviews[0].id < reviews[1].id);
        }

        #[tokio::test]
        async fn test_missing_id_is_noop() {
            let db = create_test_db().await;
            let id = db.insert_review("대전시청", "한 건", 2).await.unwrap();

            assert!(!db.update_review(id + 99, "다른 내용").await.unwrap());
            assert!(!db.delete_review(id + 99).await.unwrap());

            // The existing row is untouched
            let reviews = db.fetch_reviews("대전시청").await.unwrap();
            assert_eq!(reviews.len(), 1);
            assert_eq!(reviews[0].text, "한 건");
        }

        #[tokio::test]
        async fn test_ids_are_not_reused_after_delete() {
            let db = create_test_db().await;
            let first = db.insert_review("대전시청", "지웠다 씀", 3).await.unwrap();
            assert!(db.delete_review(first).await.unwrap());
            let second = db.insert_review("대전시청", "새 리뷰", 3).await.unwrap();
            assert!(second > first);
        }

        #[tokio::test]
        async fn test_count_tracks_inserts() {
            let db = create_test_db().await;
            assert_eq!(db.count_for_place("성심당 본점").await.unwrap(), 0);
            db.insert_review("성심당 본점", "맛있어요", 5).await.unwrap();
            db.insert_review("성심당 본점", "또 맛있어요", 4).await.unwrap();
            assert_eq!(db.count_for_place("성심당 본점").await.unwrap(), 2);
        }

        #[tokio::test]
        async fn test_seeding_is_idempotent() {
            let db = create_test_db().await;
            db.seed_examples().await.unwrap();
            db.seed_examples().await.unwrap();

            let conn = db.conn.lock().await;
            let total: i64 = conn
                .query_row("SELECT COUNT(*) FROM reviews", [], |row| row.get(0))
                .unwrap();
            assert_eq!(total, 5);
        }

        #[tokio::test]
        async fn test_seeding_skips_non_empty_table() {
            let db = create_test_db().await;
            db.insert_review("대전시청", "기존 리뷰", 3).await.unwrap();
            db.seed_examples().await.unwrap();

            let conn = db.conn.lock().await;
            let total: i64 = conn
                .query_row("SELECT COUNT(*) FROM reviews", [], |row| row.get(0))
                .unwrap();
            assert_eq!(total, 1);
        }
    }

    // Fixed starter rows for a fresh database.
    const EXAMPLE_REVIEWS: &[(&str, &str, u8)] = &[
        ("성심당 본점", "빵이 정말 맛있어요!", 5),
        ("대전 스카이로드", "야경이 정말 아름다워요.", 4),
        ("으능정이 문화의 거리", "문화와 예술이 가득한 곳입니다.", 4),
        ("성심당 본점", "크로와상이 아주 훌륭합니다!", 5),
        ("대전아트센터", "아름다운 공연을 즐겼습니다.", 5),
    ];

    /// Review store over a single SQLite connection. Cloning shares the
    /// connection; one instance is opened at startup and injected into
    /// the Actix workers.
    #[derive(Debug, Clone)]
    pub struct Database {
        conn: Arc<Mutex<Connection>>,
    }

    impl Database {
        // Open (or create) the database file
        pub fn new(db_path: &str) -> Result<Self, Error> {
            let conn = Connection::open(db_path)?;
            logging::log!("Review store opened at: {}", db_path);
            Ok(Database {
                conn: Arc::new(Mutex::new(conn)),
            })
        }

        // Create the reviews table
        pub async fn create_schema(&self) -> Result<(), Error> {
            let conn = self.conn.lock().await;
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS reviews (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    place TEXT NOT NULL,
                    review TEXT NOT NULL,
                    rating INTEGER NOT NULL
                );",
            )?;
            Ok(())
        }

        /// Inserts the fixed example rows, but only into an empty table.
        /// Safe to call on every startup.
        pub async fn seed_examples(&self) -> Result<(), Error> {
            let mut conn = self.conn.lock().await;
            let existing: i64 =
                conn.query_row("SELECT COUNT(*) FROM reviews", [], |row| row.get(0))?;
            if existing > 0 {
                return Ok(());
            }

            let tx = conn.transaction()?;
            for &(place, text, rating) in EXAMPLE_REVIEWS {
                tx.execute(
                    "INSERT INTO reviews (place, review, rating) VALUES (?1, ?2, ?3)",
                    params![place, text, rating],
                )?;
            }
            tx.commit()?;
            log!("[DB] Seeded {} example reviews", EXAMPLE_REVIEWS.len());
            Ok(())
        }

        /// All reviews for one place, oldest first. An unknown place is
        /// an empty list, never an error.
        pub async fn fetch_reviews(&self, place: &str) -> Result<Vec<Review>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(
                "SELECT id, place, review, rating FROM reviews
                 WHERE place = ?1
                 ORDER BY id ASC",
            )?;
            let rows = stmt.query_map([place], |row| {
                Ok(Review {
                    id: row.get(0)?,
                    place: row.get(1)?,
                    text: row.get(2)?,
                    rating: row.get(3)?,
                })
            })?;

            let mut reviews = Vec::new();
            for row in rows {
                reviews.push(row?);
            }
            Ok(reviews)
        }

        /// Persists a review and returns its generated id. Validation
        /// (non-empty text, rating range, known place) happens in the
        /// command layer before this call.
        pub async fn insert_review(
            &self,
            place: &str,
            text: &str,
            rating: u8,
        ) -> Result<i64, Error> {
            let conn = self.conn.lock().await;
            conn.execute(
                "INSERT INTO reviews (place, review, rating) VALUES (?1, ?2, ?3)",
                params![place, text, rating],
            )?;
            let id = conn.last_insert_rowid();
            log!("[DB] Review {} saved for place '{}'", id, place);
            Ok(id)
        }

        /// Rewrites the text of one review. Returns false when the id
        /// does not exist; place and rating are immutable.
        pub async fn update_review(&self, id: i64, new_text: &str) -> Result<bool, Error> {
            let conn = self.conn.lock().await;
            let changed = conn.execute(
                "UPDATE reviews SET review = ?1 WHERE id = ?2",
                params![new_text, id],
            )?;
            Ok(changed > 0)
        }

        /// Hard-deletes one review. Returns false when the id does not exist.
        pub async fn delete_review(&self, id: i64) -> Result<bool, Error> {
            let conn = self.conn.lock().await;
            let changed = conn.execute("DELETE FROM reviews WHERE id = ?1", params![id])?;
            if changed > 0 {
                log!("[DB] Review {} deleted", id);
            }
            Ok(changed > 0)
        }

        pub async fn count_for_place(&self, place: &str) -> Result<i64, Error> {
            let conn = self.conn.lock().await;
            conn.query_row(
                "SELECT COUNT(*) FROM reviews WHERE place = ?1",
                [place],
                |row| row.get(0),
            )
        }
    }
}

#[cfg(feature = "ssr")]
pub use db_impl::Database;
