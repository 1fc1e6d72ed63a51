#[cfg(feature = "ssr")]
use actix_web::{web, HttpResponse};
#[cfg(feature = "ssr")]
use crate::commands::{
    Dashboard, DashboardError, EditResult, ExportResult, RecommendResult, RemoveResult,
    SubmitResult,
};
#[cfg(feature = "ssr")]
use crate::models::view::{EditReviewRequest, SavedReview, SubmitReviewRequest, Warning};
#[cfg(feature = "ssr")]
use leptos::logging::{error, log};
#[cfg(feature = "ssr")]
use serde::Deserialize;

#[cfg(feature = "ssr")]
#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[cfg(feature = "ssr")]
#[derive(Deserialize)]
pub struct PlaceQuery {
    pub place: String,
}

#[cfg(feature = "ssr")]
#[derive(Deserialize)]
pub struct DemographicQuery {
    pub age: String,
    pub gender: String,
}

/// Registers the JSON/CSV surface under `/api`. Kept separate from the
/// server setup so the handler tests can mount the exact same routes.
#[cfg(feature = "ssr")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/places", web::get().to(get_places))
            .route("/places/search", web::get().to(search_places))
            .route("/recommendations", web::get().to(get_recommendations))
            .route("/reviews", web::get().to(get_reviews))
            .route("/reviews", web::post().to(create_review))
            .route("/reviews/counts", web::get().to(review_counts))
            .route("/reviews/export", web::get().to(export_reviews))
            .route("/reviews/{id}", web::put().to(update_review))
            .route("/reviews/{id}", web::delete().to(delete_review)),
    );
}

#[cfg(feature = "ssr")]
fn warn_422(message: &str) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(Warning {
        warning: message.to_string(),
    })
}

#[cfg(feature = "ssr")]
fn warn_404(message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(Warning {
        warning: message.to_string(),
    })
}

#[cfg(feature = "ssr")]
fn storage_failure(err: DashboardError) -> HttpResponse {
    error!("[API] Storage failure: {err}");
    HttpResponse::InternalServerError().json(Warning {
        warning: "저장소 오류가 발생했습니다.".to_string(),
    })
}

#[cfg(feature = "ssr")]
pub async fn get_places(dashboard: web::Data<Dashboard>) -> HttpResponse {
    HttpResponse::Ok().json(dashboard.directory().map_view())
}

#[cfg(feature = "ssr")]
pub async fn search_places(
    dashboard: web::Data<Dashboard>,
    query: web::Query<SearchQuery>,
) -> HttpResponse {
    HttpResponse::Ok().json(dashboard.directory().search(&query.q))
}

#[cfg(feature = "ssr")]
pub async fn get_recommendations(
    dashboard: web::Data<Dashboard>,
    query: web::Query<DemographicQuery>,
) -> HttpResponse {
    match dashboard.recommendations(&query.age, &query.gender) {
        RecommendResult::Places(places) => HttpResponse::Ok().json(places),
        RecommendResult::UnknownDemographic => warn_422("알 수 없는 나이대/성별 조합입니다."),
    }
}

#[cfg(feature = "ssr")]
pub async fn get_reviews(
    dashboard: web::Data<Dashboard>,
    query: web::Query<PlaceQuery>,
) -> HttpResponse {
    match dashboard.place_snapshot(&query.place).await {
        Ok(snapshot) => {
            log!(
                "[API] Returning {} reviews for '{}'",
                snapshot.count,
                snapshot.place
            );
            HttpResponse::Ok().json(snapshot)
        }
        Err(err) => storage_failure(err),
    }
}

#[cfg(feature = "ssr")]
pub async fn create_review(
    dashboard: web::Data<Dashboard>,
    request: web::Json<SubmitReviewRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    log!(
        "[API] Raw review request: {}",
        serde_json::to_string(&request).unwrap_or_default()
    );
    match dashboard
        .submit_review(&request.place, &request.text, request.rating)
        .await
    {
        Ok(SubmitResult::Saved { id }) => HttpResponse::Ok().json(SavedReview { id }),
        Ok(SubmitResult::EmptyText) => warn_422("리뷰 내용을 입력하세요."),
        Ok(SubmitResult::UnknownPlace) => warn_422("알 수 없는 장소입니다."),
        Ok(SubmitResult::BadRating) => warn_422("별점은 1점에서 5점 사이여야 합니다."),
        Err(err) => storage_failure(err),
    }
}

#[cfg(feature = "ssr")]
pub async fn update_review(
    dashboard: web::Data<Dashboard>,
    id: web::Path<i64>,
    request: web::Json<EditReviewRequest>,
) -> HttpResponse {
    match dashboard.edit_review(*id, &request.text).await {
        Ok(EditResult::Updated) => HttpResponse::Ok().finish(),
        Ok(EditResult::EmptyText) => warn_422("리뷰 내용을 입력하세요."),
        Ok(EditResult::Missing) => warn_404("수정할 리뷰를 찾을 수 없습니다."),
        Err(err) => storage_failure(err),
    }
}

#[cfg(feature = "ssr")]
pub async fn delete_review(dashboard: web::Data<Dashboard>, id: web::Path<i64>) -> HttpResponse {
    match dashboard.remove_review(*id).await {
        Ok(RemoveResult::Removed) => HttpResponse::Ok().finish(),
        Ok(RemoveResult::Missing) => warn_404("삭제할 리뷰를 찾을 수 없습니다."),
        Err(err) => storage_failure(err),
    }
}

#[cfg(feature = "ssr")]
pub async fn export_reviews(
    dashboard: web::Data<Dashboard>,
    query: web::Query<PlaceQuery>,
) -> HttpResponse {
    match dashboard.export_csv(&query.place).await {
        Ok(ExportResult::File(csv)) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                "attachment; filename=\"reviews.csv\"",
            ))
            .body(csv),
        Ok(ExportResult::Empty) => warn_404("다운로드할 리뷰가 없습니다."),
        Err(err) => storage_failure(err),
    }
}

#[cfg(feature = "ssr")]
pub async fn review_counts(dashboard: web::Data<Dashboard>) -> HttpResponse {
    match dashboard.chart().await {
        Ok(chart) => HttpResponse::Ok().json(chart),
        Err(err) => storage_failure(err),
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::models::view::{CountChart, MapView, PlaceSnapshot};
    use crate::sentiment::Sentiment;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    async fn dashboard() -> Dashboard {
        let db = Database::new(":memory:").unwrap();
        db.create_schema().await.unwrap();
        Dashboard::new(db)
    }

    fn submit(place: &str, text: &str, rating: u8) -> SubmitReviewRequest {
        SubmitReviewRequest {
            place: place.to_string(),
            text: text.to_string(),
            rating,
        }
    }

    #[actix_web::test]
    async fn submit_and_snapshot_roundtrip() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(dashboard().await))
                .configure(configure),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/reviews")
                .set_json(submit("성심당 본점", "빵이 정말 맛있어요!", 5))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let saved: SavedReview = test::read_body_json(resp).await;
        assert_eq!(saved.id, 1);

        let uri = format!(
            "/api/reviews?place={}",
            urlencoding::encode("성심당 본점")
        );
        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let snapshot: PlaceSnapshot = test::read_body_json(resp).await;
        assert_eq!(snapshot.count, 1);
        assert_eq!(snapshot.reviews[0].stars, "★★★★★");
        assert_eq!(snapshot.reviews[0].sentiment, Sentiment::Positive);
    }

    #[actix_web::test]
    async fn empty_text_is_unprocessable() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(dashboard().await))
                .configure(configure),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/reviews")
                .set_json(submit("성심당 본점", "   ", 5))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let warning: Warning = test::read_body_json(resp).await;
        assert_eq!(warning.warning, "리뷰 내용을 입력하세요.");
    }

    #[actix_web::test]
    async fn missing_edit_and_delete_targets_are_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(dashboard().await))
                .configure(configure),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/reviews/999")
                .set_json(EditReviewRequest {
                    text: "새 내용".to_string(),
                })
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri("/api/reviews/999")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn export_refuses_empty_then_serves_csv() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(dashboard().await))
                .configure(configure),
        )
        .await;

        let uri = format!(
            "/api/reviews/export?place={}",
            urlencoding::encode("대전시청")
        );
        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/reviews")
                .set_json(submit("대전시청", "깨끗하고 좋아요", 4))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/csv"));
        let body = test::read_body(resp).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.starts_with('\u{feff}'));
        assert_eq!(text.lines().count(), 2);
    }

    #[actix_web::test]
    async fn search_and_recommendations_endpoints() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(dashboard().await))
                .configure(configure),
        )
        .await;

        let uri = format!("/api/places/search?q={}", urlencoding::encode("성심당"));
        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        let names: Vec<String> = test::read_body_json(resp).await;
        assert_eq!(names, ["성심당 본점"]);

        let uri = format!(
            "/api/places/search?q={}",
            urlencoding::encode("존재하지않음")
        );
        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        let names: Vec<String> = test::read_body_json(resp).await;
        assert_eq!(names.len(), 6);

        let uri = format!(
            "/api/recommendations?age={}&gender={}",
            urlencoding::encode("20대"),
            urlencoding::encode("남자")
        );
        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        let places: Vec<String> = test::read_body_json(resp).await;
        assert_eq!(places, ["대전 스카이로드", "대전아트센터"]);
    }

    #[actix_web::test]
    async fn places_and_counts_endpoints() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(dashboard().await))
                .configure(configure),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/places").to_request(),
        )
        .await;
        let map: MapView = test::read_body_json(resp).await;
        assert_eq!(map.markers.len(), 6);
        assert_eq!(map.zoom, 13);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/reviews/counts")
                .to_request(),
        )
        .await;
        let chart: CountChart = test::read_body_json(resp).await;
        assert_eq!(chart.bars.len(), 6);
        assert_eq!(chart.ticks, vec![0]);
    }
}
