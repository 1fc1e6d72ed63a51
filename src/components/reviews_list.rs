/// Review cards for the selected place: text, star string, and sentiment
/// label, all precomputed server-side. Also hosts the CSV download link;
/// the export endpoint answers with a warning when there is nothing to
/// download.
use crate::models::view::PlaceSnapshot;
use gloo_net::http::Request;
use leptos::*;

#[component]
pub fn ReviewsList(place: ReadSignal<String>, refresh: ReadSignal<u32>) -> impl IntoView {
    let snapshot = create_local_resource(
        move || (place.get(), refresh.get()),
        |(place, _)| async move {
            let url = format!("/api/reviews?place={}", urlencoding::encode(&place));
            Request::get(&url)
                .send()
                .await
                .ok()?
                .json::<PlaceSnapshot>()
                .await
                .ok()
        },
    );

    view! {
        <section class="reviews">
            <h2>{move || format!("📝 {}에 대한 리뷰 목록", place.get())}</h2>
            {move || match snapshot.get().flatten() {
                Some(snap) if !snap.reviews.is_empty() => {
                    view! {
                        <ul class="review-cards">
                            {snap
                                .reviews
                                .into_iter()
                                .map(|card| {
                                    view! {
                                        <li class="review-card">
                                            <p>
                                                <strong>"리뷰: "</strong>
                                                {card.text}
                                            </p>
                                            <p>
                                                <strong>"별점: "</strong>
                                                {card.stars}
                                            </p>
                                            <p>
                                                <strong>"감정 분석: "</strong>
                                                {card.sentiment.label()}
                                            </p>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_view()
                }
                Some(_) => {
                    view! {
                        <p class="placeholder">
                            {format!("아직 {}에 대한 리뷰가 없습니다.", place.get())}
                        </p>
                    }
                        .into_view()
                }
                None => view! { <p class="placeholder">"리뷰를 불러오는 중입니다."</p> }.into_view(),
            }}
            <a
                class="csv-download"
                href=move || {
                    format!("/api/reviews/export?place={}", urlencoding::encode(&place.get()))
                }
            >
                "리뷰 CSV 다운로드"
            </a>
        </section>
    }
}
