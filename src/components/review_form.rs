/// Review submission form: free text plus a five-step star slider.
/// Empty text (after trimming) never leaves the client; everything else
/// is validated again by the command layer.
use crate::models::view::{SubmitReviewRequest, Warning};
use gloo_net::http::Request;
use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::*;
use std::time::Duration;

const STAR_STEPS: [&str; 5] = ["★☆☆☆☆", "★★☆☆☆", "★★★☆☆", "★★★★☆", "★★★★★"];

#[component]
pub fn ReviewForm(
    place: ReadSignal<String>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let (text, set_text) = create_signal(String::new());
    let (rating, set_rating) = create_signal(5u8); // Default rating to 5
    let (status, set_status) = create_signal(None::<(bool, String)>);

    let clear_later = move || {
        spawn_local(async move {
            gloo_timers::future::sleep(Duration::from_secs(4)).await;
            set_status.set(None);
        });
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if text.get().trim().is_empty() {
            set_status.set(Some((true, "리뷰 내용을 입력하세요.".to_string())));
            return;
        }
        let request = SubmitReviewRequest {
            place: place.get(),
            text: text.get(),
            rating: rating.get(),
        };
        spawn_local(async move {
            let response = match Request::post("/api/reviews").json(&request) {
                Ok(req) => req.send().await,
                Err(err) => {
                    log!("[FORM] Failed to encode review request: {:?}", err);
                    return;
                }
            };
            match response {
                Ok(resp) if resp.ok() => {
                    set_status.set(Some((
                        false,
                        format!("리뷰가 제출되었습니다! (별점: {}점)", request.rating),
                    )));
                    set_text.set(String::new());
                    on_saved.call(());
                }
                Ok(resp) => {
                    let warning = resp
                        .json::<Warning>()
                        .await
                        .map(|w| w.warning)
                        .unwrap_or_else(|_| "리뷰를 저장하지 못했습니다.".to_string());
                    set_status.set(Some((true, warning)));
                }
                Err(err) => {
                    log!("[FORM] Review submission failed: {:?}", err);
                    set_status.set(Some((true, "리뷰를 저장하지 못했습니다.".to_string())));
                }
            }
            clear_later();
        });
    };

    view! {
        <section class="composer">
            <h2>"리뷰 작성 및 제출"</h2>
            <form on:submit=handle_submit>
                <textarea
                    placeholder="리뷰 작성"
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                ></textarea>
                <label>
                    "별점 선택"
                    <select on:change=move |ev| {
                        set_rating.set(event_target_value(&ev).parse::<u8>().unwrap_or(5))
                    }>
                        {STAR_STEPS
                            .iter()
                            .enumerate()
                            .map(|(index, stars)| {
                                let value = (index + 1).to_string();
                                let chosen = index + 1 == 5;
                                view! {
                                    <option value=value selected=chosen>
                                        {*stars}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <button type="submit">"리뷰 제출"</button>
            </form>
            {move || {
                status
                    .get()
                    .map(|(warning, message)| {
                        let class = if warning { "banner warning" } else { "banner success" };
                        view! { <p class=class>{message}</p> }
                    })
            }}
        </section>
    }
}
