/// Edit/delete controls driven by review id. The target is picked from a
/// selector over the current snapshot; missing targets come back from the
/// server as warnings, not errors.
use crate::models::view::{EditReviewRequest, PlaceSnapshot, ReviewCard, Warning};
use gloo_net::http::Request;
use leptos::logging::log;
use leptos::*;
use std::time::Duration;

async fn warning_from(response: gloo_net::http::Response, fallback: &str) -> String {
    response
        .json::<Warning>()
        .await
        .map(|w| w.warning)
        .unwrap_or_else(|_| fallback.to_string())
}

#[component]
pub fn ReviewManager(
    place: ReadSignal<String>,
    refresh: ReadSignal<u32>,
    #[prop(into)] on_changed: Callback<()>,
) -> impl IntoView {
    let (target, set_target) = create_signal(None::<i64>);
    let (draft, set_draft) = create_signal(String::new());
    let (status, set_status) = create_signal(None::<(bool, String)>);

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
    let cards = move || -> Vec<ReviewCard> {
        snapshot
            .get()
            .flatten()
            .map(|snap| snap.reviews)
            .unwrap_or_default()
    };

    let clear_later = move || {
        spawn_local(async move {
            gloo_timers::future::sleep(Duration::from_secs(4)).await;
            set_status.set(None);
        });
    };

    let select_target = move |ev: web_sys::Event| {
        let id = event_target_value(&ev).parse::<i64>().ok();
        set_target.set(id);
        if let Some(id) = id {
            // Prefill the draft with the current text of the chosen review
            if let Some(card) = cards().into_iter().find(|card| card.id == id) {
                set_draft.set(card.text);
            }
        }
    };

    let submit_edit = move |_| {
        let id = match target.get() {
            Some(id) => id,
            None => {
                set_status.set(Some((true, "수정할 리뷰를 선택하세요.".to_string())));
                return;
            }
        };
        if draft.get().trim().is_empty() {
            set_status.set(Some((true, "리뷰 내용을 입력하세요.".to_string())));
            return;
        }
        let request = EditReviewRequest { text: draft.get() };
        spawn_local(async move {
            let response = match Request::put(&format!("/api/reviews/{id}")).json(&request) {
                Ok(req) => req.send().await,
                Err(err) => {
                    log!("[MANAGER] Failed to encode edit request: {:?}", err);
                    return;
                }
            };
            match response {
                Ok(resp) if resp.ok() => {
                    set_status.set(Some((false, "리뷰가 수정되었습니다!".to_string())));
                    on_changed.call(());
                }
                Ok(resp) => {
                    let warning = warning_from(resp, "리뷰를 수정하지 못했습니다.").await;
                    set_status.set(Some((true, warning)));
                }
                Err(err) => {
                    log!("[MANAGER] Edit request failed: {:?}", err);
                    set_status.set(Some((true, "리뷰를 수정하지 못했습니다.".to_string())));
                }
            }
            clear_later();
        });
    };

    let submit_delete = move |_| {
        let id = match target.get() {
            Some(id) => id,
            None => {
                set_status.set(Some((true, "삭제할 리뷰를 선택하세요.".to_string())));
                return;
            }
        };
        spawn_local(async move {
            match Request::delete(&format!("/api/reviews/{id}")).send().await {
                Ok(resp) if resp.ok() => {
                    set_status.set(Some((false, "리뷰가 삭제되었습니다!".to_string())));
                    set_target.set(None);
                    set_draft.set(String::new());
                    on_changed.call(());
                }
                Ok(resp) => {
                    let warning = warning_from(resp, "리뷰를 삭제하지 못했습니다.").await;
                    set_status.set(Some((true, warning)));
                }
                Err(err) => {
                    log!("[MANAGER] Delete request failed: {:?}", err);
                    set_status.set(Some((true, "리뷰를 삭제하지 못했습니다.".to_string())));
                }
            }
            clear_later();
        });
    };

    view! {
        <section class="manager">
            <h2>"🛠 리뷰 관리"</h2>
            <select on:change=select_target>
                <option value="">"수정할 리뷰 선택"</option>
                {move || {
                    cards()
                        .into_iter()
                        .map(|card| {
                            let value = card.id.to_string();
                            view! {
                                <option value=value>
                                    {format!("리뷰 {}: {}", card.id, card.text)}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
            <textarea
                placeholder="리뷰 수정"
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            ></textarea>
            <button type="button" on:click=submit_edit>"리뷰 수정"</button>
            <button type="button" on:click=submit_delete>"리뷰 삭제"</button>
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
