/// Search box, place selector, and the map view. The selector always has
/// something to offer: the search endpoint falls back to the full place
/// list when nothing matches. Marker data is emitted as `data-*`
/// attributes for the external tile renderer to pick up.
use crate::models::view::MapView;
use gloo_net::http::Request;
use leptos::*;

#[component]
pub fn PlaceExplorer(
    selected_place: ReadSignal<String>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let (query, set_query) = create_signal(String::new());

    let names = create_local_resource(
        move || query.get(),
        |query| async move {
            let url = format!("/api/places/search?q={}", urlencoding::encode(&query));
            Request::get(&url)
                .send()
                .await
                .ok()?
                .json::<Vec<String>>()
                .await
                .ok()
        },
    );

    let map = create_local_resource(
        || (),
        |_| async {
            Request::get("/api/places")
                .send()
                .await
                .ok()?
                .json::<MapView>()
                .await
                .ok()
        },
    );

    view! {
        <section class="explorer">
            <h2>"🗺️ 장소 위치 확인"</h2>
            <input
                type="text"
                placeholder="🔍 장소 검색"
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <select on:change=move |ev| on_select.call(event_target_value(&ev))>
                {move || {
                    names
                        .get()
                        .flatten()
                        .unwrap_or_default()
                        .into_iter()
                        .map(|name| {
                            let value = name.clone();
                            let chosen = name == selected_place.get();
                            view! { <option value=value selected=chosen>{name}</option> }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
            {move || {
                map.get()
                    .flatten()
                    .map(|map_view| {
                        view! {
                            <div
                                class="map"
                                data-lat=map_view.center.lat.to_string()
                                data-lng=map_view.center.lng.to_string()
                                data-zoom=map_view.zoom.to_string()
                            >
                                <ul class="markers">
                                    {map_view
                                        .markers
                                        .into_iter()
                                        .map(|place| {
                                            view! {
                                                <li
                                                    data-lat=place.lat.to_string()
                                                    data-lng=place.lng.to_string()
                                                >
                                                    {place.name}
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
