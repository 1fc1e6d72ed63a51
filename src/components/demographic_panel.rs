/// Age/gender selectors plus the recommended-places line for the chosen
/// demographic. The lookup itself lives server-side; this component only
/// renders the returned names.
use crate::recommend::{AgeBracket, Gender};
use gloo_net::http::Request;
use leptos::*;

#[component]
pub fn DemographicPanel() -> impl IntoView {
    let (age, set_age) = create_signal(AgeBracket::Twenties.label().to_string());
    let (gender, set_gender) = create_signal(Gender::Male.label().to_string());

    let recommended = create_local_resource(
        move || (age.get(), gender.get()),
        |(age, gender)| async move {
            let url = format!(
                "/api/recommendations?age={}&gender={}",
                urlencoding::encode(&age),
                urlencoding::encode(&gender)
            );
            Request::get(&url)
                .send()
                .await
                .ok()?
                .json::<Vec<String>>()
                .await
                .ok()
        },
    );

    view! {
        <section class="demographics">
            <h2>"👥 나이대 및 성별 선택"</h2>
            <label>
                "나이를 선택해주세요"
                <select on:change=move |ev| set_age.set(event_target_value(&ev))>
                    {AgeBracket::ALL
                        .iter()
                        .map(|bracket| view! { <option value=bracket.label()>{bracket.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label>
                "성별을 선택해주세요"
                <select on:change=move |ev| set_gender.set(event_target_value(&ev))>
                    {Gender::ALL
                        .iter()
                        .map(|gender| view! { <option value=gender.label()>{gender.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <h3>{move || format!("🏆 {} {} 추천 장소", age.get(), gender.get())}</h3>
            <p class="recommended">
                {move || {
                    recommended
                        .get()
                        .flatten()
                        .map(|places| places.join(", "))
                        .unwrap_or_default()
                }}
            </p>
        </section>
    }
}
