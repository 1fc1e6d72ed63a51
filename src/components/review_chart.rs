/// Per-place review-count bars. The server ships the bars in directory
/// order together with integer-only axis ticks; this component just maps
/// counts to widths.
use crate::models::view::CountChart;
use gloo_net::http::Request;
use leptos::*;

#[component]
pub fn ReviewChart(refresh: ReadSignal<u32>) -> impl IntoView {
    let chart = create_local_resource(
        move || refresh.get(),
        |_| async {
            Request::get("/api/reviews/counts")
                .send()
                .await
                .ok()?
                .json::<CountChart>()
                .await
                .ok()
        },
    );

    view! {
        <section class="chart">
            <h2>"📊 장소별 리뷰 수"</h2>
            {move || {
                chart
                    .get()
                    .flatten()
                    .map(|chart| {
                        let max = chart.ticks.last().copied().unwrap_or(0).max(1);
                        view! {
                            <div class="bars">
                                {chart
                                    .bars
                                    .into_iter()
                                    .map(|bar| {
                                        let width = format!("width: {}%", bar.count * 100 / max);
                                        view! {
                                            <div class="bar-row">
                                                <span class="bar-label">{bar.place}</span>
                                                <div class="bar" style=width></div>
                                                <span class="bar-count">{bar.count}</span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                            <ul class="ticks">
                                {chart
                                    .ticks
                                    .iter()
                                    .map(|tick| view! { <li>{*tick}</li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                    })
            }}
        </section>
    }
}
