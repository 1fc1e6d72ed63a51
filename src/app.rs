/// Main application entry point for the visitor dashboard.
/// Combines the demographic, map, review, and chart components into the
/// single-page layout.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::demographic_panel::DemographicPanel;
use crate::components::place_explorer::PlaceExplorer;
use crate::components::review_chart::ReviewChart;
use crate::components::review_form::ReviewForm;
use crate::components::review_manager::ReviewManager;
use crate::components::reviews_list::ReviewsList;

pub const DEFAULT_PLACE: &str = "성심당 본점";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/placeboard.css"/>
        <Title text="성심당 방문객 추천 시스템"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=DashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn DashboardPage() -> impl IntoView {
    // Selected place plus a counter bumped after every mutation; the
    // data panels refetch their snapshots when either changes.
    let (selected_place, set_selected_place) = create_signal(DEFAULT_PLACE.to_string());
    let (refresh, set_refresh) = create_signal(0u32);
    let bump = move |_: ()| set_refresh.update(|n| *n += 1);

    view! {
        <div class="dashboard">
            <h1>"🎉 성심당 방문객 추천 시스템"</h1>
            <p class="tagline">
                <strong>"대전광역시 중구에서 추천하는 관광지와 메뉴를 확인하세요!"</strong>
            </p>
            <DemographicPanel/>
            <PlaceExplorer
                selected_place=selected_place
                on_select=move |name: String| set_selected_place.set(name)
            />
            <ReviewsList place=selected_place refresh=refresh/>
            <ReviewForm place=selected_place on_saved=bump/>
            <ReviewManager place=selected_place refresh=refresh on_changed=bump/>
            <ReviewChart refresh=refresh/>
        </div>
    }
}
