use common::{category_histogram, top_by_population, TOP_POPULATION_LIMIT};
use yew::prelude::*;

use crate::components::charts::{CategoryPieChart, TopPopulationChart};
use crate::components::commune_table::CommuneTable;
use crate::components::layout::Layout;
use crate::components::map::MapPanel;
use crate::components::province_detail::ProvinceDetail;
use crate::components::province_select::ProvinceSelect;
use crate::hooks::use_explorer;

/// The whole application: pick a province, inspect it and its communes.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (explorer, on_select) = use_explorer();
    let state = &explorer.0;

    log::trace!(
        "Rendering HomePage: {} provinces, {} communes, selected={:?}",
        state.provinces.len(),
        state.communes.len(),
        state.selected.as_ref().map(|p| p.ten.as_str())
    );

    let histogram = category_histogram(&state.communes);
    let top = top_by_population(&state.communes, TOP_POPULATION_LIMIT);

    html! {
        <Layout title="🌍 Tra cứu đơn vị hành chính Việt Nam">
            <ProvinceSelect provinces={state.provinces.clone()} on_select={on_select} />

            if let Some(province) = &state.selected {
                <ProvinceDetail province={province.clone()} />
            }

            <CommuneTable communes={state.communes.clone()} />

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <CategoryPieChart histogram={histogram} />
                <TopPopulationChart entries={top} />
            </div>

            if let Some(province) = &state.selected {
                <MapPanel province={province.clone()} />
            }
        </Layout>
    }
}
