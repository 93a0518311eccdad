use common::stats::POPULATION_BAR_COLOR;
use common::{slice_color, CategoryCount, PopulationEntry};
use plotly::common::Marker;
use plotly::layout::Axis;
use plotly::{Bar, Layout};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::interop::to_js;

const CHART_HEIGHT: usize = 300;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;
}

fn plot_config() -> serde_json::Value {
    serde_json::json!({"responsive": true, "displayModeBar": false})
}

/// Draws into the element behind `container_ref`, giving it `div_id` first.
fn draw(container_ref: &NodeRef, div_id: &str, data: serde_json::Value, layout: serde_json::Value) {
    let Some(element) = container_ref.cast::<HtmlElement>() else {
        return;
    };
    element.set_id(div_id);

    let args = (to_js(&data), to_js(&layout), to_js(&plot_config()));
    let (data, layout, config) = match args {
        (Ok(data), Ok(layout), Ok(config)) => (data, layout, config),
        _ => {
            log::warn!("Could not convert chart {} to JS values", div_id);
            return;
        }
    };

    if let Err(err) = new_plot(div_id, data, layout, config) {
        log::warn!("Plotly failed to draw {}: {:?}", div_id, err);
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryPieProps {
    pub histogram: Vec<CategoryCount>,
}

/// Share of communes, wards and towns in the selected province.
#[function_component(CategoryPieChart)]
pub fn category_pie_chart(props: &CategoryPieProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with((container_ref.clone(), props.histogram.clone()), move |(container_ref, histogram)| {
        let labels: Vec<&str> = histogram.iter().map(|slice| slice.category.as_str()).collect();
        let values: Vec<usize> = histogram.iter().map(|slice| slice.count).collect();
        let colors: Vec<&str> = (0..histogram.len()).map(slice_color).collect();

        let trace = serde_json::json!([{
            "type": "pie",
            "labels": labels,
            "values": values,
            "sort": false,
            "direction": "clockwise",
            "marker": {"colors": colors},
            "textinfo": "label+value",
            "hoverinfo": "label+value+percent"
        }]);

        let layout = serde_json::json!({
            "height": CHART_HEIGHT,
            "margin": {"t": 10, "r": 10, "l": 10, "b": 10},
            "paper_bgcolor": "rgba(0,0,0,0)",
            "showlegend": true
        });

        draw(container_ref, "chart-category-pie", trace, layout);
        || ()
    });

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{"Cơ cấu loại đơn vị"}</h3>
                <div ref={container_ref} class="chart-container" style="height: 300px;"></div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TopPopulationProps {
    pub entries: Vec<PopulationEntry>,
}

/// Most populous communes of the selected province.
#[function_component(TopPopulationChart)]
pub fn top_population_chart(props: &TopPopulationProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with((container_ref.clone(), props.entries.clone()), move |(container_ref, entries)| {
        let names: Vec<String> = entries.iter().map(|entry| entry.name.clone()).collect();
        let populations: Vec<f64> = entries.iter().map(|entry| entry.population).collect();

        let trace = Bar::new(names, populations)
            .name("Dân số")
            .marker(Marker::new().color(POPULATION_BAR_COLOR));

        let layout = Layout::new()
            .height(CHART_HEIGHT)
            .show_legend(true)
            .x_axis(Axis::new().visible(false))
            .y_axis(Axis::new());

        match (serde_json::to_value(vec![trace]), serde_json::to_value(&layout)) {
            (Ok(data), Ok(layout)) => draw(container_ref, "chart-top-population", data, layout),
            _ => log::warn!("Could not serialize population chart"),
        }
        || ()
    });

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{"Top 10 xã/phường đông dân"}</h3>
                <div ref={container_ref} class="chart-container" style="height: 300px;"></div>
            </div>
        </div>
    }
}
