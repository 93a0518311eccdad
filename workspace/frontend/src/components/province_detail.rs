use common::{FieldValue, Province};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub province: Province,
}

fn verbatim(value: Option<&FieldValue>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

#[function_component(ProvinceDetail)]
pub fn province_detail(props: &Props) -> Html {
    let province = &props.province;

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title text-2xl">{&province.ten}</h2>
                <p>{format!("📊 Dân số: {}", verbatim(province.dan_so.as_ref()))}</p>
                <p>{format!("📐 Diện tích: {} km²", verbatim(province.dientich_km2.as_ref()))}</p>
                <p>{format!("🏢 Trung tâm HC: {}", province.trungtam_hc.as_deref().unwrap_or_default())}</p>
            </div>
        </div>
    }
}
