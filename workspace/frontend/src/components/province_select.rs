use std::rc::Rc;

use common::Province;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub provinces: Rc<Vec<Province>>,
    pub on_select: Callback<String>,
}

/// Drop-down of all provinces; emits the chosen province code.
#[function_component(ProvinceSelect)]
pub fn province_select(props: &Props) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let mahc = select.value();
                if !mahc.is_empty() {
                    on_select.emit(mahc);
                }
            }
        })
    };

    html! {
        <div class="flex justify-center">
            <select class="select select-bordered w-80" {onchange}>
                <option value="" disabled={true} selected={true}>{"-- Chọn tỉnh/thành phố --"}</option>
                { for props.provinces.iter().filter_map(|province| {
                    let key = province.key()?;
                    Some(html! {
                        <option value={key}>{&province.ten}</option>
                    })
                })}
            </select>
        </div>
    }
}
