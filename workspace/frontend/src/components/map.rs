use common::{Coordinates, Province};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::interop::{escape_html, to_js};

const MAP_ZOOM: u8 = 8;
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap";

const ICON_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon.png";
const ICON_RETINA_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon-2x.png";
const SHADOW_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/images/marker-shadow.png";

#[wasm_bindgen]
extern "C" {
    type LeafletMap;
    type Layer;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    fn leaflet_map(element: &HtmlElement, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap);

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = icon, catch)]
    fn icon(options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(lat_lng: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, content: &str) -> Layer;
}

/// Options for an explicit `L.icon`.
///
/// The default icon resolves its images relative to the Leaflet stylesheet,
/// which breaks when the script and CSS come from different places, so the
/// marker carries absolute URLs and the stock sizes.
fn marker_icon_options() -> serde_json::Value {
    serde_json::json!({
        "iconUrl": ICON_URL,
        "iconRetinaUrl": ICON_RETINA_URL,
        "shadowUrl": SHADOW_URL,
        "iconSize": [25, 41],
        "iconAnchor": [12, 41],
        "popupAnchor": [1, -34],
        "shadowSize": [41, 41]
    })
}

/// `{icon}` options for `L.marker`.
fn marker_options() -> Result<JsValue, JsValue> {
    let icon_options = to_js(&marker_icon_options()).map_err(JsValue::from)?;
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &JsValue::from_str("icon"), &icon(&icon_options)?)?;
    Ok(options.into())
}

/// Builds the map inside `element`. Returns `None` when Leaflet is unavailable.
fn mount_map(element: &HtmlElement, at: Coordinates, label: &str) -> Option<LeafletMap> {
    let map_options = serde_json::json!({"center": [at.lat, at.lng], "zoom": MAP_ZOOM});
    let tile_options = serde_json::json!({"attribution": TILE_ATTRIBUTION});

    let (Ok(map_options), Ok(tile_options)) = (to_js(&map_options), to_js(&tile_options)) else {
        log::warn!("Could not convert map options to JS values");
        return None;
    };

    let marker_options = match marker_options() {
        Ok(options) => options,
        Err(err) => {
            log::warn!("Leaflet icon setup failed: {:?}", err);
            return None;
        }
    };

    let map = match leaflet_map(element, &map_options) {
        Ok(map) => map,
        Err(err) => {
            log::warn!("Leaflet failed to create map: {:?}", err);
            return None;
        }
    };

    tile_layer(TILE_URL, &tile_options).add_to(&map);

    let position = js_sys::Array::of2(&JsValue::from_f64(at.lat), &JsValue::from_f64(at.lng));
    marker(&position, &marker_options)
        .add_to(&map)
        .bind_popup(&escape_html(label));

    log::debug!("Map centred on {}, {} for {}", at.lat, at.lng, label);
    Some(map)
}

#[derive(Properties, PartialEq)]
struct ProvinceMapProps {
    at: Coordinates,
    label: String,
}

#[function_component(ProvinceMap)]
fn province_map(props: &ProvinceMapProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with(
        (container_ref.clone(), props.at, props.label.clone()),
        move |(container_ref, at, label)| {
            let map = container_ref
                .cast::<HtmlElement>()
                .and_then(|element| mount_map(&element, *at, label));

            move || {
                if let Some(map) = map {
                    map.remove();
                }
            }
        },
    );

    html! {
        <div ref={container_ref} style="height: 400px; width: 100%;"></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MapPanelProps {
    pub province: Province,
}

/// Location of the selected province; omitted when it has no coordinates.
#[function_component(MapPanel)]
pub fn map_panel(props: &MapPanelProps) -> Html {
    let Some(at) = props.province.coordinates() else {
        log::trace!("No coordinates for {}, skipping map", props.province.ten);
        return html! {};
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{"🗺️ Bản đồ vị trí"}</h3>
                <ProvinceMap at={at} label={props.province.ten.clone()} />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_icon_uses_absolute_urls() {
        let options = marker_icon_options();
        for key in ["iconUrl", "iconRetinaUrl", "shadowUrl"] {
            let url = options[key].as_str().unwrap();
            assert!(url.starts_with("https://"), "{} should be absolute: {}", key, url);
            assert!(url.ends_with(".png"));
        }
    }

    #[test]
    fn test_marker_icon_sizes() {
        let options = marker_icon_options();
        assert_eq!(options["iconSize"], serde_json::json!([25, 41]));
        assert_eq!(options["iconAnchor"], serde_json::json!([12, 41]));
        assert_eq!(options["popupAnchor"], serde_json::json!([1, -34]));
        assert_eq!(options["shadowSize"], serde_json::json!([41, 41]));
    }
}
