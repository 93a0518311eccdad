use crate::division::{Commune, Province};
use crate::explorer::{ExplorerAction, ExplorerState, RequestSequence};

pub const PROVINCES_JSON: &str = r#"[
    {"mahc": 1, "ten": "Hà Nội", "dan_so": 8000000, "dientich_km2": 3358, "trungtam_hc": "Hoàn Kiếm",
     "vido": 21.0285, "kinhdo": 105.8542},
    {"mahc": "2", "ten": "Hà Giang", "dan_so": "854679", "dientich_km2": 7929.5, "trungtam_hc": "Hà Giang",
     "vido": null, "kinhdo": 104.98}
]"#;

pub fn provinces(json: &str) -> Vec<Province> {
    serde_json::from_str(json).expect("province fixture should decode")
}

pub fn communes(json: &str) -> Vec<Commune> {
    serde_json::from_str(json).expect("commune fixture should decode")
}

/// Explorer with the fixture provinces loaded.
pub fn loaded_explorer() -> ExplorerState {
    ExplorerState::default().apply(ExplorerAction::ProvincesLoaded(provinces(PROVINCES_JSON)))
}

/// Selects `mahc` the way the page does: draw a ticket, then dispatch.
pub fn select(state: &ExplorerState, sequence: &RequestSequence, mahc: &str) -> (ExplorerState, u64) {
    let ticket = sequence.next();
    let state = state.apply(ExplorerAction::Select {
        mahc: mahc.to_string(),
        ticket,
    });
    (state, ticket)
}
