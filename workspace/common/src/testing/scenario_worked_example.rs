use super::helpers::{communes, loaded_explorer, select};
use crate::explorer::{ExplorerAction, RequestSequence};
use crate::stats::{category_histogram, top_by_population, TOP_POPULATION_LIMIT};
use crate::table::sorted_rows;

#[test]
fn test_hanoi_with_two_wards() {
    let sequence = RequestSequence::default();
    let (state, ticket) = select(&loaded_explorer(), &sequence, "1");

    let state = state.apply(ExplorerAction::CommunesLoaded {
        ticket,
        communes: communes(
            r#"[{"ten": "Phường A", "loai": "phuong", "dan_so": "50000"},
                {"ten": "Phường B", "loai": "phuong", "dan_so": "abc"}]"#,
        ),
    });

    let selected = state.selected.as_ref().expect("Hà Nội should be selected");
    assert_eq!(selected.ten, "Hà Nội");
    assert_eq!(selected.dan_so.as_ref().map(ToString::to_string).as_deref(), Some("8000000"));
    assert_eq!(selected.dientich_km2.as_ref().map(ToString::to_string).as_deref(), Some("3358"));
    assert_eq!(selected.trungtam_hc.as_deref(), Some("Hoàn Kiếm"));

    assert_eq!(sorted_rows(&state.communes, None).len(), 2);

    let histogram = category_histogram(&state.communes);
    assert_eq!(histogram.len(), 1);
    assert_eq!(histogram[0].category, "phuong");
    assert_eq!(histogram[0].count, 2);

    let top = top_by_population(&state.communes, TOP_POPULATION_LIMIT);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].name, "Phường A");
    assert_eq!(top[0].population, 50000.0);
}

#[test]
fn test_map_only_for_provinces_with_both_coordinates() {
    let sequence = RequestSequence::default();

    let (state, _) = select(&loaded_explorer(), &sequence, "1");
    let coordinates = state.selected.as_ref().and_then(|p| p.coordinates());
    assert_eq!(coordinates.map(|c| (c.lat, c.lng)), Some((21.0285, 105.8542)));

    let (state, _) = select(&state, &sequence, "2");
    assert_eq!(state.selected.as_ref().map(|p| p.ten.as_str()), Some("Hà Giang"));
    assert!(state.selected.as_ref().and_then(|p| p.coordinates()).is_none());
}
