use super::helpers::{loaded_explorer, select};
use crate::explorer::{ExplorerAction, RequestSequence};
use crate::paging::{page_count, page_range, DEFAULT_ROWS_PER_PAGE};
use crate::stats::{category_histogram, top_by_population, TOP_POPULATION_LIMIT};
use crate::table::sorted_rows;

#[test]
fn test_every_province_with_empty_communes() {
    let sequence = RequestSequence::default();
    let explorer = loaded_explorer();

    for province in explorer.provinces.iter() {
        let mahc = province.key().expect("listed provinces carry a code");
        let (state, ticket) = select(&explorer, &sequence, &mahc);
        let state = state.apply(ExplorerAction::CommunesLoaded { ticket, communes: Vec::new() });

        assert!(state.selected.is_some());
        assert!(sorted_rows(&state.communes, None).is_empty());
        assert!(category_histogram(&state.communes).is_empty());
        assert!(top_by_population(&state.communes, TOP_POPULATION_LIMIT).is_empty());
        assert_eq!(page_count(state.communes.len(), DEFAULT_ROWS_PER_PAGE), 0);
        assert_eq!(page_range(1, state.communes.len(), DEFAULT_ROWS_PER_PAGE), 0..0);
    }
}
