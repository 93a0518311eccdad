use super::helpers::{communes, provinces, select, PROVINCES_JSON};
use crate::explorer::{ExplorerAction, ExplorerState, RequestSequence};

#[test]
fn test_pick_before_province_list_arrives() {
    let sequence = RequestSequence::default();
    let (state, ticket) = select(&ExplorerState::default(), &sequence, "1");

    assert!(state.selected.is_none());
    assert!(state.is_current(ticket));

    // The commune request still goes out and its answer still lands.
    let state = state.apply(ExplorerAction::CommunesLoaded {
        ticket,
        communes: communes(r#"[{"ten": "Phường A"}]"#),
    });
    assert_eq!(state.communes.len(), 1);

    let state = state.apply(ExplorerAction::ProvincesLoaded(provinces(PROVINCES_JSON)));
    assert_eq!(state.provinces.len(), 2);
    assert!(state.selected.is_none());
}
