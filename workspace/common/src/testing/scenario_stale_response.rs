use super::helpers::{communes, loaded_explorer, select};
use crate::explorer::{ExplorerAction, RequestSequence};

#[test]
fn test_late_response_for_earlier_pick_is_ignored() {
    let sequence = RequestSequence::default();
    let (state, ticket_a) = select(&loaded_explorer(), &sequence, "1");
    let (state, ticket_b) = select(&state, &sequence, "2");

    let state = state.apply(ExplorerAction::CommunesLoaded {
        ticket: ticket_b,
        communes: communes(r#"[{"ten": "Phường Quang Trung", "loai": "phuong"}]"#),
    });
    let state = state.apply(ExplorerAction::CommunesLoaded {
        ticket: ticket_a,
        communes: communes(r#"[{"ten": "Phường Hoàn Kiếm", "loai": "phuong"}, {"ten": "Xã Ba Vì", "loai": "xa"}]"#),
    });

    assert_eq!(state.selected.as_ref().and_then(|p| p.key()), Some("2".to_string()));
    assert_eq!(state.communes.len(), 1);
    assert_eq!(state.communes[0].ten, "Phường Quang Trung");
}

#[test]
fn test_failed_request_keeps_previous_list() {
    let sequence = RequestSequence::default();
    let (state, ticket) = select(&loaded_explorer(), &sequence, "1");
    let state = state.apply(ExplorerAction::CommunesLoaded {
        ticket,
        communes: communes(r#"[{"ten": "Phường A"}]"#),
    });

    // A failed fetch dispatches nothing, so only the selection moves.
    let (state, _) = select(&state, &sequence, "2");

    assert_eq!(state.communes.len(), 1);
    assert_eq!(state.communes[0].ten, "Phường A");
}
