use std::rc::Rc;

use common::{ExplorerAction, ExplorerState, RequestSequence};
use yew::prelude::*;

use crate::api_client::division::{get_communes, get_provinces};

/// Explorer state wrapped for `use_reducer`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Explorer(pub ExplorerState);

impl Reducible for Explorer {
    type Action = ExplorerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Explorer(self.0.apply(action)))
    }
}

/// Page state plus the callback that selects a province by code.
///
/// The province list is fetched once on mount. Each selection draws a new
/// ticket before its commune request goes out; a response is applied only
/// while its ticket is still the active one. Failed requests are logged
/// and leave the state as it was.
#[hook]
pub fn use_explorer() -> (UseReducerHandle<Explorer>, Callback<String>) {
    let state = use_reducer(Explorer::default);
    let sequence = use_memo((), |_| RequestSequence::default());

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match get_provinces().await {
                    Ok(provinces) => dispatcher.dispatch(ExplorerAction::ProvincesLoaded(provinces)),
                    Err(err) => log::error!("Failed to load province list: {}", err),
                }
            });
            || ()
        });
    }

    let select = {
        let dispatcher = state.dispatcher();
        use_callback((), move |mahc: String, _| {
            let ticket = sequence.next();
            log::debug!("Province {} selected (ticket {})", mahc, ticket);
            dispatcher.dispatch(ExplorerAction::Select {
                mahc: mahc.clone(),
                ticket,
            });

            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match get_communes(&mahc).await {
                    Ok(communes) => dispatcher.dispatch(ExplorerAction::CommunesLoaded { ticket, communes }),
                    Err(err) => log::error!("Failed to load communes of province {}: {}", mahc, err),
                }
            });
        })
    };

    (state, select)
}
