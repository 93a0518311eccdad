//! State of the explorer page and the transitions between its states.
//!
//! The page owns one `ExplorerState`. Every event (province list loaded,
//! province picked, commune list loaded) is an `ExplorerAction` and yields a
//! fresh state; collections are swapped whole, never patched.
//!
//! Commune requests are tagged with a `Ticket`. Only the response to the
//! latest selection is applied, so a slow answer for an earlier pick can
//! not overwrite the list of the current one.

use crate::division::{find_province, Commune, Province};
use std::cell::Cell;
use std::rc::Rc;

/// Sequence number of a commune request.
pub type Ticket = u64;

/// Hands out increasing tickets, one per selection.
#[derive(Debug, Default)]
pub struct RequestSequence {
    last: Cell<Ticket>,
}

impl RequestSequence {
    pub fn next(&self) -> Ticket {
        let ticket = self.last.get() + 1;
        self.last.set(ticket);
        ticket
    }
}

#[derive(Debug, Clone)]
pub enum ExplorerAction {
    ProvincesLoaded(Vec<Province>),
    Select { mahc: String, ticket: Ticket },
    CommunesLoaded { ticket: Ticket, communes: Vec<Commune> },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExplorerState {
    pub provinces: Rc<Vec<Province>>,
    pub selected: Option<Province>,
    pub communes: Rc<Vec<Commune>>,
    active_request: Option<Ticket>,
}

impl ExplorerState {
    pub fn apply(&self, action: ExplorerAction) -> ExplorerState {
        match action {
            ExplorerAction::ProvincesLoaded(mut provinces) => {
                let received = provinces.len();
                provinces.retain(|province| province.key().is_some());
                if provinces.len() < received {
                    tracing::warn!(skipped = received - provinces.len(), "Provinces without a code left out of the list");
                }
                tracing::debug!(count = provinces.len(), "Province list replaced");
                ExplorerState {
                    provinces: Rc::new(provinces),
                    ..self.clone()
                }
            }
            ExplorerAction::Select { mahc, ticket } => {
                let selected = find_province(&self.provinces, &mahc).cloned();
                if selected.is_none() {
                    tracing::warn!(%mahc, loaded = self.provinces.len(), "Selected code not found in province list");
                }
                ExplorerState {
                    selected,
                    active_request: Some(ticket),
                    ..self.clone()
                }
            }
            ExplorerAction::CommunesLoaded { ticket, communes } => {
                if !self.is_current(ticket) {
                    tracing::debug!(
                        ticket,
                        active = ?self.active_request,
                        "Dropping commune response for an older selection"
                    );
                    return self.clone();
                }
                tracing::debug!(ticket, count = communes.len(), "Commune list replaced");
                ExplorerState {
                    communes: Rc::new(communes),
                    ..self.clone()
                }
            }
        }
    }

    /// Whether `ticket` belongs to the latest selection.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.active_request == Some(ticket)
    }
}
