//! End-to-end scenarios driving `ExplorerState` with API-shaped JSON.

mod helpers;
mod scenario_empty_response;
mod scenario_lookup_before_load;
mod scenario_stale_response;
mod scenario_worked_example;
