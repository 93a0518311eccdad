//! Data model and view logic for the administrative-division explorer.
//!
//! Everything here is independent of the browser: wire types for the
//! `/tinh` and `/xa/{mahc}` endpoints, the aggregate views shown as charts,
//! the commune table's column and paging model, and the page state machine.
//! The frontend crate renders these; this crate is tested natively.

pub mod division;
pub mod explorer;
pub mod field;
pub mod paging;
pub mod stats;
pub mod table;

#[cfg(test)]
mod testing;

pub use division::{find_province, Commune, Coordinates, Province};
pub use explorer::{ExplorerAction, ExplorerState, RequestSequence, Ticket};
pub use field::FieldValue;
pub use paging::{PageLink, DEFAULT_ROWS_PER_PAGE, ROWS_PER_PAGE_OPTIONS};
pub use stats::{
    category_histogram, slice_color, top_by_population, CategoryCount, PopulationEntry,
    TOP_POPULATION_LIMIT,
};
pub use table::{sorted_rows, CommuneColumn, SortDirection, SortOrder};
