//! Aggregate views derived from the current commune list.
//!
//! Both views are recomputed from scratch on every render; they are small
//! and the list is replaced wholesale on each selection.

use crate::division::Commune;
use std::cmp::Ordering;

/// Number of entries in the population chart.
pub const TOP_POPULATION_LIMIT: usize = 10;

/// Slice colours of the category pie, applied cyclically.
pub const CATEGORY_PALETTE: [&str; 3] = ["#8884d8", "#82ca9d", "#ffc658"];

/// Bar colour of the population chart.
pub const POPULATION_BAR_COLOR: &str = "#8884d8";

/// One slice of the category histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// One bar of the population chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationEntry {
    pub name: String,
    pub population: f64,
}

/// Counts communes per category.
///
/// Slices appear in the order their category is first seen in `communes`.
/// Communes without a category are not counted, so no slice ever has a
/// zero count.
pub fn category_histogram(communes: &[Commune]) -> Vec<CategoryCount> {
    let mut histogram: Vec<CategoryCount> = Vec::new();

    for category in communes.iter().filter_map(Commune::category) {
        match histogram.iter_mut().find(|slice| slice.category == category) {
            Some(slice) => slice.count += 1,
            None => histogram.push(CategoryCount {
                category: category.to_string(),
                count: 1,
            }),
        }
    }

    tracing::trace!(categories = histogram.len(), communes = communes.len(), "Built category histogram");
    histogram
}

/// Colour of the slice at `index`.
pub fn slice_color(index: usize) -> &'static str {
    CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
}

/// The `limit` most populous communes, largest first.
///
/// Communes whose population is not a number are left out entirely. The
/// sort is stable, so equal populations keep their source order.
pub fn top_by_population(communes: &[Commune], limit: usize) -> Vec<PopulationEntry> {
    let mut entries: Vec<PopulationEntry> = communes
        .iter()
        .filter_map(|commune| {
            commune.population().map(|population| PopulationEntry {
                name: commune.ten.clone(),
                population,
            })
        })
        .collect();

    entries.sort_by(|a, b| b.population.partial_cmp(&a.population).unwrap_or(Ordering::Equal));
    entries.truncate(limit);
    entries
}
