//! Column model and client-side sorting for the commune table.

use crate::division::Commune;
use crate::field::{compare_fields, compare_text, FieldValue};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommuneColumn {
    Name,
    Category,
    PreMerger,
    Area,
    Population,
    AdminCenter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: CommuneColumn,
    pub direction: SortDirection,
}

impl SortOrder {
    /// Order after a click on `column`: same column flips, a new one starts ascending.
    ///
    /// Clicks on columns that are not sortable leave the order unchanged.
    pub fn clicked(current: Option<SortOrder>, column: CommuneColumn) -> Option<SortOrder> {
        if !column.sortable() {
            return current;
        }
        match current {
            Some(order) if order.column == column => Some(SortOrder {
                column,
                direction: order.direction.toggled(),
            }),
            _ => Some(SortOrder {
                column,
                direction: SortDirection::Ascending,
            }),
        }
    }
}

impl CommuneColumn {
    /// All columns in display order.
    pub const ALL: [CommuneColumn; 6] = [
        CommuneColumn::Name,
        CommuneColumn::Category,
        CommuneColumn::PreMerger,
        CommuneColumn::Area,
        CommuneColumn::Population,
        CommuneColumn::AdminCenter,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CommuneColumn::Name => "Xã/Phường",
            CommuneColumn::Category => "Loại",
            CommuneColumn::PreMerger => "Trước sáp nhập",
            CommuneColumn::Area => "Diện tích (km²)",
            CommuneColumn::Population => "Dân số",
            CommuneColumn::AdminCenter => "Trung tâm HC",
        }
    }

    pub fn sortable(self) -> bool {
        !matches!(self, CommuneColumn::PreMerger | CommuneColumn::AdminCenter)
    }

    /// Long free-text columns wrap instead of truncating.
    pub fn wraps(self) -> bool {
        matches!(
            self,
            CommuneColumn::Name | CommuneColumn::PreMerger | CommuneColumn::AdminCenter
        )
    }

    /// Cell text, shown verbatim; missing values render as an empty cell.
    pub fn cell(self, commune: &Commune) -> String {
        match self {
            CommuneColumn::Name => commune.ten.clone(),
            CommuneColumn::Category => commune.loai.clone().unwrap_or_default(),
            CommuneColumn::PreMerger => commune.truocsapnhap.clone().unwrap_or_default(),
            CommuneColumn::Area => display_field(commune.dientich_km2.as_ref()),
            CommuneColumn::Population => display_field(commune.dan_so.as_ref()),
            CommuneColumn::AdminCenter => commune.trungtam_hc.clone().unwrap_or_default(),
        }
    }

    fn compare(self, a: &Commune, b: &Commune) -> Ordering {
        match self {
            CommuneColumn::Name => compare_text(&a.ten, &b.ten),
            CommuneColumn::Category => compare_optional_text(a.loai.as_deref(), b.loai.as_deref()),
            CommuneColumn::PreMerger => {
                compare_optional_text(a.truocsapnhap.as_deref(), b.truocsapnhap.as_deref())
            }
            CommuneColumn::Area => compare_fields(a.dientich_km2.as_ref(), b.dientich_km2.as_ref()),
            CommuneColumn::Population => compare_fields(a.dan_so.as_ref(), b.dan_so.as_ref()),
            CommuneColumn::AdminCenter => {
                compare_optional_text(a.trungtam_hc.as_deref(), b.trungtam_hc.as_deref())
            }
        }
    }
}

fn display_field(value: Option<&FieldValue>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

fn compare_optional_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare_text(a, b),
    }
}

/// Rows in display order. Without a sort order the source order is kept.
pub fn sorted_rows<'a>(communes: &'a [Commune], order: Option<SortOrder>) -> Vec<&'a Commune> {
    let mut rows: Vec<&Commune> = communes.iter().collect();
    if let Some(order) = order {
        rows.sort_by(|a, b| {
            let cmp = order.column.compare(a, b);
            match order.direction {
                SortDirection::Ascending => cmp,
                SortDirection::Descending => cmp.reverse(),
            }
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commune(name: &str, population: Option<FieldValue>) -> Commune {
        Commune {
            ten: name.to_string(),
            dan_so: population,
            ..Default::default()
        }
    }

    fn names(rows: &[&Commune]) -> Vec<String> {
        rows.iter().map(|c| c.ten.clone()).collect()
    }

    #[test]
    fn test_six_fixed_columns() {
        let labels: Vec<&str> = CommuneColumn::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["Xã/Phường", "Loại", "Trước sáp nhập", "Diện tích (km²)", "Dân số", "Trung tâm HC"]
        );
        assert!(!CommuneColumn::PreMerger.sortable());
        assert!(!CommuneColumn::AdminCenter.sortable());
        assert!(CommuneColumn::Population.sortable());
    }

    #[test]
    fn test_cells_are_verbatim() {
        let commune: Commune = serde_json::from_str(
            r#"{"ten": "Phường A", "loai": "phuong", "dientich_km2": 2.5, "dan_so": "50000"}"#,
        )
        .unwrap();

        assert_eq!(CommuneColumn::Name.cell(&commune), "Phường A");
        assert_eq!(CommuneColumn::Area.cell(&commune), "2.5");
        assert_eq!(CommuneColumn::Population.cell(&commune), "50000");
        assert_eq!(CommuneColumn::PreMerger.cell(&commune), "");
    }

    #[test]
    fn test_population_sorts_numerically() {
        let communes = vec![
            commune("Nine", Some(FieldValue::from("9"))),
            commune("Hundred", Some(FieldValue::from(100.0))),
            commune("None", None),
            commune("Twenty", Some(FieldValue::from("20"))),
        ];

        let order = SortOrder {
            column: CommuneColumn::Population,
            direction: SortDirection::Ascending,
        };
        assert_eq!(
            names(&sorted_rows(&communes, Some(order))),
            vec!["None", "Nine", "Twenty", "Hundred"]
        );

        let order = SortOrder {
            direction: SortDirection::Descending,
            ..order
        };
        assert_eq!(
            names(&sorted_rows(&communes, Some(order))),
            vec!["Hundred", "Twenty", "Nine", "None"]
        );
    }

    #[test]
    fn test_unsorted_keeps_source_order() {
        let communes = vec![commune("B", None), commune("A", None)];
        assert_eq!(names(&sorted_rows(&communes, None)), vec!["B", "A"]);
        assert!(sorted_rows(&[], None).is_empty());
    }

    #[test]
    fn test_header_clicks() {
        let first = SortOrder::clicked(None, CommuneColumn::Name);
        assert_eq!(
            first,
            Some(SortOrder {
                column: CommuneColumn::Name,
                direction: SortDirection::Ascending
            })
        );

        let second = SortOrder::clicked(first, CommuneColumn::Name);
        assert_eq!(second.map(|o| o.direction), Some(SortDirection::Descending));

        let other = SortOrder::clicked(second, CommuneColumn::Area);
        assert_eq!(
            other,
            Some(SortOrder {
                column: CommuneColumn::Area,
                direction: SortDirection::Ascending
            })
        );

        assert_eq!(SortOrder::clicked(other, CommuneColumn::PreMerger), other);
    }
}
