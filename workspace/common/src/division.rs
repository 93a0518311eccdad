//! Administrative units as served by `/tinh` and `/xa/{mahc}`.
//!
//! Field names follow the API's Vietnamese keys. Every field is optional on
//! the wire and decoded leniently (`null`, numbers in text columns, junk in
//! numeric columns), so one odd record never fails the whole list; views
//! decide how to treat the gaps.

use crate::field::{lenient_field, lenient_name, lenient_text, FieldValue};
use serde::{Deserialize, Serialize};

/// Province (`tinh`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Province {
    #[serde(default, deserialize_with = "lenient_field")]
    pub mahc: Option<FieldValue>,
    #[serde(default, deserialize_with = "lenient_name")]
    pub ten: String,
    #[serde(default, deserialize_with = "lenient_field")]
    pub dan_so: Option<FieldValue>,
    #[serde(default, deserialize_with = "lenient_field")]
    pub dientich_km2: Option<FieldValue>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub trungtam_hc: Option<String>,
    #[serde(default, deserialize_with = "lenient_field")]
    pub vido: Option<FieldValue>,
    #[serde(default, deserialize_with = "lenient_field")]
    pub kinhdo: Option<FieldValue>,
}

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Province {
    /// Identifier in the string form used by the selector and the URL path.
    ///
    /// `None` when the code is missing or blank; such provinces can not be
    /// selected and are dropped from the loaded list.
    pub fn key(&self) -> Option<String> {
        self.mahc
            .as_ref()
            .filter(|mahc| !mahc.is_blank())
            .map(FieldValue::as_key)
    }

    /// Location of the province, when both coordinates are present.
    ///
    /// `0` is a real coordinate; only missing or non-numeric values count
    /// as absent.
    pub fn coordinates(&self) -> Option<Coordinates> {
        let lat = self.vido.as_ref()?.as_number()?;
        let lng = self.kinhdo.as_ref()?.as_number()?;
        Some(Coordinates { lat, lng })
    }
}

/// Commune, ward or town (`xa`) belonging to a province.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Commune {
    #[serde(default, deserialize_with = "lenient_field")]
    pub mahc: Option<FieldValue>,
    #[serde(default, deserialize_with = "lenient_name")]
    pub ten: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub loai: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub truocsapnhap: Option<String>,
    #[serde(default, deserialize_with = "lenient_field")]
    pub dientich_km2: Option<FieldValue>,
    #[serde(default, deserialize_with = "lenient_field")]
    pub dan_so: Option<FieldValue>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub trungtam_hc: Option<String>,
}

impl Commune {
    /// Category label, if it carries any text.
    pub fn category(&self) -> Option<&str> {
        self.loai.as_deref().filter(|loai| !loai.trim().is_empty())
    }

    /// Population as a number; `None` for missing or non-numeric values.
    pub fn population(&self) -> Option<f64> {
        self.dan_so.as_ref().and_then(FieldValue::as_number)
    }
}

/// Finds a province by the string form of its code.
pub fn find_province<'a>(provinces: &'a [Province], mahc: &str) -> Option<&'a Province> {
    let wanted = mahc.trim();
    provinces
        .iter()
        .find(|province| province.key().as_deref() == Some(wanted))
}
