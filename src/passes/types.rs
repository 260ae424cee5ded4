use serde::Serialize;
use std::collections::BTreeMap;

/// A visible pass as listed in one row of the pass summary table.
///
/// Serialized field names follow the `iss_hoy.json` format consumers
/// already read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pass {
    #[serde(rename = "magnitud")]
    pub magnitude: String,
    #[serde(rename = "hora_ini")]
    pub start_time: String,
    #[serde(rename = "alt_ini")]
    pub start_altitude_deg: i32,
    #[serde(rename = "ac_ini")]
    pub start_azimuth_deg: i32,
    #[serde(rename = "hora_max")]
    pub peak_time: String,
    #[serde(rename = "alt_max")]
    pub peak_altitude_deg: i32,
    #[serde(rename = "ac_max")]
    pub peak_azimuth_deg: i32,
    #[serde(rename = "hora_fin")]
    pub end_time: String,
    #[serde(rename = "alt_fin")]
    pub end_altitude_deg: i32,
    #[serde(rename = "ac_fin")]
    pub end_azimuth_deg: i32,
    #[serde(rename = "tipo")]
    pub kind: String,
}

/// Passes keyed by ISO date (`YYYY-MM-DD`), each list in table order.
pub type DateGroup = BTreeMap<String, Vec<Pass>>;
