use serde::{Deserialize, Serialize};

/// Alias used for all physical values flowing through the pipeline.
pub type FloatValue = f64;

/// A single monthly reading from the historical record.
///
/// `month`, `clt`, `tas` and `rsds` must be present in the source data;
/// strict parsing rejects records that omit them. `psl` and `sfcWind` are
/// genuinely sparse in the source and stay optional per record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub month: u8,
    /// Cloud area fraction (percent)
    pub clt: FloatValue,
    /// Near-surface air temperature (K)
    pub tas: FloatValue,
    /// Downwelling shortwave radiation (W / m^2)
    pub rsds: FloatValue,
    /// Sea-level pressure (Pa)
    pub psl: Option<FloatValue>,
    /// Near-surface wind speed (m / s)
    #[serde(rename = "sfcWind")]
    pub sfc_wind: Option<FloatValue>,
}

/// A projected monthly reading, tagged with the pathway it was computed
/// under.
///
/// The tag is kept as the raw string so records carrying an unrecognised
/// pathway can be counted and reported instead of failing the whole parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FutureObservation {
    pub scenario: String,
    #[serde(flatten)]
    pub observation: Observation,
}
