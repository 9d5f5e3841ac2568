use serde::{Deserialize, Serialize};
use std::fmt;

/// An emissions pathway under which climate records were produced.
///
/// The set is closed: the output grid always carries exactly these three
/// scenarios, whether or not any records arrived for them.
#[derive(Copy, Clone, PartialOrd, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Observed past climate
    Historical,
    /// SSP2-4.5 intermediate emissions pathway
    Ssp245,
    /// SSP5-8.5 high emissions pathway
    Ssp585,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Historical, Scenario::Ssp245, Scenario::Ssp585];

    /// Maps a raw record tag onto the closed scenario set.
    ///
    /// Returns `None` for tags outside the set so callers can decide how to
    /// report the dropped record.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "historical" => Some(Scenario::Historical),
            "ssp245" => Some(Scenario::Ssp245),
            "ssp585" => Some(Scenario::Ssp585),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Historical => "historical",
            Scenario::Ssp245 => "ssp245",
            Scenario::Ssp585 => "ssp585",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
