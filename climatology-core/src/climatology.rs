use crate::observation::FloatValue;
use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Calendar months covered by every scenario in the output grid.
pub const MONTHS: RangeInclusive<u8> = 1..=12;

/// Mean statistics for one (scenario, month) cell, in output units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStats {
    /// Mean cloud area fraction (percent)
    pub clt: FloatValue,
    /// Mean near-surface air temperature (degrees Fahrenheit)
    pub temp: FloatValue,
    /// Mean downwelling shortwave radiation (W / m^2)
    pub solar: FloatValue,
    /// Mean sea-level pressure (hPa); `None` when no record in the cell
    /// carried `psl`
    pub pressure: Option<FloatValue>,
    /// Mean wind speed (mph); `None` when no record in the cell carried
    /// `sfcWind`
    pub wind: Option<FloatValue>,
    /// Mean cloud cover as a unit fraction
    #[serde(rename = "cloudFraction")]
    pub cloud_fraction: FloatValue,
}

/// One scenario's twelve month slots.
///
/// A month without data is `None`, serialised as JSON `null` — never a
/// missing key. BTreeMap keys keep the serialised months in calendar order.
pub type MonthlyClimatology = BTreeMap<u8, Option<MonthlyStats>>;

/// The full output grid: exactly three scenarios, twelve months each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Climatology {
    pub historical: MonthlyClimatology,
    pub ssp245: MonthlyClimatology,
    pub ssp585: MonthlyClimatology,
}

impl Climatology {
    /// Builds the grid with every month slot empty.
    pub fn empty() -> Self {
        let scenario_slots = || MONTHS.map(|month| (month, None)).collect::<MonthlyClimatology>();
        Self {
            historical: scenario_slots(),
            ssp245: scenario_slots(),
            ssp585: scenario_slots(),
        }
    }

    pub fn scenario(&self, scenario: Scenario) -> &MonthlyClimatology {
        match scenario {
            Scenario::Historical => &self.historical,
            Scenario::Ssp245 => &self.ssp245,
            Scenario::Ssp585 => &self.ssp585,
        }
    }

    pub(crate) fn scenario_mut(&mut self, scenario: Scenario) -> &mut MonthlyClimatology {
        match scenario {
            Scenario::Historical => &mut self.historical,
            Scenario::Ssp245 => &mut self.ssp245,
            Scenario::Ssp585 => &mut self.ssp585,
        }
    }
}

impl Default for Climatology {
    fn default() -> Self {
        Self::empty()
    }
}
