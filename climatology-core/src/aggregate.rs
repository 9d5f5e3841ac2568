//! Grouping and averaging of observations into the monthly climatology grid.

use crate::climatology::{Climatology, MonthlyStats, MONTHS};
use crate::errors::{ClimatologyError, ClimatologyResult};
use crate::observation::{FloatValue, FutureObservation, Observation};
use crate::scenario::Scenario;
use crate::units;
use log::warn;
use std::collections::HashMap;

/// Raw values accumulated for one (scenario, month) cell.
///
/// The required-field vectors grow in lockstep; the optional-field vectors
/// only grow when a record carries the field, so their means may cover a
/// smaller sample than `clt`/`tas`/`rsds`.
#[derive(Debug, Clone, Default)]
struct MonthBucket {
    clt: Vec<FloatValue>,
    tas: Vec<FloatValue>,
    rsds: Vec<FloatValue>,
    psl: Vec<FloatValue>,
    sfc_wind: Vec<FloatValue>,
}

impl MonthBucket {
    fn push(&mut self, obs: &Observation) {
        self.clt.push(obs.clt);
        self.tas.push(obs.tas);
        self.rsds.push(obs.rsds);
        if let Some(psl) = obs.psl {
            self.psl.push(psl);
        }
        if let Some(wind) = obs.sfc_wind {
            self.sfc_wind.push(wind);
        }
    }

    /// Collapses the bucket to its mean statistics in output units, or
    /// `None` when no primary samples were collected.
    fn summarise(&self) -> Option<MonthlyStats> {
        let clt = mean(&self.clt)?;
        let tas = mean(&self.tas)?;
        let rsds = mean(&self.rsds)?;
        Some(MonthlyStats {
            clt,
            temp: units::kelvin_to_fahrenheit(tas),
            solar: rsds,
            pressure: mean(&self.psl).map(units::pascals_to_hectopascals),
            wind: mean(&self.sfc_wind).map(units::metres_per_second_to_mph),
            cloud_fraction: units::percent_to_fraction(clt),
        })
    }
}

/// Arithmetic mean, with `None` rather than a fabricated value for an empty
/// sample.
fn mean(values: &[FloatValue]) -> Option<FloatValue> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<FloatValue>() / values.len() as FloatValue)
}

/// Accumulates observations into (scenario, month) buckets and emits the
/// fixed three-scenario, twelve-month climatology.
///
/// Buckets are created lazily on first use and consumed by
/// [`ClimatologyAggregator::build`]. Future records tagged with a pathway
/// outside the closed [`Scenario`] set are dropped, logged and counted;
/// they never abort the run.
#[derive(Debug, Default)]
pub struct ClimatologyAggregator {
    buckets: HashMap<(Scenario, u8), MonthBucket>,
    dropped: usize,
}

impl ClimatologyAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds historical records; their scenario is implicitly
    /// [`Scenario::Historical`].
    pub fn add_historical(&mut self, observations: &[Observation]) -> ClimatologyResult<()> {
        for obs in observations {
            self.add(Scenario::Historical, obs)?;
        }
        Ok(())
    }

    /// Adds projected records, routing each by its scenario tag.
    pub fn add_future(&mut self, observations: &[FutureObservation]) -> ClimatologyResult<()> {
        for record in observations {
            match Scenario::from_tag(&record.scenario) {
                Some(scenario) => self.add(scenario, &record.observation)?,
                None => {
                    warn!(
                        "dropping record for month {} with unrecognised scenario {:?}",
                        record.observation.month, record.scenario
                    );
                    self.dropped += 1;
                }
            }
        }
        Ok(())
    }

    /// Number of future records dropped for carrying an unrecognised
    /// scenario tag.
    pub fn dropped_records(&self) -> usize {
        self.dropped
    }

    fn add(&mut self, scenario: Scenario, obs: &Observation) -> ClimatologyResult<()> {
        if !MONTHS.contains(&obs.month) {
            return Err(ClimatologyError::MonthOutOfRange(obs.month));
        }
        self.buckets
            .entry((scenario, obs.month))
            .or_default()
            .push(obs);
        Ok(())
    }

    /// Consumes the accumulated buckets and emits the output grid.
    ///
    /// Every scenario gets all twelve month slots; a month with no samples
    /// stays an explicit empty slot, never a missing key.
    pub fn build(self) -> Climatology {
        let mut climatology = Climatology::empty();
        for scenario in Scenario::ALL {
            let months = climatology.scenario_mut(scenario);
            for month in MONTHS {
                if let Some(bucket) = self.buckets.get(&(scenario, month)) {
                    months.insert(month, bucket.summarise());
                }
            }
        }
        climatology
    }
}
