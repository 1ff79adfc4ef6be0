use super::{constants, ConstantsError, TransportMode, WaitingPeriod};
use serde::Serialize;
use serde_json::json;
use std::str::FromStr;
use uom::si::f64::Time;

/// resolved set of constants. [`ConstantsTable::DEFAULT`] holds the
/// compile-time values, other tables are built from a
/// [`crate::config::ConstantsTableConfig`] that overrides waiting periods.
/// every waiting period context always has a value.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantsTable {
    unit_conversion: u32,
    trainline_seconds: u64,
    airport_seconds: u64,
    ouibus_seconds: u64,
}

impl ConstantsTable {
    pub const DEFAULT: ConstantsTable = ConstantsTable {
        unit_conversion: constants::UNIT_CONVERSION,
        trainline_seconds: constants::WAITING_PERIOD_TRAINLINE,
        airport_seconds: constants::WAITING_PERIOD_AIRPORT,
        ouibus_seconds: constants::WAITING_PERIOD_OUIBUS,
    };

    /// copy of this table with one waiting period replaced.
    pub fn with_waiting_period(self, waiting_period: WaitingPeriod, seconds: u64) -> Self {
        match waiting_period {
            WaitingPeriod::Trainline => Self {
                trainline_seconds: seconds,
                ..self
            },
            WaitingPeriod::Airport => Self {
                airport_seconds: seconds,
                ..self
            },
            WaitingPeriod::Ouibus => Self {
                ouibus_seconds: seconds,
                ..self
            },
        }
    }

    pub fn unit_conversion(&self) -> u32 {
        self.unit_conversion
    }

    pub fn waiting_period_seconds(&self, waiting_period: WaitingPeriod) -> u64 {
        match waiting_period {
            WaitingPeriod::Trainline => self.trainline_seconds,
            WaitingPeriod::Airport => self.airport_seconds,
            WaitingPeriod::Ouibus => self.ouibus_seconds,
        }
    }

    pub fn waiting_period_minutes(&self, waiting_period: WaitingPeriod) -> u64 {
        self.waiting_period_seconds(waiting_period) / 60
    }

    pub fn waiting_period_time(&self, waiting_period: WaitingPeriod) -> Time {
        let seconds = self.waiting_period_seconds(waiting_period) as f64;
        Time::new::<uom::si::time::second>(seconds)
    }

    /// finds the waiting period in seconds for a context name such as "Trainline".
    pub fn lookup_waiting_period(&self, name: &str) -> Result<u64, ConstantsError> {
        let waiting_period = WaitingPeriod::from_str(name)?;
        Ok(self.waiting_period_seconds(waiting_period))
    }

    pub fn lookup_transport_mode(&self, label: &str) -> Result<TransportMode, ConstantsError> {
        TransportMode::from_str(label)
    }

    pub fn transport_modes(&self) -> &'static [TransportMode] {
        &TransportMode::ALL
    }

    pub fn transport_mode_labels(&self) -> Vec<&'static str> {
        self.transport_modes().iter().map(|m| m.label()).collect()
    }

    pub fn to_json(&self) -> serde_json::Value {
        let waiting_periods = WaitingPeriod::ALL
            .iter()
            .map(|wp| (wp.to_string(), json!(self.waiting_period_seconds(*wp))))
            .collect::<serde_json::Map<_, _>>();
        json!({
            "transport_modes": self.transport_mode_labels(),
            "unit_conversion": self.unit_conversion,
            "waiting_periods_seconds": waiting_periods,
        })
    }
}

impl Default for ConstantsTable {
    fn default() -> Self {
        ConstantsTable::DEFAULT
    }
}
