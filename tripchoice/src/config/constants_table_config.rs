use crate::model::{ConstantsError, ConstantsTable, WaitingPeriod};
use serde::{Deserialize, Serialize};

/// overrides applied on top of the default constants for a run.
/// waiting periods are given in minutes and stored in seconds.
///
/// ```toml
/// [waiting_period_minutes]
/// trainline = 20
/// airport = 90
/// ```
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct ConstantsTableConfig {
    #[serde(default)]
    pub waiting_period_minutes: WaitingPeriodMinutes,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct WaitingPeriodMinutes {
    pub trainline: Option<u64>,
    pub airport: Option<u64>,
    pub ouibus: Option<u64>,
}

impl WaitingPeriodMinutes {
    pub fn get(&self, waiting_period: WaitingPeriod) -> Option<u64> {
        match waiting_period {
            WaitingPeriod::Trainline => self.trainline,
            WaitingPeriod::Airport => self.airport,
            WaitingPeriod::Ouibus => self.ouibus,
        }
    }
}

impl TryFrom<&String> for ConstantsTableConfig {
    type Error = ConstantsError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                ConstantsError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                ConstantsError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                ConstantsError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                ConstantsError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(ConstantsError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

impl TryFrom<&ConstantsTableConfig> for ConstantsTable {
    type Error = ConstantsError;

    fn try_from(conf: &ConstantsTableConfig) -> Result<Self, Self::Error> {
        let mut table = ConstantsTable::default();
        for waiting_period in WaitingPeriod::ALL {
            if let Some(minutes) = conf.waiting_period_minutes.get(waiting_period) {
                if minutes == 0 {
                    return Err(ConstantsError::ConfigurationError(format!(
                        "waiting period for {waiting_period} must be greater than zero minutes"
                    )));
                }
                let seconds = minutes.checked_mul(60).ok_or_else(|| {
                    ConstantsError::ConfigurationError(format!(
                        "waiting period for {waiting_period} of {minutes} minutes is too large"
                    ))
                })?;
                log::debug!("overriding {waiting_period} waiting period with {minutes} minutes");
                table = table.with_waiting_period(waiting_period, seconds);
            }
        }
        Ok(table)
    }
}

impl ConstantsTableConfig {
    /// reads the optional configuration file and builds the table, falling
    /// back to the defaults when no file is given.
    pub fn load_table(configuration_file: Option<&String>) -> Result<ConstantsTable, ConstantsError> {
        match configuration_file {
            None => Ok(ConstantsTable::default()),
            Some(f) => {
                log::info!("reading constants configuration from {f}");
                let conf = ConstantsTableConfig::try_from(f)?;
                ConstantsTable::try_from(&conf)
            }
        }
    }
}
