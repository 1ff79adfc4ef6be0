use crate::config::ConstantsTableConfig;
use crate::model::{ConstantsError, ConstantsTable, TransportMode, WaitingPeriod};
use clap::Subcommand;
use itertools::Itertools;

#[derive(Debug, Clone, Subcommand)]
pub enum ConstantsOperation {
    /// list the transport mode labels, one per line
    Modes,
    /// print the canonical label for a transport mode
    Mode {
        /// label or name of the mode, case-insensitive
        label: TransportMode,
    },
    /// print the waiting period for a transfer context (trainline, airport, ouibus)
    WaitingPeriod {
        context: WaitingPeriod,
        /// report minutes instead of seconds
        #[arg(long, default_value_t = false)]
        minutes: bool,
        #[arg(long, help = "path to .toml or .json file with waiting period overrides")]
        configuration_file: Option<String>,
    },
    /// print the full constants table as JSON
    Show {
        #[arg(long, help = "path to .toml or .json file with waiting period overrides")]
        configuration_file: Option<String>,
    },
}

impl ConstantsOperation {
    pub fn run(&self) -> Result<String, ConstantsError> {
        match self {
            ConstantsOperation::Modes => {
                let table = ConstantsTable::default();
                Ok(table.transport_mode_labels().iter().join("\n"))
            }
            ConstantsOperation::Mode { label } => Ok(label.to_string()),
            ConstantsOperation::WaitingPeriod {
                context,
                minutes,
                configuration_file,
            } => {
                let table = ConstantsTableConfig::load_table(configuration_file.as_ref())?;
                let value = if *minutes {
                    table.waiting_period_minutes(*context)
                } else {
                    table.waiting_period_seconds(*context)
                };
                Ok(value.to_string())
            }
            ConstantsOperation::Show { configuration_file } => {
                let table = ConstantsTableConfig::load_table(configuration_file.as_ref())?;
                let json = serde_json::to_string_pretty(&table.to_json())?;
                Ok(json)
            }
        }
    }
}
