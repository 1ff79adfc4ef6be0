mod constants_table_config;

pub use constants_table_config::{ConstantsTableConfig, WaitingPeriodMinutes};
