pub mod constants;
mod constants_error;
mod constants_table;
mod transport_mode;
mod waiting_period;

pub use constants_error::ConstantsError;
pub use constants_table::ConstantsTable;
pub use transport_mode::TransportMode;
pub use waiting_period::WaitingPeriod;
