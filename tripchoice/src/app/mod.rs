mod constants_app;
mod constants_operation;

pub use constants_app::ConstantsApp;
pub use constants_operation::ConstantsOperation;
