#[derive(thiserror::Error, Debug)]
pub enum ConstantsError {
    #[error("unknown transport mode '{0}'")]
    UnknownTransportMode(String),
    #[error("unknown waiting period context '{0}'")]
    UnknownWaitingPeriod(String),
    #[error("failure reading constants configuration: {0}")]
    ConfigurationError(String),
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
