use super::{constants, ConstantsError};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// a way of moving between two points on a journey leg. serializes
/// to the same label as the matching `TYPE_*` constant.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransportMode {
    Plane,
    Train,
    /// inter-city bus
    Coach,
    /// bus within an agglomeration
    Bus,
    Metro,
    #[serde(rename = "Waiting")]
    Wait,
    Automobile,
    Bike,
    #[serde(rename = "Walking")]
    Walk,
    Transfer,
    Tram,
}

impl TransportMode {
    pub const ALL: [TransportMode; 11] = [
        TransportMode::Plane,
        TransportMode::Train,
        TransportMode::Coach,
        TransportMode::Bus,
        TransportMode::Metro,
        TransportMode::Wait,
        TransportMode::Automobile,
        TransportMode::Bike,
        TransportMode::Walk,
        TransportMode::Transfer,
        TransportMode::Tram,
    ];

    pub fn label(&self) -> &'static str {
        use TransportMode as M;
        match self {
            M::Plane => constants::TYPE_PLANE,
            M::Train => constants::TYPE_TRAIN,
            M::Coach => constants::TYPE_COACH,
            M::Bus => constants::TYPE_BUS,
            M::Metro => constants::TYPE_METRO,
            M::Wait => constants::TYPE_WAIT,
            M::Automobile => constants::TYPE_AUTOMOBILE,
            M::Bike => constants::TYPE_BIKE,
            M::Walk => constants::TYPE_WALK,
            M::Transfer => constants::TYPE_TRANSFER,
            M::Tram => constants::TYPE_TRAM,
        }
    }
}

impl Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TransportMode {
    type Err = ConstantsError;

    /// matches either the label ("Walking") or the variant name ("walk"),
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use TransportMode as M;
        match s.trim().to_lowercase().as_str() {
            "plane" => Ok(M::Plane),
            "train" => Ok(M::Train),
            "coach" => Ok(M::Coach),
            "bus" => Ok(M::Bus),
            "metro" => Ok(M::Metro),
            "waiting" | "wait" => Ok(M::Wait),
            "automobile" => Ok(M::Automobile),
            "bike" => Ok(M::Bike),
            "walking" | "walk" => Ok(M::Walk),
            "transfer" => Ok(M::Transfer),
            "tram" => Ok(M::Tram),
            _ => Err(ConstantsError::UnknownTransportMode(String::from(s))),
        }
    }
}
