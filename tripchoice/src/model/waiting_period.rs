use super::{constants, ConstantsError};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use uom::si::f64::Time;

/// transfer contexts that reserve a buffer before departure.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum WaitingPeriod {
    /// rail tickets booked through Trainline
    Trainline,
    Airport,
    /// Ouibus inter-city coaches
    Ouibus,
}

impl WaitingPeriod {
    pub const ALL: [WaitingPeriod; 3] = [
        WaitingPeriod::Trainline,
        WaitingPeriod::Airport,
        WaitingPeriod::Ouibus,
    ];

    /// default buffer in seconds
    pub fn seconds(&self) -> u64 {
        match self {
            WaitingPeriod::Trainline => constants::WAITING_PERIOD_TRAINLINE,
            WaitingPeriod::Airport => constants::WAITING_PERIOD_AIRPORT,
            WaitingPeriod::Ouibus => constants::WAITING_PERIOD_OUIBUS,
        }
    }

    pub fn minutes(&self) -> u64 {
        self.seconds() / 60
    }

    pub fn time(&self) -> Time {
        Time::new::<uom::si::time::second>(self.seconds() as f64)
    }
}

impl Display for WaitingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WaitingPeriod::Trainline => "Trainline",
            WaitingPeriod::Airport => "Airport",
            WaitingPeriod::Ouibus => "Ouibus",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for WaitingPeriod {
    type Err = ConstantsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trainline" => Ok(WaitingPeriod::Trainline),
            "airport" => Ok(WaitingPeriod::Airport),
            "ouibus" => Ok(WaitingPeriod::Ouibus),
            _ => Err(ConstantsError::UnknownWaitingPeriod(String::from(s))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::WaitingPeriod;
    use crate::model::ConstantsError;
    use std::str::FromStr;

    #[test]
    fn test_seconds_and_minutes() {
        assert_eq!(WaitingPeriod::Trainline.seconds(), 900);
        assert_eq!(WaitingPeriod::Airport.seconds(), 7200);
        assert_eq!(WaitingPeriod::Ouibus.seconds(), 900);
        assert_eq!(WaitingPeriod::Trainline.minutes(), 15);
        assert_eq!(WaitingPeriod::Airport.minutes(), 120);
    }

    #[test]
    fn test_time_quantity() {
        let time = WaitingPeriod::Airport.time();
        assert_eq!(time.get::<uom::si::time::second>(), 7200.0);
        assert!((time.get::<uom::si::time::minute>() - 120.0).abs() < 1e-9);
        assert!((time.get::<uom::si::time::hour>() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_str() {
        let wp = WaitingPeriod::from_str("Trainline").expect("should parse");
        assert_eq!(wp, WaitingPeriod::Trainline);
        let wp = WaitingPeriod::from_str("AIRPORT").expect("should parse");
        assert_eq!(wp, WaitingPeriod::Airport);
        for wp in WaitingPeriod::ALL {
            assert_eq!(WaitingPeriod::from_str(&wp.to_string()).ok(), Some(wp));
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let result = WaitingPeriod::from_str("ferry");
        assert!(matches!(result, Err(ConstantsError::UnknownWaitingPeriod(_))));
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&WaitingPeriod::Ouibus).expect("should serialize");
        assert_eq!(json, "\"ouibus\"");
    }
}
