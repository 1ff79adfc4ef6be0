//! Named values shared with the trip comparison front end. The mode labels
//! are the strings attached to journey legs, see [`super::TransportMode`] for
//! the typed form.

// modes
pub const TYPE_PLANE: &str = "Plane";
pub const TYPE_TRAIN: &str = "Train";
/// inter-city
pub const TYPE_COACH: &str = "Coach";
/// within an agglomeration
pub const TYPE_BUS: &str = "Bus";
pub const TYPE_METRO: &str = "Metro";
pub const TYPE_WAIT: &str = "Waiting";
pub const TYPE_AUTOMOBILE: &str = "Automobile";
pub const TYPE_BIKE: &str = "Bike";
pub const TYPE_WALK: &str = "Walking";
pub const TYPE_TRANSFER: &str = "Transfer";
pub const TYPE_TRAM: &str = "Tram";

// units
pub const UNIT_CONVERSION: u32 = 1;

// waiting periods, in seconds
pub const WAITING_PERIOD_TRAINLINE: u64 = 15 * 60;
pub const WAITING_PERIOD_AIRPORT: u64 = 120 * 60;
pub const WAITING_PERIOD_OUIBUS: u64 = 15 * 60;

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    const LABELS: [&str; 11] = [
        TYPE_PLANE,
        TYPE_TRAIN,
        TYPE_COACH,
        TYPE_BUS,
        TYPE_METRO,
        TYPE_WAIT,
        TYPE_AUTOMOBILE,
        TYPE_BIKE,
        TYPE_WALK,
        TYPE_TRANSFER,
        TYPE_TRAM,
    ];

    #[test]
    fn test_mode_labels() {
        assert_eq!(TYPE_PLANE, "Plane");
        assert_eq!(TYPE_TRAIN, "Train");
        assert_eq!(TYPE_COACH, "Coach");
        assert_eq!(TYPE_BUS, "Bus");
        assert_eq!(TYPE_METRO, "Metro");
        assert_eq!(TYPE_WAIT, "Waiting");
        assert_eq!(TYPE_AUTOMOBILE, "Automobile");
        assert_eq!(TYPE_BIKE, "Bike");
        assert_eq!(TYPE_WALK, "Walking");
        assert_eq!(TYPE_TRANSFER, "Transfer");
        assert_eq!(TYPE_TRAM, "Tram");
        assert!(LABELS.iter().all(|l| !l.is_empty()));
    }

    #[test]
    fn test_mode_labels_distinct() {
        let distinct: HashSet<&str> = LABELS.iter().copied().collect();
        assert_eq!(distinct.len(), 11);
    }

    #[test]
    fn test_waiting_periods() {
        assert_eq!(WAITING_PERIOD_TRAINLINE, 900);
        assert_eq!(WAITING_PERIOD_OUIBUS, 900);
        assert_eq!(WAITING_PERIOD_TRAINLINE, WAITING_PERIOD_OUIBUS);
        assert_eq!(WAITING_PERIOD_AIRPORT, 7200);
        assert_eq!(WAITING_PERIOD_AIRPORT / 60, 120);
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(UNIT_CONVERSION, 1);
    }

    #[test]
    fn test_repeated_reads() {
        let first = (TYPE_TRAIN, WAITING_PERIOD_AIRPORT, UNIT_CONVERSION);
        for _ in 0..3 {
            assert_eq!((TYPE_TRAIN, WAITING_PERIOD_AIRPORT, UNIT_CONVERSION), first);
        }
    }
}
