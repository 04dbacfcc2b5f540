use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use crate::errors::SolverError;

/// Minimum acceptable confidence, on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    pub fn new(value: f64) -> Result<Self, SolverError> {
        if value.is_nan() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(SolverError::InvalidThreshold(format!(
                "{} is outside [{}, {}]",
                value,
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// The threshold as a minimum similarity ratio in `[0.0, 1.0]`.
    pub fn as_ratio(self) -> f64 {
        self.0 / 100.0
    }

    /// Whether a similarity ratio clears this threshold.
    pub fn admits(self, ratio: f64) -> bool {
        ratio >= self.as_ratio()
    }
}

impl TryFrom<f64> for Threshold {
    type Error = SolverError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Threshold::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(t: Threshold) -> f64 {
        t.0
    }
}

impl FromStr for Threshold {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .trim_end_matches('%')
            .parse()
            .map_err(|_| SolverError::InvalidThreshold(format!("not a number: {}", s)))?;
        Threshold::new(value)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_valid() {
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(100.0).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(matches!(Threshold::new(-0.5), Err(SolverError::InvalidThreshold(_))));
        assert!(matches!(Threshold::new(100.01), Err(SolverError::InvalidThreshold(_))));
        assert!(matches!(Threshold::new(f64::NAN), Err(SolverError::InvalidThreshold(_))));
    }

    #[test]
    fn test_admits_is_inclusive() {
        let t = Threshold::new(80.0).unwrap();
        assert!(t.admits(0.8));
        assert!(t.admits(0.81));
        assert!(!t.admits(0.79));
        assert!(Threshold::new(100.0).unwrap().admits(1.0));
        assert!(Threshold::default().admits(0.0));
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!("75".parse::<Threshold>().unwrap().value(), 75.0);
        assert_eq!(" 12.5% ".parse::<Threshold>().unwrap().value(), 12.5);
        assert!("abc".parse::<Threshold>().is_err());
        assert!("150".parse::<Threshold>().is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Threshold = serde_json::from_str("42").unwrap();
        assert_eq!(ok.value(), 42.0);
        assert!(serde_json::from_str::<Threshold>("101").is_err());
    }
}
