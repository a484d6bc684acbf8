// src/models/score.rs

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A percentage score held as fixed-point hundredths (85.50% -> 8550).
///
/// Stored in an INTEGER column so that sums over many records stay exact;
/// floating point only appears at the JSON boundary and when computing
/// means. No 0-100 range is enforced anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, sqlx::Type)]
#[sqlx(transparent)]
pub struct Score(i64);

impl Score {
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Score(hundredths)
    }

    /// Converts a JSON-side number, rounding to the nearest hundredth.
    pub fn from_f64(value: f64) -> Self {
        Score((value * 100.0).round() as i64)
    }

    pub fn hundredths(self) -> i64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

/// Renders with exactly two decimals ("85.50"), matching the CSV export.
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.abs();
        write!(f, "{}{}.{:02}", sign, cents / 100, cents % 100)
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() {
            return Err(serde::de::Error::custom("score must be a finite number"));
        }
        Ok(Score::from_f64(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_keeps_two_decimals() {
        assert_eq!(Score::from_hundredths(8550).to_string(), "85.50");
        assert_eq!(Score::from_hundredths(7005).to_string(), "70.05");
        assert_eq!(Score::from_hundredths(10000).to_string(), "100.00");
        assert_eq!(Score::from_hundredths(0).to_string(), "0.00");
    }

    #[test]
    fn display_handles_negative_values() {
        assert_eq!(Score::from_hundredths(-550).to_string(), "-5.50");
        assert_eq!(Score::from_hundredths(-50).to_string(), "-0.50");
    }

    #[test]
    fn serializes_as_json_number() {
        let json = serde_json::to_string(&Score::from_f64(85.5)).unwrap();
        assert_eq!(json, "85.5");
    }

    #[test]
    fn deserializes_from_integers_and_floats() {
        let s: Score = serde_json::from_str("92").unwrap();
        assert_eq!(s.hundredths(), 9200);
        let s: Score = serde_json::from_str("67.25").unwrap();
        assert_eq!(s.hundredths(), 6725);
    }

    #[test]
    fn sub_hundredth_input_rounds() {
        let s: Score = serde_json::from_str("59.999").unwrap();
        assert_eq!(s.hundredths(), 6000);
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!(serde_json::from_str::<Score>("\"85.5\"").is_err());
    }
}
