//! Bottle arrangements: the ordered guess a player submits.
//!
//! An arrangement is a short sequence of small integers. It is validated
//! against a `GameConfig` before the tracker looks at any session state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::GameConfig;

/// An ordered bottle arrangement.
///
/// SmallVec keeps the standard five-bottle arrangement inline.
///
/// ## Example
///
/// ```
/// use bottle_game::core::{Arrangement, GameConfig};
///
/// let config = GameConfig::default();
/// let guess = Arrangement::parse(&[1, 2, 3, 4, 5], &config).unwrap();
/// assert_eq!(guess.as_slice(), &[1, 2, 3, 4, 5]);
///
/// assert!(Arrangement::parse(&[0, 2, 3, 4, 5], &config).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arrangement(SmallVec<[u8; 5]>);

impl Arrangement {
    /// Validate `values` against `config` and wrap them.
    ///
    /// Checks run in order: length, value range, then distinctness (only
    /// when the config asks for it). The first failure is reported.
    pub fn parse(values: &[u8], config: &GameConfig) -> Result<Self, ArrangementError> {
        if values.len() != config.arrangement_len {
            return Err(ArrangementError::WrongLength {
                expected: config.arrangement_len,
                actual: values.len(),
            });
        }

        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !config.is_legal_bottle(**v))
        {
            return Err(ArrangementError::OutOfRange {
                index,
                value: i64::from(value),
                min: config.min_bottle,
                max: config.max_bottle,
            });
        }

        if config.require_distinct {
            let mut seen = [false; 256];
            for &value in values {
                let slot = &mut seen[usize::from(value)];
                if *slot {
                    return Err(ArrangementError::Duplicate { value });
                }
                *slot = true;
            }
        }

        Ok(Self(SmallVec::from_slice(values)))
    }

    /// Validate wide integers, as received from bindings or untyped input.
    ///
    /// Values that cannot be a bottle at all (negative, or above `u8::MAX`)
    /// are reported as out of range.
    pub fn parse_wide(values: &[i64], config: &GameConfig) -> Result<Self, ArrangementError> {
        let mut narrowed: SmallVec<[u8; 5]> = SmallVec::with_capacity(values.len());
        for (index, &value) in values.iter().enumerate() {
            match u8::try_from(value) {
                Ok(v) => narrowed.push(v),
                Err(_) if values.len() != config.arrangement_len => {
                    return Err(ArrangementError::WrongLength {
                        expected: config.arrangement_len,
                        actual: values.len(),
                    });
                }
                Err(_) => {
                    return Err(ArrangementError::OutOfRange {
                        index,
                        value,
                        min: config.min_bottle,
                        max: config.max_bottle,
                    });
                }
            }
        }
        Self::parse(&narrowed, config)
    }

    /// The bottle values in order.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Number of bottles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the arrangement holds no bottles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Arrangement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

/// Why an arrangement was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrangementError {
    /// Wrong number of bottles.
    WrongLength { expected: usize, actual: usize },
    /// A bottle value outside the legal range.
    OutOfRange {
        index: usize,
        value: i64,
        min: u8,
        max: u8,
    },
    /// A value used more than once when distinct values are required.
    Duplicate { value: u8 },
}

impl std::fmt::Display for ArrangementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "expected {expected} bottles, got {actual}")
            }
            Self::OutOfRange {
                index,
                value,
                min,
                max,
            } => write!(
                f,
                "bottle {value} at position {index} is outside {min}..={max}"
            ),
            Self::Duplicate { value } => write!(f, "bottle {value} appears more than once"),
        }
    }
}

impl std::error::Error for ArrangementError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let config = GameConfig::default();
        let guess = Arrangement::parse(&[5, 4, 3, 2, 1], &config).unwrap();

        assert_eq!(guess.len(), 5);
        assert!(!guess.is_empty());
        assert_eq!(guess.as_slice(), &[5, 4, 3, 2, 1]);
        assert_eq!(format!("{}", guess), "[5, 4, 3, 2, 1]");
    }

    #[test]
    fn test_repeats_allowed_by_default() {
        let config = GameConfig::default();
        assert!(Arrangement::parse(&[1, 1, 1, 1, 1], &config).is_ok());
    }

    #[test]
    fn test_out_of_range_reports_first_slot() {
        let config = GameConfig::default();

        assert_eq!(
            Arrangement::parse(&[0, 2, 3, 4, 5], &config),
            Err(ArrangementError::OutOfRange { index: 0, value: 0, min: 1, max: 5 })
        );
        assert_eq!(
            Arrangement::parse(&[1, 2, 6, 4, 0], &config),
            Err(ArrangementError::OutOfRange { index: 2, value: 6, min: 1, max: 5 })
        );
    }

    #[test]
    fn test_wrong_length() {
        let config = GameConfig::default();

        assert_eq!(
            Arrangement::parse(&[1, 2, 3, 4], &config),
            Err(ArrangementError::WrongLength { expected: 5, actual: 4 })
        );
        assert_eq!(
            Arrangement::parse(&[], &config),
            Err(ArrangementError::WrongLength { expected: 5, actual: 0 })
        );
    }

    #[test]
    fn test_length_checked_before_range() {
        let config = GameConfig::default();
        assert!(matches!(
            Arrangement::parse(&[9, 9], &config),
            Err(ArrangementError::WrongLength { .. })
        ));
    }

    #[test]
    fn test_distinct_values() {
        let config = GameConfig::new().with_distinct_values();

        assert!(Arrangement::parse(&[3, 1, 4, 5, 2], &config).is_ok());
        assert_eq!(
            Arrangement::parse(&[1, 2, 3, 2, 5], &config),
            Err(ArrangementError::Duplicate { value: 2 })
        );
    }

    #[test]
    fn test_parse_wide() {
        let config = GameConfig::default();

        assert!(Arrangement::parse_wide(&[1, 2, 3, 4, 5], &config).is_ok());
        assert_eq!(
            Arrangement::parse_wide(&[1, -1, 3, 4, 5], &config),
            Err(ArrangementError::OutOfRange { index: 1, value: -1, min: 1, max: 5 })
        );
        assert_eq!(
            Arrangement::parse_wide(&[1, 2, 3, 4, 300], &config),
            Err(ArrangementError::OutOfRange { index: 4, value: 300, min: 1, max: 5 })
        );
        assert!(matches!(
            Arrangement::parse_wide(&[-1], &config),
            Err(ArrangementError::WrongLength { expected: 5, actual: 1 })
        ));
    }

    #[test]
    fn test_error_display() {
        let err = ArrangementError::OutOfRange { index: 0, value: 6, min: 1, max: 5 };
        assert_eq!(err.to_string(), "bottle 6 at position 0 is outside 1..=5");
    }

    #[test]
    fn test_arrangement_serialization() {
        let config = GameConfig::default();
        let guess = Arrangement::parse(&[1, 2, 3, 4, 5], &config).unwrap();
        let json = serde_json::to_string(&guess).unwrap();
        assert_eq!(json, "[1,2,3,4,5]");
        let deserialized: Arrangement = serde_json::from_str(&json).unwrap();
        assert_eq!(guess, deserialized);
    }
}
