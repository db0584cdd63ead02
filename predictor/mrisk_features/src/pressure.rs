//! Blood pressure readings typed as `sys/dia`.

use std::fmt;

use nom::bytes::complete::{tag, take_while_m_n};
use nom::sequence::separated_pair;
use nom::IResult;
use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PressureError {
    #[error("expected `<2-3 digits>/<2-3 digits>`, found {0:?}")]
    Malformed(String),
    #[error("unexpected text {rest:?} after `{reading}`")]
    TrailingText { reading: String, rest: String },
}

/// A `sys/dia` reading. Digit groups are kept as typed, leading zeros
/// included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BloodPressure {
    systolic: String,
    diastolic: String,
}

fn reading(input: &str) -> IResult<&str, &str> {
    take_while_m_n(2, 3, |c: char| c.is_ascii_digit())(input)
}

fn systolic_diastolic(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(reading, tag("/"), reading)(input)
}

impl BloodPressure {
    /// Match a reading at the start of the trimmed input.
    ///
    /// Anything after the matched reading is returned untouched, so
    /// `"130/85 mmHg"` yields `130/85` and `" mmHg"`.
    pub fn parse_prefix(input: &str) -> Result<(BloodPressure, &str), PressureError> {
        let trimmed = input.trim();
        match systolic_diastolic(trimmed) {
            Ok((rest, (systolic, diastolic))) => Ok((
                BloodPressure {
                    systolic: systolic.to_string(),
                    diastolic: diastolic.to_string(),
                },
                rest,
            )),
            Err(_) => Err(PressureError::Malformed(input.to_string())),
        }
    }

    /// Match a reading that makes up the whole trimmed input
    pub fn parse_exact(input: &str) -> Result<BloodPressure, PressureError> {
        let (pressure, rest) = Self::parse_prefix(input)?;
        if rest.is_empty() {
            Ok(pressure)
        } else {
            Err(PressureError::TrailingText {
                reading: pressure.to_string(),
                rest: rest.to_string(),
            })
        }
    }

    pub fn systolic(&self) -> &str {
        &self.systolic
    }

    pub fn diastolic(&self) -> &str {
        &self.diastolic
    }

    /// Systolic value in mmHg
    pub fn systolic_mmhg(&self) -> u32 {
        digits_value(&self.systolic)
    }

    /// Diastolic value in mmHg
    pub fn diastolic_mmhg(&self) -> u32 {
        digits_value(&self.diastolic)
    }
}

// At most three ASCII digits, so this cannot overflow.
fn digits_value(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

impl Serialize for BloodPressure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
