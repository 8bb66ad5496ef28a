//! Lenient decoders for form-style JSON payloads.
//!
//! Browser forms post numbers as strings and leave untouched inputs empty, so
//! numeric and boolean fields accept several JSON shapes. Anything that does
//! not read as a finite number decodes as absent; the calculator decides
//! whether absence is an error.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Loose {
    fn as_number(&self) -> Option<f64> {
        let n = match self {
            Loose::Number(n) => *n,
            Loose::Text(s) => s.trim().parse::<f64>().ok()?,
            Loose::Bool(_) => return None,
        };
        n.is_finite().then_some(n)
    }

    fn as_flag(&self) -> bool {
        match self {
            Loose::Bool(b) => *b,
            Loose::Number(n) => *n != 0.0,
            Loose::Text(s) => s.trim().eq_ignore_ascii_case("true"),
        }
    }
}

/// `2`, `"2"`, `" 2.5 "` → `Some(..)`; `null`, `""`, `"abc"` → `None`.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Loose>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(Loose::as_number))
}

/// Non-negative whole numbers only; anything else decodes as absent.
pub fn count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let n = number(deserializer)?;
    Ok(n.filter(|n| n.fract() == 0.0 && *n >= 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n as u32))
}

/// `true`, `1`, `"true"` → `true`; absent or anything else → `false`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Loose>::deserialize(deserializer)?;
    Ok(raw.as_ref().is_some_and(Loose::as_flag))
}
