// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Tagged numeric parse for free-text form fields.
//
// Anything that is not a finite, non-negative number becomes `Defaulted` and
// reads as 0. Keeping the tag lets callers tell "user typed 0" apart from
// "field left empty" even though both compute identically.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DefaultReason {
    Missing,
    NotANumber,
    NonFinite,
    Negative,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumericInput {
    Valid(f64),
    Defaulted(DefaultReason),
}

impl Default for NumericInput {
    fn default() -> Self {
        NumericInput::Defaulted(DefaultReason::Missing)
    }
}

impl From<f64> for NumericInput {
    fn from(n: f64) -> Self {
        Self::from_number(n)
    }
}

impl NumericInput {
    /// Parse a form field. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return NumericInput::Defaulted(DefaultReason::Missing);
        }
        match trimmed.parse::<f64>() {
            Ok(n) => Self::from_number(n),
            Err(_) => NumericInput::Defaulted(DefaultReason::NotANumber),
        }
    }

    /// Accept whatever the form layer stored: number, numeric string, or null.
    pub fn from_value(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => NumericInput::Defaulted(DefaultReason::Missing),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => Self::from_number(f),
                None => NumericInput::Defaulted(DefaultReason::NotANumber),
            },
            serde_json::Value::String(s) => Self::parse(s),
            _ => NumericInput::Defaulted(DefaultReason::NotANumber),
        }
    }

    fn from_number(n: f64) -> Self {
        if !n.is_finite() {
            NumericInput::Defaulted(DefaultReason::NonFinite)
        } else if n < 0.0 {
            NumericInput::Defaulted(DefaultReason::Negative)
        } else {
            NumericInput::Valid(n)
        }
    }

    /// The number the formulas see
    pub fn value(&self) -> f64 {
        match self {
            NumericInput::Valid(n) => *n,
            NumericInput::Defaulted(_) => 0.0,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, NumericInput::Defaulted(_))
    }

    pub fn default_reason(&self) -> Option<DefaultReason> {
        match self {
            NumericInput::Valid(_) => None,
            NumericInput::Defaulted(reason) => Some(*reason),
        }
    }
}

impl Serialize for NumericInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NumericInput::Valid(n) => serializer.serialize_f64(*n),
            NumericInput::Defaulted(_) => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for NumericInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(NumericInput::from_value(&value))
    }
}
