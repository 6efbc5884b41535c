//! Transom - Optional glazed unit above a rectangular opening.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Transom shape. `Other` carries free text, which may still be blank while editing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransomShape {
    #[default]
    Rectangular,
    HalfRound,
    Other(String),
}

impl TransomShape {
    /// Parse a stored shape name.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("Rectangular") {
            TransomShape::Rectangular
        } else if name.eq_ignore_ascii_case("Half-Round") {
            TransomShape::HalfRound
        } else {
            TransomShape::Other(name.to_string())
        }
    }

    /// Shape name as stored, or `None` for a blank free-text shape.
    pub fn resolved_name(&self) -> Option<&str> {
        match self {
            TransomShape::Rectangular => Some("Rectangular"),
            TransomShape::HalfRound => Some("Half-Round"),
            TransomShape::Other(text) => {
                let text = text.trim();
                (!text.is_empty()).then_some(text)
            }
        }
    }
}

impl From<String> for TransomShape {
    fn from(s: String) -> Self {
        TransomShape::parse(&s)
    }
}

impl From<TransomShape> for String {
    fn from(shape: TransomShape) -> Self {
        shape.resolved_name().unwrap_or_default().to_string()
    }
}

impl fmt::Display for TransomShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolved_name().unwrap_or_default())
    }
}

/// A resolved transom ready to persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transom {
    /// Shape name.
    pub shape: String,
    /// Height in inches, floored to the eighth.
    pub height: f64,
}
