//! WindowType - Opening classification and its measurement shape.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an opening is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasureShape {
    /// One width and one height (round, half-round).
    Simple,
    /// Two widths and two heights (rectangular styles).
    Detailed,
}

/// Window type as chosen on the measurement form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WindowType {
    SingleHung,
    DoubleHung,
    Slider,
    Picture,
    Casement,
    Round,
    HalfRound,
    /// Free-text type entered through the "Other" option.
    Other(String),
}

/// Static type table: (type, display name, shape, transom eligible).
static TYPE_TABLE: [(WindowType, &str, MeasureShape, bool); 7] = [
    (WindowType::SingleHung, "Single Hung", MeasureShape::Detailed, true),
    (WindowType::DoubleHung, "Double Hung", MeasureShape::Detailed, true),
    (WindowType::Slider, "Slider", MeasureShape::Detailed, true),
    (WindowType::Picture, "Picture", MeasureShape::Detailed, true),
    (WindowType::Casement, "Casement", MeasureShape::Detailed, true),
    (WindowType::Round, "Round", MeasureShape::Simple, false),
    (WindowType::HalfRound, "Half-Round", MeasureShape::Simple, false),
];

impl WindowType {
    /// Named types offered on the form, in display order (excludes Other).
    pub fn known() -> impl Iterator<Item = WindowType> {
        TYPE_TABLE.iter().map(|(t, _, _, _)| t.clone())
    }

    /// Parse a stored type name. Unknown non-empty text becomes `Other`.
    ///
    /// Returns `None` for blank input (no type selected yet).
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let known = TYPE_TABLE
            .iter()
            .find(|(_, display, _, _)| display.eq_ignore_ascii_case(name))
            .map(|(t, _, _, _)| t.clone());
        Some(known.unwrap_or_else(|| WindowType::Other(name.to_string())))
    }

    fn entry(&self) -> Option<&'static (WindowType, &'static str, MeasureShape, bool)> {
        TYPE_TABLE.iter().find(|(t, _, _, _)| t == self)
    }

    /// Display name as stored on a window record.
    pub fn name(&self) -> &str {
        match self {
            WindowType::Other(text) => text.as_str(),
            _ => self.entry().map(|(_, name, _, _)| *name).unwrap_or_default(),
        }
    }

    /// Measurement shape. Free-text types are measured in detail.
    pub fn shape(&self) -> MeasureShape {
        self.entry()
            .map(|(_, _, shape, _)| *shape)
            .unwrap_or(MeasureShape::Detailed)
    }

    /// Check if this type is measured with a single width/height pair.
    pub fn is_simple(&self) -> bool {
        self.shape() == MeasureShape::Simple
    }

    /// Check if a transom may be attached to this type.
    pub fn transom_eligible(&self) -> bool {
        self.entry().is_some_and(|(_, _, _, eligible)| *eligible)
    }
}

impl From<String> for WindowType {
    fn from(s: String) -> Self {
        WindowType::parse(&s).unwrap_or(WindowType::Other(s))
    }
}

impl From<WindowType> for String {
    fn from(t: WindowType) -> Self {
        t.name().to_string()
    }
}

impl fmt::Display for WindowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!(WindowType::parse("Double Hung"), Some(WindowType::DoubleHung));
        assert_eq!(WindowType::parse("half-round"), Some(WindowType::HalfRound));
        assert_eq!(WindowType::parse("  Round "), Some(WindowType::Round));
    }

    #[test]
    fn test_parse_other_and_blank() {
        assert_eq!(
            WindowType::parse("Awning"),
            Some(WindowType::Other("Awning".to_string()))
        );
        assert_eq!(WindowType::parse(""), None);
        assert_eq!(WindowType::parse("   "), None);
    }

    #[test]
    fn test_shape_table() {
        assert_eq!(WindowType::Round.shape(), MeasureShape::Simple);
        assert_eq!(WindowType::HalfRound.shape(), MeasureShape::Simple);
        assert_eq!(WindowType::Casement.shape(), MeasureShape::Detailed);
        assert_eq!(
            WindowType::Other("Bay".to_string()).shape(),
            MeasureShape::Detailed
        );
    }

    #[test]
    fn test_transom_eligibility() {
        assert!(WindowType::SingleHung.transom_eligible());
        assert!(WindowType::Picture.transom_eligible());
        assert!(!WindowType::Round.transom_eligible());
        assert!(!WindowType::Other("Bay".to_string()).transom_eligible());
    }

    #[test]
    fn test_name_round_trip() {
        for t in WindowType::known() {
            assert_eq!(WindowType::parse(t.name()), Some(t.clone()));
        }
        assert_eq!(WindowType::Other("Bay".to_string()).name(), "Bay");
    }

    #[test]
    fn test_serde_as_name() {
        let json = serde_json::to_string(&WindowType::HalfRound).unwrap();
        assert_eq!(json, "\"Half-Round\"");
        let t: WindowType = serde_json::from_str("\"Garden\"").unwrap();
        assert_eq!(t, WindowType::Other("Garden".to_string()));
    }
}
