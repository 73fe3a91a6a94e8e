use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side the submitting player was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    White,
    Black,
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerColor::White => write!(f, "White"),
            PlayerColor::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_form_is_lowercase() {
        let color: PlayerColor = serde_json::from_str("\"white\"").unwrap();
        assert_eq!(color, PlayerColor::White);

        let color: PlayerColor = serde_json::from_str("\"black\"").unwrap();
        assert_eq!(color, PlayerColor::Black);

        assert!(serde_json::from_str::<PlayerColor>("\"red\"").is_err());
    }

    #[test]
    fn test_display_capitalized() {
        assert_eq!(PlayerColor::White.to_string(), "White");
        assert_eq!(PlayerColor::Black.to_string(), "Black");
    }
}
