use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plants the palette offers. `Empty` is the remove marker: editing a cell
/// with it selected clears the cell instead of planting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlantId {
    #[default]
    Tomato,
    Basil,
    Marigold,
    Potato,
    Carrot,
    Lettuce,
    Pepper,
    Empty,
}

/// Palette order, as shown to the user.
pub const PALETTE: [PlantId; 8] = [
    PlantId::Tomato,
    PlantId::Basil,
    PlantId::Marigold,
    PlantId::Potato,
    PlantId::Carrot,
    PlantId::Lettuce,
    PlantId::Pepper,
    PlantId::Empty,
];

impl PlantId {
    pub fn as_str(self) -> &'static str {
        match self {
            PlantId::Tomato => "tomato",
            PlantId::Basil => "basil",
            PlantId::Marigold => "marigold",
            PlantId::Potato => "potato",
            PlantId::Carrot => "carrot",
            PlantId::Lettuce => "lettuce",
            PlantId::Pepper => "pepper",
            PlantId::Empty => "empty",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlantId::Tomato => "Tomato",
            PlantId::Basil => "Basil",
            PlantId::Marigold => "Marigold",
            PlantId::Potato => "Potato",
            PlantId::Carrot => "Carrot",
            PlantId::Lettuce => "Lettuce",
            PlantId::Pepper => "Pepper",
            PlantId::Empty => "Remove",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            PlantId::Tomato => "🍅",
            PlantId::Basil => "🌿",
            PlantId::Marigold => "🌼",
            PlantId::Potato => "🥔",
            PlantId::Carrot => "🥕",
            PlantId::Lettuce => "🥬",
            PlantId::Pepper => "🌶️",
            PlantId::Empty => "✖️",
        }
    }

    /// True for the remove marker.
    pub fn is_remove(self) -> bool {
        self == PlantId::Empty
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlantId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PALETTE
            .iter()
            .copied()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| format!("Unknown plant '{s}'."))
    }
}

/// One palette button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaletteEntry {
    pub id: PlantId,
    pub label: String,
    pub emoji: String,
}

impl From<PlantId> for PaletteEntry {
    fn from(id: PlantId) -> Self {
        Self {
            id,
            label: id.label().into(),
            emoji: id.emoji().into(),
        }
    }
}

pub fn palette() -> Vec<PaletteEntry> {
    PALETTE.iter().copied().map(PaletteEntry::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_contains_every_plant_once() {
        let entries = palette();
        assert_eq!(entries.len(), 8);
        for id in PALETTE {
            assert_eq!(entries.iter().filter(|e| e.id == id).count(), 1, "{id} listed once");
        }
    }

    #[test]
    fn test_remove_marker_is_last_and_labelled() {
        let last = palette().pop().unwrap();
        assert_eq!(last.id, PlantId::Empty);
        assert_eq!(last.label, "Remove");
        assert!(last.id.is_remove());
        assert!(!PlantId::Tomato.is_remove());
    }

    #[test]
    fn test_serialises_lowercase() {
        assert_eq!(serde_json::to_string(&PlantId::Marigold).unwrap(), "\"marigold\"");
        let parsed: PlantId = serde_json::from_str("\"empty\"").unwrap();
        assert_eq!(parsed, PlantId::Empty);
    }

    #[test]
    fn test_from_str_ignores_case_and_whitespace() {
        assert_eq!(" Basil ".parse::<PlantId>(), Ok(PlantId::Basil));
        assert!("cactus".parse::<PlantId>().is_err());
    }

    #[test]
    fn test_default_selection_is_tomato() {
        assert_eq!(PlantId::default(), PlantId::Tomato);
    }
}
