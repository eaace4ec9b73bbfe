use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::ApiError,
    logic::{editor::apply_selection, responder::reply},
    models::{
        chat::{ChatLog, ChatMessage},
        garden::{GardenGrid, GridSize},
        plant::PlantId,
    },
};

pub type SessionId = u64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Urban,
    Rural,
}

/// What a fresh session starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionDefaults {
    pub size: GridSize,
    pub selection: PlantId,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            size: GridSize::DEFAULT,
            selection: PlantId::Tomato,
        }
    }
}

/// Everything one user works on: their grid, palette selection, chat
/// history and active mode. Sessions never share state.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub mode: Mode,
    pub grid: GardenGrid,
    pub selection: PlantId,
    pub chat: ChatLog,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(id: SessionId, defaults: SessionDefaults) -> Self {
        Self {
            id,
            mode: Mode::default(),
            grid: GardenGrid::with_size(defaults.size),
            selection: defaults.selection,
            chat: ChatLog::new(),
            created_at: Utc::now(),
        }
    }

    pub fn select(&mut self, plant: PlantId) {
        self.selection = plant;
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Applies the current selection to one cell.
    pub fn edit_cell(&mut self, row: usize, col: usize) -> Result<Option<PlantId>, ApiError> {
        if !self.grid.contains(row, col) {
            return Err(ApiError::CellOutOfBounds {
                row,
                col,
                rows: self.grid.rows,
                cols: self.grid.cols,
            });
        }
        Ok(apply_selection(&mut self.grid, row, col, self.selection))
    }

    /// Records the prompt and the canned reply; returns the reply.
    /// Only the empty string is refused.
    pub fn send(&mut self, prompt: &str) -> Result<&'static str, ApiError> {
        if prompt.is_empty() {
            return Err(ApiError::EmptyPrompt);
        }
        let answer = reply(prompt);
        self.chat.append(ChatMessage::user(prompt));
        self.chat.append(ChatMessage::assistant(answer));
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::responder::FALLBACK_ADVICE;

    fn session() -> Session {
        Session::new(1, SessionDefaults::default())
    }

    #[test]
    fn test_new_session_uses_defaults() {
        let s = session();
        assert_eq!((s.grid.rows, s.grid.cols), (4, 4));
        assert_eq!(s.selection, PlantId::Tomato);
        assert_eq!(s.mode, Mode::Urban);
        assert!(s.chat.is_empty());
    }

    #[test]
    fn test_edit_uses_latest_selection() {
        let mut s = session();
        s.select(PlantId::Basil);
        s.select(PlantId::Marigold);
        assert_eq!(s.edit_cell(0, 0).unwrap(), Some(PlantId::Marigold));
    }

    #[test]
    fn test_remove_selection_clears_populated_cell() {
        let mut s = session();
        s.edit_cell(2, 3).unwrap();
        s.select(PlantId::Empty);
        assert_eq!(s.edit_cell(2, 3).unwrap(), None);
        assert_eq!(s.grid.get(2, 3).unwrap().plant, None);
    }

    #[test]
    fn test_edit_outside_grid_is_rejected() {
        let mut s = session();
        assert!(matches!(
            s.edit_cell(4, 0),
            Err(ApiError::CellOutOfBounds { rows: 4, cols: 4, .. })
        ));
    }

    #[test]
    fn test_send_appends_prompt_then_reply() {
        let mut s = session();
        let answer = s.send("hello").unwrap();
        assert_eq!(answer, FALLBACK_ADVICE);
        assert_eq!(
            s.chat.messages(),
            &[ChatMessage::user("hello"), ChatMessage::assistant(FALLBACK_ADVICE)]
        );
    }

    #[test]
    fn test_empty_prompt_appends_nothing() {
        let mut s = session();
        assert!(matches!(s.send(""), Err(ApiError::EmptyPrompt)));
        assert!(s.chat.is_empty());
    }

    #[test]
    fn test_whitespace_prompt_gets_fallback_reply() {
        let mut s = session();
        assert_eq!(s.send("   ").unwrap(), FALLBACK_ADVICE);
        assert_eq!(
            s.chat.messages(),
            &[ChatMessage::user("   "), ChatMessage::assistant(FALLBACK_ADVICE)]
        );
    }
}
