use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod chat;
pub mod garden;
pub mod plant;
pub mod request;
pub mod session;

/// Convenience alias for a two-dimensional grid.
pub type Matrix<T> = Vec<Vec<T>>;

/// A zero-based (row, col) position within the garden grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}
