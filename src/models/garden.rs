use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::DimensionError,
    models::{plant::PlantId, Coordinate, Matrix},
};

pub const MIN_DIMENSION: usize = 1;
pub const MAX_DIMENSION: usize = 12;

/// Label shown for a cell with nothing planted.
pub const EMPTY_CELL_LABEL: &str = "—";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Cell {
    /// Always serialised, `null` when nothing is planted.
    pub plant: Option<PlantId>,
}

impl Cell {
    pub fn label(&self) -> &'static str {
        self.plant.map_or(EMPTY_CELL_LABEL, PlantId::emoji)
    }
}

/// Validated grid dimensions, each within `MIN_DIMENSION..=MAX_DIMENSION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    rows: usize,
    cols: usize,
}

impl GridSize {
    pub const DEFAULT: GridSize = GridSize { rows: 4, cols: 4 };

    pub fn new(rows: usize, cols: usize) -> Result<Self, DimensionError> {
        let range = MIN_DIMENSION..=MAX_DIMENSION;
        if !range.contains(&rows) || !range.contains(&cols) {
            return Err(DimensionError { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GardenGrid {
    pub rows: usize,
    pub cols: usize,
    #[schema(value_type = Vec<Vec<Cell>>)]
    pub cells: Matrix<Cell>,
}

impl GardenGrid {
    /// A `rows` × `cols` grid with nothing planted.
    pub fn new(rows: usize, cols: usize) -> Self {
        let cells = vec![vec![Cell::default(); cols]; rows];
        Self { rows, cols, cells }
    }

    pub fn with_size(size: GridSize) -> Self {
        Self::new(size.rows(), size.cols())
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// Overwrites the plant of one cell. The remove marker clears the cell.
    ///
    /// # Panics
    /// When `(row, col)` lies outside the grid.
    pub fn set_cell(&mut self, row: usize, col: usize, plant: Option<PlantId>) {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) is outside a {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[row][col].plant = plant.filter(|p| !p.is_remove());
    }

    /// Recreates the grid when the dimensions change, dropping every plant.
    /// Returns whether the grid was recreated.
    pub fn resize(&mut self, size: GridSize) -> bool {
        if size.rows() == self.rows && size.cols() == self.cols {
            return false;
        }
        *self = Self::with_size(size);
        true
    }

    pub fn planted(&self) -> Vec<(Coordinate, PlantId)> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells.iter().enumerate().filter_map(move |(col, cell)| {
                    cell.plant.map(|p| (Coordinate { row, col }, p))
                })
            })
            .collect()
    }

    pub fn labels(&self) -> Matrix<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.label().to_string()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_has_requested_shape_and_no_plants() {
        for rows in MIN_DIMENSION..=MAX_DIMENSION {
            for cols in MIN_DIMENSION..=MAX_DIMENSION {
                let grid = GardenGrid::new(rows, cols);
                assert_eq!(grid.cells.len(), rows);
                assert!(grid.cells.iter().all(|r| r.len() == cols));
                assert!(grid.planted().is_empty(), "{rows}x{cols} grid must start empty");
            }
        }
    }

    #[test]
    fn test_grid_size_rejects_out_of_range() {
        assert_eq!(GridSize::new(0, 4), Err(DimensionError { rows: 0, cols: 4 }));
        assert_eq!(GridSize::new(4, 13), Err(DimensionError { rows: 4, cols: 13 }));
        assert!(GridSize::new(12, 1).is_ok());
    }

    #[test]
    fn test_set_cell_overwrites_unconditionally() {
        let mut grid = GardenGrid::new(2, 3);
        grid.set_cell(1, 2, Some(PlantId::Basil));
        grid.set_cell(1, 2, Some(PlantId::Potato));
        assert_eq!(grid.get(1, 2).unwrap().plant, Some(PlantId::Potato));
        grid.set_cell(1, 2, None);
        assert_eq!(grid.get(1, 2).unwrap().plant, None);
    }

    #[test]
    fn test_set_cell_with_remove_marker_clears() {
        let mut grid = GardenGrid::new(2, 2);
        grid.set_cell(0, 0, Some(PlantId::Tomato));
        grid.set_cell(0, 0, Some(PlantId::Empty));
        grid.set_cell(1, 1, Some(PlantId::Empty));
        assert_eq!(grid, GardenGrid::new(2, 2));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_set_cell_out_of_range_panics() {
        let mut grid = GardenGrid::new(2, 2);
        grid.set_cell(2, 0, Some(PlantId::Tomato));
    }

    #[test]
    fn test_resize_discards_plants() {
        let mut grid = GardenGrid::new(3, 3);
        grid.set_cell(0, 0, Some(PlantId::Tomato));
        assert!(grid.resize(GridSize::new(3, 5).unwrap()));
        assert_eq!((grid.rows, grid.cols), (3, 5));
        assert!(grid.planted().is_empty());
    }

    #[test]
    fn test_resize_to_same_size_keeps_plants() {
        let mut grid = GardenGrid::new(3, 3);
        grid.set_cell(2, 1, Some(PlantId::Carrot));
        assert!(!grid.resize(GridSize::new(3, 3).unwrap()));
        assert_eq!(
            grid.planted(),
            vec![(Coordinate { row: 2, col: 1 }, PlantId::Carrot)]
        );
    }

    #[test]
    fn test_labels_use_emoji_or_dash() {
        let mut grid = GardenGrid::new(1, 2);
        grid.set_cell(0, 1, Some(PlantId::Tomato));
        assert_eq!(grid.labels(), vec![vec!["—".to_string(), "🍅".to_string()]]);
    }

    #[test]
    fn test_empty_cell_serialises_null_plant() {
        let json = serde_json::to_value(Cell::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "plant": null }));
    }
}
