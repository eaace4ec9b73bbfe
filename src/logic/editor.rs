use crate::models::{garden::GardenGrid, plant::PlantId};

/// Writes `selection` into the cell at `(row, col)`, or clears the cell when
/// the remove marker is selected. Returns the cell's new plant.
///
/// # Panics
/// When `(row, col)` lies outside the grid.
pub fn apply_selection(
    grid: &mut GardenGrid,
    row: usize,
    col: usize,
    selection: PlantId,
) -> Option<PlantId> {
    let plant = (!selection.is_remove()).then_some(selection);
    grid.set_cell(row, col, plant);
    plant
}
