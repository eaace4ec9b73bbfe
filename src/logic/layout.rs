use serde::{Deserialize, Serialize};

use crate::{
    error::LayoutError,
    models::{
        garden::{Cell, GardenGrid, GridSize},
        plant::PlantId,
        Matrix,
    },
};

/// File name offered for the layout download.
pub const LAYOUT_FILE_NAME: &str = "garden-layout.json";

/// On-disk shape of an exported layout.
#[derive(Debug, Serialize)]
struct LayoutRef<'a> {
    rows: usize,
    cols: usize,
    cells: &'a Matrix<Cell>,
}

#[derive(Debug, Deserialize)]
struct LayoutDoc {
    rows: usize,
    cols: usize,
    cells: Matrix<Cell>,
}

/// Serialises the grid as `{"rows", "cols", "cells"}`, cells in row-major order.
pub fn export_layout(grid: &GardenGrid) -> String {
    let doc = LayoutRef {
        rows: grid.cells.len(),
        cols: grid.cells.first().map_or(0, Vec::len),
        cells: &grid.cells,
    };
    serde_json::to_string_pretty(&doc).expect("layout serialises")
}

/// Reads an exported layout back into a grid.
pub fn parse_layout(text: &str) -> Result<GardenGrid, LayoutError> {
    let doc: LayoutDoc = serde_json::from_str(text)?;
    let LayoutDoc { rows, cols, cells } = doc;

    GridSize::new(rows, cols)?;
    if cells.len() != rows {
        return Err(LayoutError::RowCount {
            expected: rows,
            found: cells.len(),
        });
    }
    if let Some((row, found)) = cells
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|(_, len)| *len != cols)
    {
        return Err(LayoutError::Shape {
            expected: rows,
            cols,
            row,
            found,
        });
    }

    let cells = cells
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| Cell {
                    plant: cell.plant.filter(|p| !p.is_remove()),
                })
                .collect()
        })
        .collect();
    Ok(GardenGrid { rows, cols, cells })
}
