//! Grid snapping precision for drawings
//!
//! Replaces the host's drawing-layer precision: with the snap tool active,
//! points snap to grid vertices (and hex centers); otherwise precision scales
//! with the grid size so fine adjustments stay possible on large grids.

use crate::Error;

/// Host grid layouts, by their numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GridType {
    /// No grid
    Gridless = 0,
    /// Square grid
    Square = 1,
    /// Hex grid, odd rows shifted
    HexOddR = 2,
    /// Hex grid, even rows shifted
    HexEvenR = 3,
    /// Hex grid, odd columns shifted
    HexOddQ = 4,
    /// Hex grid, even columns shifted
    HexEvenQ = 5,
}

impl GridType {
    /// Whether this is one of the hex layouts
    pub fn is_hex(self) -> bool {
        self as u8 > GridType::Square as u8
    }
}

impl TryFrom<u8> for GridType {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(GridType::Gridless),
            1 => Ok(GridType::Square),
            2 => Ok(GridType::HexOddR),
            3 => Ok(GridType::HexEvenR),
            4 => Ok(GridType::HexOddQ),
            5 => Ok(GridType::HexEvenQ),
            other => Err(Error::UnknownGridType(other)),
        }
    }
}

/// Canvas grid state the precision depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridState {
    /// Grid layout
    pub grid_type: GridType,
    /// Grid cell size in pixels
    pub size: u32,
    /// Snap tool toggled on in the drawing controls
    pub force_snap: bool,
}

/// Snapping precision for drawing placement
pub fn grid_precision(grid: &GridState) -> u32 {
    if grid.force_snap {
        return if grid.grid_type.is_hex() { 5 } else { 2 };
    }
    match grid.size {
        s if s >= 128 => 16,
        s if s >= 64 => 8,
        s if s >= 32 => 4,
        _ => 1,
    }
}
