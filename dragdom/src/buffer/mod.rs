//! Off-screen cell grid the renderer paints into.

use crate::layout::Rect;
use crate::types::Rgb;

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
        }
    }
}

impl Cell {
    pub fn new(char: char) -> Self {
        Self {
            char,
            ..Default::default()
        }
    }
}

/// Row-major grid of cells. Writes outside the grid are dropped.
#[derive(Debug, Clone)]
pub struct Buffer {
    area: Rect,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            area: Rect::from_size(width, height),
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn width(&self) -> u16 {
        self.area.width
    }

    pub fn height(&self) -> u16 {
        self.area.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Run `f` on every cell of `rect` that lies inside the grid.
    pub fn fill_with(&mut self, rect: Rect, mut f: impl FnMut(&mut Cell)) {
        for y in rect.y..rect.bottom().min(self.height()) {
            for x in rect.x..rect.right().min(self.width()) {
                if let Some(i) = self.index(x, y) {
                    f(&mut self.cells[i]);
                }
            }
        }
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        self.area
            .contains(x, y)
            .then(|| y as usize * self.area.width as usize + x as usize)
    }

    /// Cells that differ from `other`, with their coordinates.
    /// Both buffers must be the same size.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let width = self.area.width as usize;
        self.cells
            .iter()
            .zip(&other.cells)
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| ((i % width) as u16, (i / width) as u16, cell))
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }
}
