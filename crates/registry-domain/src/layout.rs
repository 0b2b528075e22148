//! The parsed item grid and the registry wrapper around it.

use serde::{Deserialize, Serialize};

use crate::item::{Cell, GridPos, Item};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
/// Ordered collection of layout cells. The creation order of the cells is
/// the deterministic traversal used everywhere items are enumerated, in
/// particular when a submission records claimed items.
pub struct Layout {
    cells: Vec<Cell>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates items in creation order, skipping separators.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.cells.iter().filter_map(Cell::as_item)
    }

    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut Item> {
        self.cells.iter_mut().filter_map(Cell::as_item_mut)
    }

    pub fn item_count(&self) -> usize {
        self.items().count()
    }

    pub fn item_at(&self, pos: GridPos) -> Option<&Item> {
        self.items().find(|item| item.pos == pos)
    }

    pub fn item_at_mut(&mut self, pos: GridPos) -> Option<&mut Item> {
        self.items_mut().find(|item| item.pos == pos)
    }

    /// Number of columns the grid spans. Empty trailing columns created by
    /// consecutive column markers do not appear here since they hold no cell.
    pub fn column_count(&self) -> u32 {
        self.cells
            .iter()
            .map(|cell| cell.pos().column + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn any_selected(&self) -> bool {
        self.items().any(|item| item.selected)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// A fully parsed item list: the registry title plus the item grid.
pub struct Registry {
    pub title: String,
    pub layout: Layout,
}

impl Registry {
    pub fn new(title: impl Into<String>, layout: Layout) -> Self {
        Self {
            title: title.into(),
            layout,
        }
    }
}
