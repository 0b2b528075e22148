//! Domain models for selectable registry items and their grid placement.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Position of a cell in the item grid. Items are identified by position,
/// not by label (labels may repeat).
pub struct GridPos {
    pub column: u32,
    pub row: u32,
}

impl GridPos {
    pub fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// One selectable entry in the registry. `locked` becomes true once a guest
/// has claimed the item and stays true until the list is reset.
pub struct Item {
    pub label: String,
    pub pos: GridPos,
    pub selected: bool,
    pub locked: bool,
}

impl Item {
    pub fn new(label: impl Into<String>, pos: GridPos) -> Self {
        Self {
            label: label.into(),
            pos,
            selected: false,
            locked: false,
        }
    }

    /// True when the item would be recorded by the next submission.
    pub fn is_claimable(&self) -> bool {
        self.selected && !self.locked
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// A slot in the layout grid: either an item or a blank separator line that
/// occupies a row without holding an item.
pub enum Cell {
    Item(Item),
    Separator(GridPos),
}

impl Cell {
    pub fn pos(&self) -> GridPos {
        match self {
            Cell::Item(item) => item.pos,
            Cell::Separator(pos) => *pos,
        }
    }

    pub fn as_item(&self) -> Option<&Item> {
        match self {
            Cell::Item(item) => Some(item),
            Cell::Separator(_) => None,
        }
    }

    pub fn as_item_mut(&mut self) -> Option<&mut Item> {
        match self {
            Cell::Item(item) => Some(item),
            Cell::Separator(_) => None,
        }
    }
}
