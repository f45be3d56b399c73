//! Core data models for Shelf Finder.
//! Products, the catalog they come from, and the static shelf/timer configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Interval between countdown ticks.
pub const TICK_MS: u32 = 1000;
/// How long a wrong pick stays highlighted.
pub const WRONG_PICK_PULSE_MS: u32 = 350;
/// Longest run of one product the organized shelf will stack in a row.
pub const MAX_RUN: usize = 5;

const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.json");

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Unique key within the catalog.
    pub id: String,
    /// Label shown on the shopping list and used as the button label.
    pub name: String,
    /// Image reference, resolved by the page.
    pub image: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog is empty")]
    Empty,
    #[error("duplicate product id `{0}` in catalog")]
    DuplicateId(String),
    #[error("catalog has {found} products but a round needs {needed}")]
    TooSmall { needed: usize, found: usize },
    #[error("a {rows}x{columns} shelf holds at most {room} separate runs but a round needs {needed}")]
    LayoutTooSmall {
        rows: usize,
        columns: usize,
        room: usize,
        needed: usize,
    },
}

/// Fixed, ordered product list. Read-only once loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, layout: &ShelfLayout) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(products.len());
        for p in &products {
            if !seen.insert(p.id.as_str()) {
                return Err(CatalogError::DuplicateId(p.id.clone()));
            }
        }
        if products.len() < layout.target_count {
            return Err(CatalogError::TooSmall {
                needed: layout.target_count,
                found: products.len(),
            });
        }
        if layout.target_room() < layout.target_count {
            return Err(CatalogError::LayoutTooSmall {
                rows: layout.rows,
                columns: layout.columns,
                room: layout.target_room(),
                needed: layout.target_count,
            });
        }
        Ok(Self { products })
    }

    pub fn from_json(raw: &str, layout: &ShelfLayout) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(raw)?;
        Self::new(products, layout)
    }

    /// The catalog shipped with the game.
    pub fn builtin(layout: &ShelfLayout) -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG, layout)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfLayout {
    pub rows: usize,
    pub columns: usize,
    /// Products on the shopping list each round.
    pub target_count: usize,
}

impl ShelfLayout {
    pub fn capacity(&self) -> usize {
        self.rows * self.columns
    }

    /// Targets the organized shelf can seat, each as its own run.
    pub fn target_room(&self) -> usize {
        self.rows * runs_in(self.columns)
    }
}

/// Separate target runs that fit in `cells` consecutive cells of one row: a lone cell
/// takes one, wider stretches take runs of at least two.
pub fn runs_in(cells: usize) -> usize {
    if cells == 1 { 1 } else { cells / 2 }
}

impl Default for ShelfLayout {
    fn default() -> Self {
        Self {
            rows: 5,
            columns: 7,
            target_count: 5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBounds {
    pub default: u32,
    pub min: u32,
    pub max: u32,
}

impl Default for DurationBounds {
    fn default() -> Self {
        Self {
            default: 20,
            min: 5,
            max: 600,
        }
    }
}

/// Whether the shelf is shuffled freely or stacked into runs of the same product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShelfMode {
    Random,
    Organized,
}

impl ShelfMode {
    pub fn from_flag(organized: bool) -> Self {
        if organized { ShelfMode::Organized } else { ShelfMode::Random }
    }
}
