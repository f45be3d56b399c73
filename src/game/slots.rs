//! Shelf construction.
//!
//! Two strategies fill the `rows × columns` shelf:
//! - [`ShelfMode::Random`]: every target once, uniform filler draws, then a full shuffle.
//! - [`ShelfMode::Organized`]: row-by-row runs of the same product (2..=5 wide, a lone cell
//!   only when nothing else fits), with each target placed as exactly one run and spread so
//!   rows are not skipped while targets remain.

use std::collections::{HashSet, VecDeque};

use rand::Rng;

use super::shuffle::{shuffle, shuffle_in_place};
use crate::model::{Catalog, MAX_RUN, Product, ShelfLayout, ShelfMode, runs_in};

pub fn generate<R: Rng + ?Sized>(
    targets: &[Product],
    mode: ShelfMode,
    catalog: &Catalog,
    layout: &ShelfLayout,
    rng: &mut R,
) -> Vec<Product> {
    match mode {
        ShelfMode::Random => random_shelf(targets, catalog, layout, rng),
        ShelfMode::Organized => organized_shelf(targets, catalog, layout, rng),
    }
}

fn random_product<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Product {
    let products = catalog.products();
    products[rng.gen_range(0..products.len())].clone()
}

fn random_shelf<R: Rng + ?Sized>(
    targets: &[Product],
    catalog: &Catalog,
    layout: &ShelfLayout,
    rng: &mut R,
) -> Vec<Product> {
    let capacity = layout.capacity();
    let mut slots: Vec<Product> = Vec::with_capacity(capacity.max(targets.len()));
    slots.extend(targets.iter().cloned());
    while slots.len() < capacity {
        slots.push(random_product(catalog, rng));
    }
    shuffle_in_place(&mut slots, rng);
    slots
}

/// Non-target products handed out in a shuffled rotation.
struct OptionalPool {
    items: Vec<Product>,
    cursor: usize,
}

impl OptionalPool {
    fn new<R: Rng + ?Sized>(catalog: &Catalog, required: &HashSet<&str>, rng: &mut R) -> Self {
        let mut items: Vec<Product> = catalog
            .products()
            .iter()
            .filter(|p| !required.contains(p.id.as_str()))
            .cloned()
            .collect();
        if items.is_empty() {
            items = catalog.products().to_vec();
        }
        shuffle_in_place(&mut items, rng);
        Self { items, cursor: 0 }
    }

    /// Next product in rotation, skipping `blocked` whenever another product exists.
    fn draw<R: Rng + ?Sized>(&mut self, blocked: Option<&str>, rng: &mut R) -> Product {
        for _ in 0..=self.items.len() {
            if self.cursor >= self.items.len() {
                shuffle_in_place(&mut self.items, rng);
                self.cursor = 0;
            }
            let candidate = &self.items[self.cursor];
            self.cursor += 1;
            if self.items.len() == 1 || blocked != Some(candidate.id.as_str()) {
                return candidate.clone();
            }
        }
        self.items[0].clone()
    }
}

/// Run width for the next placement.
///
/// Sizes that would strand a single cell at the end of the row are avoided unless the
/// run itself fills the row. `reserve` targets must still fit in the cells this run
/// leaves in the row; when the usual sizes leave too little room the run shrinks, down
/// to a lone cell if need be.
fn group_size<R: Rng + ?Sized>(
    slots_left: usize,
    required: bool,
    reserve: usize,
    rng: &mut R,
) -> usize {
    let max = MAX_RUN.min(slots_left);
    let min = (if required && slots_left > 2 { 2 } else { 1 }).min(max);
    let leaves_orphan = |size: usize| slots_left - size == 1;
    let leaves_room = |size: usize| runs_in(slots_left - size) >= reserve;

    let candidates: Vec<usize> = (min..=max)
        .filter(|&size| !leaves_orphan(size) && leaves_room(size))
        .collect();
    if !candidates.is_empty() {
        return candidates[rng.gen_range(0..candidates.len())];
    }
    (1..=max)
        .rev()
        .find(|&size| !leaves_orphan(size) && leaves_room(size))
        .or_else(|| (1..=max).rev().find(|&size| leaves_room(size)))
        .unwrap_or(1)
}

fn organized_shelf<R: Rng + ?Sized>(
    targets: &[Product],
    catalog: &Catalog,
    layout: &ShelfLayout,
    rng: &mut R,
) -> Vec<Product> {
    let capacity = layout.capacity();

    let mut seen = HashSet::new();
    let unique: Vec<Product> = targets
        .iter()
        .filter(|p| seen.insert(p.id.as_str()))
        .cloned()
        .collect();
    let mut pending: VecDeque<Product> = shuffle(&unique, rng).into();
    let mut pool = OptionalPool::new(catalog, &seen, rng);

    let mut slots: Vec<Product> = Vec::with_capacity(capacity);
    let mut previous_row_last: Option<Product> = None;
    let row_room = runs_in(layout.columns);

    for row in 0..layout.rows {
        let rows_after = layout.rows - row - 1;
        let mut slots_left = layout.columns;
        let mut row_last: Option<Product> = None;

        while slots_left > 0 {
            if slots_left == 1 {
                let product = if pending.len() > rows_after {
                    pending.pop_front()
                } else {
                    None
                };
                let product = match (product, &row_last) {
                    (Some(required), _) => required,
                    (None, Some(last)) => last.clone(),
                    (None, None) => {
                        let blocked = previous_row_last.as_ref().map(|p| p.id.as_str());
                        pool.draw(blocked, rng)
                    }
                };
                slots.push(product.clone());
                row_last = Some(product);
                slots_left = 0;
                continue;
            }

            let required =
                !pending.is_empty() && (row_last.is_none() || pending.len() > rows_after);
            let product = if required { pending.pop_front() } else { None };
            let product = match product {
                Some(p) => p,
                None => {
                    let blocked = row_last
                        .as_ref()
                        .or(previous_row_last.as_ref())
                        .map(|p| p.id.as_str());
                    pool.draw(blocked, rng)
                }
            };

            // Pending targets the later rows cannot seat must go in this one.
            let reserve = pending.len().saturating_sub(rows_after * row_room);
            let size = group_size(slots_left, required, reserve, rng);
            for _ in 0..size {
                slots.push(product.clone());
            }
            slots_left -= size;
            row_last = Some(product);
        }

        previous_row_last = row_last;
    }

    // Only layouts `Catalog::new` rejects get here; keep the targets findable and the
    // shelf at its size by taking over the last cells.
    if !pending.is_empty() {
        log::warn!("{} targets left after building the shelf", pending.len());
        let start = slots.len().saturating_sub(pending.len());
        for (slot, target) in slots[start..].iter_mut().zip(pending.drain(..)) {
            *slot = target;
        }
    }
    while slots.len() < capacity {
        slots.push(random_product(catalog, rng));
    }
    slots
}
