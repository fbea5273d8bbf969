//! Division accumulation: the explicit state machine behind the row scan.
//!
//! At most one division is open at a time. Opening a new division commits the
//! previous one (if it collected any items), and `finish` commits the tail
//! the same way. Divisions that never collect an item are dropped, never
//! emitted.

use crate::model::{Division, LineItem};
use crate::normalize::round2;

struct OpenDivision {
    code: String,
    name: String,
    items: Vec<LineItem>,
}

/// Stateful accumulator grouping line items under their owning division
#[derive(Default)]
pub struct DivisionAccumulator {
    open: Option<OpenDivision>,
    closed: Vec<Division>,
}

impl DivisionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Code of the currently open division, if any
    pub fn current_code(&self) -> Option<&str> {
        self.open.as_ref().map(|d| d.code.as_str())
    }

    /// Open a division, committing whatever was open before.
    pub fn open_division(&mut self, code: String, name: String) {
        self.close_current();
        log::debug!("opened division {} {:?}", code, name);
        self.open = Some(OpenDivision {
            code,
            name,
            items: Vec::new(),
        });
    }

    /// Append an item to the open division; dropped when none is open
    /// (rows above the first division header are stray by definition).
    pub fn add_item(&mut self, item: LineItem) {
        match self.open.as_mut() {
            Some(division) => division.items.push(item),
            None => log::warn!("dropping item outside any division: {}", item.line_id),
        }
    }

    /// Commit the final open division and return all divisions in order of
    /// first appearance.
    pub fn finish(mut self) -> Vec<Division> {
        self.close_current();
        self.closed
    }

    fn close_current(&mut self) {
        let Some(open) = self.open.take() else { return };

        if open.items.is_empty() {
            log::debug!("division {} closed empty, dropping", open.code);
            return;
        }

        // A code that reappears later in the sheet extends the division it
        // already committed, keeping codes unique and order first-appearance.
        if let Some(existing) = self
            .closed
            .iter_mut()
            .find(|d| d.division_code == open.code)
        {
            existing.items.extend(open.items);
            existing.division_total =
                round2(existing.items.iter().map(|i| i.total_cost).sum());
            return;
        }

        let division_total = round2(open.items.iter().map(|i| i.total_cost).sum());
        log::debug!(
            "division {} total: {:.2} ({} items)",
            open.code,
            division_total,
            open.items.len()
        );
        self.closed.push(Division {
            division_code: open.code,
            division_name: open.name,
            items: open.items,
            division_total,
        });
    }
}
