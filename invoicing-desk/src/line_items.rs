//! Working set of invoice lines and the current row selection.

use crate::models::LineItem;
use crate::power::normalize_power;
use crate::services::metrics::LINE_ITEMS_ADDED;
use desk_core::{DeskError, DeskResult};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Structural change to the line-item list, delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemsEvent {
    Added { index: usize },
    Removed { index: usize },
    Cleared,
    SelectionChanged { selected: Option<usize> },
}

type Listener = Box<dyn FnMut(&ItemsEvent) + Send>;

/// Ordered invoice lines plus an optional selected row.
///
/// Selection is reset whenever the list is cleared or the selected row removed.
#[derive(Default)]
pub struct LineItemManager {
    items: Vec<LineItem>,
    selected: Option<usize>,
    listeners: Vec<Listener>,
}

impl LineItemManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change listener (e.g. a view that re-renders).
    pub fn subscribe(&mut self, listener: impl FnMut(&ItemsEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn list(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Validate raw input and append a new line.
    ///
    /// Description must be non-blank, quantity an integer and price a number.
    /// Power is normalized and never rejected.
    pub fn add_item(
        &mut self,
        description: &str,
        raw_power: &str,
        quantity: &str,
        unit_price: &str,
    ) -> DeskResult<&LineItem> {
        let description = description.trim();
        let quantity = quantity.trim().parse::<i64>().ok();
        let unit_price = Decimal::from_str(unit_price.trim()).ok();

        let (quantity, unit_price) = match (description.is_empty(), quantity, unit_price) {
            (false, Some(q), Some(p)) => (q, p),
            _ => return Err(DeskError::validation("Enter valid item details")),
        };

        // The new amount and the running total must both stay representable.
        let item = LineItem::new(
            description.to_string(),
            normalize_power(raw_power),
            quantity,
            unit_price,
        )
        .filter(|item| self.checked_total().and_then(|t| t.checked_add(item.amount)).is_some())
        .ok_or_else(|| DeskError::validation("Enter valid item details"))?;
        tracing::debug!(
            description = %item.description,
            power = %item.power,
            quantity = item.quantity,
            amount = %item.amount,
            "Line item added"
        );

        self.items.push(item);
        LINE_ITEMS_ADDED.inc();

        let index = self.items.len() - 1;
        self.emit(ItemsEvent::Added { index });
        Ok(&self.items[index])
    }

    /// Select `index` if it names an existing row. Returns whether the selection changed.
    pub fn select_row(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.selected = Some(index);
        self.emit(ItemsEvent::SelectionChanged {
            selected: self.selected,
        });
        true
    }

    /// Remove the selected row.
    pub fn remove_selected(&mut self) -> DeskResult<LineItem> {
        let index = self.selected.ok_or(DeskError::NoSelection)?;
        let removed = self.items.remove(index);
        self.selected = None;
        self.emit(ItemsEvent::Removed { index });
        Ok(removed)
    }

    /// Empty the list once `confirm` agrees. Returns whether anything was cleared.
    pub fn clear_all(&mut self, confirm: impl FnOnce() -> bool) -> bool {
        if !confirm() {
            return false;
        }
        self.reset();
        true
    }

    /// Empty the list without asking, as after a successful submission.
    pub fn reset(&mut self) {
        self.items.clear();
        self.selected = None;
        self.emit(ItemsEvent::Cleared);
    }

    /// Sum of line amounts, rounded to two decimals. Never cached.
    ///
    /// Saturates at `Decimal::MAX`/`Decimal::MIN` if a removal leaves lines whose
    /// sum no longer fits.
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.amount))
            .round_dp(2)
    }

    fn checked_total(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.amount))
    }

    fn emit(&mut self, event: ItemsEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn manager_with(lines: &[(&str, &str, &str, &str)]) -> LineItemManager {
        let mut manager = LineItemManager::new();
        for (desc, power, qty, price) in lines {
            manager.add_item(desc, power, qty, price).unwrap();
        }
        manager
    }

    #[test]
    fn add_item_appends_one_line_with_exact_amount() {
        let mut manager = LineItemManager::new();
        let item = manager.add_item("Single Vision", "10", "3", "0.10").unwrap();

        assert_eq!(item.description, "Single Vision");
        assert_eq!(item.power, "10.0D");
        assert_eq!(item.quantity, 3);
        assert_eq!(item.amount, Decimal::new(30, 2));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn add_item_rejects_blank_description_or_bad_numbers() {
        let mut manager = LineItemManager::new();

        for (desc, qty, price) in [("  ", "1", "10"), ("Lens", "two", "10"), ("Lens", "1", "ten")] {
            let err = manager.add_item(desc, "", qty, price).unwrap_err();
            assert!(matches!(err, DeskError::Validation(_)));
            assert_eq!(err.user_message(), "Enter valid item details");
        }
        assert!(manager.is_empty());
    }

    #[test]
    fn add_item_rejects_amount_that_overflows() {
        let mut manager = LineItemManager::new();
        let err = manager
            .add_item("Lens", "", "9223372036854775807", "79228162514264337593543950335")
            .unwrap_err();
        assert_eq!(err.user_message(), "Enter valid item details");
        assert!(manager.is_empty());
    }

    #[test]
    fn add_item_rejects_line_that_would_overflow_total() {
        let mut manager = manager_with(&[("Lens", "", "1", "79228162514264337593543950335")]);
        let err = manager
            .add_item("Lens", "", "1", "79228162514264337593543950335")
            .unwrap_err();
        assert!(matches!(err, DeskError::Validation(_)));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.total(), Decimal::MAX);
    }

    #[test]
    fn total_saturates_when_removal_unbalances_lines() {
        let mut manager = manager_with(&[
            ("A", "", "1", "79228162514264337593543950335"),
            ("B", "", "-1", "79228162514264337593543950335"),
            ("C", "", "1", "79228162514264337593543950335"),
        ]);
        manager.select_row(1);
        manager.remove_selected().unwrap();
        assert_eq!(manager.total(), Decimal::MAX);
    }

    #[test]
    fn add_item_normalizes_power_with_trailing_text() {
        let mut manager = LineItemManager::new();
        let item = manager.add_item("Lens", "+1.25 sph", "1", "10").unwrap();
        assert_eq!(item.power, "1.25D");
    }

    #[test]
    fn add_item_keeps_unparseable_power() {
        let mut manager = LineItemManager::new();
        let item = manager.add_item("Frame", "tinted", "1", "900").unwrap();
        assert_eq!(item.power, "tinted");
    }

    #[test]
    fn identical_lines_coexist() {
        let manager = manager_with(&[("Lens", "1", "1", "5"), ("Lens", "1", "1", "5")]);
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.list()[0], manager.list()[1]);
    }

    #[test]
    fn total_sums_amounts_to_two_decimals() {
        let manager = manager_with(&[("A", "", "1", "10.00"), ("B", "", "1", "5.50")]);
        assert_eq!(manager.total(), Decimal::new(1550, 2));
        assert_eq!(format!("{:.2}", manager.total()), "15.50");
    }

    #[test]
    fn total_of_empty_list_is_zero() {
        assert_eq!(LineItemManager::new().total(), Decimal::ZERO);
    }

    #[test]
    fn remove_without_selection_fails_and_keeps_list() {
        let mut manager = manager_with(&[("A", "", "1", "1")]);
        assert!(matches!(
            manager.remove_selected(),
            Err(DeskError::NoSelection)
        ));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn remove_selected_drops_row_and_resets_selection() {
        let mut manager = manager_with(&[("A", "", "1", "1"), ("B", "", "1", "2")]);
        assert!(manager.select_row(0));

        let removed = manager.remove_selected().unwrap();
        assert_eq!(removed.description, "A");
        assert_eq!(manager.list()[0].description, "B");
        assert_eq!(manager.selected(), None);
    }

    #[test]
    fn select_row_ignores_out_of_range_index() {
        let mut manager = manager_with(&[("A", "", "1", "1")]);
        assert!(!manager.select_row(1));
        assert_eq!(manager.selected(), None);
    }

    #[test]
    fn clear_all_requires_confirmation() {
        let mut manager = manager_with(&[("A", "", "1", "1")]);
        manager.select_row(0);

        assert!(!manager.clear_all(|| false));
        assert_eq!(manager.len(), 1);

        assert!(manager.clear_all(|| true));
        assert!(manager.is_empty());
        assert_eq!(manager.selected(), None);
    }

    #[test]
    fn listeners_see_every_structural_change() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut manager = LineItemManager::new();
        let sink = Arc::clone(&seen);
        manager.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

        manager.add_item("A", "", "1", "1").unwrap();
        manager.select_row(0);
        manager.remove_selected().unwrap();
        manager.reset();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                ItemsEvent::Added { index: 0 },
                ItemsEvent::SelectionChanged { selected: Some(0) },
                ItemsEvent::Removed { index: 0 },
                ItemsEvent::Cleared,
            ]
        );
    }
}
