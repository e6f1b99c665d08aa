use super::item::Item;

/// Derived spending figures for the current list. Always recomputed from
/// scratch; nothing here is ever persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSummary {
    pub spent: f64,
    pub tax: f64,
    pub total_spent: f64,
    /// May be negative: overspending is representable, not clamped.
    pub remaining: f64,
}

impl BudgetSummary {
    /// Compute spent/tax/remaining over `items`.
    ///
    /// `tax_rate_percent` is clamped to 0–100; NaN is treated as 0, matching
    /// how the UI treats an unparseable rate field. Unpriced items count as
    /// zero spend.
    pub fn compute(items: &[Item], budget_limit: f64, tax_rate_percent: f64) -> Self {
        let rate = if tax_rate_percent.is_nan() {
            0.0
        } else {
            tax_rate_percent.clamp(0.0, 100.0)
        };

        let spent: f64 = items.iter().filter_map(|item| item.price).sum();
        let tax = spent * (rate / 100.0);
        let total_spent = spent + tax;

        Self {
            spent,
            tax,
            total_spent,
            remaining: budget_limit - total_spent,
        }
    }

    pub fn over_budget(&self) -> bool {
        self.remaining < 0.0
    }
}

/// Format an amount for display with two decimal places, e.g. `$33.00`.
/// The only place rounding happens.
pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(name: &str, price: f64) -> Item {
        Item::new(name).with_price(price)
    }

    #[test]
    fn worked_example() {
        let items = vec![priced("Bread", 10.00), priced("Cheese", 20.00)];
        let summary = BudgetSummary::compute(&items, 50.0, 10.0);
        assert_eq!(summary.spent, 30.00);
        assert_eq!(summary.tax, 3.00);
        assert_eq!(summary.total_spent, 33.00);
        assert_eq!(summary.remaining, 17.00);
        assert!(!summary.over_budget());
    }

    #[test]
    fn overspend_goes_negative() {
        let items = vec![priced("Roast", 60.0)];
        let summary = BudgetSummary::compute(&items, 50.0, 0.0);
        assert_eq!(summary.remaining, -10.0);
        assert!(summary.over_budget());
    }

    #[test]
    fn unpriced_items_count_as_zero() {
        let items = vec![Item::new("Napkins"), priced("Juice", 5.0)];
        let summary = BudgetSummary::compute(&items, 20.0, 0.0);
        assert_eq!(summary.spent, 5.0);
    }

    #[test]
    fn empty_list_spends_nothing() {
        let summary = BudgetSummary::compute(&[], 50.0, 10.0);
        assert_eq!(summary.total_spent, 0.0);
        assert_eq!(summary.remaining, 50.0);
    }

    #[test]
    fn rate_is_clamped() {
        let items = vec![priced("Eggs", 10.0)];
        assert_eq!(BudgetSummary::compute(&items, 0.0, -5.0).tax, 0.0);
        assert_eq!(BudgetSummary::compute(&items, 0.0, 250.0).tax, 10.0);
        assert_eq!(BudgetSummary::compute(&items, 0.0, f64::NAN).tax, 0.0);
    }

    #[test]
    fn display_rounds_to_cents() {
        assert_eq!(format_amount(33.0), "$33.00");
        assert_eq!(format_amount(10.0 / 3.0), "$3.33");
        assert_eq!(format_amount(-12.5), "$-12.50");
    }
}
