//! Budget evaluation
//!
//! Computes how much of each budget has been spent in its current period
//! window. Nothing here can fail: a budget without a usable category or
//! start date simply matches no transactions.

use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Reverse;
use std::fmt;

use crate::models::category::find_category_name;
use crate::models::{
    Budget, BudgetId, BudgetPeriodKind, Category, CategoryRef, PeriodWindow, Transaction,
};

use super::aggregate::sum;
use super::filter::TransactionFilter;

/// Name shown for a budget whose category cannot be resolved
pub const UNKNOWN_CATEGORY_LABEL: &str = "Category";

/// Percent of budget above which spending is a warning
pub const WARNING_THRESHOLD: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Percent of budget above which spending is critical
pub const CRITICAL_THRESHOLD: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

/// Color tier of a budget's progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Healthy,
    Warning,
    Critical,
}

impl BudgetTier {
    /// Tier for a (capped) percent-of-budget value
    pub fn for_percent(percent: Decimal) -> Self {
        if percent > CRITICAL_THRESHOLD {
            Self::Critical
        } else if percent > WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Healthy
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Derived spending status of one budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    /// The evaluated budget
    pub budget_id: BudgetId,
    /// Resolved category name
    pub category_name: String,
    /// Recurrence
    pub period: BudgetPeriodKind,
    /// The window spending was counted in
    pub window: Option<PeriodWindow>,
    /// Budgeted amount
    pub amount: Decimal,
    /// Spent in the window
    pub spent: Decimal,
    /// `amount - spent`; negative when over budget
    pub remaining: Decimal,
    /// Spent as percent of amount, capped at 100
    pub percent: Decimal,
}

impl BudgetStatus {
    /// Check if spending exceeds the budgeted amount
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_sign_negative() && !self.remaining.is_zero()
    }

    /// Progress color tier
    pub fn tier(&self) -> BudgetTier {
        BudgetTier::for_percent(self.percent)
    }
}

/// `spent / amount * 100` clamped to `[0, 100]`, or zero for a zero amount
///
/// Refunds can push `spent` below zero; the percent still never does.
pub fn capped_percent(spent: Decimal, amount: Decimal) -> Decimal {
    if amount.is_zero() {
        return Decimal::ZERO;
    }
    spent
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(amount))
        .unwrap_or(Decimal::ONE_HUNDRED)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

/// Evaluates budgets against a snapshot of transactions
pub struct BudgetEvaluator<'a> {
    transactions: &'a [Transaction],
    categories: &'a [Category],
}

impl<'a> BudgetEvaluator<'a> {
    /// Create an evaluator over already-fetched records
    pub fn new(transactions: &'a [Transaction], categories: &'a [Category]) -> Self {
        Self {
            transactions,
            categories,
        }
    }

    /// Display name of a budget's category
    ///
    /// Uses the inlined name, then the category list, then a placeholder.
    pub fn category_name(&self, budget: &Budget) -> String {
        let Some(category) = budget.category.as_ref() else {
            return UNKNOWN_CATEGORY_LABEL.to_string();
        };
        category
            .inline_name()
            .or_else(|| find_category_name(self.categories, category.id()))
            .unwrap_or(UNKNOWN_CATEGORY_LABEL)
            .to_string()
    }

    /// Spent amount in the budget's window
    pub fn spent(&self, budget: &Budget) -> Decimal {
        let (Some(category), Some(start_date)) = (budget.category.as_ref(), budget.start_date)
        else {
            return Decimal::ZERO;
        };
        let filter = TransactionFilter::new()
            .category(CategoryRef::id(category))
            .within_window(PeriodWindow::current(start_date, budget.period));
        sum(filter.apply(self.transactions))
    }

    /// Evaluate one budget
    pub fn evaluate(&self, budget: &Budget) -> BudgetStatus {
        let window = budget
            .start_date
            .map(|start| PeriodWindow::current(start, budget.period));
        let spent = self.spent(budget);
        let remaining = budget.amount.saturating_sub(spent);
        let percent = capped_percent(spent, budget.amount);

        tracing::debug!(
            budget = %budget.id,
            %spent,
            %remaining,
            %percent,
            "evaluated budget"
        );

        BudgetStatus {
            budget_id: budget.id,
            category_name: self.category_name(budget),
            period: budget.period,
            window,
            amount: budget.amount,
            spent,
            remaining,
            percent,
        }
    }

    /// Evaluate every budget, keeping their order
    pub fn evaluate_all(&self, budgets: &[Budget]) -> Vec<BudgetStatus> {
        budgets.iter().map(|b| self.evaluate(b)).collect()
    }
}

/// Evaluate one budget against a list of transactions
pub fn evaluate(budget: &Budget, transactions: &[Transaction], categories: &[Category]) -> BudgetStatus {
    BudgetEvaluator::new(transactions, categories).evaluate(budget)
}

/// The `limit` most recently created budgets, newest first
///
/// Budgets without a creation timestamp sort last, in their input order.
pub fn most_recent(budgets: &[Budget], limit: usize) -> Vec<&Budget> {
    let mut sorted: Vec<&Budget> = budgets.iter().collect();
    sorted.sort_by_key(|b| (b.created_at.is_none(), Reverse(b.created_at)));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, TransactionId, TransactionType};
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn expense(id: i64, category: i64, date: NaiveDate, amount: Decimal) -> Transaction {
        Transaction::new(TransactionId::new(id), TransactionType::Expense, date, amount)
            .with_category(CategoryId::new(category), "Food")
    }

    fn food_budget(amount: Decimal) -> Budget {
        Budget::new(
            BudgetId::new(1),
            CategoryId::new(1),
            amount,
            BudgetPeriodKind::Monthly,
            d(2025, 1, 1),
        )
    }

    fn categories() -> Vec<Category> {
        vec![Category::new(CategoryId::new(1), "Food", TransactionType::Expense)]
    }

    #[test]
    fn test_spent_within_monthly_window() {
        let txns = vec![
            expense(1, 1, d(2025, 1, 10), dec!(120)),
            expense(2, 1, d(2025, 1, 20), dec!(90)),
        ];
        let status = evaluate(&food_budget(dec!(500)), &txns, &categories());

        assert_eq!(status.spent, dec!(210));
        assert_eq!(status.remaining, dec!(290));
        assert_eq!(status.percent, dec!(42));
        assert_eq!(status.category_name, "Food");
        assert_eq!(status.tier(), BudgetTier::Healthy);
    }

    #[test]
    fn test_transactions_outside_window_are_excluded() {
        let txns = vec![
            expense(1, 1, d(2025, 1, 10), dec!(120)),
            expense(2, 1, d(2025, 2, 15), dec!(999)),
            expense(3, 1, d(2024, 12, 31), dec!(999)),
        ];
        let status = evaluate(&food_budget(dec!(500)), &txns, &categories());
        assert_eq!(status.spent, dec!(120));
    }

    #[test]
    fn test_other_categories_are_excluded() {
        let txns = vec![expense(1, 2, d(2025, 1, 10), dec!(120))];
        let status = evaluate(&food_budget(dec!(500)), &txns, &categories());
        assert_eq!(status.spent, Decimal::ZERO);
    }

    #[test]
    fn test_zero_amount_budget_has_zero_percent() {
        let txns = vec![expense(1, 1, d(2025, 1, 10), dec!(50))];
        let status = evaluate(&food_budget(Decimal::ZERO), &txns, &categories());
        assert_eq!(status.percent, Decimal::ZERO);
        assert_eq!(status.remaining, dec!(-50));
    }

    #[test]
    fn test_over_budget_saturates_percent() {
        let txns = vec![expense(1, 1, d(2025, 1, 10), dec!(750))];
        let status = evaluate(&food_budget(dec!(500)), &txns, &categories());

        assert_eq!(status.percent, dec!(100));
        assert_eq!(status.remaining, dec!(-250));
        assert!(status.is_over_budget());
        assert_eq!(status.tier(), BudgetTier::Critical);
    }

    #[test]
    fn test_refunds_never_push_percent_below_zero() {
        let txns = vec![
            expense(1, 1, d(2025, 1, 10), dec!(40)),
            expense(2, 1, d(2025, 1, 12), dec!(-90)),
        ];
        let status = evaluate(&food_budget(dec!(500)), &txns, &categories());

        assert_eq!(status.spent, dec!(-50));
        assert_eq!(status.remaining, dec!(550));
        assert_eq!(status.percent, Decimal::ZERO);
        assert_eq!(status.tier(), BudgetTier::Healthy);
        assert_eq!(capped_percent(dec!(10), dec!(-20)), Decimal::ZERO);
    }

    #[test]
    fn test_budget_started_long_ago_reports_nothing_spent_now() {
        let budget = Budget::new(
            BudgetId::new(1),
            CategoryId::new(1),
            dec!(500),
            BudgetPeriodKind::Monthly,
            d(2024, 10, 1),
        );
        let txns = vec![expense(1, 1, d(2025, 1, 10), dec!(120))];
        let status = evaluate(&budget, &txns, &categories());
        assert_eq!(status.spent, Decimal::ZERO);
        assert_eq!(status.window.map(|w| w.end), Some(d(2024, 11, 1)));
    }

    #[test]
    fn test_inline_category_matches_bare_transaction_category() {
        let mut budget = food_budget(dec!(100));
        budget.category = Some(CategoryRef::Inline {
            id: CategoryId::new(1),
            name: Some("Groceries".into()),
        });
        let txns = vec![expense(1, 1, d(2025, 1, 10), dec!(65))];
        let status = evaluate(&budget, &txns, &[]);

        assert_eq!(status.spent, dec!(65));
        assert_eq!(status.category_name, "Groceries");
        assert_eq!(status.tier(), BudgetTier::Warning);
    }

    #[test]
    fn test_missing_category_or_start_date_spends_nothing() {
        let txns = vec![expense(1, 1, d(2025, 1, 10), dec!(65))];

        let mut no_category = food_budget(dec!(100));
        no_category.category = None;
        let status = evaluate(&no_category, &txns, &categories());
        assert_eq!(status.spent, Decimal::ZERO);
        assert_eq!(status.category_name, UNKNOWN_CATEGORY_LABEL);

        let mut no_start = food_budget(dec!(100));
        no_start.start_date = None;
        let status = evaluate(&no_start, &txns, &categories());
        assert_eq!(status.spent, Decimal::ZERO);
        assert_eq!(status.window, None);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let txns = vec![expense(1, 1, d(2025, 1, 10), dec!(33.33))];
        let budget = food_budget(dec!(100));
        let cats = categories();
        assert_eq!(evaluate(&budget, &txns, &cats), evaluate(&budget, &txns, &cats));
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(BudgetTier::for_percent(dec!(60)), BudgetTier::Healthy);
        assert_eq!(BudgetTier::for_percent(dec!(60.1)), BudgetTier::Warning);
        assert_eq!(BudgetTier::for_percent(dec!(80)), BudgetTier::Warning);
        assert_eq!(BudgetTier::for_percent(dec!(80.1)), BudgetTier::Critical);
    }

    #[test]
    fn test_most_recent_budgets() {
        let at = |day| Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap();
        let budgets = vec![
            food_budget(dec!(1)).with_created_at(at(1)),
            Budget { id: BudgetId::new(2), created_at: None, ..food_budget(dec!(2)) },
            Budget { id: BudgetId::new(3), ..food_budget(dec!(3)).with_created_at(at(3)) },
        ];
        let recent: Vec<i64> = most_recent(&budgets, 2).iter().map(|b| b.id.get()).collect();
        assert_eq!(recent, vec![3, 1]);

        let all: Vec<i64> = most_recent(&budgets, 10).iter().map(|b| b.id.get()).collect();
        assert_eq!(all, vec![3, 1, 2]);
    }
}
