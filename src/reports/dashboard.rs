//! Dashboard summary
//!
//! Overview for an explicit inclusive date range: balances, monthly
//! income against expenses, the expense breakdown, recent activity and
//! the most recently created budgets.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Budget, Category, DateRange, Transaction, TransactionType};
use crate::reports::breakdown::{Breakdown, Palettes};
use crate::reports::financial::Totals;
use crate::reports::series::{month_labels, IncomeVsExpenses};
use crate::services::budget::{most_recent, BudgetEvaluator, BudgetStatus};
use crate::services::filter::TransactionFilter;
use crate::services::order::sort_newest_first;

/// Default number of recent transactions shown
pub const DEFAULT_RECENT_TRANSACTIONS: usize = 5;

/// Default number of recent budgets shown
pub const DEFAULT_RECENT_BUDGETS: usize = 2;

/// Default dashboard range, in days before today
pub const DEFAULT_RANGE_DAYS: u32 = 30;

/// Dashboard view model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub range: DateRange,
    pub totals: Totals,
    pub current_balance: Decimal,
    pub income_vs_expenses: IncomeVsExpenses,
    pub expense_breakdown: Breakdown,
    pub recent_transactions: Vec<Transaction>,
    pub recent_budgets: Vec<BudgetStatus>,
}

/// Records the dashboard is built from
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardInput<'a> {
    pub expenses: &'a [Transaction],
    pub incomes: &'a [Transaction],
    pub savings: &'a [Transaction],
    pub budgets: &'a [Budget],
    pub categories: &'a [Category],
}

/// Builds [`DashboardSummary`]s
#[derive(Debug, Clone)]
pub struct DashboardBuilder<'a> {
    palettes: &'a Palettes,
    recent_transactions: usize,
    recent_budgets: usize,
}

impl<'a> DashboardBuilder<'a> {
    pub fn new(palettes: &'a Palettes) -> Self {
        Self {
            palettes,
            recent_transactions: DEFAULT_RECENT_TRANSACTIONS,
            recent_budgets: DEFAULT_RECENT_BUDGETS,
        }
    }

    /// How many recent transactions to keep
    pub fn recent_transactions(mut self, limit: usize) -> Self {
        self.recent_transactions = limit;
        self
    }

    /// How many recent budgets to keep
    pub fn recent_budgets(mut self, limit: usize) -> Self {
        self.recent_budgets = limit;
        self
    }

    /// Assemble the dashboard for `range`
    pub fn build(&self, input: DashboardInput<'_>, range: DateRange) -> DashboardSummary {
        let in_range = TransactionFilter::new().within_range(range);
        let expenses: Vec<Transaction> = in_range.apply(input.expenses).into_iter().cloned().collect();
        let incomes: Vec<Transaction> = in_range.apply(input.incomes).into_iter().cloned().collect();
        let savings = in_range.apply(input.savings);

        let totals = Totals::from_lists(&expenses, &incomes, savings.iter().copied());
        let labels = month_labels(&range);

        let evaluator = BudgetEvaluator::new(&expenses, input.categories);
        let recent_budgets = most_recent(input.budgets, self.recent_budgets)
            .into_iter()
            .map(|b| evaluator.evaluate(b))
            .collect();

        let summary = DashboardSummary {
            range,
            totals,
            current_balance: totals.net_balance(),
            income_vs_expenses: IncomeVsExpenses::build(&labels, &incomes, &expenses),
            expense_breakdown: Breakdown::from_transactions(
                &expenses,
                &self.palettes.for_kind(TransactionType::Expense),
            ),
            recent_transactions: recent_transactions(&expenses, &incomes, self.recent_transactions),
            recent_budgets,
        };

        tracing::debug!(
            %range,
            expenses = expenses.len(),
            incomes = incomes.len(),
            "assembled dashboard"
        );

        summary
    }
}

/// Expenses and incomes merged, newest first
///
/// The sort is stable and undated records go last.
pub fn recent_transactions(
    expenses: &[Transaction],
    incomes: &[Transaction],
    limit: usize,
) -> Vec<Transaction> {
    let mut merged: Vec<&Transaction> = expenses.iter().chain(incomes).collect();
    sort_newest_first(&mut merged);
    merged.into_iter().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetId, BudgetPeriodKind, CategoryId, TransactionId};
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn txn(id: i64, kind: TransactionType, date: NaiveDate, amount: Decimal) -> Transaction {
        Transaction::new(TransactionId::new(id), kind, date, amount)
            .with_category(CategoryId::new(1), "Food")
    }

    #[test]
    fn test_totals_and_balance_use_range() {
        let expenses = vec![
            txn(1, TransactionType::Expense, d(2025, 3, 10), dec!(100)),
            txn(2, TransactionType::Expense, d(2025, 1, 10), dec!(900)),
        ];
        let incomes = vec![txn(3, TransactionType::Income, d(2025, 3, 1), dec!(1000))];
        let savings = vec![txn(4, TransactionType::Savings, d(2025, 3, 31), dec!(200))];

        let palettes = Palettes::default();
        let input = DashboardInput {
            expenses: &expenses,
            incomes: &incomes,
            savings: &savings,
            ..Default::default()
        };
        let summary = DashboardBuilder::new(&palettes)
            .build(input, DateRange::new(d(2025, 3, 1), d(2025, 3, 31)));

        assert_eq!(summary.totals.expenses, dec!(100));
        assert_eq!(summary.totals.income, dec!(1000));
        assert_eq!(summary.totals.savings, dec!(200));
        assert_eq!(summary.current_balance, dec!(700));
        assert_eq!(summary.income_vs_expenses.labels, vec!["Mar 2025"]);
        assert_eq!(summary.expense_breakdown.values, vec![dec!(100)]);
    }

    #[test]
    fn test_recent_transactions_newest_first() {
        let expenses = vec![
            txn(1, TransactionType::Expense, d(2025, 3, 1), dec!(1)),
            txn(2, TransactionType::Expense, d(2025, 3, 5), dec!(1)),
        ];
        let mut undated = txn(9, TransactionType::Income, d(2025, 3, 1), dec!(1));
        undated.date = None;
        let incomes = vec![
            undated,
            txn(3, TransactionType::Income, d(2025, 3, 3), dec!(1)),
            txn(4, TransactionType::Income, d(2025, 3, 5), dec!(1)),
        ];

        let recent = recent_transactions(&expenses, &incomes, 10);
        let ids: Vec<i64> = recent.iter().map(|t| t.id.get()).collect();
        assert_eq!(ids, vec![2, 4, 3, 1, 9]);

        assert_eq!(recent_transactions(&expenses, &incomes, 2).len(), 2);
    }

    #[test]
    fn test_recent_budgets_evaluated_against_range() {
        let created = |day| Utc.with_ymd_and_hms(2025, 3, day, 0, 0, 0).unwrap();
        let budgets = vec![
            Budget::new(BudgetId::new(1), CategoryId::new(1), dec!(500), BudgetPeriodKind::Monthly, d(2025, 3, 1))
                .with_created_at(created(1)),
            Budget::new(BudgetId::new(2), CategoryId::new(1), dec!(50), BudgetPeriodKind::Monthly, d(2025, 3, 1))
                .with_created_at(created(3)),
            Budget::new(BudgetId::new(3), CategoryId::new(1), dec!(100), BudgetPeriodKind::Monthly, d(2025, 3, 1))
                .with_created_at(created(2)),
        ];
        let expenses = vec![
            txn(1, TransactionType::Expense, d(2025, 3, 10), dec!(25)),
            txn(2, TransactionType::Expense, d(2025, 2, 27), dec!(1000)),
        ];
        let palettes = Palettes::default();
        let input = DashboardInput {
            expenses: &expenses,
            budgets: &budgets,
            ..Default::default()
        };

        let summary = DashboardBuilder::new(&palettes)
            .build(input, DateRange::new(d(2025, 3, 1), d(2025, 3, 31)));

        let ids: Vec<i64> = summary.recent_budgets.iter().map(|s| s.budget_id.get()).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(summary.recent_budgets[0].spent, dec!(25));
        assert_eq!(summary.recent_budgets[0].percent, dec!(50));
    }

    #[test]
    fn test_default_range_is_last_thirty_days() {
        let expenses = vec![
            txn(1, TransactionType::Expense, d(2025, 3, 20), dec!(5)),
            txn(2, TransactionType::Expense, d(2025, 2, 17), dec!(7)),
            txn(3, TransactionType::Expense, d(2025, 2, 16), dec!(11)),
        ];
        let palettes = Palettes::default();
        let input = DashboardInput {
            expenses: &expenses,
            ..Default::default()
        };
        let summary = DashboardBuilder::new(&palettes)
            .recent_transactions(1)
            .build(input, DateRange::trailing_days(d(2025, 3, 19), DEFAULT_RANGE_DAYS));

        assert_eq!(summary.range.start, d(2025, 2, 17));
        assert_eq!(summary.totals.expenses, dec!(7));
        assert_eq!(summary.recent_transactions.len(), 1);
        assert_eq!(summary.recent_transactions[0].id.get(), 2);
        assert_eq!(summary.income_vs_expenses.labels, vec!["Feb 2025", "Mar 2025"]);
    }

    #[test]
    fn test_empty_dashboard() {
        let palettes = Palettes::default();
        let summary = DashboardBuilder::new(&palettes)
            .build(DashboardInput::default(), DateRange::trailing_days(d(2025, 3, 19), 30));
        assert_eq!(summary.current_balance, Decimal::ZERO);
        assert!(summary.recent_transactions.is_empty());
        assert!(summary.recent_budgets.is_empty());
        assert!(summary.expense_breakdown.is_empty());
    }
}
