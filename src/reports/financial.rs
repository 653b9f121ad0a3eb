//! Financial report
//!
//! Trailing-months summary: totals, category breakdowns per kind, the
//! income-vs-expenses chart and category spending over time.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{DateRange, Transaction, TransactionType};
use crate::reports::breakdown::{Breakdown, Palettes};
use crate::reports::series::{month_labels, IncomeVsExpenses, TimeSeries};
use crate::services::aggregate::sum;
use crate::services::filter::TransactionFilter;

/// Default number of trailing months in a report
pub const DEFAULT_RANGE_MONTHS: u32 = 6;

/// Income, expense and savings totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expenses: Decimal,
    pub savings: Decimal,
}

impl Totals {
    /// Sum each list
    pub fn from_lists<'a, E, I, S>(expenses: E, incomes: I, savings: S) -> Self
    where
        E: IntoIterator<Item = &'a Transaction>,
        I: IntoIterator<Item = &'a Transaction>,
        S: IntoIterator<Item = &'a Transaction>,
    {
        Self {
            income: sum(incomes),
            expenses: sum(expenses),
            savings: sum(savings),
        }
    }

    /// `income - expenses - savings`
    pub fn net_balance(&self) -> Decimal {
        self.income
            .saturating_sub(self.expenses)
            .saturating_sub(self.savings)
    }
}

/// Complete financial report over a trailing range of months
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialReport {
    /// Inclusive range the breakdowns and totals cover
    pub range: DateRange,
    pub totals: Totals,
    pub net_balance: Decimal,
    pub income_vs_expenses: IncomeVsExpenses,
    pub expense_breakdown: Breakdown,
    pub income_breakdown: Breakdown,
    pub savings_breakdown: Breakdown,
    pub category_spending_over_time: TimeSeries,
}

impl FinancialReport {
    /// Month labels shared by the charts
    pub fn labels(&self) -> &[String] {
        &self.income_vs_expenses.labels
    }
}

/// Builds [`FinancialReport`]s
#[derive(Debug, Clone)]
pub struct ReportBuilder<'a> {
    palettes: &'a Palettes,
    range_months: u32,
}

impl<'a> ReportBuilder<'a> {
    /// Builder with the default six-month range
    pub fn new(palettes: &'a Palettes) -> Self {
        Self {
            palettes,
            range_months: DEFAULT_RANGE_MONTHS,
        }
    }

    /// Number of trailing months, including the current one
    pub fn range_months(mut self, months: u32) -> Self {
        self.range_months = months;
        self
    }

    /// Assemble the report as of `today`
    ///
    /// Totals and breakdowns only see transactions inside the range. The
    /// charts bucket the full lists and drop what falls outside the month
    /// labels.
    pub fn build(
        &self,
        expenses: &[Transaction],
        incomes: &[Transaction],
        savings: &[Transaction],
        today: NaiveDate,
    ) -> FinancialReport {
        let range = DateRange::trailing_months(today, self.range_months);
        let labels = month_labels(&range);

        let in_range = TransactionFilter::new().within_range(range);
        let ranged_expenses = in_range.apply(expenses);
        let ranged_incomes = in_range.apply(incomes);
        let ranged_savings = in_range.apply(savings);

        let totals = Totals::from_lists(
            ranged_expenses.iter().copied(),
            ranged_incomes.iter().copied(),
            ranged_savings.iter().copied(),
        );

        let report = FinancialReport {
            range,
            totals,
            net_balance: totals.net_balance(),
            income_vs_expenses: IncomeVsExpenses::build(&labels, incomes, expenses),
            expense_breakdown: Breakdown::from_transactions(
                ranged_expenses.iter().copied(),
                &self.palettes.for_kind(TransactionType::Expense),
            ),
            income_breakdown: Breakdown::from_transactions(
                ranged_incomes.iter().copied(),
                &self.palettes.for_kind(TransactionType::Income),
            ),
            savings_breakdown: Breakdown::from_transactions(
                ranged_savings.iter().copied(),
                &self.palettes.for_kind(TransactionType::Savings),
            ),
            category_spending_over_time: TimeSeries::build(
                &labels,
                expenses,
                incomes,
                savings,
                self.palettes,
            ),
        };

        tracing::debug!(
            %range,
            months = labels.len(),
            series = report.category_spending_over_time.datasets.len(),
            "assembled financial report"
        );

        report
    }
}

/// Build a report with the given range and palettes
pub fn build_report(
    expenses: &[Transaction],
    incomes: &[Transaction],
    savings: &[Transaction],
    range_months: u32,
    today: NaiveDate,
    palettes: &Palettes,
) -> FinancialReport {
    ReportBuilder::new(palettes)
        .range_months(range_months)
        .build(expenses, incomes, savings, today)
}
