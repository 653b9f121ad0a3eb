//! Transaction list ordering
//!
//! All sorts are stable, so records that compare equal keep the order they
//! came in.

use std::cmp::Reverse;

use crate::models::Transaction;

/// Order applied to a transaction listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionOrder {
    /// Newest first, undated records last
    #[default]
    Newest,
    /// Smallest amount first, newest first among equal amounts
    AmountAscending,
    /// Largest amount first, newest first among equal amounts
    AmountDescending,
}

/// Sort newest first; undated records go last
pub fn sort_newest_first(transactions: &mut [&Transaction]) {
    transactions.sort_by_key(|t| (t.date.is_none(), Reverse(t.date)));
}

/// Sort a listing in the given order
pub fn sort_transactions(transactions: &mut [&Transaction], order: TransactionOrder) {
    sort_newest_first(transactions);
    match order {
        TransactionOrder::Newest => {}
        TransactionOrder::AmountAscending => transactions.sort_by_key(|t| t.amount),
        TransactionOrder::AmountDescending => transactions.sort_by_key(|t| Reverse(t.amount)),
    }
}
