use tally_types::{AccountBalance, Transaction};

use crate::error::LedgerError;

/// Write boundary for ledger mutation.
///
/// Methods take `&mut self`: a ledger is exclusively owned and
/// single-threaded; callers needing shared access serialize externally.
pub trait LedgerWriter {
    /// Admit a transaction, returning its assigned sequence id.
    fn try_push_transaction(&mut self, transaction: Transaction) -> Result<u64, LedgerError>;

    /// Admit a transaction, silently discarding it on any admission
    /// failure. The caller cannot distinguish a rejected push from one
    /// that was never made.
    fn push_transaction(&mut self, transaction: Transaction);

    /// Commit the most recent fully valid point in the pending history
    /// and discard the chain.
    fn settle(&mut self);
}

/// Read boundary for ledger queries.
pub trait LedgerReader {
    /// Current committed balances, ascending by account id.
    fn balances(&self) -> Vec<AccountBalance>;

    /// Ascending sequence ids from the most recent settlement that
    /// committed; empty until one has.
    fn applied_transactions(&self) -> &[u64];

    /// Number of entries currently pending in the chain.
    fn pending_len(&self) -> usize;
}
