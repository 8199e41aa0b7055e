use tracing::{debug, info};

use tally_types::{AccountBalance, Transaction};

use crate::entry::LedgerEntry;
use crate::error::LedgerError;
use crate::registry::AccountRegistry;
use crate::traits::{LedgerReader, LedgerWriter};
use crate::validation;

/// An in-memory ledger of speculative balance transfers.
///
/// Transactions are validated on push and applied to a chain of sparse
/// snapshots; nothing touches the committed registry until [`settle`]
/// scans the chain newest-to-oldest, commits the most recent fully
/// non-negative snapshot, and discards everything after it.
///
/// [`settle`]: TransactionLedger::settle
pub struct TransactionLedger {
    registry: AccountRegistry,
    chain: Vec<LedgerEntry>,
    applied: Vec<u64>,
}

impl TransactionLedger {
    /// Construct a ledger over the given initial balances, applying the
    /// registry's dedup and non-negative filter.
    pub fn new(initial: &[AccountBalance]) -> Self {
        let registry = AccountRegistry::new(initial);
        debug!(accounts = registry.len(), "ledger constructed");
        Self {
            registry,
            chain: Vec::new(),
            applied: Vec::new(),
        }
    }

    /// Admit a transaction and append its speculative result to the
    /// chain, returning the assigned sequence id.
    ///
    /// Ids are dense, starting at 0 and restarting after every
    /// settlement; a rejected transaction consumes no id. A transaction
    /// that overdraws an account is still admitted: it is recorded with
    /// `is_valid = false` and later entries chain off its snapshot.
    pub fn try_push_transaction(
        &mut self,
        transaction: Transaction,
    ) -> Result<u64, LedgerError> {
        validation::check_transaction(&self.registry, &transaction)?;

        let seq = self.chain.last().map_or(0, |entry| entry.seq() + 1);
        let previous = self.chain.last().map(LedgerEntry::snapshot);
        let entry = LedgerEntry::speculate(seq, transaction, previous, &self.registry);

        debug!(seq, valid = entry.is_valid(), "transaction admitted");
        self.chain.push(entry);
        Ok(seq)
    }

    /// Admit a transaction, silently discarding it on any admission
    /// failure: no entry is created, no id is consumed, and the caller
    /// receives no signal. The rejection reason is only traced.
    pub fn push_transaction(&mut self, transaction: Transaction) {
        if let Err(error) = self.try_push_transaction(transaction) {
            debug!(%error, "transaction dropped");
        }
    }

    /// Settle the ledger to the most recent point in its pending history
    /// at which every touched balance was non-negative.
    ///
    /// The chain is scanned newest-to-oldest. The first valid entry
    /// found has its whole snapshot committed into the registry, and
    /// that entry plus every older one is recorded as applied,
    /// unconditionally, even where an older entry's own snapshot dipped
    /// negative: each snapshot already carries the cumulative effect of
    /// everything before it, so the committed state is sound regardless.
    /// Entries newer than the commit point never recovered and are
    /// dropped without trace.
    ///
    /// If no entry is valid, the registry and the previous applied list
    /// are left exactly as they were. The chain is discarded in every
    /// case and sequence ids restart at 0.
    pub fn settle(&mut self) {
        if self.chain.is_empty() {
            return;
        }

        let mut committed = false;
        let mut applied = Vec::new();

        for entry in self.chain.iter().rev() {
            if !committed && entry.is_valid() {
                self.registry.commit(entry.snapshot());
                committed = true;
                debug!(seq = entry.seq(), "commit point found");
            }
            if committed {
                applied.push(entry.seq());
            }
        }

        if committed {
            // Accumulated newest-to-oldest; the stored list is ascending.
            applied.reverse();
            info!(
                applied = applied.len(),
                discarded = self.chain.len() - applied.len(),
                "settlement committed"
            );
            self.applied = applied;
        } else {
            info!(discarded = self.chain.len(), "settlement found no valid entry");
        }

        self.chain.clear();
    }

    /// Current committed balances, ascending by account id.
    pub fn balances(&self) -> Vec<AccountBalance> {
        self.registry.balances()
    }

    /// Ascending sequence ids from the most recent settlement that
    /// committed; empty until one has.
    pub fn applied_transactions(&self) -> &[u64] {
        &self.applied
    }

    /// Number of entries currently pending in the chain.
    pub fn pending_len(&self) -> usize {
        self.chain.len()
    }
}

impl LedgerWriter for TransactionLedger {
    fn try_push_transaction(&mut self, transaction: Transaction) -> Result<u64, LedgerError> {
        TransactionLedger::try_push_transaction(self, transaction)
    }

    fn push_transaction(&mut self, transaction: Transaction) {
        TransactionLedger::push_transaction(self, transaction)
    }

    fn settle(&mut self) {
        TransactionLedger::settle(self)
    }
}

impl LedgerReader for TransactionLedger {
    fn balances(&self) -> Vec<AccountBalance> {
        TransactionLedger::balances(self)
    }

    fn applied_transactions(&self) -> &[u64] {
        TransactionLedger::applied_transactions(self)
    }

    fn pending_len(&self) -> usize {
        TransactionLedger::pending_len(self)
    }
}
