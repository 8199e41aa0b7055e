use std::collections::BTreeMap;

use tally_types::{AccountId, Transaction};

use crate::registry::AccountRegistry;

/// The stored record of one accepted transaction's speculative result.
///
/// The snapshot is sparse: it holds only the accounts touched by this
/// entry or inherited from the entry it chains from, so it encodes the
/// cumulative effect of the whole chain up to this point without copying
/// the full registry. Both the snapshot and the validity flag are fixed
/// at construction and never recomputed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerEntry {
    seq: u64,
    transaction: Transaction,
    is_valid: bool,
    snapshot: BTreeMap<AccountId, i64>,
}

impl LedgerEntry {
    /// Speculatively apply `transaction` on top of the previous entry's
    /// snapshot (or an empty one for the first entry in a cycle).
    ///
    /// Each transfer credits the destination and debits the origin; an
    /// account absent from the snapshot is first seeded with its current
    /// registry balance. Callers must have validated the transaction, so
    /// every endpoint is known to the registry.
    pub(crate) fn speculate(
        seq: u64,
        transaction: Transaction,
        previous: Option<&BTreeMap<AccountId, i64>>,
        registry: &AccountRegistry,
    ) -> Self {
        let mut snapshot = previous.cloned().unwrap_or_default();

        for transfer in &transaction {
            adjust(&mut snapshot, registry, transfer.to, transfer.amount);
            adjust(&mut snapshot, registry, transfer.from, -transfer.amount);
        }

        let is_valid = snapshot.values().all(|&balance| balance >= 0);

        Self {
            seq,
            transaction,
            is_valid,
            snapshot,
        }
    }

    /// Dense sequence id assigned at admission.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// `true` iff no balance in the snapshot was negative right after
    /// this entry's transfers were applied.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The sparse cumulative snapshot behind this entry.
    pub fn snapshot(&self) -> &BTreeMap<AccountId, i64> {
        &self.snapshot
    }

    /// The source transaction this entry was built from.
    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }
}

fn adjust(
    snapshot: &mut BTreeMap<AccountId, i64>,
    registry: &AccountRegistry,
    account: AccountId,
    delta: i64,
) {
    let balance = snapshot
        .entry(account)
        .or_insert_with(|| registry.balance(account).unwrap_or(0));
    *balance += delta;
}
