use std::collections::BTreeMap;

use tally_types::{AccountBalance, AccountId, Transaction};

use crate::error::LedgerError;
use crate::registry::AccountRegistry;
use crate::traits::LedgerReader;

/// Recompute final balances by re-running exactly the applied
/// transactions, in order, over a fresh registry built from the same
/// initial input.
///
/// `transactions` is the accepted-transaction sequence of the settled
/// round, indexed by sequence id. Intermediate negative balances are
/// allowed here, matching how chained snapshots accumulate; only the end
/// state matters.
pub fn replay_applied(
    initial: &[AccountBalance],
    transactions: &[Transaction],
    applied: &[u64],
) -> Result<Vec<AccountBalance>, LedgerError> {
    let registry = AccountRegistry::new(initial);
    let mut state: BTreeMap<AccountId, i64> = registry
        .balances()
        .into_iter()
        .map(|b| (b.account_id, b.balance))
        .collect();

    for &seq in applied {
        let transaction = transactions
            .get(seq as usize)
            .ok_or(LedgerError::UnknownSequence { seq })?;
        for transfer in transaction {
            *state.entry(transfer.to).or_insert(0) += transfer.amount;
            *state.entry(transfer.from).or_insert(0) -= transfer.amount;
        }
    }

    Ok(state
        .into_iter()
        .map(|(account_id, balance)| AccountBalance::new(account_id, balance))
        .collect())
}

/// Check that a ledger's committed balances equal the replay of its
/// applied transactions over the original initial input.
pub fn verify_convergence<R: LedgerReader>(
    reader: &R,
    initial: &[AccountBalance],
    transactions: &[Transaction],
) -> Result<bool, LedgerError> {
    let replayed = replay_applied(initial, transactions, reader.applied_transactions())?;
    Ok(replayed == reader.balances())
}
