use std::collections::BTreeMap;

use tally_types::{AccountBalance, AccountId};

/// The authoritative, deduplicated set of committed account balances.
///
/// Built once from initial input and mutated only by settlement. Every
/// balance it holds is non-negative: commits only ever write snapshots
/// already proven valid.
///
/// The construction filter accepts an input row iff its balance is
/// non-negative and no row with that id has already been *accepted*.
/// Rejected ids are never marked seen, so a negative first occurrence
/// does not reserve the id and a later non-negative occurrence of the
/// same id is still accepted. This asymmetry is part of the contract.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountRegistry {
    accounts: BTreeMap<AccountId, i64>,
}

impl AccountRegistry {
    /// Build the registry from initial input, applying the dedup and
    /// non-negative filter row by row in input order.
    pub fn new(initial: &[AccountBalance]) -> Self {
        let mut accounts = BTreeMap::new();
        for row in initial {
            if row.balance >= 0 && !accounts.contains_key(&row.account_id) {
                accounts.insert(row.account_id, row.balance);
            }
        }
        Self { accounts }
    }

    /// Returns `true` if the account was accepted at construction.
    pub fn contains(&self, account: AccountId) -> bool {
        self.accounts.contains_key(&account)
    }

    /// Committed balance of an account, if registered.
    pub fn balance(&self, account: AccountId) -> Option<i64> {
        self.accounts.get(&account).copied()
    }

    /// The full committed set, ascending by account id.
    pub fn balances(&self) -> Vec<AccountBalance> {
        self.accounts
            .iter()
            .map(|(&account_id, &balance)| AccountBalance::new(account_id, balance))
            .collect()
    }

    /// Number of registered accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Overwrite the accounts present in `snapshot`, leaving every other
    /// account untouched. Callers must only commit snapshots whose values
    /// are all non-negative.
    pub(crate) fn commit(&mut self, snapshot: &BTreeMap<AccountId, i64>) {
        for (&account, &balance) in snapshot {
            self.accounts.insert(account, balance);
        }
    }
}
