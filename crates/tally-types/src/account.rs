use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer identifier of an account.
///
/// Identifiers carry no structure beyond equality and ordering; the
/// registry keys its committed balances by this value.
pub type AccountId = i64;

/// One account's balance as held by the registry.
///
/// Inside a registry the `account_id` is unique and the balance is
/// non-negative; a free-standing `AccountBalance` (e.g. a row of initial
/// input) carries no such guarantee and may still be filtered out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountBalance {
    pub account_id: AccountId,
    pub balance: i64,
}

impl AccountBalance {
    pub fn new(account_id: AccountId, balance: i64) -> Self {
        Self {
            account_id,
            balance,
        }
    }
}

impl fmt::Display for AccountBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.account_id, self.balance)
    }
}
