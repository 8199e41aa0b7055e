use tally_types::AccountId;

/// Errors produced by ledger operations.
///
/// The baseline `push_transaction` swallows admission errors to preserve
/// the silent-drop contract; `try_push_transaction` surfaces them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("transaction contains no transfers")]
    EmptyTransaction,

    #[error("transfer references account {account} as both origin and destination")]
    SelfTransfer { account: AccountId },

    #[error("transfer amount {amount} is not positive")]
    NonPositiveAmount { amount: i64 },

    #[error("account {account} is not registered")]
    UnknownAccount { account: AccountId },

    #[error("applied sequence id {seq} has no matching transaction")]
    UnknownSequence { seq: u64 },
}
