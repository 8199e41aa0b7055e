use std::fmt;

use serde::{Deserialize, Serialize};

use crate::account::AccountId;

/// A single origin→destination amount movement.
///
/// Structural constraints (`from != to`, `amount > 0`, both endpoints
/// registered) are checked by the ledger at admission time, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transfer {
    /// The account to transfer from.
    pub from: AccountId,
    /// The account to transfer to.
    pub to: AccountId,
    /// The amount to transfer.
    pub amount: i64,
}

impl Transfer {
    pub fn new(from: AccountId, to: AccountId, amount: i64) -> Self {
        Self { from, to, amount }
    }
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.amount)
    }
}

/// An ordered batch of transfers applied as a unit.
///
/// Order within the batch matters: later transfers see the speculative
/// effects of earlier ones in the same transaction. Serializes as a bare
/// array of transfers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transaction {
    transfers: Vec<Transfer>,
}

impl Transaction {
    pub fn new(transfers: Vec<Transfer>) -> Self {
        Self { transfers }
    }

    /// Returns `true` if the batch contains no transfers.
    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }

    /// Number of transfers in the batch.
    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    /// Iterate the transfers in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, Transfer> {
        self.transfers.iter()
    }
}

impl From<Vec<Transfer>> for Transaction {
    fn from(transfers: Vec<Transfer>) -> Self {
        Self::new(transfers)
    }
}

impl<'a> IntoIterator for &'a Transaction {
    type Item = &'a Transfer;
    type IntoIter = std::slice::Iter<'a, Transfer>;

    fn into_iter(self) -> Self::IntoIter {
        self.transfers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_preserves_order() {
        let tx = Transaction::new(vec![
            Transfer::new(1, 2, 3),
            Transfer::new(3, 1, 2),
        ]);
        let froms: Vec<_> = tx.iter().map(|t| t.from).collect();
        assert_eq!(froms, vec![1, 3]);
        assert_eq!(tx.len(), 2);
        assert!(!tx.is_empty());
    }

    #[test]
    fn empty_transaction() {
        let tx = Transaction::default();
        assert!(tx.is_empty());
        assert_eq!(tx.len(), 0);
    }

    #[test]
    fn display_format() {
        let transfer = Transfer::new(1, 2, 30);
        assert_eq!(format!("{transfer}"), "1 -> 2 (30)");
    }

    #[test]
    fn serde_roundtrip_is_transparent() {
        let tx = Transaction::new(vec![Transfer::new(1, 2, 3)]);
        let json = serde_json::to_string(&tx).unwrap();
        assert_eq!(json, r#"[{"from":1,"to":2,"amount":3}]"#);
        let parsed: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, parsed);
    }
}
