use tally_types::Transaction;

use crate::error::LedgerError;
use crate::registry::AccountRegistry;

/// Admission checks for an incoming transaction, first failure wins.
///
/// A transaction is admissible iff it is non-empty, every transfer moves
/// a positive amount between two distinct accounts, and both endpoints
/// exist in the registry as constructed at startup. In-flight snapshots
/// play no part here: an account only ever touched speculatively is not
/// a valid endpoint.
pub fn check_transaction(
    registry: &AccountRegistry,
    transaction: &Transaction,
) -> Result<(), LedgerError> {
    if transaction.is_empty() {
        return Err(LedgerError::EmptyTransaction);
    }

    for transfer in transaction {
        if transfer.from == transfer.to {
            return Err(LedgerError::SelfTransfer {
                account: transfer.from,
            });
        }
        if transfer.amount <= 0 {
            return Err(LedgerError::NonPositiveAmount {
                amount: transfer.amount,
            });
        }
        for endpoint in [transfer.from, transfer.to] {
            if !registry.contains(endpoint) {
                return Err(LedgerError::UnknownAccount { account: endpoint });
            }
        }
    }

    Ok(())
}
