use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tally_types::{AccountBalance, Transaction, Transfer};

/// A self-contained workload: initial balances plus the transactions to
/// push, in order, before settling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub initial_balances: Vec<AccountBalance>,
    pub transactions: Vec<Transaction>,
}

impl Scenario {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading scenario file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing scenario file {}", path.display()))
    }
}

/// Names of the built-in demo scenarios, in presentation order.
pub const BUILTIN_NAMES: &[&str] = &[
    "single-successful",
    "multiple-successful",
    "single-failing",
    "restore-consistency",
];

/// Look up a built-in demo scenario by name.
pub fn builtin(name: &str) -> Option<Scenario> {
    let initial_balances = vec![
        AccountBalance::new(1, 5),
        AccountBalance::new(2, 10),
        AccountBalance::new(3, 15),
    ];

    let exchange = Transaction::new(vec![Transfer::new(1, 2, 3), Transfer::new(3, 1, 2)]);
    let overdraw = Transaction::new(vec![Transfer::new(2, 1, 11)]);

    let transactions = match name {
        "single-successful" => vec![exchange],
        "multiple-successful" => vec![exchange, overdraw],
        "single-failing" => vec![overdraw],
        "restore-consistency" => vec![overdraw, exchange],
        _ => return None,
    };

    Some(Scenario {
        initial_balances,
        transactions,
    })
}
