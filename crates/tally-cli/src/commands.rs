use colored::Colorize;
use tally_ledger::validation::check_transaction;
use tally_ledger::{replay, AccountRegistry, LedgerReader, TransactionLedger};
use tally_types::{AccountBalance, Transaction};

use crate::cli::{CheckArgs, Cli, Command, DemoArgs, OutputFormat, RunArgs};
use crate::scenario::{self, Scenario};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Demo(args) => cmd_demo(args, &cli.format),
        Command::Run(args) => cmd_run(args, &cli.format),
        Command::Check(args) => cmd_check(args, &cli.format),
    }
}

#[derive(serde::Serialize)]
struct SettlementReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    scenario: Option<String>,
    admitted: usize,
    balances: Vec<AccountBalance>,
    applied_transactions: Vec<u64>,
}

#[derive(serde::Serialize)]
struct AdmissionReport {
    index: usize,
    accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// Push every transaction of the scenario, keeping the accepted ones in
/// order for replay verification. Settlement is left to the caller.
fn execute(scenario: &Scenario) -> (TransactionLedger, Vec<Transaction>) {
    let mut ledger = TransactionLedger::new(&scenario.initial_balances);
    let mut accepted = Vec::new();
    for transaction in &scenario.transactions {
        if ledger.try_push_transaction(transaction.clone()).is_ok() {
            accepted.push(transaction.clone());
        }
    }
    (ledger, accepted)
}

fn settlement_report(
    name: Option<String>,
    admitted: usize,
    reader: &impl LedgerReader,
) -> SettlementReport {
    SettlementReport {
        scenario: name,
        admitted,
        balances: reader.balances(),
        applied_transactions: reader.applied_transactions().to_vec(),
    }
}

fn print_settlement(reader: &impl LedgerReader) {
    println!("Balances:");
    for balance in reader.balances() {
        println!(
            "  {}  {}",
            balance.account_id.to_string().yellow(),
            balance.balance
        );
    }
    let applied = reader
        .applied_transactions()
        .iter()
        .map(|seq| seq.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!("Applied transactions: [{}]", applied.cyan());
}

fn cmd_demo(args: DemoArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let names: Vec<&str> = match &args.name {
        Some(name) => vec![name.as_str()],
        None => scenario::BUILTIN_NAMES.to_vec(),
    };

    let mut reports = Vec::new();
    for name in names {
        let Some(scenario) = scenario::builtin(name) else {
            anyhow::bail!("unknown demo scenario '{name}'");
        };
        let (mut ledger, accepted) = execute(&scenario);
        ledger.settle();

        match format {
            OutputFormat::Text => {
                println!("{}", name.bold());
                print_settlement(&ledger);
                println!();
            }
            OutputFormat::Json => {
                reports.push(settlement_report(
                    Some(name.to_string()),
                    accepted.len(),
                    &ledger,
                ));
            }
        }
    }

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

fn cmd_run(args: RunArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let scenario = Scenario::load(&args.file)?;
    let (mut ledger, accepted) = execute(&scenario);
    let admitted = ledger.pending_len();
    ledger.settle();

    match format {
        OutputFormat::Text => {
            println!(
                "{} of {} transaction(s) admitted",
                admitted.to_string().bold(),
                scenario.transactions.len()
            );
            print_settlement(&ledger);
        }
        OutputFormat::Json => {
            let report = settlement_report(None, admitted, &ledger);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if args.verify {
        if replay::verify_convergence(&ledger, &scenario.initial_balances, &accepted)? {
            println!(
                "{} replay converges with committed balances",
                "✓".green().bold()
            );
        } else {
            anyhow::bail!("replay of applied transactions diverges from committed balances");
        }
    }
    Ok(())
}

fn cmd_check(args: CheckArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let scenario = Scenario::load(&args.file)?;
    let registry = AccountRegistry::new(&scenario.initial_balances);

    let reports: Vec<AdmissionReport> = scenario
        .transactions
        .iter()
        .enumerate()
        .map(|(index, transaction)| match check_transaction(&registry, transaction) {
            Ok(()) => AdmissionReport {
                index,
                accepted: true,
                reason: None,
            },
            Err(error) => AdmissionReport {
                index,
                accepted: false,
                reason: Some(error.to_string()),
            },
        })
        .collect();

    match format {
        OutputFormat::Text => {
            for report in &reports {
                if report.accepted {
                    println!("{} #{} accepted", "✓".green(), report.index);
                } else {
                    println!(
                        "{} #{} rejected: {}",
                        "✗".red(),
                        report.index,
                        report.reason.as_deref().unwrap_or_default()
                    );
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_skips_inadmissible_transactions() {
        let scenario = Scenario {
            initial_balances: vec![AccountBalance::new(1, 5), AccountBalance::new(2, 10)],
            transactions: vec![
                Transaction::new(vec![tally_types::Transfer::new(1, 2, 3)]),
                Transaction::new(vec![tally_types::Transfer::new(1, 9, 3)]),
            ],
        };
        let (ledger, accepted) = execute(&scenario);
        assert_eq!(ledger.pending_len(), 1);
        assert_eq!(accepted.len(), 1);
    }

    #[test]
    fn demo_scenarios_settle_to_the_documented_state() {
        let scenario = scenario::builtin("restore-consistency").unwrap();
        let (mut ledger, accepted) = execute(&scenario);
        ledger.settle();

        let report = settlement_report(None, accepted.len(), &ledger);
        assert_eq!(report.admitted, 2);
        assert_eq!(report.applied_transactions, vec![0, 1]);
        assert_eq!(
            report.balances,
            vec![
                AccountBalance::new(1, 15),
                AccountBalance::new(2, 2),
                AccountBalance::new(3, 13),
            ]
        );
    }
}
