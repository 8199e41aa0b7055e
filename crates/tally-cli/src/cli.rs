use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tally",
    about = "tally — in-memory speculative settlement ledger",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Show ledger trace events (admissions, drops, commit points)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the built-in demo scenarios
    Demo(DemoArgs),
    /// Settle a scenario file and print balances and applied indices
    Run(RunArgs),
    /// Report per-transaction admission results without settling
    Check(CheckArgs),
}

#[derive(Args)]
pub struct DemoArgs {
    /// Run a single named scenario instead of all of them
    pub name: Option<String>,
}

#[derive(Args)]
pub struct RunArgs {
    /// Path to a JSON scenario ({"initial_balances": [...], "transactions": [...]})
    pub file: String,

    /// Cross-check the committed balances against a replay of the
    /// applied transactions
    #[arg(long)]
    pub verify: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Path to a JSON scenario file
    pub file: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_demo() {
        let cli = Cli::try_parse_from(["tally", "demo"]).unwrap();
        if let Command::Demo(args) = cli.command {
            assert!(args.name.is_none());
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_demo_with_name() {
        let cli = Cli::try_parse_from(["tally", "demo", "restore-consistency"]).unwrap();
        if let Command::Demo(args) = cli.command {
            assert_eq!(args.name, Some("restore-consistency".into()));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_run() {
        let cli = Cli::try_parse_from(["tally", "run", "scenario.json"]).unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.file, "scenario.json");
            assert!(!args.verify);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_run_with_verify() {
        let cli = Cli::try_parse_from(["tally", "run", "--verify", "s.json"]).unwrap();
        if let Command::Run(args) = cli.command {
            assert!(args.verify);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_check() {
        let cli = Cli::try_parse_from(["tally", "check", "s.json"]).unwrap();
        assert!(matches!(cli.command, Command::Check(_)));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["tally", "--verbose", "demo"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["tally", "--format", "json", "demo"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Cli::try_parse_from(["tally", "run"]).is_err());
    }
}
