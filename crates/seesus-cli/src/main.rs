//! Seesus CLI - Sustainable Development Goal classifier for short statements.

use anyhow::Result;
use clap::Parser;
use seesus_cli::commands::{self, ConfigCommand};
use seesus_cli::context::{build_classifier, load_config};
use seesus_cli::formatters::formatter;
use seesus_cli::{logging, RuleArg};
use seesus_config::OutputFormat;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seesus")]
#[command(about = "Match statements against the UN Sustainable Development Goals", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file path (default: ~/.seesus/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Custom data set replacing the built-in SDG rules
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Rule edit applied before running (can be specified multiple times)
    ///
    /// Example: --rule 'SDG1_general:indirect:my match terms'
    #[arg(long = "rule", global = true, value_name = "ID:MATCH_TYPE:PATTERN")]
    rules: Vec<RuleArg>,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output JSON format
    #[arg(long, global = true)]
    json: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Classify statements given as arguments, or one per line on stdin
    Classify {
        #[arg(value_name = "STATEMENT")]
        statements: Vec<String>,
    },

    /// Show the match rules of a goal (SDG13) or target (SDG13_2)
    Show { id: String },

    /// List goals with their dimensions and rule counts
    Goals,

    /// Manage seesus configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Command::Config { command } => {
            logging::init(cli.verbose, "warn");
            return commands::handle_config_command(command, cli.config.as_deref(), cli.json);
        }
        other => other,
    };

    let config = load_config(cli.config.as_deref())?;
    config.validate()?;
    logging::init(cli.verbose, &config.settings.log_level);

    let json = cli.json || config.settings.output == OutputFormat::Json;
    let formatter = formatter(json);

    let (classifier, confirmations) =
        build_classifier(&config, cli.data.as_deref(), &cli.rules)?;
    eprint!("{}", formatter.edits(&confirmations)?);

    match command {
        Command::Classify { statements } => {
            let statements = commands::read_statements(statements, io::stdin().lock())?;
            commands::run_classify(&classifier, formatter.as_ref(), statements)
        }
        Command::Show { id } => commands::run_show(&classifier, formatter.as_ref(), &id),
        Command::Goals => commands::run_goals(&classifier, formatter.as_ref()),
        Command::Config { .. } => unreachable!("config commands return before loading rules"),
    }
}
