use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use matrixlotto::config::Config;
use matrixlotto::LtResult;
use std::process;
use tracing::{error, info, warn};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with engine/storage/draw settings; explicit flags win over it
    #[arg(global = true, long)]
    config: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the grid, active filters and current tokens
    Show(cmd::grid::ShowArgs),
    /// Put a digit in a cell
    Set(cmd::grid::SetArgs),
    /// Empty a cell
    Unset(cmd::grid::UnsetArgs),
    /// Toggle a filter
    Filter(cmd::grid::FilterArgs),
    /// Reset grid and filters and forget the saved session
    Clear(cmd::grid::ClearArgs),
    /// Run the pipeline and print predictions with the pattern report
    Process(cmd::process::ProcessArgs),
    /// Check fresh predictions against an official result
    Verify(cmd::verify::VerifyArgs),
    /// Random bet, filter-aware
    QuickPick(cmd::quick_pick::QuickPickArgs),
    /// List or delete saved bets
    Saved(cmd::saved::SavedArgs),
    /// Fetch an official draw
    Draw(cmd::draw::DrawArgs),
    /// Statistics over a draw history
    Stats(cmd::stats::StatsArgs),
}

impl Commands {
    fn config(&self) -> &Config {
        match self {
            Commands::Show(a) => &a.config,
            Commands::Set(a) => &a.config,
            Commands::Unset(a) => &a.config,
            Commands::Filter(a) => &a.config,
            Commands::Clear(a) => &a.config,
            Commands::Process(a) => &a.config,
            Commands::Verify(a) => &a.config,
            Commands::QuickPick(a) => &a.config,
            Commands::Saved(a) => &a.config,
            Commands::Draw(a) => &a.config,
            Commands::Stats(a) => &a.config,
        }
    }
}

fn resolve_config(cli: &Cli, sub_matches: &ArgMatches) -> LtResult<Config> {
    let cli_config = cli.command.config();
    let config = match &cli.config {
        Some(path) => {
            info!("Loading config from {}", path);
            let mut file_config = Config::load_from_file(path)?;
            file_config.merge_from_cli(cli_config, sub_matches);
            file_config
        }
        None => cli_config.clone(),
    };
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() {
    // stdout is reserved for command output
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // Flattened config flags live in the subcommand's matches, not the root.
    let Some((_, sub_matches)) = matches.subcommand() else {
        error!("No subcommand given");
        process::exit(2);
    };

    let config = resolve_config(&cli, sub_matches).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let result = match cli.command {
        Commands::Show(_) => cmd::grid::show(&config),
        Commands::Set(args) => cmd::grid::set(args, &config),
        Commands::Unset(args) => cmd::grid::unset(args, &config),
        Commands::Filter(args) => cmd::grid::filter(args, &config),
        Commands::Clear(_) => cmd::grid::clear(&config),
        Commands::Process(args) => cmd::process::run(args, &config),
        Commands::Verify(args) => cmd::verify::run(args, &config).await,
        Commands::QuickPick(args) => cmd::quick_pick::run(args, &config),
        Commands::Saved(args) => cmd::saved::run(args, &config),
        Commands::Draw(args) => cmd::draw::run(args, &config).await,
        Commands::Stats(args) => cmd::stats::run(args, &config),
    };

    if let Err(e) = result {
        if e.is_validation() {
            warn!("Rejected: {}", e);
            eprintln!("❌ {}", e);
            process::exit(2);
        }
        error!("{}", e);
        process::exit(1);
    }
}
