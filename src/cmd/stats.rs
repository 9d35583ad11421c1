use crate::reports;
use clap::Args;
use matrixlotto::config::Config;
use matrixlotto::history::load_history_csv;
use matrixlotto::stats::{self, FrequencyStrategy, FrequencyTable};
use matrixlotto::LtResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub config: Config,

    /// CSV with `contest,date,n1..n6` rows
    #[arg(long)]
    pub history: String,

    /// A bet to describe and look up in the history
    #[arg(long)]
    pub numbers: Option<String>,

    /// Suggest a bet from the frequency table
    #[arg(long, value_enum)]
    pub strategy: Option<FrequencyStrategy>,

    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: StatsArgs, _config: &Config) -> LtResult<()> {
    let history = load_history_csv(&args.history)?;
    info!("Loaded {} contests from {}", history.len(), args.history);

    let table = FrequencyTable::from_history(&history);
    reports::print_frequency(&table, history.len());

    if let Some(raw) = &args.numbers {
        let numbers = super::parse_numbers(raw)?;
        reports::print_set_stats(&numbers, stats::already_drawn(&numbers, &history));
    }

    if let Some(strategy) = args.strategy {
        let mut rng = if let Some(s) = args.seed {
            fastrand::Rng::with_seed(s)
        } else {
            fastrand::Rng::new()
        };
        let picked = stats::select_by_frequency(&table, strategy, &mut rng);
        println!("\n🎯 {} pick:", strategy);
        reports::print_set_stats(&picked, stats::already_drawn(&picked, &history));
    }
    Ok(())
}
