use crate::reports;
use clap::Args;
use matrixlotto::config::Config;
use matrixlotto::LtResult;

#[derive(Args, Debug, Clone)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub config: Config,

    /// Print predictions and report as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ProcessArgs, config: &Config) -> LtResult<()> {
    let mut session = super::open_session(config);
    let analysis = session.process();

    if args.json {
        println!("{}", serde_json::to_string_pretty(analysis)?);
        return Ok(());
    }

    if analysis.predictions.is_empty() {
        println!("⚠️  No predictions. Fill more cells or relax the filters.");
    }
    reports::print_predictions(&analysis.predictions);
    reports::print_pattern_report(&analysis.report);
    Ok(())
}
