use crate::reports;
use clap::Args;
use matrixlotto::config::Config;
use matrixlotto::draws::DrawClient;
use matrixlotto::game::GameKind;
use matrixlotto::official::OfficialResults;
use matrixlotto::LtResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub config: Config,

    /// Comma-separated official numbers, e.g. 4,15,23,31,42,58
    #[arg(long, required_unless_present = "contest", conflicts_with = "contest")]
    pub official: Option<String>,

    /// Fetch the official numbers of this contest instead
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub contest: Option<u32>,

    #[arg(long, value_enum, default_value_t = GameKind::MegaSena)]
    pub game: GameKind,
}

pub async fn run(args: VerifyArgs, config: &Config) -> LtResult<()> {
    let mut official = OfficialResults::new(args.game);
    match (&args.official, args.contest) {
        (Some(raw), _) => {
            let numbers = super::parse_numbers(raw)?;
            official = OfficialResults::from_numbers(args.game, &numbers)?;
        }
        (None, contest) => {
            let client = DrawClient::from_params(&config.draws)?;
            let record = client.fetch(contest, args.game).await?;
            info!("Verifying against contest {}", record.numero);
            official.fill_from_draw(&record)?;
        }
    }

    let mut session = super::open_session(config);
    let predictions = session.process().predictions.clone();
    let rows = official.verify(&predictions)?;
    info!(
        "Checked {} predictions against the {} result",
        predictions.len(),
        official.game()
    );

    if predictions.is_empty() {
        println!("⚠️  No predictions to verify.");
        return Ok(());
    }
    reports::print_matches(&predictions, &rows);
    Ok(())
}
