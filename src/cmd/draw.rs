use crate::reports;
use clap::Args;
use matrixlotto::config::Config;
use matrixlotto::draws::DrawClient;
use matrixlotto::game::GameKind;
use matrixlotto::LtResult;

#[derive(Args, Debug, Clone)]
pub struct DrawArgs {
    #[command(flatten)]
    pub config: Config,

    /// Contest number; latest when omitted
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub contest: Option<u32>,

    #[arg(long, value_enum, default_value_t = GameKind::MegaSena)]
    pub game: GameKind,

    /// Also fetch the contest before it
    #[arg(long, default_value_t = false)]
    pub previous: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub async fn run(args: DrawArgs, config: &Config) -> LtResult<()> {
    let client = DrawClient::from_params(&config.draws)?;

    let (current, previous) = if args.previous {
        client.fetch_with_previous(args.contest, args.game).await?
    } else {
        (client.fetch(args.contest, args.game).await?, None)
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&current)?);
        if let Some(prev) = &previous {
            println!("{}", serde_json::to_string_pretty(prev)?);
        }
        return Ok(());
    }

    reports::print_draw(&current);
    if let Some(prev) = &previous {
        reports::print_draw(prev);
    }
    Ok(())
}
