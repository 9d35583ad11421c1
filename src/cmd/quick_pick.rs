use crate::reports;
use clap::Args;
use matrixlotto::config::Config;
use matrixlotto::filters::FilterSet;
use matrixlotto::game::GameKind;
use matrixlotto::quickpick::QuickPick;
use matrixlotto::LtResult;

#[derive(Args, Debug, Clone)]
pub struct QuickPickArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(long, value_enum, default_value_t = GameKind::MegaSena)]
    pub game: GameKind,

    /// How many bets to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Ignore the filters saved in the session
    #[arg(long, default_value_t = false)]
    pub no_filters: bool,

    /// Keep the generated bets in the session (see `saved`)
    #[arg(long, default_value_t = false)]
    pub save: bool,
}

pub fn run(args: QuickPickArgs, config: &Config) -> LtResult<()> {
    let mut session = super::open_session(config);
    let filters = if args.no_filters {
        FilterSet::default()
    } else {
        *session.filters()
    };

    let rules = args.game.rules();
    let mut qp = QuickPick::new(args.seed);
    let picks: Vec<_> = (0..args.count)
        .map(|_| qp.pick_filtered(&rules, &filters))
        .collect();

    reports::print_quick_picks(args.game, &picks);

    if args.save {
        for pick in &picks {
            let slot = session.save_set(args.game, &pick.numbers)?;
            println!("💾 Saved as #{}", slot + 1);
        }
    }
    Ok(())
}
