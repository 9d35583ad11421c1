use crate::reports;
use clap::Args;
use matrixlotto::config::Config;
use matrixlotto::LtResult;

#[derive(Args, Debug, Clone)]
pub struct SavedArgs {
    #[command(flatten)]
    pub config: Config,

    /// Delete the saved bet with this number (as listed)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub delete: Option<u32>,
}

pub fn run(args: SavedArgs, config: &Config) -> LtResult<()> {
    let mut session = super::open_session(config);

    if let Some(n) = args.delete {
        let removed = session.delete_saved_set(n as usize - 1)?;
        println!("🗑️  Deleted {} bet #{}: {:?}", removed.game, n, removed.numbers);
    }

    reports::print_saved_sets(session.saved_sets());
    Ok(())
}
