use crate::reports;
use clap::Args;
use matrixlotto::config::Config;
use matrixlotto::filters::FilterKind;
use matrixlotto::LtResult;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    #[command(flatten)]
    pub config: Config,
}

#[derive(Args, Debug, Clone)]
pub struct SetArgs {
    #[command(flatten)]
    pub config: Config,

    /// Row-major cell index, 0-15
    pub index: usize,

    pub digit: String,
}

#[derive(Args, Debug, Clone)]
pub struct UnsetArgs {
    #[command(flatten)]
    pub config: Config,

    pub index: usize,
}

#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(value_enum)]
    pub kind: FilterKind,
}

#[derive(Args, Debug, Clone)]
pub struct ClearArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn show(config: &Config) -> LtResult<()> {
    let session = super::open_session(config);
    reports::print_grid(session.grid());
    reports::print_filters(session.filters());
    reports::print_tokens(session.tokens());
    Ok(())
}

pub fn set(args: SetArgs, config: &Config) -> LtResult<()> {
    let mut session = super::open_session(config);
    session.set_cell(args.index, &args.digit)?;
    reports::print_grid(session.grid());
    println!("{} tokens", session.tokens().len());
    Ok(())
}

pub fn unset(args: UnsetArgs, config: &Config) -> LtResult<()> {
    let mut session = super::open_session(config);
    session.clear_cell(args.index)?;
    reports::print_grid(session.grid());
    println!("{} tokens", session.tokens().len());
    Ok(())
}

pub fn filter(args: FilterArgs, config: &Config) -> LtResult<()> {
    let mut session = super::open_session(config);
    let enabled = session.toggle_filter(args.kind);
    println!(
        "Filter '{}' is now {}",
        args.kind,
        if enabled { "ON" } else { "OFF" }
    );
    reports::print_filters(session.filters());
    Ok(())
}

pub fn clear(config: &Config) -> LtResult<()> {
    let mut session = super::open_session(config);
    session.clear();
    if session.saved_sets().is_empty() {
        println!("🧹 Grid, filters and saved session cleared.");
    } else {
        println!(
            "🧹 Grid and filters cleared; {} saved bets kept in {}.",
            session.saved_sets().len(),
            session.store().path().display()
        );
    }
    Ok(())
}
