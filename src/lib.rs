pub mod brush;
pub mod cli;
pub mod config;
pub mod dialogs;
pub mod model;
pub mod plot;
pub mod roi;
pub mod runtime;
pub mod stack;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
