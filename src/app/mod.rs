pub mod args;
mod demo;
mod setup;

pub use args::AppArgs;

use anyhow::Result;
use termdialog::ui::print;
use tracing::info;

use args::DemoCommand;
use demo::Note;

pub fn launch() -> Result<()> {
    launch_with_args(AppArgs::from_cli())
}

pub fn launch_with_args(args: AppArgs) -> Result<()> {
    let setup::PreparedApp { args, session } = setup::prepare(args);
    let command = args.command.unwrap_or(DemoCommand::Tour);
    info!(?command, no_session = args.no_session, "Starting demo");

    if !args.no_session {
        session.begin()?;
    }
    let result = demo::run(&session, command);
    session.end()?;

    for note in result? {
        match note {
            Note::Success(text) => print::print_success(&text),
            Note::Info(text) => print::print_info(&text),
            Note::Warning(text) => print::print_warning(&text),
        }
    }
    Ok(())
}
