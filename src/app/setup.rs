//! Environment, logging and session setup for the demo.
use std::path::PathBuf;

use termdialog::logging;
use termdialog::ui::print;
use termdialog::{AppInfo, DialogConfig, EnvConfig, Session};
use tracing::debug;

use super::args::AppArgs;

/// Everything the demo needs before its first dialog.
pub struct PreparedApp {
    pub args: AppArgs,
    pub session: Session,
}

/// Reads the environment, configures logging and builds the session.
///
/// A log file that cannot be opened is reported and otherwise ignored.
pub fn prepare(args: AppArgs) -> PreparedApp {
    let env = EnvConfig::from_env();
    if env.no_color {
        print::set_color(false);
    }

    let log_file = args
        .log_file
        .clone()
        .or_else(|| env.log_file.as_ref().map(PathBuf::from));
    configure_logging(env.log_filter.as_deref(), log_file);

    let config = DialogConfig::from_env(&env).with_app_info(app_info());
    debug!(no_color = env.no_color, "Configuration loaded");

    PreparedApp {
        args,
        session: Session::new(config),
    }
}

fn configure_logging(filter: Option<&str>, file: Option<PathBuf>) {
    if let Err(e) = logging::init(filter, file.as_deref()) {
        print::print_warning(&format!("Logging disabled: {}", e));
    }
}

fn app_info() -> AppInfo {
    AppInfo::new(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        option_env!("TERMDIALOG_BUILD").unwrap_or("unknown"),
    )
}
