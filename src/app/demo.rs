//! The dialogs behind each demo subcommand.
use std::thread;
use std::time::Duration;

use anyhow::Result;
use termdialog::ui::{
    run_confirm, run_input, run_menu, show_info, show_list, show_message, ConfirmConfig,
    InfoConfig, InfoRow, InfoSection, InputConfig, ListConfig, MenuConfig, MenuOption,
    MessageKind, ProgressConfig, ProgressView, Session,
};
use tracing::debug;

use super::args::DemoCommand;

/// Result lines printed once the screen is restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Note {
    Success(String),
    Info(String),
    Warning(String),
}

const BANNER: &str = "termdialog";

pub fn run(session: &Session, command: DemoCommand) -> Result<Vec<Note>> {
    match command {
        DemoCommand::Tour => tour(session),
        DemoCommand::Menu { title, options } => {
            let labels: Vec<&str> = options.iter().map(String::as_str).collect();
            menu(session, MenuConfig::simple(title, &labels))
        }
        DemoCommand::Confirm {
            question,
            default_no,
        } => confirm(session, ConfirmConfig::new(question).with_default(!default_no)),
        DemoCommand::Input {
            title,
            placeholder,
            password,
        } => {
            let mut config = InputConfig::new(title).with_placeholder(placeholder);
            if password {
                config = config.password();
            }
            input(session, config)
        }
        DemoCommand::List { title, items } => {
            show_list(session, ListConfig::new(title, items))?;
            Ok(Vec::new())
        }
        DemoCommand::Info => {
            show_info(session, environment_info(session))?;
            Ok(Vec::new())
        }
        DemoCommand::Progress { steps, delay_ms } => {
            progress(session, steps, Duration::from_millis(delay_ms))
        }
    }
}

fn tour(session: &Session) -> Result<Vec<Note>> {
    let mut notes = Vec::new();
    loop {
        let config = MenuConfig::new(
            "What would you like to try?",
            vec![
                MenuOption::new("Menu", "menu"),
                MenuOption::new("Confirmation", "confirm"),
                MenuOption::new("Text input", "input"),
                MenuOption::new("Password input", "password"),
                MenuOption::new("List", "list"),
                MenuOption::new("Info pane", "info"),
                MenuOption::new("Progress stream", "progress"),
                MenuOption::new("Quit", "quit"),
            ],
        )
        .with_header(BANNER)
        .with_description("Every dialog below runs inside the same terminal session.");

        let Some(choice) = run_menu(session, config)? else {
            break;
        };
        debug!(%choice, "Tour selection");
        let step = match choice.as_str() {
            "menu" => menu(
                session,
                MenuConfig::simple("Favourite editor", &["vim", "emacs", "nano", "helix"]),
            )?,
            "confirm" => confirm(
                session,
                ConfirmConfig::new("Enable automatic updates?")
                    .with_description("Updates are checked once a day.")
                    .with_labels("Enable", "Not now"),
            )?,
            "input" => input(
                session,
                InputConfig::new("What should we call you?").with_placeholder("name"),
            )?,
            "password" => input(session, InputConfig::new("Choose a passphrase").password())?,
            "list" => {
                let items = (1..=40).map(|i| format!("package-{i:02}")).collect();
                show_list(
                    session,
                    ListConfig::new("Installed packages", items)
                        .with_description("Scroll with ↑/↓, page with PgUp/PgDn."),
                )?;
                Vec::new()
            }
            "info" => {
                show_info(session, environment_info(session))?;
                Vec::new()
            }
            "progress" => progress(session, 40, Duration::from_millis(60))?,
            _ => break,
        };
        notes.extend(step);
    }
    Ok(notes)
}

fn menu(session: &Session, config: MenuConfig) -> Result<Vec<Note>> {
    Ok(match run_menu(session, config)? {
        Some(value) => vec![Note::Success(format!("Selected {value}"))],
        None => vec![Note::Warning("Menu cancelled".to_string())],
    })
}

fn confirm(session: &Session, config: ConfirmConfig) -> Result<Vec<Note>> {
    let question = config.title.clone();
    let answer = if run_confirm(session, config)? {
        "yes"
    } else {
        "no"
    };
    Ok(vec![Note::Info(format!("{question} {answer}"))])
}

fn input(session: &Session, config: InputConfig) -> Result<Vec<Note>> {
    let masked = config.password;
    let outcome = run_input(session, config)?;
    if !outcome.confirmed {
        return Ok(vec![Note::Warning("Input cancelled".to_string())]);
    }
    let note = if masked {
        format!("Read {} characters", outcome.value.chars().count())
    } else {
        format!("Read \"{}\"", outcome.value)
    };
    show_message(session, MessageKind::Success, &note)?;
    Ok(vec![Note::Success(note)])
}

fn progress(session: &Session, steps: usize, delay: Duration) -> Result<Vec<Note>> {
    let view = ProgressView::start(session, ProgressConfig::new("Installing packages"))?;
    view.add_info(format!("Resolving {steps} packages"))?;
    for step in 1..=steps {
        thread::sleep(delay);
        match step % 10 {
            0 => view.add_warning(format!(
                "package-{step:02} ships an older configuration file; keeping the local copy"
            ))?,
            _ => view.add_status(format!("Installed package-{step:02}"))?,
        }
    }
    view.add_text("")?;
    view.add_success("All packages installed")?;
    let summary = view.done()?;
    Ok(vec![Note::Success(format!(
        "Streamed {} lines",
        summary.lines.len()
    ))])
}

fn environment_info(session: &Session) -> InfoConfig {
    let (width, height) = crossterm::terminal::size().unwrap_or((0, 0));
    let layout = session.layout();
    let vars = ["TERM", "COLORTERM", "NO_COLOR", "TERMDIALOG_LOG"];
    let env_rows = vars
        .iter()
        .map(|name| {
            let value = std::env::var(name).unwrap_or_else(|_| "-".to_string());
            InfoRow::columns([name.to_string(), value])
        })
        .collect();

    InfoConfig::new(
        "Environment",
        vec![
            InfoSection::new(
                "Process",
                vec![
                    InfoRow::kv("OS", std::env::consts::OS),
                    InfoRow::kv("Arch", std::env::consts::ARCH),
                    InfoRow::kv("PID", std::process::id().to_string()),
                ],
            ),
            InfoSection::new(
                "Terminal",
                vec![
                    InfoRow::kv("Size", format!("{width}x{height}")),
                    InfoRow::kv("Visible rows", layout.visible_rows(height).to_string()),
                    InfoRow::kv("Colour", if session.theme().is_plain() { "off" } else { "on" }),
                ],
            ),
            InfoSection::new("Variables", env_rows),
        ],
    )
    .with_description("Details gathered at startup.")
}
