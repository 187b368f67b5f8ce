use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use playground_core::{update, AppState, Msg, Route, WorkflowMsg};
use playground_engine::load_file;
use playground_logging::{pg_info, pg_warn};

use super::config::{AppConfig, DEFAULT_CONFIG_FILE};
use super::effects::EffectRunner;
use super::ui::commands::{self, Command, HELP};
use super::ui::render;
use super::{logging, persistence};

const INPUT_POLL: Duration = Duration::from_millis(75);
const SKILL_HINT: &str = "Open a skill first: go /conversation, /image or /summarize";

pub fn run_app() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let loaded = AppConfig::load(&config_path);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => AppConfig::default(),
    }
    .with_env_overrides(|key| std::env::var(key).ok());

    logging::initialize(config.log_destination, &config.log_file);
    if let Err(err) = loaded {
        pg_warn!("Using default settings: {:#}", err);
    }
    pg_info!(
        "Skills at {}, auth at {}",
        config.api_base,
        config.auth_base
    );

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(
        config.client_settings(),
        config.session_dir.clone(),
        msg_tx,
    )
    .context("failed to set up the backend client")?;

    let mut shell = Shell::new(runner, io::stdout());
    match persistence::load_session(&config.session_dir) {
        Some(session) => shell.dispatch(Msg::SessionRestored(Some(session))),
        None => shell.render(),
    }

    let line_rx = spawn_input_reader();
    loop {
        match line_rx.recv_timeout(INPUT_POLL) {
            Ok(line) => {
                if shell.handle_line(&line) == Flow::Quit {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        while let Ok(msg) = msg_rx.try_recv() {
            shell.dispatch(msg);
        }
    }

    pg_info!("Exiting");
    Ok(())
}

fn spawn_input_reader() -> mpsc::Receiver<String> {
    let (line_tx, line_rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    pg_warn!("Failed to read input: {}", err);
                    break;
                }
            }
        }
    });
    line_rx
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Owns the state and feeds it messages; everything it prints goes to `out`.
struct Shell<W: Write> {
    state: AppState,
    runner: EffectRunner,
    out: W,
}

impl<W: Write> Shell<W> {
    fn new(runner: EffectRunner, out: W) -> Self {
        Self {
            state: AppState::new(),
            runner,
            out,
        }
    }

    fn handle_line(&mut self, line: &str) -> Flow {
        match commands::parse(line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => return Flow::Quit,
            Ok(Some(Command::Help)) => self.write_lines(HELP.iter().map(|line| line.to_string())),
            Ok(Some(Command::Show)) => self.render(),
            Ok(Some(Command::App(msg))) => self.dispatch(msg),
            Ok(Some(Command::Workflow(msg))) => self.dispatch_workflow(msg),
            Ok(Some(Command::Select(path))) => match load_file(&path) {
                Ok(file) => self.dispatch_workflow(WorkflowMsg::FileSelected(file)),
                Err(err) => self.write_lines([format!("[error] {err}")]),
            },
            Err(usage) => self.write_lines([usage]),
        }
        Flow::Continue
    }

    fn dispatch_workflow(&mut self, msg: WorkflowMsg) {
        match self.state.route() {
            Route::Skill(skill) => self.dispatch(Msg::Workflow { skill, msg }),
            _ => self.write_lines([SKILL_HINT.to_string()]),
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let dirty = state.consume_dirty();
        self.state = state;

        let notifications = self.runner.run(effects);
        if dirty {
            self.render();
        }
        self.write_lines(notifications.iter().map(render::format_notification));
    }

    fn render(&mut self) {
        let lines = render::render(&self.state.view());
        self.write_lines(lines);
    }

    fn write_lines(&mut self, lines: impl IntoIterator<Item = String>) {
        for line in lines {
            let _ = writeln!(self.out, "{line}");
        }
        let _ = self.out.flush();
    }
}
