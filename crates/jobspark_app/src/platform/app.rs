use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use jobspark_core::{update, AppState, AppViewModel, Msg, ScoringView};
use jobspark_engine::load_document;
use jobspark_logging::{spark_info, spark_warn};

use super::config::{AppConfig, DEFAULT_CONFIG_FILE};
use super::effects::EffectRunner;
use super::ui::commands::{parse_command, Command, HELP_TEXT};
use super::ui::render;

/// Everything the main loop reacts to.
pub(super) enum AppInput {
    Line(String),
    Engine(Msg),
    Status(String),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = AppConfig::load(&config_path)?;
    let log_settings = config.log_settings()?;
    if !jobspark_logging::initialize(&log_settings) {
        eprintln!(
            "logging disabled: could not open {}",
            log_settings.file_path.display()
        );
    }
    spark_info!("JobSpark starting (config {:?})", config_path);

    let (input_tx, input_rx) = mpsc::channel::<AppInput>();
    let runner = EffectRunner::new(&config.service_settings(), input_tx.clone())
        .context("failed to start engine")?;
    runner.check_health();
    spawn_stdin_reader(input_tx);

    let mut app = App::new(runner);
    print_lines(HELP_TEXT.lines().map(str::to_string));
    app.show();

    while let Ok(input) = input_rx.recv() {
        match input {
            AppInput::Line(line) => {
                if !app.handle_line(&line) {
                    break;
                }
            }
            AppInput::Engine(msg) => app.dispatch(msg),
            AppInput::Status(text) => println!("{text}"),
            AppInput::InputClosed => break,
        }
    }

    spark_info!("JobSpark exiting");
    Ok(())
}

struct App {
    state: AppState,
    runner: EffectRunner,
    shown: AppViewModel,
}

impl App {
    fn new(runner: EffectRunner) -> Self {
        let state = AppState::new();
        let shown = state.view();
        Self {
            state,
            runner,
            shown,
        }
    }

    /// Returns `false` once the user asked to leave.
    fn handle_line(&mut self, line: &str) -> bool {
        let location = self.state.search().location().to_string();
        match parse_command(line, &location) {
            Command::Dispatch(msgs) => {
                for msg in msgs {
                    self.dispatch(msg);
                }
            }
            Command::Upload(path) => match load_document(&path) {
                Ok(document) => {
                    spark_info!(
                        "selected {} ({} bytes, {})",
                        document.name,
                        document.bytes.len(),
                        document.content_type
                    );
                    if !document.is_pdf() {
                        println!("{} is not a PDF; keeping the current resume", document.name);
                    }
                    self.dispatch(Msg::DocumentSelected(document));
                }
                Err(err) => {
                    spark_warn!("upload failed: {}", err);
                    print_lines(render::render_alert(&err.to_string()));
                }
            },
            Command::Show => self.show(),
            Command::Help => print_lines(HELP_TEXT.lines().map(str::to_string)),
            Command::Quit => return false,
            Command::Invalid(reason) => println!("{reason}"),
        }
        true
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        for alert in self.runner.run(effects) {
            print_lines(render::render_alert(&alert));
        }
        if self.state.consume_dirty() {
            self.render_changes();
        }
    }

    fn show(&mut self) {
        let view = self.state.view();
        print_lines(render::render_search(&view.search));
        print_lines(render::render_scoring(&view.scoring));
        self.shown = view;
    }

    /// Reprints only the panels whose view changed; a bare progress step
    /// prints just the bar.
    fn render_changes(&mut self) {
        let view = self.state.view();
        if view.search != self.shown.search {
            print_lines(render::render_search(&view.search));
        }
        if view.scoring != self.shown.scoring {
            if is_progress_step(&self.shown.scoring, &view.scoring) {
                println!("{}", render::progress_bar(view.scoring.progress_percent));
            } else {
                print_lines(render::render_scoring(&view.scoring));
            }
        }
        self.shown = view;
    }
}

fn is_progress_step(before: &ScoringView, after: &ScoringView) -> bool {
    before.submitting
        && after.submitting
        && ScoringView {
            progress_percent: after.progress_percent,
            ..before.clone()
        } == *after
}

fn spawn_stdin_reader(input_tx: mpsc::Sender<AppInput>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if input_tx.send(AppInput::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    spark_warn!("stdin read failed: {}", err);
                    break;
                }
            }
        }
        let _ = input_tx.send(AppInput::InputClosed);
    });
}

fn print_lines(lines: impl IntoIterator<Item = String>) {
    for line in lines {
        println!("{line}");
    }
}
