use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use wordtable_core::{render_table, update, AppState, LocaleFormatter, Msg};
use wordtable_logging::{bump_render_pass, render_pass, table_debug, table_info, table_warn};

use super::config::{self, Settings, DEFAULT_CONFIG_PATH};
use super::effects::EffectRunner;
use super::input::{self, Action, InputError};
use super::logging;
use super::ui::render::TerminalRenderer;
use super::ui::text::Catalog;

/// Counter redraws are coalesced to this rate.
const RENDER_TICK: Duration = Duration::from_millis(75);

pub(crate) enum AppEvent {
    Msg(Msg),
    Input(String),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let (config, origin) = config::load_config(&config_path);
    let settings = config
        .validate()
        .with_context(|| format!("invalid configuration in {:?}", config_path))?;

    logging::initialize(settings.log_destination);
    origin.log(&config_path);
    table_info!(
        "wordtable starting; api={} page_size={}",
        settings.fetch.base_url,
        settings.initial_page_size
    );

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let effects = EffectRunner::new(settings.fetch.clone(), event_tx.clone())
        .context("failed to start the fetch engine")?;
    spawn_input_reader(event_tx.clone());

    // Background tick to throttle counter redraws.
    thread::spawn(move || {
        while event_tx.send(AppEvent::Msg(Msg::Tick)).is_ok() {
            thread::sleep(RENDER_TICK);
        }
    });

    let mut shell = Shell::new(&settings, effects, io::stdout());
    shell.dispatch_msg(Msg::Started)?;

    while let Ok(event) = event_rx.recv() {
        let keep_running = match event {
            AppEvent::Msg(msg) => {
                shell.dispatch_msg(msg)?;
                true
            }
            AppEvent::Input(line) => shell.handle_input(&line)?,
            AppEvent::InputClosed => false,
        };
        if !keep_running {
            break;
        }
    }

    shell.effects.shutdown();
    table_info!("wordtable stopped");
    Ok(())
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if event_tx.send(AppEvent::Input(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    table_warn!("Failed to read stdin: {}", err);
                    break;
                }
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}

struct Shell<W> {
    state: AppState,
    renderer: TerminalRenderer<LocaleFormatter>,
    text: &'static Catalog,
    page_sizes: Vec<NonZeroUsize>,
    effects: EffectRunner,
    out: W,
}

impl<W: Write> Shell<W> {
    fn new(settings: &Settings, effects: EffectRunner, out: W) -> Self {
        let text = settings.language.catalog();
        Self {
            state: AppState::with_settings(
                settings.initial_page_size,
                settings.counter_names.iter().cloned(),
            ),
            renderer: TerminalRenderer::new(settings.formatter, text),
            text,
            page_sizes: settings.page_sizes.clone(),
            effects,
            out,
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) -> io::Result<()> {
        let is_tick = matches!(msg, Msg::Tick);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.enqueue(effects);
        self.render_if_dirty(is_tick)
    }

    /// Returns false once the user asked to quit.
    fn handle_input(&mut self, line: &str) -> io::Result<bool> {
        table_debug!("Input {:?} after render pass {}", line, render_pass());
        let table = self.state.table().view();
        let action = input::parse_command(line)
            .and_then(|command| input::resolve(command, &table, &self.page_sizes));

        match action {
            Ok(Action::Dispatch(msg)) => self.dispatch_msg(msg)?,
            Ok(Action::Quit) => return Ok(false),
            Ok(Action::Help) => writeln!(self.out, "{}", self.text.help)?,
            Err(err @ InputError::Unknown(_)) => {
                writeln!(self.out, "{err}\n{}", self.text.help)?;
            }
            Err(err) => writeln!(self.out, "{err}")?,
        }
        Ok(true)
    }

    // The table is redrawn after every change; counters only on ticks.
    fn render_if_dirty(&mut self, include_counters: bool) -> io::Result<()> {
        if self.state.consume_table_dirty() {
            render_table(&self.state.table().view(), &mut self.renderer);
            let pass = bump_render_pass();
            table_debug!("Rendered table pass {}", pass);
            write!(self.out, "\n{}", self.renderer.screen())?;
        }
        if include_counters && self.state.consume_counters_dirty() {
            let counters = self.state.view().counters;
            write!(self.out, "\r{}", self.renderer.counters_line(&counters))?;
        }
        self.out.flush()
    }
}
