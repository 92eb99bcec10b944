use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use wordfreq_core::{update, AppState, AppViewModel, Msg};
use wordfreq_engine::{EngineConfig, EngineHandle};
use wordfreq_logging::{wf_debug, wf_info};

use super::effects::EffectRunner;
use super::logging;
use super::ui;
use super::ui::input::{parse_command, Command};

/// Everything the main loop reacts to, from stdin or from the engine.
#[derive(Debug)]
pub enum AppEvent {
    Msg(Msg),
    Help,
    Unknown(String),
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize();
    wf_info!("wordfreq starting");

    let export_dir = std::env::current_dir().context("resolving export directory")?;
    let engine = EngineHandle::new(EngineConfig::default()).context("starting engine")?;

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let effects = EffectRunner::new(engine, export_dir, event_tx.clone());
    spawn_input_reader(event_tx);

    let mut stdout = io::stdout().lock();
    let clear_screen = io::stdout().is_terminal();
    let mut state = AppState::new();

    draw(&mut stdout, &state.view(), clear_screen)?;
    print_lines(&mut stdout, ui::constants::HELP_LINES)?;

    while let Ok(first) = event_rx.recv() {
        // Coalesce everything already queued into a single redraw.
        let mut pending = vec![first];
        pending.extend(event_rx.try_iter());

        let mut notes: Vec<String> = Vec::new();
        let mut quit = false;
        for event in pending {
            match event {
                AppEvent::Msg(msg) => {
                    wf_debug!("Dispatch {}", msg_name(&msg));
                    let (next, new_effects) = update(state, msg);
                    state = next;
                    effects.run(new_effects);
                }
                AppEvent::Help => {
                    notes.extend(ui::constants::HELP_LINES.iter().map(|l| l.to_string()));
                }
                AppEvent::Unknown(word) => {
                    notes.push(format!("Unknown command `{word}`; type `help`."));
                }
                AppEvent::Quit => quit = true,
            }
        }

        if state.consume_dirty() {
            draw(&mut stdout, &state.view(), clear_screen)?;
        }
        let note_refs: Vec<&str> = notes.iter().map(String::as_str).collect();
        print_lines(&mut stdout, &note_refs)?;

        if quit {
            break;
        }
    }

    wf_info!("wordfreq exiting");
    Ok(())
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let event = match parse_command(&line) {
                Command::Dispatch(msg) => AppEvent::Msg(msg),
                Command::Help => AppEvent::Help,
                Command::Quit => AppEvent::Quit,
                Command::Unknown(word) => AppEvent::Unknown(word),
            };
            if event_tx.send(event).is_err() {
                return;
            }
        }
        // EOF behaves like `quit`.
        let _ = event_tx.send(AppEvent::Quit);
    });
}

fn draw(out: &mut impl Write, view: &AppViewModel, clear_screen: bool) -> io::Result<()> {
    if clear_screen {
        write!(out, "\x1b[2J\x1b[H")?;
    }
    for line in ui::render::render(view) {
        writeln!(out, "{line}")?;
    }
    write!(out, "{}", ui::constants::PROMPT)?;
    out.flush()
}

fn print_lines(out: &mut impl Write, lines: &[&str]) -> io::Result<()> {
    if lines.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    write!(out, "{}", ui::constants::PROMPT)?;
    out.flush()
}

/// Message name without payloads; documents can be large.
fn msg_name(msg: &Msg) -> &'static str {
    match msg {
        Msg::ComputeClicked => "ComputeClicked",
        Msg::ExportClicked => "ExportClicked",
        Msg::FetchProgress { .. } => "FetchProgress",
        Msg::DocumentFetched { .. } => "DocumentFetched",
        Msg::FetchFailed { .. } => "FetchFailed",
        Msg::ExportFinished(_) => "ExportFinished",
        Msg::NoOp => "NoOp",
    }
}
