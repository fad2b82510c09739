mod command;
mod effects;
mod logging;
mod render;

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use app_logging::app_info;
use filefox_client::ApiSettings;
use filefox_core::{update, AppState, Effect, Msg};

use command::Command;
use effects::EffectRunner;
use render::TranscriptPrinter;

/// Poll interval while waiting for an in-flight operation to settle.
const SETTLE_POLL: Duration = Duration::from_millis(100);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::initialize(logging::LogDestination::File);

    let mut settings = ApiSettings::default();
    if let Ok(base_url) = std::env::var("FILEFOX_API_URL") {
        let base_url = base_url.trim().to_string();
        if !base_url.is_empty() {
            settings.base_url = base_url;
        }
    }
    app_info!("using document service at {}", settings.base_url);

    let runner = EffectRunner::new(settings)?;
    let mut session = Session {
        state: AppState::new(),
        runner,
        printer: TranscriptPrinter::new(),
    };
    session.run()
}

struct Session {
    state: AppState,
    runner: EffectRunner,
    printer: TranscriptPrinter,
}

impl Session {
    fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        println!("FileFox — upload documents and ask questions about them.");
        println!("Commands: /upload <path> (.pdf, .docx, .csv), /clear, /quit");

        let stdin = io::stdin();
        loop {
            self.drain_settlements();

            print!("> ");
            io::stdout().flush()?;
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }

            match Command::parse(&line) {
                Command::Empty => {}
                Command::Quit => break,
                Command::Usage(usage) => eprintln!("{usage}"),
                Command::Clear => self.dispatch(Msg::ClearRequested),
                Command::Upload(path) => match command::candidate_from_path(&path) {
                    Ok(candidate) => self.dispatch(Msg::FileChosen(candidate)),
                    Err(err) => eprintln!("{err}"),
                },
                Command::Ask(question) => {
                    self.dispatch(Msg::InputChanged(question));
                    self.dispatch(Msg::SendSubmitted);
                }
            }
        }
        Ok(())
    }

    /// Block until no flow is in flight, feeding settlements back through
    /// `update`. This is the line-oriented analogue of the original surface
    /// disabling its inputs while a busy flag is set.
    fn drain_settlements(&mut self) {
        while self.state.view().is_busy() {
            if let Some(msg) = self.runner.wait(SETTLE_POLL) {
                self.dispatch(msg);
            }
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let mut pending = VecDeque::from([msg]);
        while let Some(msg) = pending.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;

            for effect in effects {
                match effect {
                    Effect::ConfirmClear => {
                        pending.push_back(if prompt_clear_confirmation() {
                            Msg::ClearConfirmed
                        } else {
                            Msg::ClearDeclined
                        });
                    }
                    other => self.runner.run(other),
                }
            }
        }

        if self.state.consume_dirty() {
            for line in self.printer.render(&self.state.view()) {
                println!("{line}");
            }
        }
    }
}

/// Blocking yes/no prompt; declining aborts the clear flow before any
/// network call.
fn prompt_clear_confirmation() -> bool {
    print!("Clear all uploaded documents? This cannot be undone. [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
