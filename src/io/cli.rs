//! Command-line interface and the single-threaded run loop

use crate::io::configuration::{
    COMMAND_POLL_INTERVAL_MS, DEFAULT_COLUMNS, DEFAULT_INTERVAL_MS, DEFAULT_ROWS, Settings,
};
use crate::io::error::Result;
use crate::io::image::FrameCapture;
use crate::io::progress::TerminalPresenter;
use crate::pattern::mode::Mode;
use crate::pattern::random::MaskRng;
use crate::session::machine::{Session, SessionStatus};
use crate::session::presenter::Presenter;
use crate::session::tick::IntervalTicks;
use clap::Parser;
use log::debug;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "braille-calibrate")]
#[command(
    author,
    version,
    about = "Cycle test patterns across a multi-cell 8-dot braille display"
)]
/// Command-line arguments for the calibration tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Cells per display line
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: u32,

    /// Display lines, laid end to end in one flat output line
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: u32,

    /// Tick period in milliseconds
    #[arg(short, long = "interval", value_name = "MS", default_value_t = DEFAULT_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Pattern mode index (see --list-modes)
    #[arg(short, long, default_value_t = 0)]
    pub mode: usize,

    /// Stop after one full pass instead of looping
    #[arg(long)]
    pub no_loop: bool,

    /// Blink every cell at once instead of walking one cell at a time
    #[arg(short, long)]
    pub whole_line: bool,

    /// Stop after this many ticks
    #[arg(short, long)]
    pub ticks: Option<u64>,

    /// Seed for reproducible random modes
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Export the displayed frames as an animated GIF
    #[arg(long, value_name = "PATH")]
    pub gif: Option<PathBuf>,

    /// Hide status text
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the mode catalogue and exit
    #[arg(short, long)]
    pub list_modes: bool,
}

impl Cli {
    /// Check if the pattern should restart after a full pass
    pub const fn looping(&self) -> bool {
        !self.no_loop
    }

    /// Settings described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the mode index is outside the catalogue
    pub fn settings(&self) -> Result<Settings> {
        Ok(Settings {
            columns: self.columns,
            rows: self.rows,
            interval_ms: self.interval_ms,
            mode: Mode::from_index(self.mode)?,
            looping: self.looping(),
            whole_line: self.whole_line,
        })
    }

    fn mask_rng(&self) -> MaskRng {
        self.seed.map_or_else(MaskRng::from_entropy, MaskRng::seeded)
    }
}

/// Keyboard command read from stdin while a run is active
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Pause or resume
    TogglePause,
    /// Stop the run
    Stop,
}

impl Command {
    /// Interpret one line of input; `p` or an empty line toggles pause, `s` or `q` stops
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "p" => Some(Self::TogglePause),
            "s" | "q" => Some(Self::Stop),
            _ => None,
        }
    }
}

/// One line per mode: index and label
pub fn mode_listing() -> String {
    Mode::ALL
        .iter()
        .map(|mode| format!("{:>2}  {}", mode.index(), mode.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Runs one calibration session from parsed arguments
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Start the session and drive it until it stops
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The arguments do not describe a valid configuration
    /// - The timer cannot be armed or re-armed
    /// - The GIF preview cannot be written
    pub fn run(&mut self) -> Result<()> {
        if self.cli.list_modes {
            Self::print_modes();
            return Ok(());
        }

        let settings = self.cli.settings()?;

        let mut presenter = TerminalPresenter::new(self.cli.quiet);
        if self.cli.gif.is_some() {
            presenter.enable_capture(FrameCapture::new(settings.columns, settings.interval_ms));
        }

        let mut session = Session::with_rng(IntervalTicks::new(), presenter, self.cli.mask_rng());
        session.configure(settings)?;

        let commands = spawn_command_reader();
        session.start()?;
        drive(&mut session, &commands, self.cli.ticks)?;

        let mut presenter = session.into_presenter();
        presenter.finish();

        if let (Some(path), Some(capture)) = (&self.cli.gif, presenter.take_capture()) {
            capture.export_gif(path)?;
        }

        Ok(())
    }

    // Allow print for the mode catalogue
    #[allow(clippy::print_stdout)]
    fn print_modes() {
        println!("{}", mode_listing());
    }
}

/// Deliver ticks and commands to `session` until it returns to idle
///
/// Ticks come from the session's own [`IntervalTicks`]; the loop waits for
/// input until the next tick is due, so only one thing ever touches the
/// session at a time. `tick_limit` stops the run after that many ticks.
///
/// # Errors
///
/// Returns an error if resuming fails to re-arm the timer
pub fn drive<P: Presenter>(
    session: &mut Session<IntervalTicks, P>,
    commands: &Receiver<Command>,
    tick_limit: Option<u64>,
) -> Result<()> {
    let poll = Duration::from_millis(COMMAND_POLL_INTERVAL_MS);
    let mut input_open = true;
    let mut delivered = 0u64;

    while session.status() != SessionStatus::Idle {
        let wait = session
            .ticks()
            .time_until_due(Instant::now())
            .unwrap_or(poll);

        let command = if input_open {
            match commands.recv_timeout(wait) {
                Ok(command) => Some(command),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => {
                    debug!("Input closed; running without keyboard control");
                    input_open = false;
                    None
                }
            }
        } else {
            std::thread::sleep(wait);
            None
        };

        match command {
            Some(Command::TogglePause) => session.toggle_pause()?,
            Some(Command::Stop) => session.stop(),
            None => {}
        }

        if session.ticks_mut().take_due(Instant::now()) {
            session.tick();
            delivered += 1;
            if tick_limit.is_some_and(|limit| delivered >= limit) {
                session.stop();
            }
        }
    }

    Ok(())
}

// Reads stdin lines on a helper thread; the run loop owns the session
fn spawn_command_reader() -> Receiver<Command> {
    let (sender, receiver) = mpsc::channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if let Some(command) = Command::parse(&line)
                && sender.send(command).is_err()
            {
                break;
            }
        }
    });
    receiver
}
