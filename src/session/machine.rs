//! Calibration session lifecycle: `Idle → Running ⇄ Paused → Idle`
//!
//! The session is the single owner of its settings, the frozen configuration
//! of the active run, the animation state and the random mask source. Front
//! ends feed it lifecycle signals and ticks; everything it produces leaves
//! through a [`Presenter`].

use crate::animation::frame::{Frame, build_frame};
use crate::animation::state::{Advance, AnimationState};
use crate::io::configuration::{Config, Settings};
use crate::io::error::{CalibrationError, Result};
use crate::io::status::{IDLE_STATUS, paused_status, running_status};
use crate::pattern::random::MaskRng;
use crate::session::presenter::Presenter;
use crate::session::tick::TickSource;
use log::{debug, info, warn};

/// Lifecycle phase of a session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// No run; configuration editable
    Idle,
    /// Ticks scheduled
    Running,
    /// Ticks suspended, last frame still displayed
    Paused,
}

// Everything that exists only while a run is active
#[derive(Debug, Clone, Copy)]
struct ActiveRun {
    config: Config,
    state: AnimationState,
    paused: bool,
}

/// Owns one calibration run at a time
#[derive(Debug)]
pub struct Session<T, P> {
    settings: Settings,
    run: Option<ActiveRun>,
    last_total_cells: usize,
    rng: MaskRng,
    ticks: T,
    presenter: P,
}

impl<T: TickSource, P: Presenter> Session<T, P> {
    /// Idle session with default settings and an entropy-seeded mask source
    pub fn new(ticks: T, presenter: P) -> Self {
        Self::with_rng(ticks, presenter, MaskRng::from_entropy())
    }

    /// Idle session drawing random masks from `rng`
    pub fn with_rng(ticks: T, presenter: P, rng: MaskRng) -> Self {
        let settings = Settings::default();
        Self {
            last_total_cells: settings.columns as usize * settings.rows as usize,
            settings,
            run: None,
            rng,
            ticks,
            presenter,
        }
    }

    /// Replace the settings used by the next start
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A run is active or paused
    /// - Any field of `settings` fails validation; nothing is applied
    pub fn configure(&mut self, settings: Settings) -> Result<()> {
        if self.run.is_some() {
            return Err(CalibrationError::SessionActive {
                operation: "change configuration",
            });
        }
        let config = Config::validate(&settings)?;
        self.settings = settings;
        self.last_total_cells = config.total_cells();
        Ok(())
    }

    /// Freeze the settings, show the first frame and begin ticking
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A run is already active or paused
    /// - The settings fail validation; the session stays idle
    /// - The tick source cannot be armed; the session is stopped and blanked
    pub fn start(&mut self) -> Result<()> {
        if self.run.is_some() {
            return Err(CalibrationError::SessionActive { operation: "start" });
        }

        let config = Config::validate(&self.settings)?;
        self.last_total_cells = config.total_cells();

        let state = AnimationState::new();
        let frame = build_frame(&config, &state, &mut self.rng);
        self.presenter.show_frame(&frame);

        if let Err(err) = self.ticks.arm(config.interval()) {
            warn!("Calibration could not start: {err}");
            self.ticks.disarm();
            self.show_idle();
            return Err(err);
        }

        self.run = Some(ActiveRun {
            config,
            state,
            paused: false,
        });

        info!(
            "Started {} on {}x{} cells every {} ms",
            config.mode(),
            config.columns(),
            config.rows(),
            config.interval().as_millis()
        );
        self.presenter.show_status(&running_status(&config));
        Ok(())
    }

    /// Cancel ticking, blank the display and return to idle
    ///
    /// Always safe to call. On an idle session the blank frame and idle
    /// status are shown again and nothing else changes.
    pub fn stop(&mut self) {
        self.ticks.disarm();
        if let Some(run) = self.run.take() {
            info!(
                "Stopped {} at step {}",
                run.config.mode(),
                run.state.step_index()
            );
        }
        self.show_idle();
    }

    /// Suspend ticking, keeping the animation state and the displayed frame
    ///
    /// Does nothing unless the session is running.
    pub fn pause(&mut self) {
        let Some(run) = self.run.as_mut().filter(|run| !run.paused) else {
            return;
        };
        run.paused = true;
        let status = paused_status(&run.config);
        self.ticks.disarm();
        debug!("Paused at step {}", run.state.step_index());
        self.presenter.show_status(&status);
    }

    /// Resume ticking at the same interval from exactly where the run paused
    ///
    /// Does nothing unless the session is paused.
    ///
    /// # Errors
    ///
    /// Returns an error if the tick source cannot be re-armed; the session
    /// is stopped and blanked
    pub fn resume(&mut self) -> Result<()> {
        let Some(run) = self.run.filter(|run| run.paused) else {
            return Ok(());
        };

        if let Err(err) = self.ticks.arm(run.config.interval()) {
            warn!("Calibration could not resume: {err}");
            self.stop();
            return Err(err);
        }

        if let Some(active) = self.run.as_mut() {
            active.paused = false;
        }
        debug!("Resumed at step {}", run.state.step_index());
        self.presenter.show_status(&running_status(&run.config));
        Ok(())
    }

    /// Pause a running session or resume a paused one
    ///
    /// # Errors
    ///
    /// Returns an error if resuming fails to re-arm the tick source
    pub fn toggle_pause(&mut self) -> Result<()> {
        match self.status() {
            SessionStatus::Running => {
                self.pause();
                Ok(())
            }
            SessionStatus::Paused => self.resume(),
            SessionStatus::Idle => Ok(()),
        }
    }

    /// Show the current frame, then advance the animation
    ///
    /// Ticks reaching an idle or paused session are ignored. A non-looping
    /// run that completes its pass stops itself here.
    pub fn tick(&mut self) -> SessionStatus {
        let Some(run) = self.run.as_mut().filter(|run| !run.paused) else {
            return self.status();
        };

        let frame = build_frame(&run.config, &run.state, &mut self.rng);
        self.presenter.show_frame(&frame);

        if run.state.advance(&run.config) == Advance::Complete {
            info!("{} finished its pass", run.config.mode());
            self.stop();
        }
        self.status()
    }

    /// Current lifecycle phase
    pub const fn status(&self) -> SessionStatus {
        match &self.run {
            None => SessionStatus::Idle,
            Some(run) if run.paused => SessionStatus::Paused,
            Some(_) => SessionStatus::Running,
        }
    }

    /// Settings the next start will use
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Frozen configuration of the active run
    pub fn config(&self) -> Option<&Config> {
        self.run.as_ref().map(|run| &run.config)
    }

    /// Animation state of the active run
    pub fn animation(&self) -> Option<&AnimationState> {
        self.run.as_ref().map(|run| &run.state)
    }

    /// Cell count of the last accepted configuration
    pub const fn total_cells(&self) -> usize {
        self.last_total_cells
    }

    /// Tick source driving this session
    pub const fn ticks(&self) -> &T {
        &self.ticks
    }

    /// Mutable access to the tick source, e.g. to poll it
    pub const fn ticks_mut(&mut self) -> &mut T {
        &mut self.ticks
    }

    /// Presenter receiving this session's output
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presenter
    pub const fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Tear the session down, handing back the presenter
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    fn show_idle(&mut self) {
        self.presenter.show_frame(&Frame::blank(self.last_total_cells));
        self.presenter.show_status(IDLE_STATUS);
    }
}
