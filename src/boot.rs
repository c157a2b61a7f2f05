//! The fake terminal boot sequence.
//!
//! [`BootLog`] reveals a fixed script one line per tick. It knows nothing about
//! timers: the terminal panel owns the interval and feeds it ticks, and tells it
//! when the panel goes away.

use std::{ops::ControlFlow, time::Duration};

/// Time between two revealed lines.
pub const TICK_PERIOD: Duration = Duration::from_millis(150);

pub const BOOT_SCRIPT: &[&str] = &[
    "> initializing...",
    "> loading void linux kernel...",
    "> starting dwm...",
    "> executing ~/.xinitrc...",
    "> ready.",
    "",
    "  welcome to joeyjooste.com",
    "",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    Idle,
    Running,
    Done,
}

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// A line was revealed and more remain.
    Revealed,
    /// The last line was revealed; the sequence is done.
    Completed,
    /// The sequencer wasn't running, nothing changed.
    Ignored,
}

impl Tick {
    /// Whether the interval driving the sequencer should keep firing.
    pub fn control_flow(self) -> ControlFlow<()> {
        match self {
            Tick::Revealed => ControlFlow::Continue(()),
            Tick::Completed | Tick::Ignored => ControlFlow::Break(()),
        }
    }
}

/// Like [`Tick::control_flow`], where `None` means the log is already gone.
pub fn reveal_step(tick: Option<Tick>) -> ControlFlow<()> {
    tick.map_or(ControlFlow::Break(()), Tick::control_flow)
}

/// Script plus the length of its revealed prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootLog {
    script: &'static [&'static str],
    revealed: usize,
    state: SequencerState,
}

impl Default for BootLog {
    fn default() -> Self {
        Self::new(BOOT_SCRIPT)
    }
}

impl BootLog {
    pub fn new(script: &'static [&'static str]) -> Self {
        Self {
            script,
            revealed: 0,
            state: SequencerState::Idle,
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Lines revealed so far, always a prefix of the script.
    pub fn revealed(&self) -> &[&'static str] {
        &self.script[..self.revealed]
    }

    pub fn is_complete(&self) -> bool {
        self.state == SequencerState::Done
    }

    /// `activate` would change something.
    pub fn can_activate(&self) -> bool {
        self.state == SequencerState::Idle && self.revealed == 0
    }

    /// Start revealing if nothing has been revealed yet.
    ///
    /// Returns `true` only when the caller should start ticking. An empty
    /// script completes immediately and never asks for a timer.
    pub fn activate(&mut self) -> bool {
        if !self.can_activate() {
            return false;
        }
        if self.script.is_empty() {
            self.state = SequencerState::Done;
            false
        } else {
            self.state = SequencerState::Running;
            true
        }
    }

    pub fn tick(&mut self) -> Tick {
        if self.state != SequencerState::Running {
            return Tick::Ignored;
        }
        self.revealed += 1;
        if self.revealed == self.script.len() {
            self.state = SequencerState::Done;
            Tick::Completed
        } else {
            Tick::Revealed
        }
    }

    /// The hosting view went away mid-reveal. Whatever was revealed stays.
    ///
    /// Returns `true` if a running sequence was stopped.
    pub fn interrupt(&mut self) -> bool {
        if self.state == SequencerState::Running {
            self.state = SequencerState::Idle;
            true
        } else {
            false
        }
    }
}

/// Lines echoing a command (`> ...`) are highlighted.
pub fn is_prompt_line(line: &str) -> bool {
    line.starts_with('>')
}

/// Empty lines still need to take up a row.
pub fn visible_text(line: &'static str) -> &'static str {
    if line.is_empty() {
        "\u{00A0}"
    } else {
        line
    }
}
