//! Pick sequencer - the rolling animation as an explicit state machine
//!
//! ```text
//!   Idle --trigger--> Running --tick--> Running
//!                        |                 |
//!                        +--cancel--> Idle +--complete--> Settled --reset--> Idle
//! ```
//!
//! The sequencer never schedules anything itself. A driver calls [`PickSequencer::tick`]
//! once per [`Timing::tick_ms`] with the ticket returned by [`PickSequencer::trigger`].
//! Every tick re-reads the live choice set, so edits made mid-roll are visible.

use dioxus::logger::tracing::debug;
use rand::Rng;

use super::choices::ChoiceSet;

/// How long a roll lasts and how the final value is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickMode {
    /// Every tick shows an independent random draw; the last one is the result.
    TickCount { ticks: u32 },
    /// Ticks cycle round-robin until the duration elapses, then one fresh draw is committed.
    FixedDuration { duration_ms: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub mode: PickMode,
    pub tick_ms: u32,
}

impl Timing {
    pub const DEFAULT_TICK_MS: u32 = 100;
    pub const DEFAULT_TICKS: u32 = 20;
    pub const DEFAULT_DURATION_MS: u32 = 2000;

    pub const fn tick_count(ticks: u32, tick_ms: u32) -> Self {
        Self { mode: PickMode::TickCount { ticks }, tick_ms }
    }

    pub const fn fixed_duration(duration_ms: u32, tick_ms: u32) -> Self {
        Self { mode: PickMode::FixedDuration { duration_ms }, tick_ms }
    }

    /// Tick period, never zero
    pub fn period_ms(&self) -> u32 {
        self.tick_ms.max(1)
    }

    /// Number of ticks before the sequence settles (at least one)
    pub fn total_ticks(&self) -> u32 {
        match self.mode {
            PickMode::TickCount { ticks } => ticks.max(1),
            PickMode::FixedDuration { duration_ms } => duration_ms.div_ceil(self.period_ms()).max(1),
        }
    }

}

impl Default for Timing {
    fn default() -> Self {
        Self::tick_count(Self::DEFAULT_TICKS, Self::DEFAULT_TICK_MS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Settled,
}

/// Handle for one triggered sequence. Superseded or cancelled tickets go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PickTicket {
    generation: u64,
}

/// Terminal report of a completed sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub result: Option<String>,
}

impl Settlement {
    /// The celebrate signal fires only when a value was committed
    pub fn celebrates(&self) -> bool {
        self.result.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Rolling,
    Settled(Settlement),
    /// The ticket no longer matches a running sequence; nothing changed.
    Stale,
}

#[derive(Debug, Clone)]
pub struct PickSequencer {
    timing: Timing,
    phase: Phase,
    generation: u64,
    ticks: u32,
    display: Option<String>,
    result: Option<String>,
}

impl PickSequencer {
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            phase: Phase::Idle,
            generation: 0,
            ticks: 0,
            display: None,
            result: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Value currently shown (rolling value while running, committed value after)
    pub fn display(&self) -> Option<&str> {
        self.display.as_deref()
    }

    /// Last committed value
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn tick_period_ms(&self) -> u32 {
        self.timing.period_ms()
    }

    /// Fraction of the current roll completed, in [0, 1]
    pub fn progress(&self) -> f32 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::Settled => 1.0,
            Phase::Running => (self.ticks as f32 / self.timing.total_ticks() as f32).min(1.0),
        }
    }

    pub fn can_trigger(&self, choices: &ChoiceSet) -> bool {
        !choices.is_empty() && !self.is_running()
    }

    /// Start a sequence. Refused (None, no state change) on an empty set or while running.
    pub fn trigger(&mut self, choices: &ChoiceSet) -> Option<PickTicket> {
        if !self.can_trigger(choices) {
            return None;
        }
        if self.phase == Phase::Settled {
            self.reset();
        }
        self.generation += 1;
        self.ticks = 0;
        // each roll starts from a blank display; the committed result stays until replaced
        self.display = None;
        self.phase = Phase::Running;
        debug!(generation = self.generation, choices = choices.len(), "roll started");
        Some(PickTicket { generation: self.generation })
    }

    /// Advance one animation step against the live choice set.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        ticket: PickTicket,
        choices: &ChoiceSet,
        rng: &mut R,
    ) -> TickOutcome {
        if !self.owns(ticket) {
            return TickOutcome::Stale;
        }

        match self.timing.mode {
            PickMode::TickCount { ticks } => {
                if let Some(value) = choices.pick(rng) {
                    self.display = Some(value.to_string());
                }
                self.ticks += 1;
                if self.ticks >= ticks.max(1) {
                    let committed = self.display.clone();
                    return TickOutcome::Settled(self.complete(committed));
                }
            }
            PickMode::FixedDuration { .. } => {
                if !choices.is_empty() {
                    let idx = self.ticks as usize % choices.len();
                    self.display = choices.get(idx).map(str::to_string);
                }
                self.ticks += 1;
                if self.ticks >= self.timing.total_ticks() {
                    let committed = choices
                        .pick(rng)
                        .map(str::to_string)
                        .or_else(|| self.display.clone());
                    return TickOutcome::Settled(self.complete(committed));
                }
            }
        }

        TickOutcome::Rolling
    }

    /// Abort a running sequence without committing. Returns false for stale tickets.
    pub fn cancel(&mut self, ticket: PickTicket) -> bool {
        if !self.owns(ticket) {
            return false;
        }
        self.generation += 1;
        self.phase = Phase::Idle;
        self.ticks = 0;
        self.display = self.result.clone();
        debug!("roll cancelled");
        true
    }

    /// Settled -> Idle. Any other phase is left alone.
    pub fn reset(&mut self) {
        if self.phase == Phase::Settled {
            self.phase = Phase::Idle;
            self.ticks = 0;
        }
    }

    /// Forget the committed value (used by "clear all"). Ignored while running.
    pub fn clear_result(&mut self) {
        if !self.is_running() {
            self.result = None;
            self.display = None;
            self.reset();
        }
    }

    fn owns(&self, ticket: PickTicket) -> bool {
        self.phase == Phase::Running && ticket.generation == self.generation
    }

    fn complete(&mut self, committed: Option<String>) -> Settlement {
        self.phase = Phase::Settled;
        if committed.is_some() {
            self.result = committed.clone();
            self.display = committed.clone();
        }
        debug!(ticks = self.ticks, result = ?committed, "roll settled");
        Settlement { result: committed }
    }
}

impl Default for PickSequencer {
    fn default() -> Self {
        Self::new(Timing::default())
    }
}
