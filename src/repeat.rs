//! Key-hold auto-repeat, one independent timer per bound action.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

pub const INITIAL_DELAY: Duration = Duration::from_millis(500);
pub const REPEAT_INTERVAL: Duration = Duration::from_millis(125);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepeatTiming {
    pub initial_delay: Duration,
    pub interval: Duration,
}

impl Default for RepeatTiming {
    fn default() -> Self {
        Self { initial_delay: INITIAL_DELAY, interval: REPEAT_INTERVAL }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepeatState {
    #[default]
    Idle,
    Repeating,
}

/// Turns a pressed edge plus a held flag into action fires.
///
/// A press fires at once. Holding stays silent until more than
/// `initial_delay` has passed since the last fire, then fires every time more
/// than `interval` has passed. Release returns to `Idle`.
#[derive(Clone, Debug, Default)]
pub struct KeyRepeater {
    state: RepeatState,
    last_fire: Option<Instant>,
}

impl KeyRepeater {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RepeatState {
        self.state
    }

    /// Advance one tick. Returns whether the action fires now.
    pub fn update(&mut self, now: Instant, down: bool, pressed: bool, timing: RepeatTiming) -> bool {
        if pressed {
            self.state = RepeatState::Idle;
            self.last_fire = Some(now);
            return true;
        }
        if !down {
            self.state = RepeatState::Idle;
            self.last_fire = None;
            return false;
        }
        let Some(last) = self.last_fire else {
            return false;
        };
        let elapsed = now.saturating_duration_since(last);
        let due = match self.state {
            RepeatState::Idle => elapsed > timing.initial_delay,
            RepeatState::Repeating => elapsed > timing.interval,
        };
        if due {
            self.state = RepeatState::Repeating;
            self.last_fire = Some(now);
        }
        due
    }
}

/// Per-action repeaters keyed by action identity.
#[derive(Debug)]
pub struct KeyRepeaters<A> {
    timing: RepeatTiming,
    repeaters: HashMap<A, KeyRepeater>,
}

impl<A: Copy + Eq + Hash> KeyRepeaters<A> {
    pub fn new(timing: RepeatTiming) -> Self {
        Self { timing, repeaters: HashMap::new() }
    }

    /// Update the repeater for `action`, creating it on first use.
    pub fn update(&mut self, action: A, now: Instant, down: bool, pressed: bool) -> bool {
        if !down && !pressed && !self.repeaters.contains_key(&action) {
            return false;
        }
        self.repeaters
            .entry(action)
            .or_default()
            .update(now, down, pressed, self.timing)
    }

    /// Release every action not in `held`.
    pub fn release_all_except(&mut self, now: Instant, held: impl Fn(&A) -> bool) {
        for (action, repeater) in self.repeaters.iter_mut() {
            if !held(action) {
                repeater.update(now, false, false, self.timing);
            }
        }
    }
}
