//! Active power-up timers.
//!
//! One slot per [`PowerUpKind`]; an empty slot means the effect is off.
//! Picking up a kind that is already running refreshes its timer.

use crate::components::PowerUpKind;

const KINDS: usize = PowerUpKind::ALL.len();

/// Remaining duration (ms) per power-up kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveEffects {
    remaining: [Option<u32>; KINDS],
}

/// Kinds whose timers ran out during one [`ActiveEffects::tick`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expired {
    kinds: [bool; KINDS],
}

impl Expired {
    pub fn contains(&self, kind: PowerUpKind) -> bool {
        self.kinds[kind.index()]
    }

    pub fn is_empty(&self) -> bool {
        !self.kinds.iter().any(|k| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = PowerUpKind> + '_ {
        PowerUpKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

impl ActiveEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start or refresh an effect. Durations never stack.
    pub fn activate(&mut self, kind: PowerUpKind, duration_ms: u32) {
        self.remaining[kind.index()] = Some(duration_ms);
    }

    /// Count all timers down, clearing and reporting the ones that hit zero
    pub fn tick(&mut self, delta_ms: u32) -> Expired {
        let mut expired = Expired::default();
        for (i, slot) in self.remaining.iter_mut().enumerate() {
            if let Some(ms) = slot {
                let left = ms.saturating_sub(delta_ms);
                if left == 0 {
                    *slot = None;
                    expired.kinds[i] = true;
                } else {
                    *slot = Some(left);
                }
            }
        }
        expired
    }

    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.remaining[kind.index()].is_some()
    }

    pub fn remaining_ms(&self, kind: PowerUpKind) -> Option<u32> {
        self.remaining[kind.index()]
    }

    /// Active kinds with their remaining time, in kind order
    pub fn iter(&self) -> impl Iterator<Item = (PowerUpKind, u32)> + '_ {
        PowerUpKind::ALL
            .into_iter()
            .filter_map(move |kind| self.remaining_ms(kind).map(|ms| (kind, ms)))
    }

    pub fn clear(&mut self) {
        self.remaining = [None; KINDS];
    }

    /// HUD lines such as `Speed Boost: 4.5s`
    pub fn hud_lines(&self) -> Vec<(PowerUpKind, String)> {
        self.iter()
            .map(|(kind, ms)| (kind, format!("{}: {:.1}s", kind.label(), ms as f32 / 1000.0)))
            .collect()
    }
}
