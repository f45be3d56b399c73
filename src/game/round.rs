use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{DurationBounds, Product};

/// Player-controlled settings, read when a round is prepared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub duration_seconds: u32,
    pub organize_enabled: bool,
}

impl Configuration {
    pub fn new(bounds: &DurationBounds) -> Self {
        Self {
            duration_seconds: bounds.default,
            organize_enabled: false,
        }
    }
}

/// Coerces raw duration input the way an integer prefix parse would:
/// leading whitespace, an optional sign, then digits. Anything else falls back to the
/// default; out-of-range values are clamped.
pub fn sanitize_duration(raw: &str, bounds: &DurationBounds) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return bounds.default;
    }
    let magnitude = rest[..digits_len].parse::<u64>().unwrap_or(u64::MAX);
    if negative {
        return bounds.min;
    }
    clamp_duration(magnitude.min(u32::MAX as u64) as u32, bounds)
}

pub fn clamp_duration(seconds: u32, bounds: &DurationBounds) -> u32 {
    seconds.clamp(bounds.min, bounds.max)
}

/// Data for one round. Replaced wholesale whenever a round is prepared.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundState {
    targets: Vec<Product>,
    found: HashSet<String>,
    duration_seconds: u32,
    pub remaining_seconds: u32,
    pub active: bool,
}

impl RoundState {
    pub fn new(targets: Vec<Product>, duration_seconds: u32) -> Self {
        Self {
            targets,
            found: HashSet::new(),
            duration_seconds,
            remaining_seconds: duration_seconds,
            active: false,
        }
    }

    /// Length the round was prepared with.
    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    /// Resets the clock of a round that has not started.
    pub fn set_duration(&mut self, seconds: u32) {
        self.duration_seconds = seconds;
        self.remaining_seconds = seconds;
    }

    /// Shopping list in display order.
    pub fn targets(&self) -> &[Product] {
        &self.targets
    }

    pub fn target(&self, id: &str) -> Option<&Product> {
        self.targets.iter().find(|p| p.id == id)
    }

    pub fn is_target(&self, id: &str) -> bool {
        self.target(id).is_some()
    }

    pub fn is_found(&self, id: &str) -> bool {
        self.found.contains(id)
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    /// Records a located target. Returns false for non-targets and repeats.
    pub fn mark_found(&mut self, id: &str) -> bool {
        if !self.is_target(id) {
            return false;
        }
        self.found.insert(id.to_string())
    }

    pub fn all_found(&self) -> bool {
        !self.targets.is_empty() && self.targets.iter().all(|t| self.found.contains(&t.id))
    }

    /// One second off the clock; returns true once time has run out.
    pub fn tick(&mut self) -> bool {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.remaining_seconds == 0
    }
}
