//! Tip-level banding.
//!
//! Merchants configure ascending tip thresholds, each with a title shown
//! while the courier tip sits in that band. A tip below the first
//! threshold falls in the lowest band.

pub mod config;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::tip::TipLevel;
use config::TipLevels;

/// Selects the band a tip falls in.
///
/// Levels are evaluated in ascending `amount` order regardless of input
/// order. Returns the last level whose amount the tip has reached, the
/// lowest level when none is reached, or `None` for an empty list.
pub fn tip_band(levels: &[TipLevel], tip: Decimal) -> Option<&TipLevel> {
    let mut ascending: Vec<&TipLevel> = levels.iter().collect();
    ascending.sort_by(|a, b| a.amount.cmp(&b.amount));

    let lowest = ascending.first().copied()?;
    Some(
        ascending
            .into_iter()
            .take_while(|level| level.amount <= tip)
            .last()
            .unwrap_or(lowest),
    )
}

/// Tracks the band of a tip as the member adjusts it.
pub struct TipBander {
    levels: TipLevels,
    current: Option<String>,
}

impl TipBander {
    /// Creates a bander with no tip selected yet.
    pub fn new(levels: TipLevels) -> Self {
        Self {
            levels,
            current: None,
        }
    }

    /// Returns the configured levels.
    pub fn levels(&self) -> &TipLevels {
        &self.levels
    }

    /// Updates the tip and returns its band.
    pub fn update(&mut self, tip: Decimal) -> &TipLevel {
        let band = self.levels.band_for(tip);
        if self.current.as_deref() != Some(band.level.as_str()) {
            debug!(tip = %tip, level = %band.level, "tip moved into a new band");
            self.current = Some(band.level.clone());
        }
        band
    }

    /// Level label of the most recent band, if a tip has been set.
    pub fn current_level(&self) -> Option<&str> {
        self.current.as_deref()
    }
}
