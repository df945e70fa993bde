//! Tip level configuration types and loading.

use std::fmt::Write;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::tip::TipLevel;

/// On-disk shape of `tip_levels.json`.
#[derive(Debug, Deserialize)]
struct TipLevelsFile {
    levels: Vec<TipLevel>,
}

/// A validated, non-empty set of tip levels sorted by ascending amount.
#[derive(Debug, Clone, PartialEq)]
pub struct TipLevels {
    levels: Vec<TipLevel>,
}

impl TipLevels {
    /// Validates and sorts a merchant's tip levels.
    ///
    /// # Errors
    ///
    /// Returns [`GrocerError::Config`](crate::GrocerError::Config) if the
    /// list is empty or a threshold is negative.
    pub fn new(mut levels: Vec<TipLevel>) -> crate::Result<Self> {
        if levels.is_empty() {
            return Err(crate::GrocerError::Config(
                "tip levels must contain at least one level".to_string(),
            ));
        }
        if let Some(negative) = levels.iter().find(|l| l.amount < Decimal::ZERO) {
            return Err(crate::GrocerError::Config(format!(
                "tip level {} has negative amount {}",
                negative.level, negative.amount
            )));
        }
        levels.sort_by(|a, b| a.amount.cmp(&b.amount));
        Ok(Self { levels })
    }

    /// Loads tip levels from a JSON file of the form `{"levels": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            crate::GrocerError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let file: TipLevelsFile = serde_json::from_str(&contents)?;
        Self::new(file.levels)
    }

    /// Levels in ascending amount order.
    pub fn levels(&self) -> &[TipLevel] {
        &self.levels
    }

    /// The band a tip falls in; the lowest band below the first threshold.
    pub fn band_for(&self, tip: Decimal) -> &TipLevel {
        // `new` rejects empty lists, so `tip_band` always finds a band.
        super::tip_band(&self.levels, tip).unwrap_or(&self.levels[0])
    }

    /// Returns a human-readable listing of the configured bands.
    pub fn describe(&self, currency: &crate::models::currency::Currency) -> String {
        let mut out = String::from("Tip levels:\n");
        for level in &self.levels {
            let _ = writeln!(
                out,
                "  {} from {}: {}",
                level.level,
                currency.format(level.amount),
                level.title
            );
        }
        out
    }
}
