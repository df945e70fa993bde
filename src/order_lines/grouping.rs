//! Associates substitute lines with the original lines they replace.

use tracing::warn;

use super::display_type::{OrderLineDisplayType, classify};
use crate::models::order_line::OrderLine;

/// An original line together with every line substituting it.
///
/// Never empty: the original is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineGroup<'a> {
    original: &'a OrderLine,
    substitutes: Vec<&'a OrderLine>,
}

impl<'a> OrderLineGroup<'a> {
    /// The original line.
    #[must_use]
    pub fn original(&self) -> &'a OrderLine {
        self.original
    }

    /// Substitutes in input order.
    #[must_use]
    pub fn substitutes(&self) -> &[&'a OrderLine] {
        &self.substitutes
    }

    /// `[original] + substitutes`.
    #[must_use]
    pub fn lines(&self) -> Vec<&'a OrderLine> {
        std::iter::once(self.original)
            .chain(self.substitutes.iter().copied())
            .collect()
    }

    /// Number of lines in the group, original included.
    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.substitutes.len()
    }

    /// Always `false`; the original is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// How this group should be rendered.
    #[must_use]
    pub fn display_type(&self) -> OrderLineDisplayType {
        classify(&self.lines())
    }
}

/// Groups an order's lines into one group per original line.
///
/// Groups follow the order originals appear in `lines`; substitutes keep
/// their relative input order. Substitutes whose referenced original is
/// missing belong to no group and are reported with a warning.
pub fn group_order_lines(lines: &[OrderLine]) -> Vec<OrderLineGroup<'_>> {
    let (originals, substitutes): (Vec<&OrderLine>, Vec<&OrderLine>) =
        lines.iter().partition(|line| !line.is_substitute());

    for orphan in orphans_among(&originals, &substitutes) {
        warn!(
            line_id = orphan.id,
            substitutes_order_line_id = ?orphan.substitutes_order_line_id,
            "dropping substitute line with no matching original"
        );
    }

    originals
        .into_iter()
        .map(|original| OrderLineGroup {
            original,
            substitutes: substitutes
                .iter()
                .copied()
                .filter(|sub| sub.substitutes_order_line_id == Some(original.id))
                .collect(),
        })
        .collect()
}

/// Substitute lines referencing an original that is not in `lines`.
pub fn orphaned_substitutes(lines: &[OrderLine]) -> Vec<&OrderLine> {
    let (originals, substitutes): (Vec<&OrderLine>, Vec<&OrderLine>) =
        lines.iter().partition(|line| !line.is_substitute());
    orphans_among(&originals, &substitutes)
}

fn orphans_among<'a>(
    originals: &[&'a OrderLine],
    substitutes: &[&'a OrderLine],
) -> Vec<&'a OrderLine> {
    substitutes
        .iter()
        .copied()
        .filter(|sub| {
            !originals
                .iter()
                .any(|original| sub.substitutes_order_line_id == Some(original.id))
        })
        .collect()
}
