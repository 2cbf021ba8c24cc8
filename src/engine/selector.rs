//! Remediation play selection.
//!
//! A greedy "spend the budget on the weakest loop" policy: the
//! lowest-scoring loop gets two plays from the fix library, the other two
//! loops one each. Catalog order within an area is the preference order.

use crate::catalog::FixLibrary;

use super::types::{Area, Recommendation};

/// Plays taken from the weakest loop's area.
const WEAKEST_TAKE: usize = 2;
/// Plays taken from each remaining loop's area.
const OTHER_TAKE: usize = 1;

/// Select recommended plays for the three loop scores.
///
/// Loops are sorted ascending by raw (unclamped) score; ties keep the
/// declared precedence Pipeline, Conversion, Expansion via the stable sort.
/// Areas with fewer plays than their budget contribute what they have;
/// empty areas contribute nothing.
pub fn select_fixes(loop_scores: [(Area, f64); 3], library: &FixLibrary) -> Vec<Recommendation> {
    let mut loops = loop_scores;
    loops.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut picks = Vec::new();
    for (idx, (area, _)) in loops.iter().enumerate() {
        let budget = if idx == 0 { WEAKEST_TAKE } else { OTHER_TAKE };
        for play in library.plays_for(*area).iter().take(budget) {
            picks.push(Recommendation {
                name: play.name.clone(),
                area: *area,
                description: play.description.clone(),
                impact: play.impact.clone(),
                implementation: play.implementation.clone(),
            });
        }
    }
    picks
}
