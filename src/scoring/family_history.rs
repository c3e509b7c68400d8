//! Family-history conditions that add to the risk score.

use std::collections::HashSet;

/// Points added for each distinct recognized condition.
pub const POINTS_PER_CONDITION: u32 = 10;

/// Conditions recognized in the family-history vocabulary.
/// Any other tag is accepted but scores nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyCondition {
    Diabetes,
    Cancer,
    Alzheimers,
}

impl FamilyCondition {
    /// Match a tag exactly, as submitted by the client.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "diabetes" => Some(Self::Diabetes),
            "cancer" => Some(Self::Cancer),
            "alzheimers" => Some(Self::Alzheimers),
            _ => None,
        }
    }
}

/// Sum the points for a list of tags. Each condition counts at most once.
pub fn family_history_points<S: AsRef<str>>(tags: &[S]) -> u32 {
    let conditions: HashSet<FamilyCondition> = tags
        .iter()
        .filter_map(|tag| FamilyCondition::from_tag(tag.as_ref()))
        .collect();
    conditions.len() as u32 * POINTS_PER_CONDITION
}
