use serde::{Deserialize, Serialize};

use crate::model::{candidate::Candidate, constituency::Constituency};

/// Turnout as a percentage with one decimal place, e.g. `"56.7"`. Halves
/// round up, so 57.25% reads `"57.3"`.
pub fn participation_rate(voted: u64, total: u64) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    // Tenths of a percent, rounded half up in exact integer arithmetic.
    let (voted, total) = (u128::from(voted), u128::from(total));
    let tenths = (voted * 2000 + total) / (2 * total);
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Turnout figures for one constituency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstituencyStats {
    pub name: String,
    pub state: String,
    pub total_voters: u64,
    pub voted_count: u64,
    pub pending_votes: u64,
    pub participation_rate: String,
}

impl From<&Constituency> for ConstituencyStats {
    fn from(constituency: &Constituency) -> Self {
        Self {
            name: constituency.name.clone(),
            state: constituency.state.clone(),
            total_voters: constituency.total_voters,
            voted_count: constituency.voted_count,
            pending_votes: constituency
                .total_voters
                .saturating_sub(constituency.voted_count),
            participation_rate: participation_rate(
                constituency.voted_count,
                constituency.total_voters,
            ),
        }
    }
}

/// A candidate together with the votes recorded for them in this process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateVoteCount {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub vote_count: u64,
}

/// Turnout summed across every constituency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_voters: u64,
    pub total_voted: u64,
    pub total_pending: u64,
    pub overall_participation: String,
}

impl Overview {
    pub fn from_stats(stats: &[ConstituencyStats]) -> Self {
        let total_voters = stats.iter().map(|s| s.total_voters).sum::<u64>();
        let total_voted = stats.iter().map(|s| s.voted_count).sum::<u64>();
        let overall_participation = if total_voters > 0 {
            participation_rate(total_voted, total_voters)
        } else {
            "0".to_string()
        };
        Self {
            total_voters,
            total_voted,
            total_pending: total_voters.saturating_sub(total_voted),
            overall_participation,
        }
    }
}
