use serde::{Deserialize, Serialize};

pub type CandidateId = String;

/// A candidate standing in one constituency. NOTA is modelled as an ordinary candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub party: String,
    /// Name of the constituency the candidate stands in.
    pub constituency: String,
    pub party_symbol: String,
}
