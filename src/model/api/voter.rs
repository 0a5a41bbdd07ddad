use serde::{Deserialize, Serialize};

use crate::model::{
    candidate::{Candidate, CandidateId},
    constituency::Constituency,
    identity::IdType,
    stats::participation_rate,
    user::Voter,
};

/// Submit an identity document for verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyIdRequest {
    pub id_type: IdType,
    pub id: String,
}

/// Cast a vote for one candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub candidate_id: CandidateId,
}

/// The voter's identity status, shown before they reach the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyIdPage {
    pub name: String,
    pub verified: bool,
    pub accepted: Vec<IdType>,
}

impl From<&Voter> for VerifyIdPage {
    fn from(voter: &Voter) -> Self {
        Self {
            name: voter.name.clone(),
            verified: voter.is_verified(),
            accepted: vec![IdType::Aadhaar, IdType::VoterId],
        }
    }
}

/// The voter's own details. The Aadhaar number is masked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoterSummary {
    pub name: String,
    pub constituency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aadhaar_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voter_id: Option<String>,
    pub has_voted: bool,
}

impl VoterSummary {
    pub fn new(voter: &Voter, has_voted: bool) -> Self {
        Self {
            name: voter.name.clone(),
            constituency: voter.constituency.clone(),
            aadhaar_number: voter.aadhaar_number.as_ref().map(|a| a.masked()),
            voter_id: voter.voter_id.as_ref().map(ToString::to_string),
            has_voted,
        }
    }
}

/// Turnout of the voter's constituency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstituencyInfo {
    pub name: String,
    pub state: String,
    pub total_voters: u64,
    pub voted_count: u64,
    pub participation_rate: String,
}

impl From<Constituency> for ConstituencyInfo {
    fn from(constituency: Constituency) -> Self {
        Self {
            participation_rate: participation_rate(
                constituency.voted_count,
                constituency.total_voters,
            ),
            name: constituency.name,
            state: constituency.state,
            total_voters: constituency.total_voters,
            voted_count: constituency.voted_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoterDashboard {
    pub voter: VoterSummary,
    pub constituency: Option<ConstituencyInfo>,
    pub candidates: Vec<Candidate>,
}
