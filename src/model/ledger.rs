use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::model::{
    candidate::{Candidate, CandidateId},
    constituency::Constituency,
    seed,
    stats::{CandidateVoteCount, ConstituencyStats},
    user::VoterId,
};

/// The in-memory election: immutable candidates, constituencies with their
/// running turnout, and one recorded choice per voter.
pub struct Ledger {
    candidates: Vec<Candidate>,
    tally: RwLock<Tally>,
}

/// Everything that changes when a vote is cast. Kept under one lock so the
/// vote and the turnout increment land together.
struct Tally {
    constituencies: Vec<Constituency>,
    votes: HashMap<VoterId, CandidateId>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoteError {
    #[error("You have already cast your vote.")]
    AlreadyVoted,
    #[error("Candidate '{0}' not found")]
    UnknownCandidate(CandidateId),
}

impl Ledger {
    pub fn new(candidates: Vec<Candidate>, constituencies: Vec<Constituency>) -> Self {
        Self {
            candidates,
            tally: RwLock::new(Tally {
                constituencies,
                votes: HashMap::new(),
            }),
        }
    }

    /// A ledger holding the demo election, with no votes recorded yet.
    pub fn seeded() -> Self {
        Self::new(seed::candidates(), seed::constituencies())
    }

    // No writer can panic between inserting a vote and bumping the turnout,
    // so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Tally> {
        self.tally.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tally> {
        self.tally.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn candidate(&self, candidate_id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == candidate_id)
    }

    pub fn candidates_by_constituency(&self, constituency: &str) -> Vec<Candidate> {
        self.candidates
            .iter()
            .filter(|c| c.constituency == constituency)
            .cloned()
            .collect()
    }

    pub fn constituency_by_name(&self, name: &str) -> Option<Constituency> {
        self.read()
            .constituencies
            .iter()
            .find(|c| c.name == name)
            .cloned()
    }

    pub fn all_constituencies(&self) -> Vec<Constituency> {
        self.read().constituencies.clone()
    }

    /// Record `voter_id`'s vote for `candidate_id` and bump the turnout of the
    /// candidate's constituency by one.
    ///
    /// A voter can only ever vote once; later attempts fail and change nothing.
    pub fn cast_vote(&self, voter_id: &str, candidate_id: &str) -> Result<(), VoteError> {
        let mut tally = self.write();
        if tally.votes.contains_key(voter_id) {
            return Err(VoteError::AlreadyVoted);
        }
        let candidate = self
            .candidate(candidate_id)
            .ok_or_else(|| VoteError::UnknownCandidate(candidate_id.to_string()))?;

        tally
            .votes
            .insert(voter_id.to_string(), candidate.id.clone());
        if let Some(constituency) = tally
            .constituencies
            .iter_mut()
            .find(|c| c.name == candidate.constituency)
        {
            constituency.voted_count += 1;
        }
        Ok(())
    }

    pub fn has_voted(&self, voter_id: &str) -> bool {
        self.read().votes.contains_key(voter_id)
    }

    /// Turnout figures for every constituency.
    pub fn voting_stats(&self) -> Vec<ConstituencyStats> {
        self.read()
            .constituencies
            .iter()
            .map(ConstituencyStats::from)
            .collect()
    }

    /// Every candidate in `constituency` with the number of votes recorded for them.
    pub fn candidate_vote_counts(&self, constituency: &str) -> Vec<CandidateVoteCount> {
        let tally = self.read();
        self.candidates
            .iter()
            .filter(|c| c.constituency == constituency)
            .map(|candidate| CandidateVoteCount {
                candidate: candidate.clone(),
                vote_count: tally.votes.values().filter(|id| **id == candidate.id).count()
                    as u64,
            })
            .collect()
    }
}
