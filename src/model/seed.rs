//! The fixed demo election: three constituencies, their candidates, two
//! registered voters and one election officer.

use crate::model::{
    candidate::Candidate,
    constituency::Constituency,
    phone::Phone,
    user::{Admin, Voter},
};

pub const ADMIN_ID: &str = "admin-1";
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_NAME: &str = "Election Officer";
pub const ADMIN_PASSWORD: &str = "password";

/// Name and constituency given to voters who log in with an unregistered phone.
pub const DEMO_VOTER_NAME: &str = "Demo User";
pub const DEMO_CONSTITUENCY: &str = "Demo Constituency";

const LOTUS: &str = "\u{1FAB7}";
const HAND: &str = "\u{1F44D}";
const BROOM: &str = "\u{1F9F9}";
const ELEPHANT: &str = "\u{1F418}";
const CROSS: &str = "\u{274C}";

const BJP: &str = "Bharatiya Janata Party";
const INC: &str = "Indian National Congress";
const AAP: &str = "Aam Aadmi Party";
const BSP: &str = "Bahujan Samaj Party";
const NONE_OF_THE_ABOVE: &str = "None of the Above";

// (id, name, state, total voters, voted so far)
const CONSTITUENCIES: [(&str, &str, &str, u64, u64); 3] = [
    ("1", "Mumbai North", "Maharashtra", 1_500_000, 850_000),
    ("2", "Delhi East", "Delhi", 1_200_000, 720_000),
    ("3", DEMO_CONSTITUENCY, "Demo State", 1_000_000, 500_000),
];

// (id, name, party, constituency, symbol)
const CANDIDATES: [(&str, &str, &str, &str, &str); 13] = [
    ("1", "Rajesh Kumar", BJP, "Mumbai North", LOTUS),
    ("2", "Priya Sharma", INC, "Mumbai North", HAND),
    ("3", "Amit Singh", AAP, "Mumbai North", BROOM),
    ("4", "Sunita Patel", BSP, "Mumbai North", ELEPHANT),
    ("5", "NOTA", NONE_OF_THE_ABOVE, "Mumbai North", CROSS),
    ("6", "Arjun Mathur", BJP, "Delhi East", LOTUS),
    ("7", "Meera Reddy", INC, "Delhi East", HAND),
    ("8", "Ravi Verma", AAP, "Delhi East", BROOM),
    ("9", "NOTA", NONE_OF_THE_ABOVE, "Delhi East", CROSS),
    ("10", "Vijay Mishra", BJP, DEMO_CONSTITUENCY, LOTUS),
    ("11", "Anita Desai", INC, DEMO_CONSTITUENCY, HAND),
    ("12", "Suresh Joshi", AAP, DEMO_CONSTITUENCY, BROOM),
    ("13", "NOTA", NONE_OF_THE_ABOVE, DEMO_CONSTITUENCY, CROSS),
];

// (id, phone, name, constituency, has voted)
const VOTERS: [(&str, &str, &str, &str, bool); 2] = [
    ("1", "9876543210", "Rahul Sharma", "Mumbai North", false),
    ("2", "9876543211", "Priya Patel", "Delhi East", true),
];

pub fn constituencies() -> Vec<Constituency> {
    CONSTITUENCIES
        .iter()
        .map(|&(id, name, state, total_voters, voted_count)| Constituency {
            id: id.to_string(),
            name: name.to_string(),
            state: state.to_string(),
            total_voters,
            voted_count,
        })
        .collect()
}

pub fn candidates() -> Vec<Candidate> {
    CANDIDATES
        .iter()
        .map(|&(id, name, party, constituency, symbol)| Candidate {
            id: id.to_string(),
            name: name.to_string(),
            party: party.to_string(),
            constituency: constituency.to_string(),
            party_symbol: symbol.to_string(),
        })
        .collect()
}

/// Registered voters. Their phone numbers are well formed, so any that fail
/// to parse are skipped rather than aborting the seed.
pub fn voters() -> Vec<Voter> {
    VOTERS
        .iter()
        .filter_map(|&(id, phone, name, constituency, has_voted)| {
            let phone = phone.parse::<Phone>().ok()?;
            let mut voter = Voter::new(id, phone, name, constituency);
            voter.has_voted = has_voted;
            Some(voter)
        })
        .collect()
}

pub fn admin() -> Admin {
    Admin::new(ADMIN_ID, ADMIN_USERNAME, ADMIN_NAME)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_candidate_stands_in_a_known_constituency() {
        let names = constituencies()
            .into_iter()
            .map(|c| c.name)
            .collect::<HashSet<_>>();
        for candidate in candidates() {
            assert!(names.contains(&candidate.constituency), "{candidate:?}");
        }
    }

    #[test]
    fn ids_are_unique() {
        let candidate_ids = candidates().into_iter().map(|c| c.id).collect::<HashSet<_>>();
        assert_eq!(candidate_ids.len(), CANDIDATES.len());
        let voter_ids = voters().into_iter().map(|v| v.id).collect::<HashSet<_>>();
        assert_eq!(voter_ids.len(), VOTERS.len());
    }

    #[test]
    fn each_constituency_offers_nota() {
        for constituency in constituencies() {
            assert!(candidates()
                .iter()
                .any(|c| c.constituency == constituency.name && c.name == "NOTA"));
        }
    }

    #[test]
    fn registered_voters_are_seeded() {
        let voters = voters();
        assert_eq!(voters.len(), 2);
        assert_eq!(voters[0].name, "Rahul Sharma");
        assert!(!voters[0].has_voted);
        assert_eq!(voters[1].name, "Priya Patel");
        assert!(voters[1].has_voted);
    }
}
