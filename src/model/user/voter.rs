use serde::{Deserialize, Serialize};

use crate::model::{
    identity::{Aadhaar, IdDocument, VoterIdNumber},
    phone::Phone,
};

pub type VoterId = String;

/// A voter, as held in the session and the voter directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voter {
    pub id: VoterId,
    pub phone: Phone,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aadhaar_number: Option<Aadhaar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voter_id: Option<VoterIdNumber>,
    /// Name of the constituency the voter is registered in.
    pub constituency: String,
    pub has_voted: bool,
}

impl Voter {
    /// A voter who has not verified any documents or voted yet.
    pub fn new(
        id: impl Into<VoterId>,
        phone: Phone,
        name: impl Into<String>,
        constituency: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            phone,
            name: name.into(),
            aadhaar_number: None,
            voter_id: None,
            constituency: constituency.into(),
            has_voted: false,
        }
    }

    /// Attach a verified identity document, replacing any earlier one of the same kind.
    pub fn attach(&mut self, document: IdDocument) {
        match document {
            IdDocument::Aadhaar(aadhaar) => self.aadhaar_number = Some(aadhaar),
            IdDocument::VoterId(voter_id) => self.voter_id = Some(voter_id),
        }
    }

    /// Has the voter verified at least one identity document?
    pub fn is_verified(&self) -> bool {
        self.aadhaar_number.is_some() || self.voter_id.is_some()
    }
}
