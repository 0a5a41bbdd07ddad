use serde::{Deserialize, Serialize};

/// An electoral district and its turnout so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constituency {
    pub id: String,
    pub name: String,
    pub state: String,
    pub total_voters: u64,
    pub voted_count: u64,
}
