use serde::{Deserialize, Serialize};

use crate::model::stats::{ConstituencyStats, Overview};

/// Everything the election officer's dashboard shows up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub overview: Overview,
    pub constituencies: Vec<ConstituencyStats>,
}
