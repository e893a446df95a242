use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use crate::SourceStamp;

/// A selected grid column: a source stamp and the earliest start seen for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedStamp {
    pub stamp: SourceStamp,
    #[serde(with = "super::time_serde")]
    pub first_seen: SystemTime,
}
