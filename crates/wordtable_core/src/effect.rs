use std::time::Duration;

use crate::CountAnimation;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchWords,
    FetchCounts,
    /// Drive each animation independently, one step per `interval`.
    AnimateCounts {
        animations: Vec<CountAnimation>,
        interval: Duration,
    },
}
