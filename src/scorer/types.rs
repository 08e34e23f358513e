use serde::{Deserialize, Serialize};

/// Per-user closeness to each cohort (lower is closer) and distinctive-word share.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserScore {
    pub general_closeness: f64,
    pub target_closeness: f64,
    /// In [0, 1]; 0 when the user has no words left after filtering.
    pub distinctive_ratio: f64,
}
