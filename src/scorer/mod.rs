pub mod similarity;
pub mod types;
pub mod users;

pub use self::similarity::distance;
pub use self::types::UserScore;
pub use self::users::{score_all, UserScorer};
