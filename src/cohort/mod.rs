pub mod analyzer;
pub mod filter;
pub mod selector;

pub use self::analyzer::{build, build_from_config, build_with, CohortProfile};
pub use self::filter::{remove_most_common, remove_most_common_with};
pub use self::selector::{
    determine_distinctive, determine_distinctive_with, distinctive_frequencies,
    distinctive_frequencies_with,
};
