pub mod loader;
pub mod tokenize;

pub use self::loader::{load_user_dir, read_counts, write_counts};
pub use self::tokenize::{count_texts, tokenize};
