pub mod checker;
pub mod cli;
pub mod config;

pub use checker::store::WordStore;
pub use checker::{SpellChecker, Verdict};
pub use config::Config;
