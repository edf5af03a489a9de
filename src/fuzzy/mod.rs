pub mod symspell;

pub use symspell::FuzzyModel;
