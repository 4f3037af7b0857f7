/// Documentation indexing: token extraction and the directory walk.
pub mod core;
pub mod tokens;

pub use self::core::Indexer;
pub use self::tokens::TokenExtractor;
