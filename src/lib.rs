pub mod keyword;
pub mod token;

pub use keyword::{classify, KeywordClassifier};
pub use token::{Token, TokenKind};
