use crate::token::TokenKind;
use anyhow::{ensure, Result};
use log::{debug, trace};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::collections::HashSet;

static KEYWORD_TABLE: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let map: HashMap<_, _> = TokenKind::KEYWORDS
        .iter()
        .map(|&kind| (kind.as_str(), kind))
        .collect();
    debug!("keyword table initialized with {} entries", map.len());
    map
});

pub fn lookup(spelling: &str) -> Option<TokenKind> {
    KEYWORD_TABLE.get(spelling).copied()
}

/// Classifies a complete identifier lexeme. The comparison is exact and case
/// sensitive, so `If` and `iffy` are both identifiers.
pub fn classify(spelling: &str) -> TokenKind {
    let kind = lookup(spelling).unwrap_or(TokenKind::Identifier);
    trace!("classify {:?} -> {:?}", spelling, kind);
    kind
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Handle over the process-wide keyword table. Holds no state, so every lexer
/// can carry its own copy.
#[derive(Copy, Clone, Default, Debug)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }
    pub fn classify(&self, spelling: &str) -> TokenKind {
        classify(spelling)
    }
    pub fn keyword(&self, spelling: &str) -> Option<TokenKind> {
        lookup(spelling)
    }
    pub fn is_keyword(&self, spelling: &str) -> bool {
        KEYWORD_TABLE.contains_key(spelling)
    }
    pub fn len(&self) -> usize {
        KEYWORD_TABLE.len()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, TokenKind)> {
        let keywords: &'static [TokenKind] = &TokenKind::KEYWORDS;
        keywords.iter().map(|&kind| (kind.as_str(), kind))
    }

    /// Checks that the table is well formed: well-shaped spellings, one kind
    /// per spelling and one spelling per kind.
    pub fn verify(&self) -> Result<()> {
        ensure!(
            KEYWORD_TABLE.len() == TokenKind::KEYWORDS.len(),
            "keyword table has {} entries, want {}",
            KEYWORD_TABLE.len(),
            TokenKind::KEYWORDS.len()
        );
        let mut seen = HashSet::new();
        for (&spelling, &kind) in KEYWORD_TABLE.iter() {
            ensure!(
                is_identifier(spelling),
                "keyword `{}` is not an identifier lexeme",
                spelling
            );
            ensure!(
                kind.is_keyword(),
                "keyword `{}` maps to {:?}",
                spelling,
                kind
            );
            ensure!(
                kind.as_str() == spelling,
                "keyword `{}` maps to {:?}, spelled `{}`",
                spelling,
                kind,
                kind.as_str()
            );
            ensure!(
                seen.insert(kind),
                "{:?} is reachable from more than one spelling",
                kind
            );
        }
        Ok(())
    }
}
