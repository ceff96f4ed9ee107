use crate::keyword;
use anyhow::{anyhow, Error};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TokenKind {
    As,
    Async,
    Await,
    Break,
    Continue,
    Else,
    Enum,
    Extern,
    False,
    Fn,
    For,
    Fork,
    From,
    If,
    Impl,
    In,
    Is,
    Let,
    Loop,
    Match,
    Mod,
    Pub,
    Return,
    SelfValue, // self
    SelfType,  // selftype
    Show,
    Struct,
    Trait,
    True,
    Try,
    Type,
    Unknown,
    Use,
    Void,
    Where,
    While,

    Identifier, // foobar, x, y, ...
}

impl TokenKind {
    /// Every reserved word, in spelling order.
    pub const KEYWORDS: [TokenKind; 36] = {
        use TokenKind::*;
        [
            As, Async, Await, Break, Continue, Else, Enum, Extern, False, Fn, For, Fork, From, If,
            Impl, In, Is, Let, Loop, Match, Mod, Pub, Return, SelfValue, SelfType, Show, Struct,
            Trait, True, Try, Type, Unknown, Use, Void, Where, While,
        ]
    };

    /// The source spelling of a keyword. `Identifier` has no spelling of its
    /// own and yields `"identifier"`, which is never a key of the table.
    pub fn as_str(self) -> &'static str {
        use TokenKind::*;
        match self {
            As => "as",
            Async => "async",
            Await => "await",
            Break => "break",
            Continue => "continue",
            Else => "else",
            Enum => "enum",
            Extern => "extern",
            False => "false",
            Fn => "fn",
            For => "for",
            Fork => "fork",
            From => "from",
            If => "if",
            Impl => "impl",
            In => "in",
            Is => "is",
            Let => "let",
            Loop => "loop",
            Match => "match",
            Mod => "mod",
            Pub => "pub",
            Return => "return",
            SelfValue => "self",
            SelfType => "selftype",
            Show => "show",
            Struct => "struct",
            Trait => "trait",
            True => "true",
            Try => "try",
            Type => "type",
            Unknown => "unknown",
            Use => "use",
            Void => "void",
            Where => "where",
            While => "while",
            Identifier => "identifier",
        }
    }

    pub fn is_keyword(self) -> bool {
        self != TokenKind::Identifier
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TokenKind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        keyword::lookup(s).ok_or_else(|| anyhow!("`{}` is not a keyword", s))
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Token {
    Keyword(TokenKind),
    Ident(String),
}

impl Token {
    /// Builds the token for a maximal identifier span taken verbatim from
    /// source.
    pub fn from_identifier(ident: &str) -> Token {
        match keyword::classify(ident) {
            TokenKind::Identifier => Token::Ident(ident.to_string()),
            kind => Token::Keyword(kind),
        }
    }
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Keyword(kind) => *kind,
            Token::Ident(_) => TokenKind::Identifier,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::Token;
    use crate::token::TokenKind;
    use crate::token::TokenKind::*;
    use std::collections::HashSet;

    #[test]
    fn test_keywords_list() {
        assert_eq!(36, TokenKind::KEYWORDS.len());
        let unique: HashSet<TokenKind> = TokenKind::KEYWORDS.iter().copied().collect();
        assert_eq!(
            TokenKind::KEYWORDS.len(),
            unique.len(),
            "duplicate kind in KEYWORDS"
        );
        assert!(!unique.contains(&Identifier));
        assert!(TokenKind::KEYWORDS.iter().all(|k| k.is_keyword()));
        assert!(!Identifier.is_keyword());
    }

    #[test]
    fn test_keywords_in_spelling_order() {
        for pair in TokenKind::KEYWORDS.windows(2) {
            assert!(
                pair[0].as_str() < pair[1].as_str(),
                "{} should come after {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_display() {
        let tests = vec![
            (SelfValue, "self"),
            (SelfType, "selftype"),
            (Continue, "continue"),
            (Fn, "fn"),
            (Identifier, "identifier"),
        ];
        for (kind, expected) in tests {
            assert_eq!(expected, format!("{}", kind));
        }
    }

    #[test]
    fn test_from_str() {
        let tests = vec![("while", While), ("self", SelfValue), ("unknown", Unknown)];
        for (input, expected) in tests {
            let kind: TokenKind = input
                .parse()
                .unwrap_or_else(|err| panic!("{} should parse: {:?}", input, err));
            assert_eq!(expected, kind);
        }
        for input in vec!["x", "identifier", "While", ""] {
            let err = input.parse::<TokenKind>().unwrap_err();
            assert_eq!(format!("`{}` is not a keyword", input), err.to_string());
        }
    }

    #[test]
    fn test_from_identifier() {
        let tests = vec![
            ("fn", Token::Keyword(Fn)),
            ("let", Token::Keyword(Let)),
            ("foobar", Token::Ident("foobar".to_string())),
            ("Self", Token::Ident("Self".to_string())),
            ("forked", Token::Ident("forked".to_string())),
        ];
        for (input, expected) in tests {
            let token = Token::from_identifier(input);
            assert_eq!(expected, token, "input: {}", input);
        }
        assert_eq!(Async, Token::from_identifier("async").kind());
        assert_eq!(Identifier, Token::from_identifier("x").kind());
    }
}
