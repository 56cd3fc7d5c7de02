//! DOT terminal kinds.
//!
//! Each kind has a stable numeric id and the canonical name the grammar
//! uses for it. The set is closed; the parser matches on it directly.

use std::fmt;

use serde::{Serialize, Serializer};

/// Terminal produced by the DOT lexer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TerminalKind {
    // Keywords
    Digraph = 0,
    Graph = 1,
    Subgraph = 2,
    Strict = 3,
    Edge = 4,
    Node = 5,

    // Punctuation
    Semi = 6,
    LBrace = 7,
    RBrace = 8,
    LSquare = 9,
    RSquare = 10,
    DashDash = 11,
    Arrow = 12,
    Comma = 13,
    Colon = 14,
    Assign = 15,

    /// Unquoted identifier, quoted string, or numeral.
    Identifier = 16,
}

impl TerminalKind {
    /// Every kind, in id order.
    pub const ALL: [TerminalKind; 17] = [
        Self::Digraph,
        Self::Graph,
        Self::Subgraph,
        Self::Strict,
        Self::Edge,
        Self::Node,
        Self::Semi,
        Self::LBrace,
        Self::RBrace,
        Self::LSquare,
        Self::RSquare,
        Self::DashDash,
        Self::Arrow,
        Self::Comma,
        Self::Colon,
        Self::Assign,
        Self::Identifier,
    ];

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }

    /// Canonical grammar name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Digraph => "digraph",
            Self::Graph => "graph",
            Self::Subgraph => "subgraph",
            Self::Strict => "strict",
            Self::Edge => "edge",
            Self::Node => "node",
            Self::Semi => "semi",
            Self::LBrace => "lbrace",
            Self::RBrace => "rbrace",
            Self::LSquare => "lsquare",
            Self::RSquare => "rsquare",
            Self::DashDash => "dashdash",
            Self::Arrow => "arrow",
            Self::Comma => "comma",
            Self::Colon => "colon",
            Self::Assign => "assign",
            Self::Identifier => "identifier",
        }
    }

    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::Digraph | Self::Graph | Self::Subgraph | Self::Strict | Self::Edge | Self::Node
        )
    }
}

impl fmt::Display for TerminalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TerminalKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
