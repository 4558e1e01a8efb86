/// Scheme classification used throughout the parser.
///
/// Everything outside the special-scheme list is `NotSpecial`, which is also
/// the state of a record before its scheme has been set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemeType {
    Http,
    Https,
    Ws,
    Wss,
    Ftp,
    File,
    #[default]
    NotSpecial,
}

impl SchemeType {
    /// Check if this is a special scheme
    pub fn is_special(self) -> bool {
        self != Self::NotSpecial
    }

    /// Get the default port for this scheme
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Http | Self::Ws => Some(80),
            Self::Https | Self::Wss => Some(443),
            Self::Ftp => Some(21),
            Self::File | Self::NotSpecial => None,
        }
    }

    pub fn is_file(self) -> bool {
        self == Self::File
    }

    /// Whether a query-encoding override may be honoured for this scheme.
    /// Non-special and WebSocket URLs always encode their query as UTF-8.
    pub fn honours_query_encoding(self) -> bool {
        !matches!(self, Self::NotSpecial | Self::Ws | Self::Wss)
    }
}
