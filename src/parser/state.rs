/// URL parser state machine states
/// Based on WHATWG URL Standard
///
/// Every state except `SchemeStart`, `NoScheme` and the relative/authority
/// routing states can also be used as a state override by the setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Scheme start state
    SchemeStart,
    /// Scheme state
    Scheme,
    /// No scheme state
    NoScheme,
    /// Special relative or authority state
    SpecialRelativeOrAuthority,
    /// Path or authority state
    PathOrAuthority,
    /// Relative state
    Relative,
    /// Relative slash state
    RelativeSlash,
    /// Special authority slashes state
    SpecialAuthoritySlashes,
    /// Special authority ignore slashes state
    SpecialAuthorityIgnoreSlashes,
    /// Authority state
    Authority,
    /// Host state
    Host,
    /// Hostname state (host setter that must not accept a port)
    Hostname,
    /// Port state
    Port,
    /// File state
    File,
    /// File slash state
    FileSlash,
    /// File host state
    FileHost,
    /// Path start state
    PathStart,
    /// Path state
    Path,
    /// Opaque path state (for non-special schemes)
    OpaquePath,
    /// Query state
    Query,
    /// Fragment state
    Fragment,
}
