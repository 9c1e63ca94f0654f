//! Token stream produced by block tokenization.

/// A unit of tokenizer output.
///
/// - [`Raw`](Self::Raw): opaque markup inserted as-is, never re-parsed
///   as Markdown
/// - [`Markdown`](Self::Markdown): a run of fall-through lines, still
///   plain Markdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Opaque raw markup.
    Raw(String),
    /// A run of lines no rule claimed.
    Markdown(String),
}

impl Token {
    /// Create a raw markup token.
    #[must_use]
    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    /// Create a passthrough Markdown token.
    #[must_use]
    pub fn markdown(s: impl Into<String>) -> Self {
        Self::Markdown(s.into())
    }
}
