//! Shared scanning state.

use crate::line_table::LineTable;
use crate::token::Token;

/// State threaded through block rules during one document pass.
///
/// Holds the read-only [`LineTable`] and the token stream under
/// construction. Rules read lines through [`lines`](Self::lines) and
/// append output through [`push`](Self::push) when committing a match.
pub struct BlockState<'src> {
    lines: LineTable<'src>,
    tokens: Vec<Token>,
}

impl<'src> BlockState<'src> {
    /// Build state for a document.
    #[must_use]
    pub fn new(src: &'src str) -> Self {
        Self {
            lines: LineTable::new(src),
            tokens: Vec::new(),
        }
    }

    /// The document's line table.
    #[must_use]
    pub fn lines(&self) -> &LineTable<'src> {
        &self.lines
    }

    /// Append a token, coalescing adjacent Markdown runs so
    /// fall-through lines render as one contiguous Markdown chunk.
    pub fn push(&mut self, token: Token) {
        if let (Some(Token::Markdown(run)), Token::Markdown(text)) =
            (self.tokens.last_mut(), &token)
        {
            run.push_str(text);
            return;
        }
        self.tokens.push(token);
    }

    /// Finish the pass and take the token stream.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}
