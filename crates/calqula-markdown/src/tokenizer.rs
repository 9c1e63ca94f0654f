//! Single-pass block tokenizer.

use crate::fence::FenceRule;
use crate::ruler::{BlockRuler, RuleMatch};
use crate::state::BlockState;
use crate::token::Token;

/// Drives one top-to-bottom pass over a document, offering each
/// cursor position to the rule chain.
///
/// The cursor advances exactly once per committed match; lines no
/// rule claims fall through into passthrough Markdown runs. A fence
/// rule is installed by default so container markers inside fenced
/// code are never recognized.
///
/// # Example
///
/// ```
/// use calqula_markdown::{BlockTokenizer, GraphBlockRule, Token};
///
/// let mut tokenizer = BlockTokenizer::new();
/// tokenizer
///     .ruler_mut()
///     .before("fence", Box::new(GraphBlockRule::new()));
///
/// let tokens = tokenizer.tokenize("before\n::: graph\n1 + 1\n:::\n");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::markdown("before\n"),
///         Token::raw("<GraphContainer :config='1 + 1' />\n"),
///     ]
/// );
/// ```
pub struct BlockTokenizer {
    ruler: BlockRuler,
}

impl Default for BlockTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockTokenizer {
    /// Create a tokenizer with the default rule chain (fence only).
    #[must_use]
    pub fn new() -> Self {
        let mut ruler = BlockRuler::new();
        ruler.push(Box::new(FenceRule::new()));
        Self { ruler }
    }

    /// The rule chain, for registering extension rules.
    pub fn ruler_mut(&mut self) -> &mut BlockRuler {
        &mut self.ruler
    }

    /// Tokenize a document.
    #[must_use]
    pub fn tokenize(&mut self, src: &str) -> Vec<Token> {
        let mut state = BlockState::new(src);
        let end_line = state.lines().len();
        let mut cursor = 0;

        while cursor < end_line {
            match self.ruler.commit(&mut state, cursor, end_line) {
                RuleMatch::Consumed { next_line } => cursor = next_line,
                RuleMatch::Declined => {
                    let text = state.lines().raw(cursor);
                    state.push(Token::markdown(format!("{text}\n")));
                    cursor += 1;
                }
            }
        }

        state.into_tokens()
    }
}
