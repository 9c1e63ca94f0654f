//! Fenced code rule.
//!
//! Consumes fenced code spans as passthrough Markdown so container
//! markers (`:::`) inside code blocks are never offered to rules
//! further down the chain. Fences use backticks or tildes (three or
//! more); the closing fence must use the same character and be at
//! least as long as the opening fence.

use crate::ruler::{BlockRule, RuleMatch};
use crate::state::BlockState;
use crate::token::Token;

/// Block rule claiming fenced code spans.
///
/// Installed by default under the name `"fence"`; custom rules that
/// must win over fenced code insert themselves ahead of it.
#[derive(Debug, Default)]
pub struct FenceRule;

impl FenceRule {
    /// Create the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl BlockRule for FenceRule {
    fn name(&self) -> &str {
        "fence"
    }

    fn try_match(
        &mut self,
        state: &mut BlockState<'_>,
        start_line: usize,
        end_line: usize,
        probe: bool,
    ) -> RuleMatch {
        let Some((fence_char, fence_len)) = detect_fence(state.lines().content(start_line)) else {
            return RuleMatch::Declined;
        };

        // An unterminated fence runs to the end of the range.
        let mut next = start_line + 1;
        while next < end_line {
            let closed = is_closing_fence(state.lines().content(next), fence_char, fence_len);
            next += 1;
            if closed {
                break;
            }
        }

        if !probe {
            let mut text = String::new();
            for line in start_line..next {
                text.push_str(state.lines().raw(line));
                text.push('\n');
            }
            state.push(Token::markdown(text));
        }

        RuleMatch::Consumed { next_line: next }
    }
}

/// Detect whether a line's content opens a code fence.
///
/// Returns the fence character and length if found.
fn detect_fence(content: &str) -> Option<(char, usize)> {
    let first = content.chars().next()?;
    if first != '`' && first != '~' {
        return None;
    }

    let count = content.chars().take_while(|&c| c == first).count();
    if count >= 3 { Some((first, count)) } else { None }
}

/// Check whether a line's content is a valid closing fence.
///
/// The closing fence must use the same character as the opening one,
/// be at least as long, and carry only whitespace after the fence
/// characters.
fn is_closing_fence(content: &str, expected_char: char, min_len: usize) -> bool {
    match content.chars().next() {
        Some(c) if c == expected_char => {}
        _ => return false,
    }

    let count = content.chars().take_while(|&c| c == expected_char).count();
    if count < min_len {
        return false;
    }

    content[count..].chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn consume(src: &str) -> (RuleMatch, Vec<Token>) {
        let mut state = BlockState::new(src);
        let end = state.lines().len();
        let outcome = FenceRule::new().try_match(&mut state, 0, end, false);
        (outcome, state.into_tokens())
    }

    #[test]
    fn test_backtick_fence_consumed_whole() {
        let (outcome, tokens) = consume("```rust\nfn main() {}\n```\nafter\n");
        assert_eq!(outcome, RuleMatch::Consumed { next_line: 3 });
        assert_eq!(
            tokens,
            vec![Token::markdown("```rust\nfn main() {}\n```\n")]
        );
    }

    #[test]
    fn test_tilde_fence() {
        let (outcome, _) = consume("~~~python\nprint('hi')\n~~~\n");
        assert_eq!(outcome, RuleMatch::Consumed { next_line: 3 });
    }

    #[test]
    fn test_mixed_chars_do_not_close() {
        let (outcome, _) = consume("```\n~~~\ntext\n```\n");
        assert_eq!(outcome, RuleMatch::Consumed { next_line: 4 });
    }

    #[test]
    fn test_shorter_fence_does_not_close() {
        let (outcome, _) = consume("````\n```\n````\n");
        assert_eq!(outcome, RuleMatch::Consumed { next_line: 3 });
    }

    #[test]
    fn test_unterminated_fence_runs_to_end() {
        let (outcome, tokens) = consume("```\ncode\nmore\n");
        assert_eq!(outcome, RuleMatch::Consumed { next_line: 3 });
        assert_eq!(tokens, vec![Token::markdown("```\ncode\nmore\n")]);
    }

    #[test]
    fn test_two_backticks_decline() {
        let (outcome, tokens) = consume("``inline``\n");
        assert_eq!(outcome, RuleMatch::Declined);
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_regular_line_declines() {
        let (outcome, _) = consume("just text\n");
        assert_eq!(outcome, RuleMatch::Declined);
    }

    #[test]
    fn test_probe_pushes_nothing() {
        let mut state = BlockState::new("```\ncode\n```\n");
        let outcome = FenceRule::new().try_match(&mut state, 0, 3, true);
        assert_eq!(outcome, RuleMatch::Consumed { next_line: 3 });
        assert!(state.into_tokens().is_empty());
    }
}
