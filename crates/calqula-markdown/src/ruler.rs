//! Ordered block-rule chain.
//!
//! Replaces a host tokenizer's rule-priority mechanism with an
//! explicit ordered list of pluggable line-range matchers. Each rule
//! is offered the remaining range in turn; the first match wins.

use crate::state::BlockState;

/// Outcome of offering a line range to a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMatch {
    /// The rule claimed the lines up to (excluding) `next_line`; the
    /// tokenizer advances its cursor there.
    Consumed {
        /// First line after the consumed span.
        next_line: usize,
    },
    /// The rule does not handle this range; the next rule is tried.
    Declined,
}

/// A block-level line-range matcher.
///
/// Rules are tried in chain order at each cursor position. A rule
/// either consumes a span of lines, pushing any output tokens into
/// the [`BlockState`] (committing call only), or declines so later
/// rules get a chance.
///
/// Handlers implement `Send` only (not `Sync`) since each document
/// gets its own tokenizer instance.
pub trait BlockRule: Send {
    /// Rule name, used for ordered insertion into the chain.
    fn name(&self) -> &str;

    /// Offer the half-open range `[start_line, end_line)` to the rule.
    ///
    /// When `probe` is true this is a cheap feasibility check: the
    /// rule must not push tokens or have any other side effect. When
    /// `probe` is false and the rule matches, it pushes its output
    /// before returning.
    fn try_match(
        &mut self,
        state: &mut BlockState<'_>,
        start_line: usize,
        end_line: usize,
        probe: bool,
    ) -> RuleMatch;
}

/// Ordered chain of [`BlockRule`]s.
#[derive(Default)]
pub struct BlockRuler {
    rules: Vec<Box<dyn BlockRule>>,
}

impl BlockRuler {
    /// Create an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule at the end of the chain.
    pub fn push(&mut self, rule: Box<dyn BlockRule>) {
        self.rules.push(rule);
    }

    /// Insert a rule before the rule named `anchor`, or append when no
    /// rule in the chain carries that name.
    pub fn before(&mut self, anchor: &str, rule: Box<dyn BlockRule>) {
        let idx = self
            .rules
            .iter()
            .position(|r| r.name() == anchor)
            .unwrap_or(self.rules.len());
        self.rules.insert(idx, rule);
    }

    /// Names of the rules in chain order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Offer the range to each rule in order without side effects.
    pub fn probe(
        &mut self,
        state: &mut BlockState<'_>,
        start_line: usize,
        end_line: usize,
    ) -> RuleMatch {
        self.try_each(state, start_line, end_line, true)
    }

    /// Offer the range to each rule in order, committing the first
    /// match: the winning rule pushes its tokens into `state`.
    pub fn commit(
        &mut self,
        state: &mut BlockState<'_>,
        start_line: usize,
        end_line: usize,
    ) -> RuleMatch {
        self.try_each(state, start_line, end_line, false)
    }

    fn try_each(
        &mut self,
        state: &mut BlockState<'_>,
        start_line: usize,
        end_line: usize,
        probe: bool,
    ) -> RuleMatch {
        for rule in &mut self.rules {
            let outcome = rule.try_match(state, start_line, end_line, probe);
            if let RuleMatch::Consumed { .. } = outcome {
                return outcome;
            }
        }
        RuleMatch::Declined
    }
}
