//! Graph container recognition and tag emission.
//!
//! Recognizes blocks of the form
//!
//! ```text
//! ::: graph
//! {"type":"bar"}
//! :::
//! ```
//!
//! and rewrites each into a single raw `<GraphContainer :config='…' />`
//! tag. An opening marker with no closing marker before the end of the
//! offered range is declined whole: no token, no lines consumed, and
//! the lines fall through to default handling.

use std::sync::LazyLock;

use regex::Regex;

use crate::ruler::{BlockRule, RuleMatch};
use crate::state::BlockState;
use crate::token::Token;

/// Opening marker for the default container name.
static GRAPH_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^::: *graph *$").unwrap());

/// Closing marker: three colons alone, optional trailing spaces.
static CONTAINER_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^::: *$").unwrap());

/// Errors from building a [`GraphBlockRule`].
#[derive(Debug, thiserror::Error)]
pub enum GraphBlockError {
    /// Container names may contain only alphanumerics, `-`, and `_`.
    #[error("invalid container name {0:?}: only alphanumerics, '-' and '_' are allowed")]
    InvalidContainerName(String),
}

/// Options for the graph block rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphBlockOptions {
    /// Container name after the opening `:::`.
    pub container_name: String,
    /// Component tag emitted for each block.
    pub component_tag: String,
}

impl Default for GraphBlockOptions {
    fn default() -> Self {
        Self {
            container_name: "graph".to_owned(),
            component_tag: "GraphContainer".to_owned(),
        }
    }
}

/// Block rule recognizing `::: graph` containers.
///
/// Registered under the name `"graph-block"`, ahead of the fence rule.
pub struct GraphBlockRule {
    open_re: Regex,
    component_tag: String,
}

impl Default for GraphBlockRule {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBlockRule {
    /// Create the rule with the default container name (`graph`) and
    /// component tag (`GraphContainer`).
    #[must_use]
    pub fn new() -> Self {
        Self {
            open_re: GRAPH_OPEN_RE.clone(),
            component_tag: GraphBlockOptions::default().component_tag,
        }
    }

    /// Create the rule with a custom container name and component tag.
    ///
    /// The container name must be a valid directive name
    /// (alphanumerics, `-`, `_`).
    pub fn with_options(options: GraphBlockOptions) -> Result<Self, GraphBlockError> {
        if !is_valid_container_name(&options.container_name) {
            return Err(GraphBlockError::InvalidContainerName(
                options.container_name,
            ));
        }

        let pattern = format!("^::: *{} *$", options.container_name);
        let open_re = Regex::new(&pattern)
            .map_err(|_| GraphBlockError::InvalidContainerName(options.container_name))?;

        Ok(Self {
            open_re,
            component_tag: options.component_tag,
        })
    }
}

impl BlockRule for GraphBlockRule {
    fn name(&self) -> &str {
        "graph-block"
    }

    fn try_match(
        &mut self,
        state: &mut BlockState<'_>,
        start_line: usize,
        end_line: usize,
        probe: bool,
    ) -> RuleMatch {
        if !self.open_re.is_match(state.lines().content(start_line)) {
            return RuleMatch::Declined;
        }

        // Scan for the closing marker, accumulating body lines.
        // A nested opening marker is ordinary body text.
        let mut next = start_line + 1;
        let mut content = String::new();
        let close_line = loop {
            if next >= end_line {
                // Malformed: no closer before the boundary. Decline
                // whole so default handling owns these lines.
                return RuleMatch::Declined;
            }
            let text = state.lines().content(next);
            if CONTAINER_CLOSE_RE.is_match(text) {
                break next;
            }
            content.push_str(text);
            content.push('\n');
            next += 1;
        };

        if !probe {
            let tag = emit_graph_tag(&self.component_tag, content.trim());
            state.push(Token::raw(tag));
        }

        RuleMatch::Consumed {
            next_line: close_line + 1,
        }
    }
}

/// Render the component tag for a trimmed block body.
///
/// The body is embedded unescaped: a `'` in the body terminates the
/// attribute value early and corrupts the tag. Kept byte for byte so
/// output stays identical for existing documents.
#[must_use]
pub fn emit_graph_tag(component_tag: &str, config: &str) -> String {
    format!("<{component_tag} :config='{config}' />\n")
}

/// Check whether a name is a valid container name.
fn is_valid_container_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(src: &str) -> (RuleMatch, Vec<Token>) {
        let mut state = BlockState::new(src);
        let end = state.lines().len();
        let outcome = GraphBlockRule::new().try_match(&mut state, 0, end, false);
        (outcome, state.into_tokens())
    }

    #[test]
    fn test_basic_block() {
        let (outcome, tokens) = run("::: graph\n{\"type\":\"bar\"}\n:::\n");
        assert_eq!(outcome, RuleMatch::Consumed { next_line: 3 });
        assert_eq!(
            tokens,
            vec![Token::raw("<GraphContainer :config='{\"type\":\"bar\"}' />\n")]
        );
    }

    #[test]
    fn test_empty_body_yields_empty_config() {
        let (outcome, tokens) = run("::: graph\n:::\n");
        assert_eq!(outcome, RuleMatch::Consumed { next_line: 2 });
        assert_eq!(tokens, vec![Token::raw("<GraphContainer :config='' />\n")]);
    }

    #[test]
    fn test_body_trimmed_but_line_breaks_preserved() {
        let (_, tokens) = run("::: graph\n\nline1\nline2\n\n:::\n");
        assert_eq!(
            tokens,
            vec![Token::raw("<GraphContainer :config='line1\nline2' />\n")]
        );
    }

    #[test]
    fn test_opening_marker_spacing_variants() {
        for open in [":::graph", "::: graph", ":::  graph  "] {
            let (outcome, _) = run(&format!("{open}\nbody\n:::\n"));
            assert_eq!(outcome, RuleMatch::Consumed { next_line: 3 }, "{open:?}");
        }
    }

    #[test]
    fn test_opening_marker_rejections() {
        for open in ["::::graph", "::: graph extra", ":: graph", "::: Graph"] {
            let (outcome, tokens) = run(&format!("{open}\nbody\n:::\n"));
            assert_eq!(outcome, RuleMatch::Declined, "{open:?}");
            assert!(tokens.is_empty(), "{open:?}");
        }
    }

    #[test]
    fn test_closing_marker_spacing_variants() {
        for close in [":::", "::: ", ":::   "] {
            let (outcome, _) = run(&format!("::: graph\nbody\n{close}\n"));
            assert_eq!(outcome, RuleMatch::Consumed { next_line: 3 }, "{close:?}");
        }
    }

    #[test]
    fn test_line_with_trailing_text_does_not_close() {
        // `::: end` is body text, not a closing marker.
        let (outcome, tokens) = run("::: graph\n::: end\n:::\n");
        assert_eq!(outcome, RuleMatch::Consumed { next_line: 3 });
        assert_eq!(
            tokens,
            vec![Token::raw("<GraphContainer :config='::: end' />\n")]
        );
    }

    #[test]
    fn test_nested_opening_marker_is_body_text() {
        let (outcome, tokens) = run("::: graph\n::: graph\n:::\n");
        assert_eq!(outcome, RuleMatch::Consumed { next_line: 3 });
        assert_eq!(
            tokens,
            vec![Token::raw("<GraphContainer :config='::: graph' />\n")]
        );
    }

    #[test]
    fn test_unterminated_block_declines_whole() {
        let (outcome, tokens) = run("::: graph\nunterminated\n");
        assert_eq!(outcome, RuleMatch::Declined);
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_unterminated_at_last_line() {
        let (outcome, _) = run("::: graph\n");
        assert_eq!(outcome, RuleMatch::Declined);
    }

    #[test]
    fn test_probe_pushes_nothing() {
        let mut state = BlockState::new("::: graph\nbody\n:::\n");
        let outcome = GraphBlockRule::new().try_match(&mut state, 0, 3, true);
        assert_eq!(outcome, RuleMatch::Consumed { next_line: 3 });
        assert!(state.into_tokens().is_empty());
    }

    #[test]
    fn test_indented_marker_accepted() {
        let (outcome, _) = run("  ::: graph\nbody\n:::\n");
        assert_eq!(outcome, RuleMatch::Consumed { next_line: 3 });
    }

    #[test]
    fn test_custom_container_name() {
        let mut rule = GraphBlockRule::with_options(GraphBlockOptions {
            container_name: "plot".to_owned(),
            component_tag: "PlotContainer".to_owned(),
        })
        .unwrap();

        let mut state = BlockState::new("::: plot\ndata\n:::\n");
        let outcome = rule.try_match(&mut state, 0, 3, false);
        assert_eq!(outcome, RuleMatch::Consumed { next_line: 3 });
        assert_eq!(
            state.into_tokens(),
            vec![Token::raw("<PlotContainer :config='data' />\n")]
        );

        // The custom rule no longer matches the default name.
        let mut state = BlockState::new("::: graph\ndata\n:::\n");
        assert_eq!(rule.try_match(&mut state, 0, 3, false), RuleMatch::Declined);
    }

    #[test]
    fn test_invalid_container_names_rejected() {
        for name in ["", "gra ph", "foo@bar"] {
            let result = GraphBlockRule::with_options(GraphBlockOptions {
                container_name: name.to_owned(),
                component_tag: "GraphContainer".to_owned(),
            });
            assert!(
                matches!(result, Err(GraphBlockError::InvalidContainerName(_))),
                "{name:?}"
            );
        }
    }

    #[test]
    fn test_emit_does_not_escape_quotes() {
        // Known fragility: a single quote in the body corrupts the tag.
        let tag = emit_graph_tag("GraphContainer", "it's");
        assert_eq!(tag, "<GraphContainer :config='it's' />\n");
    }

    #[test]
    fn test_block_not_at_document_start() {
        let mut state = BlockState::new("intro\n::: graph\nbody\n:::\n");
        let outcome = GraphBlockRule::new().try_match(&mut state, 1, 4, false);
        assert_eq!(outcome, RuleMatch::Consumed { next_line: 4 });
    }
}
