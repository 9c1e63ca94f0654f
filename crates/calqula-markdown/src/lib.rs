//! Block-level markdown extension for graph containers.
//!
//! This crate recognizes `::: graph` ... `:::` containers ahead of
//! fenced code and rewrites each into a single raw component tag
//! carrying the block body as a configuration string. Everything else
//! falls through untouched and is rendered as ordinary Markdown.
//!
//! # Architecture
//!
//! A [`BlockTokenizer`] drives a single top-to-bottom pass over the
//! document. At each line it offers the remaining range to an ordered
//! chain of [`BlockRule`]s (the [`BlockRuler`]); the first rule that
//! matches consumes a span of lines and pushes a [`Token`]. Lines no
//! rule claims accumulate into passthrough Markdown runs.
//!
//! The chain ships with a fence rule so container markers inside
//! fenced code are never recognized; the graph rule is inserted in
//! front of it, mirroring rule priority in the site pipeline.
//!
//! # Example
//!
//! ```
//! use calqula_markdown::{BlockTokenizer, GraphBlockRule, Token};
//!
//! let mut tokenizer = BlockTokenizer::new();
//! tokenizer
//!     .ruler_mut()
//!     .before("fence", Box::new(GraphBlockRule::new()));
//!
//! let tokens = tokenizer.tokenize("::: graph\n{\"type\":\"bar\"}\n:::\n");
//! assert_eq!(
//!     tokens,
//!     vec![Token::raw("<GraphContainer :config='{\"type\":\"bar\"}' />\n")]
//! );
//! ```

mod fence;
mod graph;
mod line_table;
mod renderer;
mod ruler;
mod state;
mod token;
mod tokenizer;

pub use fence::FenceRule;
pub use graph::{GraphBlockError, GraphBlockOptions, GraphBlockRule, emit_graph_tag};
pub use line_table::{LineSpan, LineTable};
pub use renderer::render_html;
pub use ruler::{BlockRule, BlockRuler, RuleMatch};
pub use state::BlockState;
pub use token::Token;
pub use tokenizer::BlockTokenizer;
