//! Graph-block documentation plugin.
//!
//! Markdown authors embed a `::: graph` container; the markdown
//! extension rewrites it into a `<GraphContainer :config='…' />` tag,
//! and the client binder registers that tag against a concrete chart
//! component when the application starts.
//!
//! This crate ties the two halves together behind a single
//! [`CalqulaPlugin`] descriptor: a name, a hook to extend the
//! markdown pipeline, and a hook to run the client binding.
//!
//! # Example
//!
//! ```
//! use calqula::{BlockTokenizer, CalqulaPlugin, render_html};
//!
//! # fn main() -> Result<(), calqula::GraphBlockError> {
//! let plugin = CalqulaPlugin::new();
//!
//! let mut tokenizer = BlockTokenizer::new();
//! plugin.extend_markdown(tokenizer.ruler_mut())?;
//!
//! let tokens = tokenizer.tokenize("::: graph\n{\"type\":\"bar\"}\n:::\n");
//! let html = render_html(&tokens);
//! assert_eq!(html, "<GraphContainer :config='{\"type\":\"bar\"}' />\n");
//! # Ok(())
//! # }
//! ```

mod plugin;

pub use plugin::{CalqulaPlugin, PluginOptions};

pub use calqula_client::{
    Component, ComponentRegistry, FixedTheme, GRAPH_CONTAINER_TAG, Props, ThemeMode,
    ThemeProvider, bind_graph_container, bind_graph_container_themed,
};
pub use calqula_markdown::{
    BlockRule, BlockRuler, BlockTokenizer, GraphBlockError, GraphBlockOptions, GraphBlockRule,
    RuleMatch, Token, render_html,
};
