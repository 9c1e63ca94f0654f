//! HTML rendering of the token stream.

use pulldown_cmark::{Parser, html};

use crate::token::Token;

/// Render a token stream to HTML.
///
/// Markdown runs go through pulldown-cmark; raw tokens are emitted
/// verbatim and never re-parsed as Markdown.
#[must_use]
pub fn render_html(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Raw(markup) => out.push_str(markup),
            Token::Markdown(markdown) => html::push_html(&mut out, Parser::new(markdown)),
        }
    }
    out
}
