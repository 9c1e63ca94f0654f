//! Startup binding of the graph container tag.
//!
//! Runs once when the application starts: the tag emitted by the
//! markdown extension is bound to a concrete component, either
//! directly or through a theme-injecting adapter.

use crate::component::{Component, Props};
use crate::registry::ComponentRegistry;
use crate::theme::{ThemeMode, ThemeProvider};

/// Tag name emitted by the markdown extension under default options.
pub const GRAPH_CONTAINER_TAG: &str = "GraphContainer";

/// Bind a tag directly to a component.
pub fn bind_graph_container(
    registry: &mut ComponentRegistry,
    tag: &str,
    component: Box<dyn Component>,
) {
    registry.register(tag, component);
}

/// Bind a tag to a component through a theme-injecting adapter.
///
/// The adapter forwards all incoming props unchanged and additionally
/// passes the color mode (`theme`) and the configuration string
/// (`config`) as explicit props to the wrapped component. The mode is
/// read once at bind time; theme switches after binding are not
/// observed by already-bound components.
pub fn bind_graph_container_themed(
    registry: &mut ComponentRegistry,
    tag: &str,
    component: Box<dyn Component>,
    theme: &dyn ThemeProvider,
) {
    let adapter = ThemeAdapter {
        mode: theme.color_mode(),
        inner: component,
    };
    registry.register(tag, Box::new(adapter));
}

/// Wrapper injecting the captured color mode into every render.
struct ThemeAdapter {
    mode: ThemeMode,
    inner: Box<dyn Component>,
}

impl Component for ThemeAdapter {
    fn render(&self, props: &Props) -> String {
        let mut forwarded = props.clone();
        forwarded.insert("theme".to_owned(), self.mode.to_string());
        if let Some(config) = props.get("config") {
            forwarded.insert("config".to_owned(), config.clone());
        }
        self.inner.render(&forwarded)
    }
}
