//! Client-side component binding for the graph container tag.
//!
//! The markdown half of the plugin emits `<GraphContainer :config='…' />`
//! tags; this crate runs at application start and binds that tag to a
//! concrete chart component in the host's [`ComponentRegistry`],
//! optionally through an adapter that injects the active color theme.
//!
//! The chart component itself is an external collaborator: this crate
//! only defines the [`Component`] seam and the binding step.
//!
//! # Example
//!
//! ```
//! use calqula_client::{
//!     Component, ComponentRegistry, FixedTheme, Props, ThemeMode,
//!     bind_graph_container_themed, GRAPH_CONTAINER_TAG,
//! };
//!
//! struct Chart;
//!
//! impl Component for Chart {
//!     fn render(&self, props: &Props) -> String {
//!         format!("<div class=\"chart\">{}</div>", props["config"])
//!     }
//! }
//!
//! let mut registry = ComponentRegistry::new();
//! bind_graph_container_themed(
//!     &mut registry,
//!     GRAPH_CONTAINER_TAG,
//!     Box::new(Chart),
//!     &FixedTheme(ThemeMode::Dark),
//! );
//!
//! let mut props = Props::new();
//! props.insert("config".to_owned(), "{\"type\":\"bar\"}".to_owned());
//! let html = registry.render(GRAPH_CONTAINER_TAG, &props).unwrap();
//! assert!(html.contains("{\"type\":\"bar\"}"));
//! ```

mod binder;
mod component;
mod registry;
mod theme;

pub use binder::{GRAPH_CONTAINER_TAG, bind_graph_container, bind_graph_container_themed};
pub use component::{Component, Props};
pub use registry::ComponentRegistry;
pub use theme::{FixedTheme, ThemeMode, ThemeProvider};
