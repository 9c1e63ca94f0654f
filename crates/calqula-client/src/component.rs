//! Component abstraction for the client runtime.

use std::collections::BTreeMap;

/// Props passed to a component at render time.
pub type Props = BTreeMap<String, String>;

/// A renderable UI component.
///
/// Concrete chart components live outside this crate; the registry
/// and binders only work against this seam.
///
/// Implementations are `Send` only (not `Sync`): each application
/// instance owns its registry.
pub trait Component: Send {
    /// Render the component to markup for the given props.
    fn render(&self, props: &Props) -> String;
}
