//! Plugin descriptor.

use calqula_client::{Component, ComponentRegistry, ThemeProvider, bind_graph_container_themed};
use calqula_markdown::{BlockRuler, GraphBlockError, GraphBlockOptions, GraphBlockRule};
use serde::{Deserialize, Serialize};

/// Plugin options, settable from site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginOptions {
    /// Container name after the opening `:::`.
    pub container_name: String,
    /// Component tag emitted for each block and bound on the client.
    pub component_tag: String,
}

impl Default for PluginOptions {
    fn default() -> Self {
        let defaults = GraphBlockOptions::default();
        Self {
            container_name: defaults.container_name,
            component_tag: defaults.component_tag,
        }
    }
}

/// Plugin descriptor exposed to the host application.
///
/// Carries the plugin name, the hook that extends the markdown rule
/// chain, and the hook that runs the client binding at startup.
pub struct CalqulaPlugin {
    options: PluginOptions,
}

impl Default for CalqulaPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl CalqulaPlugin {
    /// Create the plugin with default options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: PluginOptions::default(),
        }
    }

    /// Create the plugin with custom options.
    #[must_use]
    pub fn with_options(options: PluginOptions) -> Self {
        Self { options }
    }

    /// Plugin name reported to the host.
    #[must_use]
    pub fn name(&self) -> &'static str {
        "calqula"
    }

    /// The options this plugin was built with.
    #[must_use]
    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    /// Install the graph block rule ahead of the fence rule.
    pub fn extend_markdown(&self, ruler: &mut BlockRuler) -> Result<(), GraphBlockError> {
        let rule = GraphBlockRule::with_options(GraphBlockOptions {
            container_name: self.options.container_name.clone(),
            component_tag: self.options.component_tag.clone(),
        })?;
        ruler.before("fence", Box::new(rule));
        Ok(())
    }

    /// Run the client binding: register the component tag through the
    /// theme-injecting adapter.
    pub fn enhance_client(
        &self,
        registry: &mut ComponentRegistry,
        component: Box<dyn Component>,
        theme: &dyn ThemeProvider,
    ) {
        bind_graph_container_themed(registry, &self.options.component_tag, component, theme);
    }
}
