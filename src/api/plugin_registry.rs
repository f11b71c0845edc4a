use tracing::debug;

use crate::error::{TimelineError, TimelineResult};
use crate::extensions::TimelinePlugin;
use crate::render::Renderer;

use super::TimelineEngine;

impl<R: Renderer> TimelineEngine<R> {
    /// Adds an observer. Ids must be non-empty and unique per engine.
    pub fn register_plugin(&mut self, plugin: Box<dyn TimelinePlugin>) -> TimelineResult<()> {
        let id = plugin.id();
        if id.is_empty() {
            return Err(TimelineError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.plugin_position(id).is_some() {
            return Err(TimelineError::InvalidData(format!(
                "plugin `{id}` is already registered"
            )));
        }
        debug!(plugin = id, "plugin registered");
        self.core.runtime.plugins.push(plugin);
        Ok(())
    }

    /// Returns `true` when a plugin with `plugin_id` was removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let Some(position) = self.plugin_position(plugin_id) else {
            return false;
        };
        self.core.runtime.plugins.remove(position);
        debug!(plugin = plugin_id, "plugin unregistered");
        true
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.core.runtime.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugin_position(plugin_id).is_some()
    }

    fn plugin_position(&self, plugin_id: &str) -> Option<usize> {
        self.core
            .runtime
            .plugins
            .iter()
            .position(|plugin| plugin.id() == plugin_id)
    }
}
