// SPDX-FileCopyrightText: 2026 Loadstone Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Plugin` trait and the metadata projection it exposes.
//!
//! Every extension unit in Loadstone (scenario, runner, context, hook) is a
//! plugin: a named, platform-scoped object carrying descriptive metadata.
//! Concrete plugins implement the trait explicitly; there is no runtime
//! introspection anywhere in the lookup path.

use loadstone_core::PluginBase;
use serde::Serialize;

/// A single documented parameter accepted by a plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginParameter {
    /// Parameter name as it appears in a task file.
    pub name: String,
    /// One-line documentation string.
    pub doc: String,
}

/// Read-only metadata projection of a plugin.
///
/// Recomputed on every `Plugin::info` call; it has no lifecycle of its own.
/// Parameters keep their declared order -- the presenter must not sort them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginInfo {
    /// One-line human title, used as the detail view header.
    pub title: String,
    /// Plugin name, unique within its namespace.
    pub name: String,
    /// Namespace (platform) the plugin is scoped to.
    pub namespace: String,
    /// Rust module path of the concrete implementation.
    pub module: String,
    /// Long-form description. May span multiple lines; rendered verbatim.
    pub description: String,
    /// Documented parameters, in declared order.
    pub parameters: Vec<PluginParameter>,
}

/// The polymorphic interface every Loadstone plugin implements.
///
/// Identity is the `(name, platform)` pair. The base tag names the plugin's
/// structural family and is what `--plugin-base` filtering compares against.
pub trait Plugin: Send + Sync {
    /// Plugin name, unique within its platform.
    fn name(&self) -> &str;

    /// Platform (namespace) this plugin is scoped to.
    fn platform(&self) -> &str;

    /// Structural family tag.
    fn base(&self) -> PluginBase;

    /// Display form of the base tag, e.g. `"Scenario"`.
    fn base_name(&self) -> String {
        self.base().to_string()
    }

    /// Compute the metadata projection for this plugin.
    fn info(&self) -> PluginInfo;
}

impl std::fmt::Debug for dyn Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plugin")
            .field("name", &self.name())
            .field("platform", &self.platform())
            .field("base", &self.base())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;

    impl Plugin for Probe {
        fn name(&self) -> &str {
            "probe"
        }

        fn platform(&self) -> &str {
            "generic"
        }

        fn base(&self) -> PluginBase {
            PluginBase::Scenario
        }

        fn info(&self) -> PluginInfo {
            PluginInfo {
                title: "Probe scenario".to_string(),
                name: self.name().to_string(),
                namespace: self.platform().to_string(),
                module: module_path!().to_string(),
                description: "A probe.".to_string(),
                parameters: vec![],
            }
        }
    }

    #[test]
    fn base_name_uses_display_form() {
        assert_eq!(Probe.base_name(), "Scenario");
    }

    #[test]
    fn info_namespace_matches_platform() {
        let info = Probe.info();
        assert_eq!(info.namespace, Probe.platform());
        assert_eq!(info.name, Probe.name());
    }

    #[test]
    fn plugin_info_serializes_parameters_in_order() {
        let info = PluginInfo {
            title: "t".to_string(),
            name: "n".to_string(),
            namespace: "ns".to_string(),
            module: "m".to_string(),
            description: String::new(),
            parameters: vec![
                PluginParameter {
                    name: "zeta".to_string(),
                    doc: "last declared, first listed".to_string(),
                },
                PluginParameter {
                    name: "alpha".to_string(),
                    doc: "declared second".to_string(),
                },
            ],
        };
        let json = serde_json::to_string(&info).unwrap();
        let zeta = json.find("zeta").unwrap();
        let alpha = json.find("alpha").unwrap();
        assert!(zeta < alpha, "declared order must survive serialization");
    }
}
