// SPDX-FileCopyrightText: 2026 Loadstone Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `loadstone plugin show` and `loadstone plugin list` implementations.
//!
//! Both commands are single-pass queries over the registry snapshot:
//! fetch -> filter -> branch on cardinality -> format. "Not found" and
//! "ambiguous" are informational outcomes printed to stdout, never process
//! failures.

use std::sync::Arc;

use loadstone_plugin::{Plugin, PluginInfo, PluginRegistry};
use serde::Serialize;

use crate::table::{make_header, Table};

/// One summary row of the plugin table, also used for `--json` listings.
#[derive(Debug, Clone, Serialize)]
pub struct PluginSummary {
    pub plugin_base: String,
    pub name: String,
    pub namespace: String,
    pub title: String,
}

impl PluginSummary {
    fn from_plugin(plugin: &Arc<dyn Plugin>) -> Self {
        Self {
            plugin_base: plugin.base_name(),
            name: plugin.name().to_string(),
            namespace: plugin.platform().to_string(),
            title: plugin.info().title,
        }
    }

    fn into_row(self) -> Vec<String> {
        vec![self.plugin_base, self.name, self.namespace, self.title]
    }
}

/// Resolution result of a `show` query.
pub enum ShowOutcome {
    /// No plugin name contains the query.
    NotFound,
    /// A single plugin was resolved, either as the only substring match or
    /// as the exact-name tie-break among several.
    Resolved(Arc<dyn Plugin>),
    /// Several substring matches and no exact match.
    Ambiguous(Vec<Arc<dyn Plugin>>),
}

/// Resolve a `show` query against an already-fetched plugin set.
///
/// Matching is case-insensitive on the plugin name. An exact name match
/// wins even when several plugins contain the query as a substring; this
/// tie-break is what lets `constant` resolve although `constant-burst`
/// also matches.
pub fn resolve_show(plugins: &[Arc<dyn Plugin>], name: &str) -> ShowOutcome {
    let name_lw = name.to_lowercase();
    let found: Vec<Arc<dyn Plugin>> = plugins
        .iter()
        .filter(|p| p.name().to_lowercase().contains(&name_lw))
        .cloned()
        .collect();

    if found.is_empty() {
        return ShowOutcome::NotFound;
    }
    if found.len() == 1 {
        let mut found = found;
        return ShowOutcome::Resolved(found.remove(0));
    }
    let exact = found
        .iter()
        .find(|p| p.name().to_lowercase() == name_lw)
        .cloned();
    match exact {
        Some(plugin) => ShowOutcome::Resolved(plugin),
        None => ShowOutcome::Ambiguous(found),
    }
}

/// Filtering result of a `list` query.
pub enum ListOutcome {
    /// The namespace fetch itself returned nothing.
    EmptyNamespace,
    /// The fetch had plugins but the filters matched none of them.
    NoMatch,
    /// Plugins surviving all filters, in registry order.
    Matched(Vec<Arc<dyn Plugin>>),
}

/// Filter an already-fetched plugin set for a `list` query.
///
/// The name filter is a case-insensitive substring match; the base filter
/// is exact and case-sensitive against the base tag's display form.
pub fn filter_list(
    plugins: &[Arc<dyn Plugin>],
    name: Option<&str>,
    base: Option<&str>,
) -> ListOutcome {
    if plugins.is_empty() {
        return ListOutcome::EmptyNamespace;
    }

    let mut matched: Vec<Arc<dyn Plugin>> = plugins.to_vec();
    if let Some(name) = name {
        let name_lw = name.to_lowercase();
        matched.retain(|p| p.name().to_lowercase().contains(&name_lw));
    }
    if let Some(base) = base {
        matched.retain(|p| p.base_name() == base);
    }

    if matched.is_empty() {
        ListOutcome::NoMatch
    } else {
        ListOutcome::Matched(matched)
    }
}

/// Render the summary table with the fixed column order.
pub fn render_plugins_table(plugins: &[Arc<dyn Plugin>]) -> String {
    let mut table = Table::new(&["Plugin base", "Name", "Namespace", "Title"]);
    for plugin in plugins {
        table.add_row(PluginSummary::from_plugin(plugin).into_row());
    }
    table.render()
}

/// Render the detail view of a resolved plugin.
///
/// The description is reproduced verbatim, each line tab-indented; the
/// parameter table keeps declared order.
pub fn render_detail(info: &PluginInfo) -> String {
    let mut out = String::new();
    out.push_str(&make_header(&info.title));
    out.push('\n');
    out.push_str(&format!("NAME\n\t{}\n", info.name));
    out.push_str(&format!("NAMESPACE\n\t{}\n", info.namespace));
    out.push_str(&format!("MODULE\n\t{}\n", info.module));
    if !info.description.is_empty() {
        out.push_str("DESCRIPTION\n\t");
        let lines: Vec<&str> = info.description.split('\n').collect();
        out.push_str(&lines.join("\n\t"));
        out.push('\n');
    }
    if !info.parameters.is_empty() {
        out.push_str("PARAMETERS\n");
        let mut table = Table::new(&["name", "description"]);
        for p in &info.parameters {
            table.add_row(vec![p.name.clone(), p.doc.clone()]);
        }
        out.push_str(&table.render());
    }
    out
}

/// Diagnostic for a `show` query that matched nothing.
pub fn not_found_message(name: &str, namespace: Option<&str>) -> String {
    match namespace {
        Some(ns) => format!("There is no plugin: {name} in {ns} namespace"),
        None => format!("There is no plugin: {name}"),
    }
}

/// Diagnostic for a `list` namespace fetch that returned nothing.
pub fn empty_namespace_message(namespace: Option<&str>) -> String {
    match namespace {
        Some(ns) => format!("There is no plugin namespace: {ns}"),
        None => "There are no plugins registered".to_string(),
    }
}

/// Diagnostic for a `list` whose filters matched nothing.
pub fn no_match_message(name: Option<&str>, base: Option<&str>) -> String {
    match (name, base) {
        (Some(name), _) => format!("There is no plugin: {name}"),
        (None, Some(base)) => format!("There is no plugin with base: {base}"),
        (None, None) => "There is no plugin".to_string(),
    }
}

/// Structured `show` output for `--json` mode.
#[derive(Debug, Serialize)]
struct ShowResponse {
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    plugin: Option<PluginInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    candidates: Vec<PluginSummary>,
}

/// Structured `list` output for `--json` mode.
#[derive(Debug, Serialize)]
struct ListResponse {
    outcome: &'static str,
    plugins: Vec<PluginSummary>,
}

fn to_pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Run the `plugin show` command.
pub fn run_show(
    registry: &PluginRegistry,
    name: &str,
    namespace: Option<&str>,
    json: bool,
    use_color: bool,
) {
    let plugins = registry.get_all(namespace);
    tracing::debug!(count = plugins.len(), ?namespace, "fetched plugins for show");
    let outcome = resolve_show(&plugins, name);

    if json {
        let response = match &outcome {
            ShowOutcome::NotFound => ShowResponse {
                outcome: "not-found",
                plugin: None,
                candidates: vec![],
            },
            ShowOutcome::Resolved(plugin) => ShowResponse {
                outcome: "resolved",
                plugin: Some(plugin.info()),
                candidates: vec![],
            },
            ShowOutcome::Ambiguous(found) => ShowResponse {
                outcome: "ambiguous",
                plugin: None,
                candidates: found.iter().map(PluginSummary::from_plugin).collect(),
            },
        };
        println!("{}", to_pretty_json(&response));
        return;
    }

    match outcome {
        ShowOutcome::NotFound => print_notice(&not_found_message(name, namespace), use_color),
        ShowOutcome::Resolved(plugin) => print!("{}", render_detail(&plugin.info())),
        ShowOutcome::Ambiguous(found) => {
            print_notice("Multiple plugins found:", use_color);
            print!("{}", render_plugins_table(&found));
        }
    }
}

/// Run the `plugin list` command.
pub fn run_list(
    registry: &PluginRegistry,
    name: Option<&str>,
    namespace: Option<&str>,
    base: Option<&str>,
    json: bool,
    use_color: bool,
) {
    let plugins = registry.get_all(namespace);
    tracing::debug!(count = plugins.len(), ?namespace, "fetched plugins for list");
    let outcome = filter_list(&plugins, name, base);

    if json {
        let response = match &outcome {
            ListOutcome::EmptyNamespace => ListResponse {
                outcome: "empty-namespace",
                plugins: vec![],
            },
            ListOutcome::NoMatch => ListResponse {
                outcome: "no-match",
                plugins: vec![],
            },
            ListOutcome::Matched(matched) => ListResponse {
                outcome: "matched",
                plugins: matched.iter().map(PluginSummary::from_plugin).collect(),
            },
        };
        println!("{}", to_pretty_json(&response));
        return;
    }

    match outcome {
        ListOutcome::EmptyNamespace => print_notice(&empty_namespace_message(namespace), use_color),
        ListOutcome::NoMatch => print_notice(&no_match_message(name, base), use_color),
        ListOutcome::Matched(matched) => print!("{}", render_plugins_table(&matched)),
    }
}

/// Print an informational diagnostic, yellow when color is enabled.
fn print_notice(message: &str, use_color: bool) {
    if use_color {
        use colored::Colorize;
        println!("{}", message.yellow());
    } else {
        println!("{message}");
    }
}
