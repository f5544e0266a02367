// SPDX-FileCopyrightText: 2026 Loadstone Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for plugin inspection over the built-in catalog.
//!
//! Drives the query engine and presenter exactly as the binary does:
//! populate the registry, fetch with the namespace filter pushed into the
//! registry, resolve or filter, render.

use loadstone::plugin::{
    filter_list, render_detail, render_plugins_table, resolve_show, ListOutcome, ShowOutcome,
};
use loadstone_plugin::builtin_registry;

#[test]
fn list_without_filters_shows_every_builtin() {
    let registry = builtin_registry();
    let plugins = registry.get_all(None);
    match filter_list(&plugins, None, None) {
        ListOutcome::Matched(matched) => {
            assert_eq!(matched.len(), registry.len());
            let rendered = render_plugins_table(&matched);
            // rule + header + rule + one line per plugin + rule
            assert_eq!(rendered.lines().count(), registry.len() + 4);
        }
        _ => panic!("built-in catalog must list completely"),
    }
}

#[test]
fn list_namespace_filter_never_leaks_other_platforms() {
    let registry = builtin_registry();
    let plugins = registry.get_all(Some("docker"));
    assert!(!plugins.is_empty());
    assert!(plugins.iter().all(|p| p.platform() == "docker"));

    let rendered = render_plugins_table(&plugins);
    assert!(rendered.contains("container-start"));
    assert!(!rendered.contains("kubernetes"));
    assert!(!rendered.contains("http-get"));
}

#[test]
fn list_plugin_base_filter_is_exact() {
    let registry = builtin_registry();
    let plugins = registry.get_all(None);

    match filter_list(&plugins, None, Some("Scenario")) {
        ListOutcome::Matched(matched) => {
            assert_eq!(matched.len(), 3);
            assert!(matched.iter().all(|p| p.base_name() == "Scenario"));
        }
        _ => panic!("expected the three scenarios"),
    }

    // Base matching is case-sensitive; lowercase matches nothing.
    assert!(matches!(
        filter_list(&plugins, None, Some("scenario")),
        ListOutcome::NoMatch
    ));
}

#[test]
fn list_unknown_namespace_reports_empty_namespace() {
    let registry = builtin_registry();
    let plugins = registry.get_all(Some("vmware"));
    assert!(matches!(
        filter_list(&plugins, None, None),
        ListOutcome::EmptyNamespace
    ));
}

#[test]
fn show_constant_resolves_despite_constant_burst() {
    let registry = builtin_registry();
    let plugins = registry.get_all(None);
    match resolve_show(&plugins, "constant") {
        ShowOutcome::Resolved(plugin) => {
            assert_eq!(plugin.name(), "constant");
            let rendered = render_detail(&plugin.info());
            assert!(rendered.contains("NAME\n\tconstant\n"));
            assert!(rendered.contains("NAMESPACE\n\tgeneric\n"));
            assert!(rendered.contains("MODULE\n\tloadstone_plugin::catalog\n"));
            assert!(rendered.contains("| times "));
        }
        _ => panic!("exact match must break the constant/constant-burst tie"),
    }
}

#[test]
fn show_start_is_ambiguous_across_platforms() {
    let registry = builtin_registry();
    let plugins = registry.get_all(None);
    match resolve_show(&plugins, "start") {
        ShowOutcome::Ambiguous(found) => {
            let names: Vec<&str> = found.iter().map(|p| p.name()).collect();
            assert_eq!(names, vec!["container-start", "pod-start"]);
            let rendered = render_plugins_table(&found);
            assert!(rendered.contains("container-start"));
            assert!(rendered.contains("pod-start"));
        }
        _ => panic!("`start` matches two plugins and no exact name"),
    }
}

#[test]
fn show_namespace_scope_disambiguates() {
    let registry = builtin_registry();
    let plugins = registry.get_all(Some("kubernetes"));
    match resolve_show(&plugins, "start") {
        ShowOutcome::Resolved(plugin) => {
            assert_eq!(plugin.name(), "pod-start");
            assert_eq!(plugin.platform(), "kubernetes");
        }
        _ => panic!("inside kubernetes, `start` matches only pod-start"),
    }
}

#[test]
fn show_matching_is_case_insensitive() {
    let registry = builtin_registry();
    let plugins = registry.get_all(None);
    match resolve_show(&plugins, "CONSTANT-BURST") {
        ShowOutcome::Resolved(plugin) => assert_eq!(plugin.name(), "constant-burst"),
        _ => panic!("case-insensitive exact match must resolve"),
    }
}

#[test]
fn show_unknown_name_is_not_found_not_an_error() {
    let registry = builtin_registry();
    let plugins = registry.get_all(None);
    assert!(matches!(
        resolve_show(&plugins, "does-not-exist"),
        ShowOutcome::NotFound
    ));
}

#[test]
fn detail_preserves_multiline_description() {
    let registry = builtin_registry();
    let plugin = registry.get("http-get", "generic").unwrap();
    let info = plugin.info();
    assert!(info.description.contains('\n'));

    let rendered = render_detail(&info);
    // Every description line appears tab-indented, in order.
    let mut last = 0;
    for line in info.description.split('\n') {
        let needle = format!("\t{}", line.trim_start());
        let pos = rendered.find(needle.trim_end()).unwrap_or_else(|| {
            panic!("description line missing from detail output: {line:?}")
        });
        assert!(pos >= last);
        last = pos;
    }
}

#[test]
fn parameter_table_keeps_declared_order() {
    let registry = builtin_registry();
    let plugin = registry.get("rps", "generic").unwrap();
    let rendered = render_detail(&plugin.info());

    let rps = rendered.find("| rps ").unwrap();
    let duration = rendered.find("| duration ").unwrap();
    let max = rendered.find("| max_concurrency ").unwrap();
    assert!(rps < duration && duration < max, "no sorting of parameters");
}
