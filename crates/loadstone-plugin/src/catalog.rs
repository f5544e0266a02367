// SPDX-FileCopyrightText: 2026 Loadstone Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in plugin catalog.
//!
//! The plugins compiled into the Loadstone binary: three scenarios, three
//! runners, two contexts, and one hook, spread across the `generic`,
//! `docker`, and `kubernetes` platforms. [`builtin_registry`] is the
//! explicit "populate the registry" step that must run before any
//! inspection query.

use std::sync::Arc;

use loadstone_core::PluginBase;

use crate::plugin::{Plugin, PluginInfo, PluginParameter};
use crate::registry::PluginRegistry;

fn param(name: &str, doc: &str) -> PluginParameter {
    PluginParameter {
        name: name.to_string(),
        doc: doc.to_string(),
    }
}

/// Build a registry populated with every built-in plugin.
///
/// Registration order is fixed: scenarios, then runners, then contexts,
/// then hooks. The CLI reproduces this order in its listings.
pub fn builtin_registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    registry.register(Arc::new(HttpGetScenario));
    registry.register(Arc::new(ContainerStartScenario));
    registry.register(Arc::new(PodStartScenario));
    registry.register(Arc::new(ConstantRunner));
    registry.register(Arc::new(ConstantBurstRunner));
    registry.register(Arc::new(RpsRunner));
    registry.register(Arc::new(NetworkContext));
    registry.register(Arc::new(QuotaContext));
    registry.register(Arc::new(PauseHook));
    registry
}

/// Scenario issuing one HTTP GET per iteration.
pub struct HttpGetScenario;

impl Plugin for HttpGetScenario {
    fn name(&self) -> &str {
        "http-get"
    }

    fn platform(&self) -> &str {
        "generic"
    }

    fn base(&self) -> PluginBase {
        PluginBase::Scenario
    }

    fn info(&self) -> PluginInfo {
        PluginInfo {
            title: "Issue HTTP GET requests against a target URL".to_string(),
            name: self.name().to_string(),
            namespace: self.platform().to_string(),
            module: module_path!().to_string(),
            description: "Each iteration sends a single HTTP GET request to the\n\
                          configured URL and records the response time.\n\
                          The iteration fails when the response status does not\n\
                          match the expected one."
                .to_string(),
            parameters: vec![
                param("url", "Target URL to request."),
                param("timeout", "Per-request timeout in seconds."),
                param("expected_status", "HTTP status code treated as success."),
            ],
        }
    }
}

/// Scenario starting and removing one container per iteration.
pub struct ContainerStartScenario;

impl Plugin for ContainerStartScenario {
    fn name(&self) -> &str {
        "container-start"
    }

    fn platform(&self) -> &str {
        "docker"
    }

    fn base(&self) -> PluginBase {
        PluginBase::Scenario
    }

    fn info(&self) -> PluginInfo {
        PluginInfo {
            title: "Start and remove a container".to_string(),
            name: self.name().to_string(),
            namespace: self.platform().to_string(),
            module: module_path!().to_string(),
            description: "Measures container startup latency by creating a\n\
                          container from the given image, waiting for it to\n\
                          reach the running state, then removing it."
                .to_string(),
            parameters: vec![
                param("image", "Image reference to start the container from."),
                param("command", "Command overriding the image entrypoint."),
            ],
        }
    }
}

/// Scenario spawning and deleting pods.
pub struct PodStartScenario;

impl Plugin for PodStartScenario {
    fn name(&self) -> &str {
        "pod-start"
    }

    fn platform(&self) -> &str {
        "kubernetes"
    }

    fn base(&self) -> PluginBase {
        PluginBase::Scenario
    }

    fn info(&self) -> PluginInfo {
        PluginInfo {
            title: "Spawn pods and wait for readiness".to_string(),
            name: self.name().to_string(),
            namespace: self.platform().to_string(),
            module: module_path!().to_string(),
            description: "Creates the requested number of pods, waits until all\n\
                          report ready, then deletes them. Pod scheduling and\n\
                          image pull time dominate the measured latency."
                .to_string(),
            parameters: vec![
                param("image", "Container image for the pod template."),
                param("replicas", "Number of pods to spawn per iteration."),
            ],
        }
    }
}

/// Runner executing a fixed number of iterations at fixed concurrency.
pub struct ConstantRunner;

impl Plugin for ConstantRunner {
    fn name(&self) -> &str {
        "constant"
    }

    fn platform(&self) -> &str {
        "generic"
    }

    fn base(&self) -> PluginBase {
        PluginBase::Runner
    }

    fn info(&self) -> PluginInfo {
        PluginInfo {
            title: "Run a scenario a fixed number of times".to_string(),
            name: self.name().to_string(),
            namespace: self.platform().to_string(),
            module: module_path!().to_string(),
            description: "Executes the scenario a fixed number of times from a\n\
                          pool of workers of constant size. Finished iterations\n\
                          are immediately replaced until the total is reached."
                .to_string(),
            parameters: vec![
                param("times", "Total number of iterations to run."),
                param("concurrency", "Number of parallel workers."),
            ],
        }
    }
}

/// Runner releasing iterations in bursts.
pub struct ConstantBurstRunner;

impl Plugin for ConstantBurstRunner {
    fn name(&self) -> &str {
        "constant-burst"
    }

    fn platform(&self) -> &str {
        "generic"
    }

    fn base(&self) -> PluginBase {
        PluginBase::Runner
    }

    fn info(&self) -> PluginInfo {
        PluginInfo {
            title: "Run a scenario in fixed-size bursts".to_string(),
            name: self.name().to_string(),
            namespace: self.platform().to_string(),
            module: module_path!().to_string(),
            description: "Like the constant runner, but iterations are released\n\
                          in bursts: all iterations of a burst start together\n\
                          and the next burst begins after the previous one has\n\
                          fully completed."
                .to_string(),
            parameters: vec![
                param("times", "Total number of iterations to run."),
                param("burst_size", "Number of iterations started per burst."),
            ],
        }
    }
}

/// Runner holding a target request rate.
pub struct RpsRunner;

impl Plugin for RpsRunner {
    fn name(&self) -> &str {
        "rps"
    }

    fn platform(&self) -> &str {
        "generic"
    }

    fn base(&self) -> PluginBase {
        PluginBase::Runner
    }

    fn info(&self) -> PluginInfo {
        PluginInfo {
            title: "Run a scenario at a constant rate per second".to_string(),
            name: self.name().to_string(),
            namespace: self.platform().to_string(),
            module: module_path!().to_string(),
            description: "Starts new iterations at a fixed rate regardless of\n\
                          how long individual iterations take, up to the\n\
                          configured concurrency ceiling."
                .to_string(),
            parameters: vec![
                param("rps", "Iterations to start per second."),
                param("duration", "Total run duration in seconds."),
                param("max_concurrency", "Upper bound on in-flight iterations."),
            ],
        }
    }
}

/// Context creating an isolated bridge network for a run.
pub struct NetworkContext;

impl Plugin for NetworkContext {
    fn name(&self) -> &str {
        "network"
    }

    fn platform(&self) -> &str {
        "docker"
    }

    fn base(&self) -> PluginBase {
        PluginBase::Context
    }

    fn info(&self) -> PluginInfo {
        PluginInfo {
            title: "Create a dedicated network for the run".to_string(),
            name: self.name().to_string(),
            namespace: self.platform().to_string(),
            module: module_path!().to_string(),
            description: "Creates a bridge network before the scenario starts and\n\
                          removes it afterwards. Containers started by scenarios\n\
                          inside this context are attached to the network."
                .to_string(),
            parameters: vec![
                param("subnet", "CIDR subnet for the network."),
                param("driver", "Network driver to use."),
            ],
        }
    }
}

/// Context applying a resource quota around a run.
pub struct QuotaContext;

impl Plugin for QuotaContext {
    fn name(&self) -> &str {
        "quota"
    }

    fn platform(&self) -> &str {
        "kubernetes"
    }

    fn base(&self) -> PluginBase {
        PluginBase::Context
    }

    fn info(&self) -> PluginInfo {
        PluginInfo {
            title: "Apply a resource quota for the duration of the run".to_string(),
            name: self.name().to_string(),
            namespace: self.platform().to_string(),
            module: module_path!().to_string(),
            description: "Installs a ResourceQuota object before the scenario\n\
                          starts and restores the previous state afterwards."
                .to_string(),
            parameters: vec![
                param("pods", "Maximum number of pods allowed."),
                param("cpu", "CPU request ceiling."),
                param("memory", "Memory request ceiling."),
            ],
        }
    }
}

/// Hook pausing a run at a trigger point.
pub struct PauseHook;

impl Plugin for PauseHook {
    fn name(&self) -> &str {
        "pause"
    }

    fn platform(&self) -> &str {
        "generic"
    }

    fn base(&self) -> PluginBase {
        PluginBase::Hook
    }

    fn info(&self) -> PluginInfo {
        PluginInfo {
            title: "Pause the run for a fixed interval".to_string(),
            name: self.name().to_string(),
            namespace: self.platform().to_string(),
            module: module_path!().to_string(),
            description: "Sleeps for the configured number of seconds when the\n\
                          trigger fires. Useful for injecting settle time\n\
                          between load phases."
                .to_string(),
            parameters: vec![param("seconds", "Seconds to sleep when triggered.")],
        }
    }
}
