//! Test fixtures and builder patterns for admission objects.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use k8s_openapi::api::core::v1::ConfigMap;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

/// Builder for creating ConfigMap test fixtures.
///
/// # Example
/// ```ignore
/// let cm = ConfigMapBuilder::new("app-config")
///     .namespace("test-ns")
///     .data("mode", "strict")
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct ConfigMapBuilder {
    name: String,
    namespace: Option<String>,
    labels: BTreeMap<String, String>,
    data: BTreeMap<String, String>,
    generation: Option<i64>,
}

impl ConfigMapBuilder {
    /// Create a new builder with the given object name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            labels: BTreeMap::new(),
            data: BTreeMap::new(),
            generation: None,
        }
    }

    /// Set the namespace for the object.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Add a label.
    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Add a data entry.
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Set the generation.
    pub fn generation(mut self, generation: i64) -> Self {
        self.generation = Some(generation);
        self
    }

    /// Build the ConfigMap.
    pub fn build(self) -> ConfigMap {
        ConfigMap {
            metadata: ObjectMeta {
                name: Some(self.name),
                namespace: self.namespace,
                labels: if self.labels.is_empty() {
                    None
                } else {
                    Some(self.labels)
                },
                generation: self.generation,
                ..Default::default()
            },
            data: if self.data.is_empty() {
                None
            } else {
                Some(self.data)
            },
            ..Default::default()
        }
    }
}

impl Default for ConfigMapBuilder {
    fn default() -> Self {
        Self::new("test-config")
    }
}

/// Create a ConfigMap with common test defaults.
pub fn test_configmap(name: &str) -> ConfigMap {
    ConfigMapBuilder::new(name)
        .namespace("default")
        .generation(1)
        .build()
}

/// Ordered log of callback invocations, shared with the closures under test.
#[derive(Clone, Debug, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<usize>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that callback `index` ran.
    pub fn record(&self, index: usize) {
        self.calls.lock().unwrap().push(index);
    }

    /// Indices of the callbacks that ran, in invocation order.
    pub fn calls(&self) -> Vec<usize> {
        self.calls.lock().unwrap().clone()
    }
}

/// Install a test-friendly tracing subscriber (idempotent).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "webhook_validator=debug".into()),
        )
        .with_test_writer()
        .try_init();
}
