//! Prometheus counters for admission callback chains.
//!
//! Provides `webhook_admission_requests_total`, labelled by chain kind,
//! operation and outcome. The registry is owned by `WebhookMetrics` and
//! rendered with `encode()`; serving it is left to the host.

use prometheus_client::encoding::text::encode;
use prometheus_client::encoding::{EncodeLabel, EncodeLabelSet, LabelSetEncoder};
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::registry::Registry;

/// Outcome of running a callback chain
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Outcome {
    Allowed,
    Denied,
}

impl Outcome {
    fn as_str(&self) -> &'static str {
        match self {
            Outcome::Allowed => "allowed",
            Outcome::Denied => "denied",
        }
    }
}

/// Labels for admission metrics (kind + operation + outcome)
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct AdmissionLabels {
    pub kind: &'static str,
    pub operation: &'static str,
    pub outcome: Outcome,
}

impl EncodeLabelSet for AdmissionLabels {
    fn encode(&self, encoder: &mut LabelSetEncoder<'_>) -> Result<(), std::fmt::Error> {
        ("kind", self.kind).encode(encoder.encode_label())?;
        ("operation", self.operation).encode(encoder.encode_label())?;
        ("outcome", self.outcome.as_str()).encode(encoder.encode_label())?;
        Ok(())
    }
}

/// Shared metrics for validators and mutators
pub struct WebhookMetrics {
    /// Chain invocations by kind, operation and outcome
    pub admission_requests_total: Family<AdmissionLabels, Counter>,
    /// Prometheus registry
    registry: Registry,
}

impl Default for WebhookMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl WebhookMetrics {
    /// Create a new metrics instance with registered metrics
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let admission_requests_total = Family::<AdmissionLabels, Counter>::default();
        registry.register(
            "webhook_admission_requests",
            "Total number of admission callback chain runs",
            admission_requests_total.clone(),
        );

        Self {
            admission_requests_total,
            registry,
        }
    }

    /// Record one chain run
    pub fn record(&self, kind: &'static str, operation: &'static str, outcome: Outcome) {
        let labels = AdmissionLabels {
            kind,
            operation,
            outcome,
        };
        self.admission_requests_total.get_or_create(&labels).inc();
    }

    /// Number of recorded chain runs for a label set
    pub fn count(&self, kind: &'static str, operation: &'static str, outcome: Outcome) -> u64 {
        let labels = AdmissionLabels {
            kind,
            operation,
            outcome,
        };
        self.admission_requests_total.get_or_create(&labels).get()
    }

    /// Encode metrics to Prometheus text format
    pub fn encode(&self) -> String {
        let mut buffer = String::new();
        if encode(&mut buffer, &self.registry).is_err() {
            tracing::error!("Failed to encode metrics");
            return "# Error encoding metrics".to_string();
        }
        buffer
    }
}
