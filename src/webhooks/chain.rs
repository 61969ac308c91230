//! Ordered callback execution shared by the validator and the mutator.

use tracing::debug;

use super::error::Result;
use crate::metrics::{Outcome, WebhookMetrics};

/// Invoke every callback of `chain` in order through `call`, stopping at the
/// first error and returning it untouched.
pub(crate) fn run_chain<F>(
    kind: &'static str,
    operation: &'static str,
    chain: &[F],
    metrics: Option<&WebhookMetrics>,
    mut call: impl FnMut(&F) -> Result<()>,
) -> Result<()> {
    debug!(
        kind,
        operation,
        callbacks = chain.len(),
        "Running admission callbacks"
    );

    for (index, callback) in chain.iter().enumerate() {
        if let Err(e) = call(callback) {
            debug!(
                kind,
                operation,
                index,
                reason = e.reason(),
                error = %e,
                "Admission callback rejected object"
            );
            if let Some(metrics) = metrics {
                metrics.record(kind, operation, Outcome::Denied);
            }
            return Err(e);
        }
    }

    if let Some(metrics) = metrics {
        metrics.record(kind, operation, Outcome::Allowed);
    }
    Ok(())
}
