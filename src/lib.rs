//! webhook-validator library crate
//!
//! Composable admission webhook callbacks for Kubernetes resources. A
//! `Validator` holds ordered validation chains for CREATE, UPDATE and DELETE;
//! a `Mutator` holds an ordered defaulting chain. Serving the webhook,
//! TLS and decoding AdmissionReview payloads are left to the host.

pub mod metrics;
pub mod webhooks;

pub use metrics::WebhookMetrics;
pub use webhooks::{
    Context, CustomDefaulter, CustomValidator, Error, Mutator, Result, Validator,
};
