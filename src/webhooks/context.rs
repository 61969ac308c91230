//! Execution context handed to every admission callback.
//!
//! The Context carries a cancellation token and the request metadata that
//! callbacks commonly need. The validator and mutator never inspect it; a
//! callback doing blocking work is responsible for observing cancellation.

use tokio_util::sync::CancellationToken;

use super::error::{Error, Result};

/// Cancellable context for admission callbacks
#[derive(Clone, Debug, Default)]
pub struct Context {
    /// Cancellation signal shared with the admission host
    cancellation: CancellationToken,
    /// Whether this is a dry-run request
    pub dry_run: bool,
    /// The namespace of the object under review
    pub namespace: Option<String>,
}

impl Context {
    /// Create a context that is only cancelled by an explicit `cancel()`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context driven by an existing cancellation token
    pub fn with_cancellation(cancellation: CancellationToken) -> Self {
        Self {
            cancellation,
            ..Self::default()
        }
    }

    /// Mark the request as a dry run
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set the namespace of the object under review
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Derive a context that is cancelled together with this one, but whose
    /// own cancellation does not propagate back up.
    pub fn child(&self) -> Self {
        Self {
            cancellation: self.cancellation.child_token(),
            dry_run: self.dry_run,
            namespace: self.namespace.clone(),
        }
    }

    /// Cancel this context and every child derived from it
    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    /// Check whether the context has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Return `Err(Error::Cancelled)` once the context is cancelled
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }
        Ok(())
    }

    /// The underlying cancellation token, for callbacks that await it
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }
}
