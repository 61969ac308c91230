//! Validator composed of ordered create, update and delete callbacks.
//!
//! Each entry point runs its callback chain in registration order and returns
//! the first error unchanged. An empty chain admits everything.
//!
//! ```
//! use webhook_validator::webhooks::{
//!     Context, Error, Validator, validate_create_fn, with_validate_creation_fns,
//! };
//!
//! let validator = Validator::<String>::new([with_validate_creation_fns([validate_create_fn(
//!     |_ctx: &Context, name: &String| {
//!         if name.is_empty() {
//!             return Err(Error::denied("InvalidName", "name must not be empty"));
//!         }
//!         Ok(())
//!     },
//! )])]);
//!
//! assert!(validator.validate_create(&Context::new(), &"web".to_string()).is_ok());
//! assert!(validator.validate_create(&Context::new(), &String::new()).is_err());
//! ```

use std::fmt;
use std::sync::Arc;

use super::chain::run_chain;
use super::context::Context;
use super::error::Result;
use crate::metrics::WebhookMetrics;

const KIND: &str = "validator";

/// Validation callback run on CREATE
pub type ValidateCreateFn<K> = Arc<dyn Fn(&Context, &K) -> Result<()> + Send + Sync>;
/// Validation callback run on UPDATE, receiving the old and the new object
pub type ValidateUpdateFn<K> = Arc<dyn Fn(&Context, &K, &K) -> Result<()> + Send + Sync>;
/// Validation callback run on DELETE
pub type ValidateDeleteFn<K> = Arc<dyn Fn(&Context, &K) -> Result<()> + Send + Sync>;

/// Wrap a closure as a [`ValidateCreateFn`]
pub fn validate_create_fn<K, F>(f: F) -> ValidateCreateFn<K>
where
    F: Fn(&Context, &K) -> Result<()> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap a closure as a [`ValidateUpdateFn`]
pub fn validate_update_fn<K, F>(f: F) -> ValidateUpdateFn<K>
where
    F: Fn(&Context, &K, &K) -> Result<()> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap a closure as a [`ValidateDeleteFn`]
pub fn validate_delete_fn<K, F>(f: F) -> ValidateDeleteFn<K>
where
    F: Fn(&Context, &K) -> Result<()> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Configuration option applied when constructing a [`Validator`].
///
/// Options are applied in the order given. Repeating an option appends to the
/// corresponding chain instead of replacing it.
pub enum ValidatorOption<K> {
    /// Append CREATE callbacks
    CreationFns(Vec<ValidateCreateFn<K>>),
    /// Append UPDATE callbacks
    UpdateFns(Vec<ValidateUpdateFn<K>>),
    /// Append DELETE callbacks
    DeletionFns(Vec<ValidateDeleteFn<K>>),
    /// Record chain outcomes in the given metrics
    Metrics(Arc<WebhookMetrics>),
}

/// Option appending CREATE callbacks
pub fn with_validate_creation_fns<K>(
    fns: impl IntoIterator<Item = ValidateCreateFn<K>>,
) -> ValidatorOption<K> {
    ValidatorOption::CreationFns(fns.into_iter().collect())
}

/// Option appending UPDATE callbacks
pub fn with_validate_update_fns<K>(
    fns: impl IntoIterator<Item = ValidateUpdateFn<K>>,
) -> ValidatorOption<K> {
    ValidatorOption::UpdateFns(fns.into_iter().collect())
}

/// Option appending DELETE callbacks
pub fn with_validate_deletion_fns<K>(
    fns: impl IntoIterator<Item = ValidateDeleteFn<K>>,
) -> ValidatorOption<K> {
    ValidatorOption::DeletionFns(fns.into_iter().collect())
}

/// Ordered chains of validation callbacks for one object type.
///
/// Immutable once built and safe to share across threads.
pub struct Validator<K> {
    creation_chain: Vec<ValidateCreateFn<K>>,
    update_chain: Vec<ValidateUpdateFn<K>>,
    deletion_chain: Vec<ValidateDeleteFn<K>>,
    metrics: Option<Arc<WebhookMetrics>>,
}

impl<K> Validator<K> {
    /// Create a validator from a set of options
    pub fn new(options: impl IntoIterator<Item = ValidatorOption<K>>) -> Self {
        options
            .into_iter()
            .fold(Self::builder(), ValidatorBuilder::apply)
            .build()
    }

    /// Start building a validator
    pub fn builder() -> ValidatorBuilder<K> {
        ValidatorBuilder {
            validator: Self {
                creation_chain: Vec::new(),
                update_chain: Vec::new(),
                deletion_chain: Vec::new(),
                metrics: None,
            },
        }
    }

    /// Validate an object being created
    pub fn validate_create(&self, ctx: &Context, obj: &K) -> Result<()> {
        run_chain(
            KIND,
            "CREATE",
            &self.creation_chain,
            self.metrics.as_deref(),
            |f| f(ctx, obj),
        )
    }

    /// Validate a change from `old_obj` to `new_obj`
    pub fn validate_update(&self, ctx: &Context, old_obj: &K, new_obj: &K) -> Result<()> {
        run_chain(
            KIND,
            "UPDATE",
            &self.update_chain,
            self.metrics.as_deref(),
            |f| f(ctx, old_obj, new_obj),
        )
    }

    /// Validate an object being deleted
    pub fn validate_delete(&self, ctx: &Context, obj: &K) -> Result<()> {
        run_chain(
            KIND,
            "DELETE",
            &self.deletion_chain,
            self.metrics.as_deref(),
            |f| f(ctx, obj),
        )
    }
}

impl<K> Default for Validator<K> {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl<K> Clone for Validator<K> {
    fn clone(&self) -> Self {
        Self {
            creation_chain: self.creation_chain.clone(),
            update_chain: self.update_chain.clone(),
            deletion_chain: self.deletion_chain.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

impl<K> fmt::Debug for Validator<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("creation_fns", &self.creation_chain.len())
            .field("update_fns", &self.update_chain.len())
            .field("deletion_fns", &self.deletion_chain.len())
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}

/// Builder for [`Validator`]
pub struct ValidatorBuilder<K> {
    validator: Validator<K>,
}

impl<K> ValidatorBuilder<K> {
    /// Apply a single option
    pub fn apply(mut self, option: ValidatorOption<K>) -> Self {
        let v = &mut self.validator;
        match option {
            ValidatorOption::CreationFns(fns) => v.creation_chain.extend(fns),
            ValidatorOption::UpdateFns(fns) => v.update_chain.extend(fns),
            ValidatorOption::DeletionFns(fns) => v.deletion_chain.extend(fns),
            ValidatorOption::Metrics(metrics) => v.metrics = Some(metrics),
        }
        self
    }

    /// Append a CREATE callback
    pub fn on_create<F>(self, f: F) -> Self
    where
        F: Fn(&Context, &K) -> Result<()> + Send + Sync + 'static,
    {
        self.apply(ValidatorOption::CreationFns(vec![validate_create_fn(f)]))
    }

    /// Append an UPDATE callback
    pub fn on_update<F>(self, f: F) -> Self
    where
        F: Fn(&Context, &K, &K) -> Result<()> + Send + Sync + 'static,
    {
        self.apply(ValidatorOption::UpdateFns(vec![validate_update_fn(f)]))
    }

    /// Append a DELETE callback
    pub fn on_delete<F>(self, f: F) -> Self
    where
        F: Fn(&Context, &K) -> Result<()> + Send + Sync + 'static,
    {
        self.apply(ValidatorOption::DeletionFns(vec![validate_delete_fn(f)]))
    }

    /// Record chain outcomes in `metrics`
    pub fn metrics(self, metrics: Arc<WebhookMetrics>) -> Self {
        self.apply(ValidatorOption::Metrics(metrics))
    }

    /// Finish building
    pub fn build(self) -> Validator<K> {
        self.validator
    }
}
