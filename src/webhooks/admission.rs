//! Admission-facing traits implemented by the validator and mutator.
//!
//! A webhook host holds a `dyn CustomValidator<K>` / `dyn CustomDefaulter<K>`
//! and routes each request by its admission [`Operation`].

use std::sync::Arc;

use kube::core::admission::Operation;

use super::context::Context;
use super::error::{Error, Result};
use super::mutator::Mutator;
use super::validator::Validator;

/// Validation capability for one object type
pub trait CustomValidator<K>: Send + Sync {
    /// Validate an object being created
    fn validate_create(&self, ctx: &Context, obj: &K) -> Result<()>;

    /// Validate a change from `old_obj` to `new_obj`
    fn validate_update(&self, ctx: &Context, old_obj: &K, new_obj: &K) -> Result<()>;

    /// Validate an object being deleted
    fn validate_delete(&self, ctx: &Context, obj: &K) -> Result<()>;

    /// Route an admission operation to the matching entry point.
    ///
    /// `old_obj` and `new_obj` mirror the `oldObject` and `object` fields of an
    /// admission request. DELETE carries the object being removed in
    /// `oldObject`. CONNECT has no object and is always admitted.
    fn validate(
        &self,
        ctx: &Context,
        operation: &Operation,
        old_obj: Option<&K>,
        new_obj: Option<&K>,
    ) -> Result<()> {
        match operation {
            Operation::Create => {
                let obj = require(new_obj, operation, "object")?;
                self.validate_create(ctx, obj)
            }
            Operation::Update => {
                let old = require(old_obj, operation, "oldObject")?;
                let new = require(new_obj, operation, "object")?;
                self.validate_update(ctx, old, new)
            }
            Operation::Delete => {
                let obj = require(old_obj, operation, "oldObject")?;
                self.validate_delete(ctx, obj)
            }
            Operation::Connect => Ok(()),
        }
    }
}

/// Defaulting capability for one object type
pub trait CustomDefaulter<K>: Send + Sync {
    /// Apply defaults to `obj` in place
    fn default(&self, ctx: &Context, obj: &mut K) -> Result<()>;
}

/// Admission name of an operation, as it appears on the wire
pub fn operation_name(operation: &Operation) -> &'static str {
    match operation {
        Operation::Create => "CREATE",
        Operation::Update => "UPDATE",
        Operation::Delete => "DELETE",
        Operation::Connect => "CONNECT",
    }
}

fn require<'a, K>(
    obj: Option<&'a K>,
    operation: &Operation,
    field: &'static str,
) -> Result<&'a K> {
    obj.ok_or_else(|| Error::MissingObject {
        operation: operation_name(operation),
        field,
    })
}

impl<K> CustomValidator<K> for Validator<K> {
    fn validate_create(&self, ctx: &Context, obj: &K) -> Result<()> {
        Validator::validate_create(self, ctx, obj)
    }

    fn validate_update(&self, ctx: &Context, old_obj: &K, new_obj: &K) -> Result<()> {
        Validator::validate_update(self, ctx, old_obj, new_obj)
    }

    fn validate_delete(&self, ctx: &Context, obj: &K) -> Result<()> {
        Validator::validate_delete(self, ctx, obj)
    }
}

impl<K> CustomDefaulter<K> for Mutator<K> {
    fn default(&self, ctx: &Context, obj: &mut K) -> Result<()> {
        Mutator::default(self, ctx, obj)
    }
}

impl<K, T> CustomValidator<K> for Arc<T>
where
    T: CustomValidator<K> + ?Sized,
{
    fn validate_create(&self, ctx: &Context, obj: &K) -> Result<()> {
        (**self).validate_create(ctx, obj)
    }

    fn validate_update(&self, ctx: &Context, old_obj: &K, new_obj: &K) -> Result<()> {
        (**self).validate_update(ctx, old_obj, new_obj)
    }

    fn validate_delete(&self, ctx: &Context, obj: &K) -> Result<()> {
        (**self).validate_delete(ctx, obj)
    }
}
