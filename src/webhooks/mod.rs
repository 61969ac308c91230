//! Webhook module for composing admission callbacks.
//!
//! This module provides the building blocks a ValidatingAdmissionWebhook or
//! MutatingAdmissionWebhook host wires into its request handling:
//! - `Validator`: ordered CREATE, UPDATE and DELETE validation chains
//! - `Mutator`: ordered defaulting chain applied before validation
//!
//! Every chain runs in registration order and stops at the first error,
//! which is returned to the caller unchanged.

pub mod admission;
mod chain;
pub mod context;
pub mod error;
pub mod mutator;
pub mod validator;

pub use admission::{CustomDefaulter, CustomValidator, operation_name};
pub use context::Context;
pub use error::{Error, Result};
pub use mutator::{
    MutateFn, Mutator, MutatorBuilder, MutatorOption, mutate_fn, with_mutation_fns,
};
pub use validator::{
    ValidateCreateFn, ValidateDeleteFn, ValidateUpdateFn, Validator, ValidatorBuilder,
    ValidatorOption, validate_create_fn, validate_delete_fn, validate_update_fn,
    with_validate_creation_fns, with_validate_deletion_fns, with_validate_update_fns,
};

// Re-export the kube-rs admission operation used for dispatch
pub use kube::core::admission::Operation;
