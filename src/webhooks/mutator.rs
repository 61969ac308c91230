//! Mutator composed of ordered defaulting callbacks.
//!
//! Runs before validation on the incoming object. Callbacks are applied in
//! registration order; the first error stops the chain, leaving changes made
//! by earlier callbacks on the object.

use std::fmt;
use std::sync::Arc;

use super::chain::run_chain;
use super::context::Context;
use super::error::Result;
use crate::metrics::WebhookMetrics;

const KIND: &str = "mutator";

/// Defaulting callback allowed to modify the object in place
pub type MutateFn<K> = Arc<dyn Fn(&Context, &mut K) -> Result<()> + Send + Sync>;

/// Wrap a closure as a [`MutateFn`]
pub fn mutate_fn<K, F>(f: F) -> MutateFn<K>
where
    F: Fn(&Context, &mut K) -> Result<()> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Configuration option applied when constructing a [`Mutator`]
pub enum MutatorOption<K> {
    /// Append defaulting callbacks
    MutationFns(Vec<MutateFn<K>>),
    /// Record chain outcomes in the given metrics
    Metrics(Arc<WebhookMetrics>),
}

/// Option appending defaulting callbacks
pub fn with_mutation_fns<K>(fns: impl IntoIterator<Item = MutateFn<K>>) -> MutatorOption<K> {
    MutatorOption::MutationFns(fns.into_iter().collect())
}

/// Ordered chain of defaulting callbacks for one object type
pub struct Mutator<K> {
    mutation_chain: Vec<MutateFn<K>>,
    metrics: Option<Arc<WebhookMetrics>>,
}

impl<K> Mutator<K> {
    /// Create a mutator from a set of options
    pub fn new(options: impl IntoIterator<Item = MutatorOption<K>>) -> Self {
        options
            .into_iter()
            .fold(Self::builder(), MutatorBuilder::apply)
            .build()
    }

    /// Start building a mutator
    pub fn builder() -> MutatorBuilder<K> {
        MutatorBuilder {
            mutator: Self {
                mutation_chain: Vec::new(),
                metrics: None,
            },
        }
    }

    /// Apply every defaulting callback to `obj`
    pub fn default(&self, ctx: &Context, obj: &mut K) -> Result<()> {
        run_chain(
            KIND,
            "DEFAULT",
            &self.mutation_chain,
            self.metrics.as_deref(),
            |f| f(ctx, &mut *obj),
        )
    }
}

impl<K> Clone for Mutator<K> {
    fn clone(&self) -> Self {
        Self {
            mutation_chain: self.mutation_chain.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

impl<K> fmt::Debug for Mutator<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutator")
            .field("mutation_fns", &self.mutation_chain.len())
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}

/// Builder for [`Mutator`]
pub struct MutatorBuilder<K> {
    mutator: Mutator<K>,
}

impl<K> MutatorBuilder<K> {
    /// Apply a single option
    pub fn apply(mut self, option: MutatorOption<K>) -> Self {
        match option {
            MutatorOption::MutationFns(fns) => self.mutator.mutation_chain.extend(fns),
            MutatorOption::Metrics(metrics) => self.mutator.metrics = Some(metrics),
        }
        self
    }

    /// Append a defaulting callback
    pub fn on_mutate<F>(self, f: F) -> Self
    where
        F: Fn(&Context, &mut K) -> Result<()> + Send + Sync + 'static,
    {
        self.apply(MutatorOption::MutationFns(vec![mutate_fn(f)]))
    }

    /// Record chain outcomes in `metrics`
    pub fn metrics(self, metrics: Arc<WebhookMetrics>) -> Self {
        self.apply(MutatorOption::Metrics(metrics))
    }

    /// Finish building
    pub fn build(self) -> Mutator<K> {
        self.mutator
    }
}
