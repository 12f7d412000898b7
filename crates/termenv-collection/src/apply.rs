//! Applying a merged collection to a process environment
//!
//! The only operation permitted to mutate a target environment map. Values
//! may pass through an injected [`ValueResolver`] (e.g. to substitute
//! workspace-relative tokens); resolution is awaited strictly sequentially
//! so resolver side effects keep a deterministic order.

use crate::error::ApplyError;
use crate::merge::MergedCollection;
use crate::mutator::MutatorKind;
use async_trait::async_trait;
use std::collections::HashMap;

/// Platform family the target environment lives on.
///
/// Passed explicitly rather than read from ambient state so the apply
/// engine is testable on any host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Case-insensitive environment variable names
    Windows,
    /// Case-sensitive environment variable names
    Unix,
}

impl Platform {
    /// The platform this process is running on
    #[inline]
    #[must_use]
    pub fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    #[inline]
    fn case_insensitive_names(self) -> bool {
        matches!(self, Self::Windows)
    }
}

/// Capability that substitutes placeholders in mutator values.
///
/// The apply engine makes no assumption about what syntax a resolver
/// handles; it awaits one resolution to completion before starting the
/// next.
#[async_trait]
pub trait ValueResolver: Send + Sync {
    /// Resolve a raw mutator value into its effective form
    async fn resolve(&self, value: &str) -> anyhow::Result<String>;
}

impl MergedCollection {
    /// Apply every mutation to `env` in place.
    ///
    /// Variables are processed in this collection's iteration order; each
    /// variable's mutators run front to back, which is already final
    /// application order. On `Platform::Windows`, variable names are matched
    /// against existing keys case-insensitively, mutating the existing key
    /// rather than introducing a differently-cased duplicate.
    ///
    /// # Errors
    ///
    /// Returns [`ApplyError::Resolve`] if the resolver fails. Variables
    /// finished before the failure keep their new values; the failing
    /// variable and everything after it are left unmodified. Never touches
    /// variables outside this collection.
    pub async fn apply(
        &self,
        env: &mut HashMap<String, String>,
        platform: Platform,
        resolver: Option<&dyn ValueResolver>,
    ) -> Result<(), ApplyError> {
        // One-time index of the existing keys for case-insensitive lookup.
        let lowercase_keys: Option<HashMap<String, String>> = platform
            .case_insensitive_names()
            .then(|| env.keys().map(|k| (k.to_lowercase(), k.clone())).collect());

        for (variable, mutators) in self.iter() {
            let key = match &lowercase_keys {
                Some(index) => index
                    .get(&variable.to_lowercase())
                    .cloned()
                    .unwrap_or_else(|| variable.to_owned()),
                None => variable.to_owned(),
            };

            // Accumulate into a local value and write back only once every
            // mutator for the variable has resolved, so a resolver failure
            // leaves the variable untouched.
            let mut accumulated = env.get(&key).cloned();
            for mutator in mutators {
                let value = match resolver {
                    Some(r) => {
                        r.resolve(mutator.value())
                            .await
                            .map_err(|source| ApplyError::Resolve {
                                variable: variable.to_owned(),
                                source,
                            })?
                    }
                    None => mutator.value().to_owned(),
                };
                accumulated = Some(match mutator.kind() {
                    MutatorKind::Append => {
                        let mut current = accumulated.unwrap_or_default();
                        current.push_str(&value);
                        current
                    }
                    MutatorKind::Prepend => {
                        let mut current = value;
                        current.push_str(&accumulated.unwrap_or_default());
                        current
                    }
                    MutatorKind::Replace => value,
                });
            }

            if let Some(value) = accumulated {
                env.insert(key, value);
            }
        }

        tracing::debug!(
            variables = self.len(),
            resolved = resolver.is_some(),
            "applied merged collection to environment"
        );
        Ok(())
    }
}
