//! Execution context with cancellation and deadline support

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

/// Why a context stopped being live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ContextError {
    /// The cancellation token fired.
    #[error("context canceled")]
    Cancelled,
    /// The deadline passed.
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

type Values = HashMap<String, Arc<dyn Any + Send + Sync>>;

/// Context threaded through every rule invocation.
///
/// Carries a cooperative cancellation token, an optional deadline, and
/// read-only typed values. Combinators pass it through untouched; rules
/// that block or are expensive call [`Context::check`] and bail out early.
///
/// Cloning is cheap: the token is reference-counted and values are shared
/// copy-on-write.
#[derive(Clone, Default)]
pub struct Context {
    /// Cooperative cancellation token.
    cancellation: CancellationToken,
    /// Point in time after which the context reports `DeadlineExceeded`.
    deadline: Option<Instant>,
    values: Arc<Values>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("Context")
            .field("cancellation", &self.cancellation)
            .field("deadline", &self.deadline)
            .field("values", &keys)
            .finish()
    }
}

impl Context {
    /// A context that is never cancelled and has no deadline.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Replace the default cancellation token with the provided one.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Set a deadline. An earlier deadline already on the context wins.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        });
        self
    }

    /// Set a deadline `timeout` from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            // Too far in the future to represent; same as no deadline.
            None => self,
        }
    }

    /// Attach a typed value under `key`, replacing any previous one.
    pub fn with_value<T>(mut self, key: impl Into<String>, value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Arc::make_mut(&mut self.values).insert(key.into(), Arc::new(value));
        self
    }

    /// Derive a context that is cancelled whenever this one is, and that
    /// inherits its deadline and values.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            cancellation: self.cancellation.child_token(),
            deadline: self.deadline,
            values: Arc::clone(&self.values),
        }
    }

    /// Look up a value by key. Returns `None` when the key is missing or
    /// holds a different type.
    pub fn value<T: Any>(&self, key: &str) -> Option<&T> {
        self.values.get(key)?.downcast_ref::<T>()
    }

    /// Returns true if a value is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Cancel this context and every child derived from it.
    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    /// Check if cancellation has been requested
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Get the cancellation token
    #[must_use]
    pub fn token(&self) -> &CancellationToken {
        &self.cancellation
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline; `None` without a deadline.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Reports why the context is no longer live, cancellation first.
    #[must_use]
    pub fn err(&self) -> Option<ContextError> {
        if self.is_cancelled() {
            Some(ContextError::Cancelled)
        } else if self.deadline.is_some_and(|d| Instant::now() >= d) {
            Some(ContextError::DeadlineExceeded)
        } else {
            None
        }
    }

    /// `Ok(())` while the context is live.
    ///
    /// The error converts into [`Error::Context`](crate::foundation::Error::Context),
    /// so rules can propagate it with `?`.
    ///
    /// ```rust,ignore
    /// let unique = string().with_rule(|ctx, value| {
    ///     ctx.check()?;
    ///     lookup(ctx, value)
    /// });
    /// ```
    pub fn check(&self) -> Result<(), ContextError> {
        self.err().map_or(Ok(()), Err)
    }
}
