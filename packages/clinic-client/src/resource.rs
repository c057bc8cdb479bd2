//! Remote resource state.
//!
//! `RemoteResource` owns the `{data, loading, error}` triple for one GET
//! endpoint bound to a reactive key, plus the bookkeeping that decides when a
//! request should be issued and whether its result still counts.
//!
//! It does no I/O and knows nothing about the UI framework. A binding (the
//! Dioxus hook in `clinic-web`) drives it:
//!
//! ```rust,ignore
//! match resource.observe_key(current_key) {
//!     KeyChange::Fetch(key) => {
//!         let attempt = resource.begin();
//!         spawn(async move {
//!             let outcome = client.fetch(key).await;
//!             resource.settle(attempt, outcome);
//!         });
//!     }
//!     KeyChange::Unchanged | KeyChange::Missing => {}
//! }
//! ```
//!
//! # Settlement
//!
//! Every `begin` hands out a new [`Attempt`]. Only the most recently issued
//! attempt may write to the state; anything older that settles afterwards is
//! dropped. `loading` stays `true` until that latest attempt settles.

use crate::error::ApiError;

/// User-facing failure strings for one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureMessages {
    /// Shown when the server answers `success: false`.
    pub rejected: String,
    /// Shown when a transport failure carries no server message.
    pub fallback: String,
    /// Shown when the key is absent and nothing was requested.
    pub missing_key: String,
}

impl FailureMessages {
    pub fn for_resource(name: &str) -> Self {
        Self {
            rejected: format!("Failed to fetch {name}"),
            fallback: format!("An error occurred while fetching {name}"),
            missing_key: format!("Cannot fetch {name} yet"),
        }
    }

    pub fn with_missing_key(mut self, message: impl Into<String>) -> Self {
        self.missing_key = message.into();
        self
    }
}

/// What the rendering layer sees.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> ResourceState<T> {
    /// State at mount: nothing fetched, a fetch is about to start.
    pub fn pending() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self::pending()
    }
}

/// Token identifying one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Attempt(u64);

/// Result of feeding the current key to [`RemoteResource::observe_key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyChange<K> {
    /// Key is new (or first seen): issue one request for it.
    Fetch(K),
    /// Same key as last time: do nothing.
    Unchanged,
    /// Key is absent: the state now holds the missing-key error.
    Missing,
}

/// Whether a settlement was written to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    Discarded,
}

#[derive(Debug, Clone)]
pub struct RemoteResource<K, T> {
    state: ResourceState<T>,
    messages: FailureMessages,
    key: Option<K>,
    observed: bool,
    latest: u64,
}

impl<K, T> RemoteResource<K, T>
where
    K: Clone + PartialEq,
{
    pub fn new(messages: FailureMessages) -> Self {
        Self {
            state: ResourceState::pending(),
            messages,
            key: None,
            observed: false,
            latest: 0,
        }
    }

    pub fn state(&self) -> &ResourceState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    /// Number of attempts issued so far.
    pub fn attempts_issued(&self) -> u64 {
        self.latest
    }

    /// Record the current key and report whether a request is due.
    ///
    /// The first observation always counts as a change. Later observations
    /// compare by value.
    pub fn observe_key(&mut self, key: Option<K>) -> KeyChange<K> {
        if self.observed && self.key == key {
            return KeyChange::Unchanged;
        }
        self.observed = true;
        self.key = key.clone();

        match key {
            Some(key) => KeyChange::Fetch(key),
            None => {
                self.fail_missing_key();
                KeyChange::Missing
            }
        }
    }

    /// Start an attempt: `loading = true`, `error = None`. `data` is kept
    /// until the attempt settles.
    pub fn begin(&mut self) -> Attempt {
        self.latest += 1;
        self.state.loading = true;
        self.state.error = None;
        tracing::debug!(attempt = self.latest, "resource attempt started");
        Attempt(self.latest)
    }

    /// Re-run the fetch for the current key, whether or not one is in flight.
    ///
    /// Returns the new attempt and the key to fetch, or `None` if there is no
    /// key (the state then holds the missing-key error).
    pub fn refetch(&mut self) -> Option<(Attempt, K)> {
        match self.key.clone() {
            Some(key) => Some((self.begin(), key)),
            None => {
                self.fail_missing_key();
                None
            }
        }
    }

    /// Apply the outcome of `attempt` if it is still the latest one.
    pub fn settle(&mut self, attempt: Attempt, outcome: Result<T, ApiError>) -> Settlement {
        if attempt.0 != self.latest {
            tracing::debug!(
                attempt = attempt.0,
                latest = self.latest,
                "discarding stale resource result"
            );
            return Settlement::Discarded;
        }

        match outcome {
            Ok(data) => {
                self.state.data = Some(data);
                self.state.error = None;
            }
            Err(err) => {
                tracing::warn!(attempt = attempt.0, error = %err, "resource fetch failed");
                self.state.error = Some(err.display_message(&self.messages));
            }
        }
        self.state.loading = false;
        Settlement::Applied
    }

    /// No key: invalidate anything in flight, clear data, surface the error.
    fn fail_missing_key(&mut self) {
        self.latest += 1;
        self.state.data = None;
        self.state.loading = false;
        let err = ApiError::MissingKey(self.messages.missing_key.clone());
        self.state.error = Some(err.display_message(&self.messages));
    }
}
