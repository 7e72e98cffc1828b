//! Debounced value updates for Bubble Tea applications.
//!
//! A debouncer holds at most one pending update. Every call to
//! [`Model::schedule`] supersedes the previous one and returns a tick command
//! that fires after the configured delay. When the resulting [`SettledMsg`] is
//! fed back through [`Model::update`] it is committed only if nothing was
//! scheduled in the meantime, so a burst of keystrokes produces a single
//! commit carrying the value from the end of the burst.
//!
//! Commands already handed to the runtime cannot be recalled. Instead every
//! message carries the debouncer id and a sequence tag, and anything that
//! doesn't match the latest tag is dropped on arrival.
//!
//! ```rust
//! use people_autocomplete::debounce;
//! use std::time::Duration;
//!
//! let mut query = debounce::new(Duration::from_millis(250));
//! let _cmd = query.schedule("al");
//! assert!(query.is_pending());
//! assert_eq!(query.value(), ""); // nothing committed yet
//!
//! query.cancel();
//! assert!(!query.is_pending());
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tracing::{debug, trace};

// Internal ID management for debouncer instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Message delivered when a scheduled update's delay has elapsed.
///
/// Only the debouncer whose id matches, and only for the most recently
/// scheduled tag, will commit the value.
#[derive(Debug, Clone)]
pub struct SettledMsg {
    /// The debouncer this message belongs to.
    pub id: i64,
    /// The value captured when the update was scheduled.
    pub value: String,
    tag: i64,
}

/// Single-slot debouncer.
#[derive(Debug, Clone)]
pub struct Model {
    delay: Duration,
    id: i64,
    tag: i64,
    pending: Option<String>,
    value: String,
    closed: bool,
}

/// Creates a debouncer with the given delay and an empty committed value.
pub fn new(delay: Duration) -> Model {
    Model {
        delay,
        id: next_id(),
        tag: 0,
        pending: None,
        value: String::new(),
        closed: false,
    }
}

impl Model {
    /// Unique identifier of this debouncer.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// How long input has to stay quiet before a value is committed.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The last committed value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The value waiting to be committed, if any.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Whether an update is waiting for its delay to elapse.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the debouncer has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Schedules `value` to be committed after the delay, superseding any
    /// update that is still pending.
    ///
    /// Returns the tick command to hand to the runtime, or `None` once the
    /// debouncer is closed.
    pub fn schedule(&mut self, value: impl Into<String>) -> Option<Cmd> {
        if self.closed {
            return None;
        }

        let value = value.into();
        self.tag += 1;
        self.pending = Some(value.clone());
        trace!(id = self.id, tag = self.tag, value = %value, "debounce scheduled");

        let id = self.id;
        let tag = self.tag;
        Some(bubbletea_tick(self.delay, move |_| {
            Box::new(SettledMsg {
                id,
                tag,
                value: value.clone(),
            }) as Msg
        }))
    }

    /// Drops the pending update. A message already in flight for it will be
    /// ignored when it arrives.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            trace!(id = self.id, tag = self.tag, "debounce canceled");
        }
        self.tag += 1;
    }

    /// Cancels any pending update and commits `value` immediately.
    pub fn reset(&mut self, value: impl Into<String>) {
        self.cancel();
        self.value = value.into();
    }

    /// Cancels any pending update and refuses all further work. Used when the
    /// owning widget is torn down.
    pub fn close(&mut self) {
        self.cancel();
        self.closed = true;
    }

    /// Handles a message, committing the value if it is the settled message
    /// for the latest scheduled update.
    ///
    /// Returns the newly committed value, or `None` if the message was not for
    /// this debouncer, was superseded, or arrived after [`Model::close`].
    pub fn update(&mut self, msg: &Msg) -> Option<String> {
        let settled = msg.downcast_ref::<SettledMsg>()?;
        if settled.id != self.id {
            return None;
        }

        if self.closed || settled.tag != self.tag || self.pending.is_none() {
            trace!(
                id = self.id,
                tag = settled.tag,
                current = self.tag,
                "stale debounce message dropped"
            );
            return None;
        }

        self.pending = None;
        self.value = settled.value.clone();
        debug!(id = self.id, value = %self.value, "debounced value committed");
        Some(self.value.clone())
    }

    /// The message the pending update would deliver, for driving the
    /// debouncer in tests without a runtime.
    #[cfg(test)]
    pub(crate) fn settle_now(&self) -> Option<Msg> {
        let value = self.pending.clone()?;
        Some(Box::new(SettledMsg {
            id: self.id,
            tag: self.tag,
            value,
        }) as Msg)
    }
}

impl Default for Model {
    fn default() -> Self {
        new(Duration::from_secs(1))
    }
}
