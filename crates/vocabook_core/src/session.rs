//! Caller identity, clock and id-generation capabilities.
//!
//! # Responsibility
//! - Define the environment capabilities the services consume.
//! - Provide production and deterministic implementations.
//!
//! # Invariants
//! - Services resolve caller and time once per call via `CallScope`.
//! - `IdGenerator::next_id` never repeats a value within one process.

use crate::model::identity::{CallerId, EpochMs};
use std::cell::{Cell, RefCell};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Resolves the acting caller and the current time.
pub trait IdentityAndClock {
    fn caller(&self) -> CallerId;
    fn now(&self) -> EpochMs;
}

/// Produces fresh record identifiers.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Caller and time captured once at the start of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallScope {
    pub caller: CallerId,
    pub now: EpochMs,
}

impl CallScope {
    pub fn resolve(session: &dyn IdentityAndClock) -> Self {
        Self {
            caller: session.caller(),
            now: session.now(),
        }
    }
}

/// Fixed caller with wall-clock time.
#[derive(Debug, Clone)]
pub struct SystemSession {
    caller: CallerId,
}

impl SystemSession {
    pub fn new(caller: CallerId) -> Self {
        Self { caller }
    }
}

impl IdentityAndClock for SystemSession {
    fn caller(&self) -> CallerId {
        self.caller.clone()
    }

    fn now(&self) -> EpochMs {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| {
                i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
            })
    }
}

/// Random v4 UUID identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Scriptable session: caller can be switched and the clock only moves
/// when told to.
#[derive(Debug)]
pub struct ManualSession {
    caller: RefCell<CallerId>,
    now: Cell<EpochMs>,
}

impl ManualSession {
    pub fn new(caller: impl Into<CallerId>, now: EpochMs) -> Self {
        Self {
            caller: RefCell::new(caller.into()),
            now: Cell::new(now),
        }
    }

    pub fn act_as(&self, caller: impl Into<CallerId>) {
        *self.caller.borrow_mut() = caller.into();
    }

    pub fn set_now(&self, now: EpochMs) {
        self.now.set(now);
    }

    pub fn advance(&self, delta_ms: EpochMs) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl IdentityAndClock for ManualSession {
    fn caller(&self) -> CallerId {
        self.caller.borrow().clone()
    }

    fn now(&self) -> EpochMs {
        self.now.get()
    }
}

/// Deterministic ids: `{prefix}-0001`, `{prefix}-0002`, ...
///
/// Zero padding keeps lexical order equal to allocation order for the first
/// 9999 ids; later ids widen and no longer sort after earlier ones.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: Cell<u64>,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: Cell::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let value = self.next.get();
        self.next.set(value + 1);
        format!("{}-{value:04}", self.prefix)
    }
}
