//! Class-scoped logger slots.
//!
//! # Responsibilities
//! - Hold one logger per (type, member) pair
//! - Run the attach closure at most once per slot, even under contention
//!
//! # Design Decisions
//! - Keyed by `TypeId`, so two types with the same short name never share
//! - A failed attach leaves the slot empty so a later attach can retry

use std::any::TypeId;
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;

use crate::inject::class::ClassDescriptor;
use crate::logger::{LoggerResult, SharedLogger};

type SlotKey = (TypeId, String);

static GLOBAL: LazyLock<LoggerRegistry> = LazyLock::new(LoggerRegistry::new);

/// Map from class slot to the logger attached there.
#[derive(Debug, Default)]
pub struct LoggerRegistry {
    slots: DashMap<SlotKey, SharedLogger>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry used by `LoggerInjector::attach`.
    pub fn global() -> &'static LoggerRegistry {
        &GLOBAL
    }

    pub fn get(&self, class: &ClassDescriptor, member: &str) -> Option<SharedLogger> {
        self.slots
            .get(&(class.type_id(), member.to_string()))
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Return the logger in the slot, running `init` first if it is empty.
    pub fn get_or_try_insert<F>(
        &self,
        class: &ClassDescriptor,
        member: &str,
        init: F,
    ) -> LoggerResult<SharedLogger>
    where
        F: FnOnce() -> LoggerResult<SharedLogger>,
    {
        if let Some(existing) = self.get(class, member) {
            return Ok(existing);
        }

        let entry = self
            .slots
            .entry((class.type_id(), member.to_string()))
            .or_try_insert_with(init)?;
        Ok(Arc::clone(entry.value()))
    }

    /// Empty a slot. Values already holding the old logger keep it.
    pub fn detach(&self, class: &ClassDescriptor, member: &str) -> Option<SharedLogger> {
        self.slots
            .remove(&(class.type_id(), member.to_string()))
            .map(|(_, logger)| logger)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
