//! Process-wide single-instance registry.
//!
//! Instances are keyed by their type. The first [`get_or_init`] call for a
//! type runs its initializer and caches the result; every later call for the
//! same type returns the cached instance and drops its initializer unused.
//! The check-and-create step runs under one mutex, so concurrent first calls
//! still initialize exactly once.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

type Slot = Arc<dyn Any + Send + Sync>;

static REGISTRY: OnceLock<Mutex<HashMap<TypeId, Slot>>> = OnceLock::new();

fn registry() -> &'static Mutex<HashMap<TypeId, Slot>> {
    REGISTRY.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Returns the shared instance of `T`, creating it with `init` on first use.
///
/// `init` runs while the registry lock is held and must not call back into
/// the registry.
pub fn get_or_init<T, F>(init: F) -> Arc<T>
where
    T: Any + Send + Sync,
    F: FnOnce() -> T,
{
    let slot = {
        let mut slots = registry().lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(TypeId::of::<T>()).or_insert_with(|| {
            tracing::debug!(ty = std::any::type_name::<T>(), "creating shared instance");
            let instance: Slot = Arc::new(init());
            instance
        }))
    };
    downcast(slot)
}

/// Returns the shared instance of `T` if one has been created.
pub fn get<T>() -> Option<Arc<T>>
where
    T: Any + Send + Sync,
{
    let slots = registry().lock().unwrap_or_else(PoisonError::into_inner);
    slots.get(&TypeId::of::<T>()).cloned().map(downcast)
}

fn downcast<T: Any + Send + Sync>(slot: Slot) -> Arc<T> {
    // Slots are only ever inserted under `TypeId::of::<T>()` with a `T` value.
    match slot.downcast::<T>() {
        Ok(instance) => instance,
        Err(_) => unreachable!("registry slot keyed by TypeId holds a foreign type"),
    }
}
