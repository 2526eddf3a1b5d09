use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use crate::error::Result;
use crate::models::{AircraftModel, AircraftModelId};

/// Handle to an aircraft model, shared by the model manager and every
/// aircraft of that type. An update made through one handle is seen
/// through all of them.
///
/// Do not hold a guard from [`read`](Self::read) across a call to
/// [`update`](Self::update) on the same model.
#[derive(Debug, Clone)]
pub struct SharedModel {
    id: AircraftModelId,
    inner: Arc<RwLock<AircraftModel>>,
}

impl SharedModel {
    pub fn new(model: AircraftModel) -> Self {
        Self {
            id: model.id(),
            inner: Arc::new(RwLock::new(model)),
        }
    }

    #[inline]
    pub fn id(&self) -> AircraftModelId {
        self.id
    }

    /// Current version of the model.
    pub fn read(&self) -> RwLockReadGuard<'_, AircraftModel> {
        // The stored model is only ever replaced whole, so a poisoned lock
        // still guards a valid model.
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> AircraftModel {
        self.read().clone()
    }

    /// Applies `edit` to a copy of the model and publishes the copy only if
    /// every setter succeeded.
    pub fn update<F>(&self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut AircraftModel) -> Result<()>,
    {
        let mut current = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let mut updated = current.clone();
        edit(&mut updated)?;
        *current = updated;
        Ok(())
    }

    /// Whether both handles point at the same model.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

impl PartialEq for SharedModel {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl Eq for SharedModel {}
