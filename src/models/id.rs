use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub(crate) u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            #[inline]
            pub const fn index(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(index: u32) -> Self {
                Self(index)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier handed out by the `AircraftManager`.
    AircraftId
);
entity_id!(
    /// Identifier handed out by the `AircraftModelManager`.
    AircraftModelId
);
entity_id!(
    /// Identifier handed out by the `RunwayManager`.
    RunwayId
);
entity_id!(
    /// Identifier handed out by the `RouteManager`.
    RouteId
);

/// Monotonic id source. An id is never handed out twice, even after the
/// entity that carried it has been deleted.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    pub fn allocate<T: From<u32>>(&mut self) -> T {
        let id = self.next;
        self.next += 1;
        T::from(id)
    }

    /// Builds an entity with the next id. The id is only consumed when
    /// `build` succeeds.
    pub fn allocate_with<T, R, E>(&mut self, build: impl FnOnce(T) -> Result<R, E>) -> Result<R, E>
    where
        T: From<u32>,
    {
        let entity = build(T::from(self.next))?;
        self.next += 1;
        Ok(entity)
    }

    /// The id the next call to `allocate` will return.
    #[inline]
    pub fn peek(&self) -> u32 {
        self.next
    }
}
