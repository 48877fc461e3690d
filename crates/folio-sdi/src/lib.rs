//! Surface registry: the named render objects a host paints.
//!
//! Components never touch a real document. They look objects up by name,
//! mutate text / visibility / lines, and the host renders whatever the
//! registry holds. A lookup of an absent name is the `MissingSurface`
//! condition that callers log and recover from.

pub mod helpers;
mod object;

pub use object::{SurfaceLine, SurfaceObject};

use std::collections::BTreeMap;

use serde::Serialize;

use folio_types::error::{FolioError, Result};

/// Registry of named surface objects.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SurfaceRegistry {
    objects: BTreeMap<String, SurfaceObject>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create (or reset) an object with default state and return it.
    pub fn create(&mut self, name: &str) -> &mut SurfaceObject {
        log::trace!("surface create: {name}");
        let slot = self.objects.entry(name.to_string()).or_default();
        *slot = SurfaceObject::default();
        slot
    }

    /// Whether an object with `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<&SurfaceObject> {
        self.objects
            .get(name)
            .ok_or_else(|| FolioError::MissingSurface(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut SurfaceObject> {
        self.objects
            .get_mut(name)
            .ok_or_else(|| FolioError::MissingSurface(name.to_string()))
    }

    /// Remove an object, returning it if it existed.
    pub fn remove(&mut self, name: &str) -> Option<SurfaceObject> {
        self.objects.remove(name)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Object names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }
}
