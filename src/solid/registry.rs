use std::collections::HashMap;

use slotmap::SlotMap;

use crate::error::RegistryError;

use super::GenericTrap;

slotmap::new_key_type! {
    /// Identifier for a registered solid.
    pub struct SolidId;
}

/// Name-keyed store of solid descriptors.
///
/// Registering a solid moves it into the arena, so a registered solid has
/// exactly one owner and cannot be mutated behind the registry's back.
/// Names are unique keys.
#[derive(Debug, Default)]
pub struct Registry {
    solids: SlotMap<SolidId, GenericTrap>,
    by_name: HashMap<String, SolidId>,
}

impl Registry {
    /// Creates a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a solid, taking ownership, and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if a solid with the same
    /// name is already registered.
    pub fn add_solid(&mut self, solid: GenericTrap) -> Result<SolidId, RegistryError> {
        if self.by_name.contains_key(solid.name()) {
            return Err(RegistryError::DuplicateName(solid.name().to_owned()));
        }
        let name = solid.name().to_owned();
        let id = self.solids.insert(solid);
        self.by_name.insert(name, id);
        Ok(id)
    }

    /// Returns a reference to the solid with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SolidNotFound`] if the ID does not refer to
    /// a registered solid.
    pub fn solid(&self, id: SolidId) -> Result<&GenericTrap, RegistryError> {
        self.solids
            .get(id)
            .ok_or_else(|| RegistryError::SolidNotFound("stale solid id".into()))
    }

    /// Looks up a solid by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&GenericTrap> {
        self.by_name.get(name).and_then(|id| self.solids.get(*id))
    }

    /// Number of registered solids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solids.len()
    }

    /// Whether the registry holds no solids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }
}
