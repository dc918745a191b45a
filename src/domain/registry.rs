//! Material registry
//!
//! Built-ins occupy the first `BUILTIN_COUNT` ids and can never be
//! replaced. Mod materials get the next free id; registering a mod name a
//! second time swaps in the new definition under the same id, so particles
//! already on the grid pick up the replacement.

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::error::MaterialError;
use crate::domain::material::{builtin_materials, MaterialDef, MaterialId, BUILTIN_COUNT, MAT_AIR};

#[derive(Clone, Debug)]
struct Entry {
    name: String,
    def: Arc<MaterialDef>,
}

#[derive(Clone, Debug)]
pub struct MaterialRegistry {
    entries: Vec<Entry>,
    name_to_id: HashMap<String, MaterialId>,
}

impl MaterialRegistry {
    /// Registry holding only the built-in materials
    pub fn new() -> Self {
        let mut entries = Vec::with_capacity(BUILTIN_COUNT);
        let mut name_to_id = HashMap::with_capacity(BUILTIN_COUNT);
        for (idx, (name, def)) in builtin_materials().into_iter().enumerate() {
            name_to_id.insert(name.to_string(), idx as MaterialId);
            entries.push(Entry {
                name: name.to_string(),
                def: Arc::new(def),
            });
        }
        Self { entries, name_to_id }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn is_builtin(&self, id: MaterialId) -> bool {
        (id as usize) < BUILTIN_COUNT
    }

    /// Add or replace a mod material
    pub fn register(&mut self, name: &str, def: MaterialDef) -> Result<MaterialId, MaterialError> {
        validate(name, &def)?;

        if let Some(&id) = self.name_to_id.get(name) {
            if self.is_builtin(id) {
                return Err(MaterialError::DuplicateMaterial(name.to_string()));
            }
            log::info!("replacing mod material {} (id {})", name, id);
            self.entries[id as usize].def = Arc::new(def);
            return Ok(id);
        }

        if self.entries.len() > MaterialId::MAX as usize {
            return Err(MaterialError::RegistryFull);
        }
        let id = self.entries.len() as MaterialId;
        self.entries.push(Entry {
            name: name.to_string(),
            def: Arc::new(def),
        });
        self.name_to_id.insert(name.to_string(), id);
        log::info!("registered material {} (id {})", name, id);
        Ok(id)
    }

    pub fn lookup(&self, name: &str) -> Result<&MaterialDef, MaterialError> {
        let id = self.id_of(name)?;
        Ok(&self.entries[id as usize].def)
    }

    pub fn id_of(&self, name: &str) -> Result<MaterialId, MaterialError> {
        self.name_to_id
            .get(name)
            .copied()
            .ok_or_else(|| MaterialError::UnknownMaterial(name.to_string()))
    }

    /// Resolve a user-supplied name, falling back to AIR
    pub fn resolve_or_air(&self, name: &str) -> MaterialId {
        match self.id_of(name) {
            Ok(id) => id,
            Err(err) => {
                log::warn!("{}; using AIR", err);
                MAT_AIR
            }
        }
    }

    #[inline]
    pub fn get(&self, id: MaterialId) -> Option<&MaterialDef> {
        self.entries.get(id as usize).map(|e| e.def.as_ref())
    }

    /// Shared handle to a definition
    pub fn shared(&self, id: MaterialId) -> Option<Arc<MaterialDef>> {
        self.entries.get(id as usize).map(|e| Arc::clone(&e.def))
    }

    pub fn name_of(&self, id: MaterialId) -> Option<&str> {
        self.entries.get(id as usize).map(|e| e.name.as_str())
    }

    /// Names in id order, for a material picker
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// `(id, name, def)` for every mod material
    pub fn mod_materials(&self) -> impl Iterator<Item = (MaterialId, &str, &MaterialDef)> {
        self.entries
            .iter()
            .enumerate()
            .skip(BUILTIN_COUNT)
            .map(|(idx, e)| (idx as MaterialId, e.name.as_str(), e.def.as_ref()))
    }
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(name: &str, def: &MaterialDef) -> Result<(), MaterialError> {
    let invalid = |reason: &str| MaterialError::InvalidDefinition {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.trim().is_empty() {
        return Err(invalid("name must not be empty"));
    }
    if let Some(friction) = def.friction {
        if !friction.is_finite() || !(0.0..=1.0).contains(&friction) {
            return Err(invalid("friction must be a number in 0..=1"));
        }
    }
    if let Some(behavior) = &def.behavior {
        behavior.validate().map_err(|reason| MaterialError::BadBehavior {
            name: name.to_string(),
            reason,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::material::{MaterialFlags, Rgba, MAT_DUST, MAT_WATER};

    fn goo() -> MaterialDef {
        MaterialDef::new(
            MaterialFlags {
                has_gravity: true,
                is_drawable: true,
                has_default_physics: true,
                ..MaterialFlags::default()
            },
            Rgba::new(10, 200, 10, 255),
        )
    }

    #[test]
    fn builtins_resolve_by_name() {
        let registry = MaterialRegistry::new();
        assert_eq!(registry.id_of("WATER"), Ok(MAT_WATER));
        assert_eq!(registry.name_of(MAT_DUST), Some("DUST"));
        assert!(registry.lookup("AIR").unwrap().is_empty());
        assert_eq!(registry.names().count(), BUILTIN_COUNT);
    }

    #[test]
    fn builtin_names_cannot_be_redefined() {
        let mut registry = MaterialRegistry::new();
        assert_eq!(
            registry.register("DUST", goo()),
            Err(MaterialError::DuplicateMaterial("DUST".to_string()))
        );
        assert!(registry.lookup("DUST").unwrap().is_solid());
    }

    #[test]
    fn mod_names_are_replaced_in_place() {
        let mut registry = MaterialRegistry::new();
        let id = registry.register("GOO", goo()).unwrap();
        assert_eq!(id as usize, BUILTIN_COUNT);

        let replacement = goo().with_friction(0.5);
        assert_eq!(registry.register("GOO", replacement.clone()), Ok(id));
        assert_eq!(registry.get(id), Some(&replacement));
        assert_eq!(registry.len(), BUILTIN_COUNT + 1);
    }

    #[test]
    fn replacement_does_not_touch_old_shared_handles() {
        let mut registry = MaterialRegistry::new();
        let id = registry.register("GOO", goo()).unwrap();
        let old = registry.shared(id).unwrap();
        registry.register("GOO", goo().with_friction(0.1)).unwrap();
        assert_eq!(old.friction, None);
    }

    #[test]
    fn unknown_names_fail_or_fall_back() {
        let registry = MaterialRegistry::new();
        assert_eq!(
            registry.lookup("LAVA"),
            Err(MaterialError::UnknownMaterial("LAVA".to_string()))
        );
        assert_eq!(registry.resolve_or_air("LAVA"), MAT_AIR);
    }

    #[test]
    fn invalid_definitions_are_rejected() {
        let mut registry = MaterialRegistry::new();
        assert!(matches!(
            registry.register("", goo()),
            Err(MaterialError::InvalidDefinition { .. })
        ));
        assert!(matches!(
            registry.register("SLICK", goo().with_friction(1.5)),
            Err(MaterialError::InvalidDefinition { .. })
        ));
        assert!(matches!(
            registry.register("NAN", goo().with_friction(f32::NAN)),
            Err(MaterialError::InvalidDefinition { .. })
        ));
        assert!(registry.id_of("SLICK").is_err());
    }
}
