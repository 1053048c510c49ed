/// Component registry - owns updatable components and ticks the active ones

use slotmap::{new_key_type, SlotMap};

use crate::component::Updatable;
use crate::error::{Error, Result};
use crate::engine_warn;

new_key_type! {
    /// Stable handle to a registered component.
    ///
    /// Keys of removed components are never reused for later insertions.
    pub struct ComponentKey;
}

/// Owns boxed components behind a capability trait.
///
/// The element type defaults to `dyn Updatable`; use
/// `ComponentRegistry<dyn InternalComponent>` to keep lifecycle access.
///
/// # Example
///
/// ```
/// use game_engine::game::component::{ComponentRegistry, create_internal_component};
/// use game_engine::game::component::InternalComponent;
///
/// let mut registry = ComponentRegistry::<dyn InternalComponent>::new();
/// let key = registry.insert(create_internal_component());
/// registry.get_mut(key).unwrap().initialize();
/// assert_eq!(registry.update_all(0.016), 1);
/// ```
pub struct ComponentRegistry<C: ?Sized + Updatable = dyn Updatable> {
    components: SlotMap<ComponentKey, Box<C>>,
}

impl<C: ?Sized + Updatable> ComponentRegistry<C> {
    const SOURCE: &'static str = "game_engine::ComponentRegistry";

    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            components: SlotMap::with_key(),
        }
    }

    /// Take ownership of a component and return its key
    pub fn insert(&mut self, component: Box<C>) -> ComponentKey {
        self.components.insert(component)
    }

    /// Remove a component, handing ownership back to the caller
    ///
    /// # Errors
    ///
    /// Returns `Error::ComponentNotFound` if the key is unknown or was already removed.
    pub fn remove(&mut self, key: ComponentKey) -> Result<Box<C>> {
        self.components.remove(key).ok_or_else(|| {
            engine_warn!(Self::SOURCE, "remove: no component registered under {:?}", key);
            Error::ComponentNotFound(format!("{:?}", key))
        })
    }

    pub fn get(&self, key: ComponentKey) -> Option<&C> {
        self.components.get(key).map(|component| &**component)
    }

    pub fn get_mut(&mut self, key: ComponentKey) -> Option<&mut C> {
        self.components.get_mut(key).map(|component| &mut **component)
    }

    pub fn contains(&self, key: ComponentKey) -> bool {
        self.components.contains_key(key)
    }

    /// Number of registered components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Number of registered components currently reporting active
    pub fn active_count(&self) -> usize {
        self.components.values().filter(|component| component.is_active()).count()
    }

    /// Update every active component once.
    ///
    /// Activity is checked right before each component's update; inactive
    /// components are skipped. Returns the number of components updated.
    pub fn update_all(&mut self, delta_time: f32) -> usize {
        let mut updated = 0;
        for component in self.components.values_mut() {
            if component.is_active() {
                component.update(delta_time);
                updated += 1;
            }
        }
        updated
    }
}

impl<C: ?Sized + Updatable> Default for ComponentRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
