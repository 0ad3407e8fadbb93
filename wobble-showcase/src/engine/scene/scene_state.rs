use bevy::prelude::*;

use crate::errors::ShowcaseError;

/// Entities the reveal and tweak systems need to address directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneSlot {
    Overlay,
    LoadingIndicator,
    Sphere,
    Plane,
    Tv,
    Screen,
    Snickers,
    Monkey,
    Panel,
}

impl SceneSlot {
    /// Slots filled only after their bundle finishes loading.
    pub const LAZY: [SceneSlot; 4] = [
        SceneSlot::Tv,
        SceneSlot::Screen,
        SceneSlot::Snickers,
        SceneSlot::Monkey,
    ];
}

/// Explicit scene state. Each slot is bound at most once for the lifetime of the app.
#[derive(Resource, Debug, Default)]
pub struct ShowcaseScene {
    overlay: Option<Entity>,
    loading_indicator: Option<Entity>,
    sphere: Option<Entity>,
    plane: Option<Entity>,
    tv: Option<Entity>,
    screen: Option<Entity>,
    snickers: Option<Entity>,
    monkey: Option<Entity>,
    panel: Option<Entity>,
}

impl ShowcaseScene {
    fn slot_mut(&mut self, slot: SceneSlot) -> &mut Option<Entity> {
        match slot {
            SceneSlot::Overlay => &mut self.overlay,
            SceneSlot::LoadingIndicator => &mut self.loading_indicator,
            SceneSlot::Sphere => &mut self.sphere,
            SceneSlot::Plane => &mut self.plane,
            SceneSlot::Tv => &mut self.tv,
            SceneSlot::Screen => &mut self.screen,
            SceneSlot::Snickers => &mut self.snickers,
            SceneSlot::Monkey => &mut self.monkey,
            SceneSlot::Panel => &mut self.panel,
        }
    }

    pub fn get(&self, slot: SceneSlot) -> Option<Entity> {
        match slot {
            SceneSlot::Overlay => self.overlay,
            SceneSlot::LoadingIndicator => self.loading_indicator,
            SceneSlot::Sphere => self.sphere,
            SceneSlot::Plane => self.plane,
            SceneSlot::Tv => self.tv,
            SceneSlot::Screen => self.screen,
            SceneSlot::Snickers => self.snickers,
            SceneSlot::Monkey => self.monkey,
            SceneSlot::Panel => self.panel,
        }
    }

    pub fn bind(&mut self, slot: SceneSlot, entity: Entity) -> Result<(), ShowcaseError> {
        let target = self.slot_mut(slot);
        if target.is_some() {
            return Err(ShowcaseError::SlotBound(slot));
        }
        *target = Some(entity);
        Ok(())
    }

    pub fn is_bound(&self, slot: SceneSlot) -> bool {
        self.get(slot).is_some()
    }

    /// True once every bundle part has been placed in the world.
    pub fn lazy_parts_ready(&self) -> bool {
        SceneSlot::LAZY.iter().all(|slot| self.is_bound(*slot))
    }
}

/// Marks meshes that stay hidden until the reveal sequence shows them.
#[derive(Component, Debug, Default)]
pub struct RevealTarget {
    pub revealed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_binds_once() {
        let mut scene = ShowcaseScene::default();
        let entity = Entity::from_raw(7);

        scene.bind(SceneSlot::Tv, entity).unwrap();
        assert_eq!(scene.get(SceneSlot::Tv), Some(entity));

        let err = scene.bind(SceneSlot::Tv, Entity::from_raw(8)).unwrap_err();
        assert!(matches!(err, ShowcaseError::SlotBound(SceneSlot::Tv)));
        assert_eq!(scene.get(SceneSlot::Tv), Some(entity));
    }

    #[test]
    fn test_lazy_parts_ready_needs_all_four() {
        let mut scene = ShowcaseScene::default();
        for (i, slot) in SceneSlot::LAZY.iter().take(3).enumerate() {
            scene.bind(*slot, Entity::from_raw(i as u32)).unwrap();
        }
        assert!(!scene.lazy_parts_ready());

        scene.bind(SceneSlot::Monkey, Entity::from_raw(9)).unwrap();
        assert!(scene.lazy_parts_ready());
    }
}
