use bevy::prelude::*;

use crate::engine::core::app_state::ShowcaseState;
use crate::engine::materials::overlay::{FadeOverlay, OverlayMaterial};
use crate::engine::reveal::sequencer::{RevealCue, RevealSequencer};
use crate::engine::scene::scene_state::{RevealTarget, SceneSlot, ShowcaseScene};

/// Carries one cue from the sequencer to the systems that act on it.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealCueFired(pub RevealCue);

pub fn start_reveal(
    mut sequencer: ResMut<RevealSequencer>,
    mut cues: EventWriter<RevealCueFired>,
) {
    info!("→ Starting reveal sequence");
    for cue in sequencer.start() {
        cues.write(RevealCueFired(cue));
    }
}

pub fn drive_reveal_sequence(
    time: Res<Time>,
    scene: Res<ShowcaseScene>,
    mut sequencer: ResMut<RevealSequencer>,
    mut cues: EventWriter<RevealCueFired>,
) {
    // The anchoring frame's delta predates the start.
    if sequencer.take_fresh_start() {
        return;
    }

    for cue in sequencer.advance(time.delta_secs(), scene.lazy_parts_ready()) {
        debug!("Reveal cue {} at {:.2}s", cue.as_str(), sequencer.elapsed());
        cues.write(RevealCueFired(cue));
    }
}

pub fn apply_reveal_cues(
    mut events: EventReader<RevealCueFired>,
    scene: Res<ShowcaseScene>,
    mut visibility: Query<(&mut Visibility, Option<&mut RevealTarget>)>,
    mut overlays: Query<&mut FadeOverlay>,
    mut next_state: ResMut<NextState<ShowcaseState>>,
) {
    for RevealCueFired(cue) in events.read() {
        match cue {
            RevealCue::HideLoader => {
                if let Some((mut vis, _)) = scene
                    .get(SceneSlot::LoadingIndicator)
                    .and_then(|entity| visibility.get_mut(entity).ok())
                {
                    *vis = Visibility::Hidden;
                }
            }
            RevealCue::BeginOverlayFade => {
                match scene
                    .get(SceneSlot::Overlay)
                    .and_then(|entity| overlays.get_mut(entity).ok())
                {
                    Some(mut overlay) => overlay.armed = true,
                    None => warn!("Overlay fade cued without an overlay"),
                }
            }
            RevealCue::RevealMeshes => {
                for slot in SceneSlot::LAZY {
                    let Some(entity) = scene.get(slot) else {
                        warn!("Reveal reached {:?} before it was placed", slot);
                        continue;
                    };
                    if let Ok((mut vis, Some(mut target))) = visibility.get_mut(entity) {
                        if !target.revealed {
                            target.revealed = true;
                            *vis = Visibility::Inherited;
                        }
                    }
                }
                info!("✓ Model parts revealed");
            }
            RevealCue::OpenPanel => {
                info!("→ Reveal complete, transitioning to Interactive state");
                next_state.set(ShowcaseState::Interactive);
            }
        }
    }
}

/// Writes the sequencer's overlay alpha into armed overlays, hiding each once clear.
pub fn animate_overlay_fade(
    sequencer: Res<RevealSequencer>,
    mut overlays: Query<(&MaterialNode<OverlayMaterial>, &FadeOverlay, &mut Visibility)>,
    mut materials: ResMut<Assets<OverlayMaterial>>,
) {
    let alpha = sequencer.overlay_alpha();
    for (node, overlay, mut visibility) in &mut overlays {
        if !overlay.armed {
            continue;
        }
        if let Some(material) = materials.get(&node.0) {
            if material.alpha() != alpha {
                if let Some(material) = materials.get_mut(&node.0) {
                    material.set_alpha(alpha);
                }
            }
        }
        if sequencer.fade_finished() && *visibility != Visibility::Hidden {
            *visibility = Visibility::Hidden;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::loading::asset_tracker::{AssetsLoaded, begin_reveal_on_load};
    use bevy::ecs::system::RunSystemOnce;
    use bevy::state::app::StatesPlugin;
    use std::time::Duration;

    struct RevealScene {
        app: App,
        indicator: Entity,
        overlay: Entity,
        overlay_material: Handle<OverlayMaterial>,
        parts: Vec<Entity>,
    }

    impl RevealScene {
        fn new() -> Self {
            let mut app = App::new();
            app.add_plugins(StatesPlugin)
                .init_state::<ShowcaseState>()
                .init_resource::<Time>()
                .init_resource::<Assets<OverlayMaterial>>()
                .init_resource::<RevealSequencer>()
                .add_event::<AssetsLoaded>()
                .add_event::<RevealCueFired>()
                .add_systems(
                    Update,
                    begin_reveal_on_load.run_if(in_state(ShowcaseState::Loading)),
                )
                .add_systems(OnEnter(ShowcaseState::Revealing), start_reveal)
                .add_systems(
                    Update,
                    (drive_reveal_sequence, apply_reveal_cues, animate_overlay_fade)
                        .chain()
                        .run_if(not(in_state(ShowcaseState::Loading))),
                );

            let overlay_material = app
                .world_mut()
                .resource_mut::<Assets<OverlayMaterial>>()
                .add(OverlayMaterial::opaque());

            let world = app.world_mut();
            let overlay = world
                .spawn((
                    MaterialNode(overlay_material.clone()),
                    Visibility::Visible,
                    FadeOverlay::default(),
                ))
                .id();
            let indicator = world.spawn(Visibility::Visible).id();
            let parts: Vec<Entity> = SceneSlot::LAZY
                .iter()
                .map(|_| world.spawn((Visibility::Hidden, RevealTarget::default())).id())
                .collect();

            let mut scene = ShowcaseScene::default();
            scene.bind(SceneSlot::Overlay, overlay).unwrap();
            scene.bind(SceneSlot::LoadingIndicator, indicator).unwrap();
            for (slot, part) in SceneSlot::LAZY.iter().zip(&parts) {
                scene.bind(*slot, *part).unwrap();
            }
            world.insert_resource(scene);

            Self {
                app,
                indicator,
                overlay,
                overlay_material,
                parts,
            }
        }

        fn step(&mut self) {
            self.app
                .world_mut()
                .resource_mut::<Time>()
                .advance_by(Duration::from_millis(250));
            self.app.update();
        }

        fn visibility(&self, entity: Entity) -> Visibility {
            *self.app.world().get::<Visibility>(entity).unwrap()
        }

        fn alpha(&self) -> f32 {
            self.app
                .world()
                .resource::<Assets<OverlayMaterial>>()
                .get(&self.overlay_material)
                .unwrap()
                .alpha()
        }

        fn state(&self) -> ShowcaseState {
            *self.app.world().resource::<State<ShowcaseState>>().get()
        }

        fn elapsed(&self) -> f32 {
            self.app.world().resource::<RevealSequencer>().elapsed()
        }
    }

    #[test]
    fn test_reveal_runs_from_load_completion_to_interactive() {
        let mut scene = RevealScene::new();
        scene.app.world_mut().send_event(AssetsLoaded);

        scene.step();
        assert_eq!(scene.state(), ShowcaseState::Loading);
        assert_eq!(scene.visibility(scene.indicator), Visibility::Visible);

        // Completion frame: loader hidden, overlay armed, timeline anchored at zero.
        scene.step();
        assert_eq!(scene.state(), ShowcaseState::Revealing);
        assert_eq!(scene.visibility(scene.indicator), Visibility::Hidden);
        assert!(scene.app.world().get::<FadeOverlay>(scene.overlay).unwrap().armed);
        assert_eq!(scene.elapsed(), 0.0);
        assert_eq!(scene.alpha(), 1.0);

        scene.step();
        assert_eq!(scene.elapsed(), 0.25);
        for part in &scene.parts {
            assert_eq!(scene.visibility(*part), Visibility::Hidden);
        }

        scene.step();
        assert_eq!(scene.elapsed(), 0.5);
        for part in &scene.parts {
            assert_eq!(scene.visibility(*part), Visibility::Inherited);
            assert!(scene.app.world().get::<RevealTarget>(*part).unwrap().revealed);
        }
        assert_eq!(scene.alpha(), 1.0);

        // Hidden again by hand; the reveal must not touch it a second time.
        let first = scene.parts[0];
        *scene.app.world_mut().get_mut::<Visibility>(first).unwrap() = Visibility::Hidden;

        for _ in 0..3 {
            scene.step();
        }
        assert_eq!(scene.elapsed(), 1.25);
        let alpha = scene.alpha();
        assert!(alpha > 0.0 && alpha < 1.0);
        assert_eq!(scene.visibility(scene.overlay), Visibility::Visible);

        for _ in 0..3 {
            scene.step();
        }
        assert_eq!(scene.elapsed(), 2.0);
        assert_eq!(scene.alpha(), 0.0);
        assert_eq!(scene.visibility(scene.overlay), Visibility::Hidden);
        assert_eq!(scene.state(), ShowcaseState::Revealing);

        scene.step();
        assert_eq!(scene.state(), ShowcaseState::Interactive);
        assert_eq!(scene.visibility(first), Visibility::Hidden);
    }

    #[test]
    fn test_unarmed_overlay_stays_opaque() {
        let mut world = World::new();
        let mut sequencer = RevealSequencer::default();
        sequencer.start();
        sequencer.advance(3.0, true);
        world.insert_resource(sequencer);

        let mut materials = Assets::<OverlayMaterial>::default();
        let handle = materials.add(OverlayMaterial::opaque());
        world.insert_resource(materials);
        let overlay = world
            .spawn((
                MaterialNode(handle.clone()),
                Visibility::Visible,
                FadeOverlay::default(),
            ))
            .id();

        world.run_system_once(animate_overlay_fade).unwrap();

        let materials = world.resource::<Assets<OverlayMaterial>>();
        assert_eq!(materials.get(&handle).unwrap().alpha(), 1.0);
        assert_eq!(*world.get::<Visibility>(overlay).unwrap(), Visibility::Visible);
    }
}
