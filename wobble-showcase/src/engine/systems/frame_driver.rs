use bevy::prelude::*;

use crate::engine::materials::tuning::ShowcaseTuning;

/// Shares the app clock with every wobble uniform group.
pub fn advance_wobble_time(time: Res<Time>, mut tuning: ResMut<ShowcaseTuning>) {
    tuning.set_time(time.elapsed_secs());
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    #[test]
    fn test_elapsed_time_reaches_all_groups() {
        let mut world = World::new();
        world.init_resource::<Time>();
        world.init_resource::<ShowcaseTuning>();

        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(1500));
        world.run_system_once(advance_wobble_time).unwrap();

        let tuning = world.resource::<ShowcaseTuning>();
        for surface in tuning.surfaces() {
            assert_eq!(surface.wobble.time, 1.5);
        }
    }

    #[test]
    fn test_time_leaves_other_parameters_alone() {
        let mut world = World::new();
        world.init_resource::<Time>();
        world.init_resource::<ShowcaseTuning>();
        let before = world.resource::<ShowcaseTuning>().clone();

        world.resource_mut::<Time>().advance_by(Duration::from_secs(3));
        world.run_system_once(advance_wobble_time).unwrap();

        let mut after = world.resource::<ShowcaseTuning>().clone();
        after.set_time(0.0);
        assert_eq!(after, before);
    }
}
