use bevy::prelude::*;

use crate::engine::materials::tuning::{
    FinishParams, HexColor, ShowcaseTuning, SurfaceTuning, WobbleParams,
};
use crate::errors::TweakError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweakGroup {
    Plane,
    Tv,
    Sphere,
    Monkey,
}

impl TweakGroup {
    pub const ALL: [TweakGroup; 4] = [
        TweakGroup::Plane,
        TweakGroup::Tv,
        TweakGroup::Sphere,
        TweakGroup::Monkey,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            TweakGroup::Plane => "Plane",
            TweakGroup::Tv => "TV",
            TweakGroup::Sphere => "Sphere",
            TweakGroup::Monkey => "Monkey",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweakKind {
    Scalar { min: f32, max: f32, step: f32 },
    Color,
}

/// A value read from or written to a tweak. Hex strings for colours.
#[derive(Debug, Clone, PartialEq)]
pub enum TweakValue {
    Scalar(f32),
    Color(String),
}

type Getter = Box<dyn Fn(&ShowcaseTuning) -> TweakValue + Send + Sync>;
type Setter = Box<dyn Fn(&mut ShowcaseTuning, TweakValue) -> Result<(), TweakError> + Send + Sync>;

/// One editable parameter: metadata plus accessors into `ShowcaseTuning`.
pub struct Tweak {
    pub id: String,
    pub label: &'static str,
    pub group: TweakGroup,
    pub kind: TweakKind,
    getter: Getter,
    setter: Setter,
}

impl Tweak {
    fn scalar(
        id: String,
        label: &'static str,
        group: TweakGroup,
        (min, max, step): (f32, f32, f32),
        read: impl Fn(&ShowcaseTuning) -> f32 + Send + Sync + 'static,
        slot: impl Fn(&mut ShowcaseTuning) -> &mut f32 + Send + Sync + 'static,
    ) -> Self {
        let setter_id = id.clone();
        Self {
            id,
            label,
            group,
            kind: TweakKind::Scalar { min, max, step },
            getter: Box::new(move |tuning| TweakValue::Scalar(read(tuning))),
            setter: Box::new(move |tuning, value| match value {
                TweakValue::Scalar(v) if v.is_finite() => {
                    *slot(tuning) = v.clamp(min, max);
                    Ok(())
                }
                _ => Err(TweakError::KindMismatch {
                    id: setter_id.clone(),
                    expected: "finite number",
                }),
            }),
        }
    }

    fn color(
        id: String,
        label: &'static str,
        group: TweakGroup,
        read: impl Fn(&ShowcaseTuning) -> &HexColor + Send + Sync + 'static,
        slot: impl Fn(&mut ShowcaseTuning) -> &mut HexColor + Send + Sync + 'static,
    ) -> Self {
        let setter_id = id.clone();
        Self {
            id,
            label,
            group,
            kind: TweakKind::Color,
            getter: Box::new(move |tuning| TweakValue::Color(read(tuning).hex().to_string())),
            setter: Box::new(move |tuning, value| match value {
                TweakValue::Color(hex) => slot(tuning).set_hex(&hex),
                TweakValue::Scalar(_) => Err(TweakError::KindMismatch {
                    id: setter_id.clone(),
                    expected: "hex colour",
                }),
            }),
        }
    }

    pub fn get(&self, tuning: &ShowcaseTuning) -> TweakValue {
        (self.getter)(tuning)
    }

    pub fn set(&self, tuning: &mut ShowcaseTuning, value: TweakValue) -> Result<(), TweakError> {
        (self.setter)(tuning, value)
    }
}

struct ScalarField<T> {
    key: &'static str,
    label: &'static str,
    range: (f32, f32, f32),
    read: fn(&T) -> f32,
    slot: fn(&mut T) -> &mut f32,
}

struct ColorField {
    key: &'static str,
    label: &'static str,
    read: fn(&WobbleParams) -> &HexColor,
    slot: fn(&mut WobbleParams) -> &mut HexColor,
}

const UNIT: (f32, f32, f32) = (0.0, 1.0, 0.01);
const WOBBLE_RANGE: (f32, f32, f32) = (0.0, 2.0, 0.001);

fn wobble_fields() -> [ScalarField<WobbleParams>; 6] {
    [
        ScalarField {
            key: "position_frequency",
            label: "Position frequency",
            range: WOBBLE_RANGE,
            read: |p| p.position_frequency,
            slot: |p| &mut p.position_frequency,
        },
        ScalarField {
            key: "time_frequency",
            label: "Time frequency",
            range: WOBBLE_RANGE,
            read: |p| p.time_frequency,
            slot: |p| &mut p.time_frequency,
        },
        ScalarField {
            key: "strength",
            label: "Strength",
            range: WOBBLE_RANGE,
            read: |p| p.strength,
            slot: |p| &mut p.strength,
        },
        ScalarField {
            key: "warp_position_frequency",
            label: "Warp position frequency",
            range: WOBBLE_RANGE,
            read: |p| p.warp_position_frequency,
            slot: |p| &mut p.warp_position_frequency,
        },
        ScalarField {
            key: "warp_time_frequency",
            label: "Warp time frequency",
            range: WOBBLE_RANGE,
            read: |p| p.warp_time_frequency,
            slot: |p| &mut p.warp_time_frequency,
        },
        ScalarField {
            key: "warp_strength",
            label: "Warp strength",
            range: WOBBLE_RANGE,
            read: |p| p.warp_strength,
            slot: |p| &mut p.warp_strength,
        },
    ]
}

fn color_fields() -> [ColorField; 2] {
    [
        ColorField {
            key: "color_a",
            label: "Colour A",
            read: |p| &p.color_a,
            slot: |p| &mut p.color_a,
        },
        ColorField {
            key: "color_b",
            label: "Colour B",
            read: |p| &p.color_b,
            slot: |p| &mut p.color_b,
        },
    ]
}

fn finish_fields() -> [ScalarField<FinishParams>; 5] {
    [
        ScalarField {
            key: "metallic",
            label: "Metalness",
            range: UNIT,
            read: |f| f.metallic,
            slot: |f| &mut f.metallic,
        },
        ScalarField {
            key: "roughness",
            label: "Roughness",
            range: UNIT,
            read: |f| f.roughness,
            slot: |f| &mut f.roughness,
        },
        ScalarField {
            key: "transmission",
            label: "Transmission",
            range: UNIT,
            read: |f| f.transmission,
            slot: |f| &mut f.transmission,
        },
        ScalarField {
            key: "ior",
            label: "IOR",
            range: (1.0, 10.0, 0.001),
            read: |f| f.ior,
            slot: |f| &mut f.ior,
        },
        ScalarField {
            key: "thickness",
            label: "Thickness",
            range: (0.0, 10.0, 0.001),
            read: |f| f.thickness,
            slot: |f| &mut f.thickness,
        },
    ]
}

struct SurfaceAccess {
    group: TweakGroup,
    prefix: &'static str,
    read: fn(&ShowcaseTuning) -> &SurfaceTuning,
    slot: fn(&mut ShowcaseTuning) -> &mut SurfaceTuning,
}

fn surfaces() -> [SurfaceAccess; 3] {
    [
        SurfaceAccess {
            group: TweakGroup::Tv,
            prefix: "tv",
            read: |t| &t.tv,
            slot: |t| &mut t.tv,
        },
        SurfaceAccess {
            group: TweakGroup::Sphere,
            prefix: "sphere",
            read: |t| &t.sphere,
            slot: |t| &mut t.sphere,
        },
        SurfaceAccess {
            group: TweakGroup::Monkey,
            prefix: "monkey",
            read: |t| &t.monkey,
            slot: |t| &mut t.monkey,
        },
    ]
}

/// Ordered table of every tweakable parameter, independent of any UI.
#[derive(Resource)]
pub struct TweakRegistry {
    tweaks: Vec<Tweak>,
}

impl Default for TweakRegistry {
    fn default() -> Self {
        let mut tweaks = vec![
            Tweak::color(
                "plane.color".to_string(),
                "Colour",
                TweakGroup::Plane,
                |t| &t.plane.color,
                |t| &mut t.plane.color,
            ),
            Tweak::scalar(
                "plane.metallic".to_string(),
                "Metalness",
                TweakGroup::Plane,
                UNIT,
                |t| t.plane.metallic,
                |t| &mut t.plane.metallic,
            ),
            Tweak::scalar(
                "plane.roughness".to_string(),
                "Roughness",
                TweakGroup::Plane,
                UNIT,
                |t| t.plane.roughness,
                |t| &mut t.plane.roughness,
            ),
        ];

        for surface in surfaces() {
            let SurfaceAccess {
                group,
                prefix,
                read: surface_read,
                slot: surface_slot,
            } = surface;

            for field in wobble_fields() {
                let (read, slot) = (field.read, field.slot);
                tweaks.push(Tweak::scalar(
                    format!("{prefix}.{}", field.key),
                    field.label,
                    group,
                    field.range,
                    move |t| read(&surface_read(t).wobble),
                    move |t| slot(&mut surface_slot(t).wobble),
                ));
            }
            for field in color_fields() {
                let (read, slot) = (field.read, field.slot);
                tweaks.push(Tweak::color(
                    format!("{prefix}.{}", field.key),
                    field.label,
                    group,
                    move |t| read(&surface_read(t).wobble),
                    move |t| slot(&mut surface_slot(t).wobble),
                ));
            }
            for field in finish_fields() {
                let (read, slot) = (field.read, field.slot);
                tweaks.push(Tweak::scalar(
                    format!("{prefix}.{}", field.key),
                    field.label,
                    group,
                    field.range,
                    move |t| read(&surface_read(t).finish),
                    move |t| slot(&mut surface_slot(t).finish),
                ));
            }
        }

        Self { tweaks }
    }
}

impl TweakRegistry {
    pub fn iter(&self) -> impl Iterator<Item = &Tweak> {
        self.tweaks.iter()
    }

    pub fn in_group(&self, group: TweakGroup) -> impl Iterator<Item = &Tweak> {
        self.tweaks.iter().filter(move |tweak| tweak.group == group)
    }

    pub fn len(&self) -> usize {
        self.tweaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweaks.is_empty()
    }

    pub fn find(&self, id: &str) -> Result<&Tweak, TweakError> {
        self.tweaks
            .iter()
            .find(|tweak| tweak.id == id)
            .ok_or_else(|| TweakError::UnknownTweak(id.to_string()))
    }

    pub fn get(&self, id: &str, tuning: &ShowcaseTuning) -> Result<TweakValue, TweakError> {
        Ok(self.find(id)?.get(tuning))
    }

    pub fn set(
        &self,
        id: &str,
        tuning: &mut ShowcaseTuning,
        value: TweakValue,
    ) -> Result<(), TweakError> {
        self.find(id)?.set(tuning, value)
    }

    /// Moves a scalar by `steps` multiples of its step size, clamped to its range.
    pub fn nudge(&self, id: &str, tuning: &mut ShowcaseTuning, steps: f32) -> Result<(), TweakError> {
        let tweak = self.find(id)?;
        match (tweak.kind, tweak.get(tuning)) {
            (TweakKind::Scalar { step, .. }, TweakValue::Scalar(current)) => {
                self.set(id, tuning, TweakValue::Scalar(current + step * steps))
            }
            _ => Err(TweakError::KindMismatch {
                id: tweak.id.clone(),
                expected: "finite number",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_group() {
        let registry = TweakRegistry::default();
        assert_eq!(registry.len(), 42);
        assert_eq!(registry.in_group(TweakGroup::Plane).count(), 3);
        for group in [TweakGroup::Tv, TweakGroup::Sphere, TweakGroup::Monkey] {
            assert_eq!(registry.in_group(group).count(), 13);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let registry = TweakRegistry::default();
        let mut ids: Vec<_> = registry.iter().map(|tweak| tweak.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), registry.len());
    }

    #[test]
    fn test_scalar_set_reaches_only_its_group() {
        let registry = TweakRegistry::default();
        let mut tuning = ShowcaseTuning::default();
        let before = tuning.clone();

        registry
            .set("tv.strength", &mut tuning, TweakValue::Scalar(1.25))
            .unwrap();

        assert_eq!(tuning.tv.wobble.strength, 1.25);
        assert_eq!(tuning.sphere, before.sphere);
        assert_eq!(tuning.monkey, before.monkey);
        assert_eq!(
            registry.get("tv.strength", &tuning).unwrap(),
            TweakValue::Scalar(1.25)
        );
    }

    #[test]
    fn test_scalars_are_clamped() {
        let registry = TweakRegistry::default();
        let mut tuning = ShowcaseTuning::default();

        registry
            .set("sphere.warp_strength", &mut tuning, TweakValue::Scalar(9.0))
            .unwrap();
        assert_eq!(tuning.sphere.wobble.warp_strength, 2.0);

        registry
            .set("plane.roughness", &mut tuning, TweakValue::Scalar(-3.0))
            .unwrap();
        assert_eq!(tuning.plane.roughness, 0.0);
    }

    #[test]
    fn test_color_edit_updates_shader_value_immediately() {
        let registry = TweakRegistry::default();
        let mut tuning = ShowcaseTuning::default();

        registry
            .set(
                "sphere.color_a",
                &mut tuning,
                TweakValue::Color("#ff0000".to_string()),
            )
            .unwrap();

        let shader = tuning.sphere.wobble.uniform().color_a;
        assert!(shader.abs_diff_eq(Vec4::new(1.0, 0.0, 0.0, 1.0), 1e-5));
    }

    #[test]
    fn test_errors() {
        let registry = TweakRegistry::default();
        let mut tuning = ShowcaseTuning::default();

        assert_eq!(
            registry.get("tv.nope", &tuning),
            Err(TweakError::UnknownTweak("tv.nope".to_string()))
        );
        assert!(matches!(
            registry.set("tv.color_a", &mut tuning, TweakValue::Scalar(1.0)),
            Err(TweakError::KindMismatch { .. })
        ));
        assert!(matches!(
            registry.set("tv.strength", &mut tuning, TweakValue::Color("#fff".into())),
            Err(TweakError::KindMismatch { .. })
        ));

        let before = tuning.tv.wobble.color_b.clone();
        assert!(matches!(
            registry.set("tv.color_b", &mut tuning, TweakValue::Color("banana".into())),
            Err(TweakError::InvalidColor(_))
        ));
        assert_eq!(tuning.tv.wobble.color_b, before);
    }

    #[test]
    fn test_nudge_steps_scalars() {
        let registry = TweakRegistry::default();
        let mut tuning = ShowcaseTuning::default();
        let start = tuning.monkey.finish.roughness;

        registry.nudge("monkey.roughness", &mut tuning, 2.0).unwrap();
        assert!((tuning.monkey.finish.roughness - (start + 0.02).min(1.0)).abs() < 1e-6);
    }
}
