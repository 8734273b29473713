//! Maps an [`OptionSet`] onto a mannequin.
//!
//! The mapping is deterministic: applying the same options to a mannequin in
//! its default pose always produces the same node set, transforms and
//! colors. Accessories are rebuilt from scratch on every call.

use crate::constants::*;
use crate::geometry::Shape;
use crate::options::{AccessoryKind, ColorScheme, OptionSet, Pose};
use crate::scene::{Accessory, BodyPart, Mannequin, Material, MeshNode, Transform};
use smallvec::smallvec;
use std::f32::consts::PI;

/// Body color for a color scheme.
#[inline]
pub fn body_color(scheme: ColorScheme) -> u32 {
    match scheme {
        ColorScheme::Vibrant => VIBRANT_BODY_COLOR,
        ColorScheme::Professional => PROFESSIONAL_BODY_COLOR,
        ColorScheme::Pastel => PASTEL_BODY_COLOR,
        ColorScheme::Dark => DARK_BODY_COLOR,
    }
}

/// Resolved pose parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseParams {
    pub body_scale_y: f32,
    pub offset_y: f32,
    pub tilt: f32,
}

impl Default for PoseParams {
    fn default() -> Self {
        Self {
            body_scale_y: 1.0,
            offset_y: 0.0,
            tilt: 0.0,
        }
    }
}

/// Pose is a total function: sitting and dynamic have dedicated branches,
/// everything else resets to the upright default.
#[inline]
pub fn pose_params(pose: Pose) -> PoseParams {
    match pose {
        Pose::Sitting => PoseParams {
            body_scale_y: SITTING_BODY_SCALE_Y,
            offset_y: SITTING_OFFSET_Y,
            ..Default::default()
        },
        Pose::Dynamic => PoseParams {
            tilt: DYNAMIC_TILT,
            ..Default::default()
        },
        Pose::Standing | Pose::Working => PoseParams::default(),
    }
}

/// Apply `options` to `mannequin`: body color, pose, then accessories.
pub fn apply_options(mannequin: &mut Mannequin, options: &OptionSet) {
    mannequin.part_mut(BodyPart::Body).material.color = body_color(options.color_scheme);

    let pose = pose_params(options.pose);
    mannequin.part_mut(BodyPart::Body).transform.scale.y = pose.body_scale_y;
    mannequin.transform.position.y = pose.offset_y;
    mannequin.transform.rotation.z = pose.tilt;

    mannequin.clear_accessories();
    for &kind in options.accessories() {
        mannequin.attach_accessory(build_accessory(kind));
    }
    log::debug!(
        "[builder] applied {:?}/{:?} with {} accessories",
        options.color_scheme,
        options.pose,
        mannequin.accessories().len()
    );
}

/// Fresh geometry for one accessory kind, positioned in mannequin space.
pub fn build_accessory(kind: AccessoryKind) -> Accessory {
    match kind {
        AccessoryKind::Glasses => {
            let frame = Material::new(GLASSES_COLOR)
                .with_metalness(0.7)
                .with_roughness(0.3);
            let lens = Shape::torus(0.15, 0.05, 8, 16);
            let lens_at = |x: f32| {
                MeshNode::new(
                    lens,
                    frame,
                    Transform::at(x, GLASSES_Y, GLASSES_Z).rotated(0.0, PI / 4.0, 0.0),
                )
            };
            Accessory {
                kind,
                meshes: smallvec![
                    lens_at(-GLASSES_LENS_X),
                    lens_at(GLASSES_LENS_X),
                    MeshNode::new(
                        Shape::cuboid(0.1, 0.05, 0.05),
                        frame,
                        Transform::at(0.0, GLASSES_Y, GLASSES_Z),
                    ),
                ],
            }
        }
        AccessoryKind::Cap => Accessory::single(
            kind,
            MeshNode::new(
                Shape::cone(0.4, 0.3, 32),
                Material::new(CAP_COLOR).with_roughness(0.7),
                Transform::at(0.0, CAP_Y, 0.0),
            ),
        ),
        AccessoryKind::Laptop => {
            let [x, y, z] = LAPTOP_POSITION;
            Accessory::single(
                kind,
                MeshNode::new(
                    Shape::cuboid(0.4, 0.25, 0.05),
                    Material::new(LAPTOP_COLOR).with_metalness(0.5),
                    Transform::at(x, y, z).rotated(0.0, 0.0, PI / 6.0),
                ),
            )
        }
        AccessoryKind::Coffee => {
            let [x, y, z] = COFFEE_POSITION;
            Accessory::single(
                kind,
                MeshNode::new(
                    Shape::cylinder(0.1, 0.12, 0.15, 16),
                    Material::new(COFFEE_COLOR).with_roughness(0.6),
                    Transform::at(x, y, z),
                ),
            )
        }
        AccessoryKind::Beard => {
            let [x, y, z] = BEARD_POSITION;
            let [sx, sy, sz] = BEARD_SCALE;
            Accessory::single(
                kind,
                MeshNode::new(
                    Shape::sphere(0.25, 16, 16),
                    Material::new(BEARD_COLOR).with_roughness(0.8),
                    Transform::at(x, y, z).scaled(sx, sy, sz),
                ),
            )
        }
    }
}
