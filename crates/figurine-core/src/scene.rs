//! Mannequin scene graph, camera and light rig.
//!
//! These types avoid platform-specific APIs. The web renderer consumes them
//! through [`Mannequin::bake`], [`Camera::view_projection`] and [`LightRig`].

use crate::constants::*;
use crate::geometry::{MeshVertex, Shape};
use crate::options::AccessoryKind;
use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};
use smallvec::{smallvec, SmallVec};
use std::sync::atomic::{AtomicU64, Ordering};

// Revisions are unique across mannequins so a replaced mannequin never
// aliases the one it replaced.
static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

fn next_revision() -> u64 {
    NEXT_REVISION.fetch_add(1, Ordering::Relaxed)
}

/// Convert a `0xRRGGBB` sRGB color into linear RGB.
pub fn hex_to_linear(hex: u32) -> Vec3 {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Vec3::new(channel(16), channel(8), channel(0))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// sRGB `0xRRGGBB`.
    pub color: u32,
    pub roughness: f32,
    pub metalness: f32,
}

impl Material {
    pub fn new(color: u32) -> Self {
        Self {
            color,
            roughness: 1.0,
            metalness: 0.0,
        }
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness.clamp(0.0, 1.0);
        self
    }

    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness.clamp(0.0, 1.0);
        self
    }
}

/// Local transform; rotation is Euler XYZ in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            ..Default::default()
        }
    }

    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }

    pub fn scaled(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = Vec3::new(x, y, z);
        self
    }

    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeshNode {
    pub shape: Shape,
    pub material: Material,
    pub transform: Transform,
}

impl MeshNode {
    pub fn new(shape: Shape, material: Material, transform: Transform) -> Self {
        Self {
            shape,
            material,
            transform,
        }
    }
}

/// An attached accessory: one kind, one or more meshes in mannequin space.
#[derive(Clone, Debug, PartialEq)]
pub struct Accessory {
    pub kind: AccessoryKind,
    pub meshes: SmallVec<[MeshNode; 3]>,
}

impl Accessory {
    pub fn single(kind: AccessoryKind, mesh: MeshNode) -> Self {
        Self {
            kind,
            meshes: smallvec![mesh],
        }
    }
}

/// Identifies one of the fixed body parts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyPart {
    Body,
    Head,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl BodyPart {
    pub const ALL: [BodyPart; 6] = [
        BodyPart::Body,
        BodyPart::Head,
        BodyPart::LeftArm,
        BodyPart::RightArm,
        BodyPart::LeftLeg,
        BodyPart::RightLeg,
    ];
}

/// Vertex record uploaded to the GPU: mannequin-space position and normal,
/// linear color and `[roughness, metalness]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
    pub material: [f32; 2],
}

/// The customizable humanoid.
///
/// `transform` is the root: it carries yaw/pitch from interaction, the pose
/// tilt and the vertical pose offset. Body parts and accessories are in root
/// space. Any change to them bumps [`Mannequin::revision`]. Equality compares
/// attributes only and ignores the revision.
#[derive(Clone, Debug)]
pub struct Mannequin {
    pub transform: Transform,
    body: MeshNode,
    head: MeshNode,
    left_arm: MeshNode,
    right_arm: MeshNode,
    left_leg: MeshNode,
    right_leg: MeshNode,
    accessories: Vec<Accessory>,
    revision: u64,
}

impl Default for Mannequin {
    fn default() -> Self {
        let skin = Material::new(SKIN_COLOR).with_roughness(0.8);
        let arm = Shape::cylinder(0.15, 0.12, 0.8, 16);
        let leg = Shape::cylinder(0.15, 0.15, 0.9, 16);
        let trousers = Material::new(LEG_COLOR).with_roughness(0.8);
        Self {
            transform: Transform::default(),
            body: MeshNode::new(
                Shape::cylinder(0.4, 0.35, 1.2, 32),
                Material::new(PROFESSIONAL_BODY_COLOR)
                    .with_roughness(0.7)
                    .with_metalness(0.2),
                Transform::at(0.0, BODY_Y, 0.0),
            ),
            head: MeshNode::new(
                Shape::sphere(0.35, 32, 32),
                skin,
                Transform::at(0.0, HEAD_Y, 0.0),
            ),
            left_arm: MeshNode::new(
                arm,
                skin,
                Transform::at(-ARM_X, ARM_Y, 0.0).rotated(0.0, 0.0, ARM_TILT),
            ),
            right_arm: MeshNode::new(
                arm,
                skin,
                Transform::at(ARM_X, ARM_Y, 0.0).rotated(0.0, 0.0, ARM_TILT),
            ),
            left_leg: MeshNode::new(leg, trousers, Transform::at(-LEG_X, LEG_Y, 0.0)),
            right_leg: MeshNode::new(leg, trousers, Transform::at(LEG_X, LEG_Y, 0.0)),
            accessories: Vec::new(),
            revision: next_revision(),
        }
    }
}

impl PartialEq for Mannequin {
    fn eq(&self, other: &Self) -> bool {
        self.transform == other.transform
            && BodyPart::ALL
                .into_iter()
                .all(|p| self.part(p) == other.part(p))
            && self.accessories == other.accessories
    }
}

impl Mannequin {
    pub fn part(&self, part: BodyPart) -> &MeshNode {
        match part {
            BodyPart::Body => &self.body,
            BodyPart::Head => &self.head,
            BodyPart::LeftArm => &self.left_arm,
            BodyPart::RightArm => &self.right_arm,
            BodyPart::LeftLeg => &self.left_leg,
            BodyPart::RightLeg => &self.right_leg,
        }
    }

    pub fn part_mut(&mut self, part: BodyPart) -> &mut MeshNode {
        self.revision = next_revision();
        match part {
            BodyPart::Body => &mut self.body,
            BodyPart::Head => &mut self.head,
            BodyPart::LeftArm => &mut self.left_arm,
            BodyPart::RightArm => &mut self.right_arm,
            BodyPart::LeftLeg => &mut self.left_leg,
            BodyPart::RightLeg => &mut self.right_leg,
        }
    }

    pub fn body(&self) -> &MeshNode {
        &self.body
    }

    pub fn accessories(&self) -> &[Accessory] {
        &self.accessories
    }

    pub fn accessory(&self, kind: AccessoryKind) -> Option<&Accessory> {
        self.accessories.iter().find(|a| a.kind == kind)
    }

    /// Attach `accessory`, replacing any attached accessory of the same kind.
    pub fn attach_accessory(&mut self, accessory: Accessory) {
        self.revision = next_revision();
        match self
            .accessories
            .iter_mut()
            .find(|a| a.kind == accessory.kind)
        {
            Some(slot) => *slot = accessory,
            None => self.accessories.push(accessory),
        }
    }

    pub fn clear_accessories(&mut self) {
        if !self.accessories.is_empty() {
            self.revision = next_revision();
            self.accessories.clear();
        }
    }

    /// Changes on every body-part or accessory edit; never reused.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn yaw(&self) -> f32 {
        self.transform.rotation.y
    }

    pub fn pitch(&self) -> f32 {
        self.transform.rotation.x
    }

    pub fn tilt(&self) -> f32 {
        self.transform.rotation.z
    }

    pub fn rotate(&mut self, d_yaw: f32, d_pitch: f32) {
        self.transform.rotation.y += d_yaw;
        self.transform.rotation.x += d_pitch;
    }

    pub fn nodes(&self) -> impl Iterator<Item = &MeshNode> {
        BodyPart::ALL
            .into_iter()
            .map(move |p| self.part(p))
            .chain(self.accessories.iter().flat_map(|a| a.meshes.iter()))
    }

    pub fn vertex_count(&self) -> usize {
        self.nodes().map(|n| n.shape.vertex_count()).sum()
    }

    /// Flatten every node into root-space vertices, replacing `out`.
    ///
    /// The root transform is not applied; renderers pass it as the model
    /// matrix so rotation does not require a re-bake.
    pub fn bake(&self, out: &mut Vec<SceneVertex>) {
        out.clear();
        out.reserve(self.vertex_count());
        let mut scratch = Vec::new();
        for node in self.nodes() {
            scratch.clear();
            node.shape.tessellate(&mut scratch);
            let model = node.transform.matrix();
            let normal_matrix = Mat3::from_mat4(model).inverse().transpose();
            let color = hex_to_linear(node.material.color).to_array();
            let material = [node.material.roughness, node.material.metalness];
            out.extend(scratch.iter().map(|v: &MeshVertex| SceneVertex {
                position: model.transform_point3(v.position).to_array(),
                normal: (normal_matrix * v.normal).normalize_or_zero().to_array(),
                color,
                material,
            }));
        }
    }
}

/// Right-handed perspective camera on the +Z axis looking at the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    distance: f32,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    min_distance: f32,
    max_distance: f32,
}

impl Camera {
    pub fn new(params: &ViewParams, aspect: f32) -> Self {
        Self {
            distance: params
                .start_distance
                .clamp(params.min_distance, params.max_distance),
            aspect,
            fovy_radians: params.fov_degrees.to_radians(),
            znear: params.near,
            zfar: params.far,
            min_distance: params.min_distance,
            max_distance: params.max_distance,
        }
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Set the viewing distance, clamped to the zoom range.
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(self.min_distance, self.max_distance);
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.distance)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    /// Linear RGB premultiplied by intensity.
    pub radiance: Vec3,
    /// Position for point lights, source position for directional lights.
    pub position: Vec3,
}

impl Light {
    pub fn new(color: u32, intensity: f32, position: [f32; 3]) -> Self {
        Self {
            radiance: hex_to_linear(color) * intensity,
            position: Vec3::from_array(position),
        }
    }
}

/// Ambient fill, one directional key light and one accent point light.
#[derive(Clone, Debug, PartialEq)]
pub struct LightRig {
    pub background: Vec3,
    pub ambient: Vec3,
    pub key: Light,
    pub accent: Light,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            background: hex_to_linear(BACKGROUND_COLOR),
            ambient: hex_to_linear(AMBIENT_COLOR) * AMBIENT_INTENSITY,
            key: Light::new(KEY_LIGHT_COLOR, KEY_LIGHT_INTENSITY, KEY_LIGHT_POSITION),
            accent: Light::new(
                ACCENT_LIGHT_COLOR,
                ACCENT_LIGHT_INTENSITY,
                ACCENT_LIGHT_POSITION,
            ),
        }
    }
}

/// View tuning; defaults come from `constants.rs`.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewParams {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub start_distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub zoom_step: f32,
    pub surface_height: u32,
    pub auto_rotate_step: f32,
    pub drag_yaw_per_px: f32,
    pub drag_pitch_per_px: f32,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            fov_degrees: CAMERA_FOV_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            start_distance: CAMERA_START_DISTANCE,
            min_distance: CAMERA_MIN_DISTANCE,
            max_distance: CAMERA_MAX_DISTANCE,
            zoom_step: ZOOM_STEP,
            surface_height: SURFACE_HEIGHT,
            auto_rotate_step: AUTO_ROTATE_STEP,
            drag_yaw_per_px: DRAG_YAW_PER_PX,
            drag_pitch_per_px: DRAG_PITCH_PER_PX,
        }
    }
}
