// Host-side tests for shape tessellation and mannequin baking.

use figurine_core::*;
use glam::{Mat4, Vec3};

fn tessellate(shape: Shape) -> Vec<MeshVertex> {
    let mut out = Vec::new();
    shape.tessellate(&mut out);
    out
}

#[test]
fn vertex_count_matches_tessellation() {
    let shapes = [
        Shape::cylinder(0.4, 0.35, 1.2, 32),
        Shape::cone(0.4, 0.3, 32),
        Shape::sphere(0.35, 32, 32),
        Shape::torus(0.15, 0.05, 8, 16),
        Shape::cuboid(0.4, 0.25, 0.05),
    ];
    for shape in shapes {
        let verts = tessellate(shape);
        assert_eq!(verts.len(), shape.vertex_count(), "{:?}", shape);
        assert_eq!(verts.len() % 3, 0);
    }
}

#[test]
fn cone_has_no_top_cap() {
    let cone = Shape::cone(0.4, 0.3, 8);
    let cylinder = Shape::cylinder(0.4, 0.4, 0.3, 8);
    assert_eq!(cylinder.vertex_count() - cone.vertex_count(), 8 * 3);
}

#[test]
fn degenerate_segment_counts_are_raised() {
    let verts = tessellate(Shape::sphere(1.0, 0, 0));
    assert_eq!(verts.len(), 3 * 2 * 6);
}

#[test]
fn sphere_vertices_lie_on_radius_with_outward_normals() {
    for v in tessellate(Shape::sphere(0.35, 12, 8)) {
        assert!((v.position.length() - 0.35).abs() < 1e-5);
        assert!((v.normal.length() - 1.0).abs() < 1e-5);
        assert!(v.normal.dot(v.position) >= 0.0);
    }
}

#[test]
fn cuboid_spans_its_extents() {
    let verts = tessellate(Shape::cuboid(0.4, 0.25, 0.05));
    let max = verts
        .iter()
        .fold(Vec3::splat(f32::MIN), |m, v| m.max(v.position));
    let min = verts
        .iter()
        .fold(Vec3::splat(f32::MAX), |m, v| m.min(v.position));
    assert!((max - Vec3::new(0.2, 0.125, 0.025)).abs().max_element() < 1e-6);
    assert!((min + Vec3::new(0.2, 0.125, 0.025)).abs().max_element() < 1e-6);
}

#[test]
fn triangles_face_their_normals() {
    let shapes = [
        Shape::cylinder(0.15, 0.12, 0.8, 16),
        Shape::cuboid(1.0, 1.0, 1.0),
        Shape::torus(0.5, 0.1, 8, 16),
    ];
    for shape in shapes {
        for tri in tessellate(shape).chunks(3) {
            let face = (tri[1].position - tri[0].position).cross(tri[2].position - tri[0].position);
            if face.length() < 1e-9 {
                continue;
            }
            let avg = tri[0].normal + tri[1].normal + tri[2].normal;
            assert!(face.dot(avg) > 0.0, "{:?} has an inverted triangle", shape);
        }
    }
}

#[test]
fn torus_ring_lies_in_xy_plane() {
    for v in tessellate(Shape::torus(0.15, 0.05, 8, 16)) {
        assert!(v.position.z.abs() <= 0.05 + 1e-6);
        let r = (v.position.x * v.position.x + v.position.y * v.position.y).sqrt();
        assert!(r >= 0.1 - 1e-6 && r <= 0.2 + 1e-6);
    }
}

#[test]
fn transform_matrix_applies_scale_rotation_translation() {
    let t = Transform::at(1.0, 2.0, 3.0).scaled(2.0, 2.0, 2.0);
    let p = t.matrix().transform_point3(Vec3::X);
    assert!((p - Vec3::new(3.0, 2.0, 3.0)).length() < 1e-6);

    let yaw = Transform::default().rotated(0.0, std::f32::consts::FRAC_PI_2, 0.0);
    let p = yaw.matrix().transform_point3(Vec3::X);
    assert!((p - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    assert_eq!(Transform::default().matrix(), Mat4::IDENTITY);
}

#[test]
fn bake_includes_accessories_and_uses_linear_colors() {
    let mut m = Mannequin::default();
    let mut baked = Vec::new();
    m.bake(&mut baked);
    assert_eq!(baked.len(), m.vertex_count());
    let body_only = baked.len();

    let rev = m.revision();
    m.attach_accessory(build_accessory(AccessoryKind::Glasses));
    assert!(m.revision() > rev);
    m.bake(&mut baked);
    assert_eq!(
        baked.len(),
        body_only + 2 * Shape::torus(0.15, 0.05, 8, 16).vertex_count() + 36
    );

    let body = hex_to_linear(constants::PROFESSIONAL_BODY_COLOR).to_array();
    assert_eq!(baked[0].color, body);
    assert_eq!(baked[0].material, [0.7, 0.2]);
    for v in &baked {
        let n = Vec3::from_array(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn bake_ignores_root_rotation() {
    let mut m = Mannequin::default();
    let mut a = Vec::new();
    m.bake(&mut a);
    m.rotate(1.0, 0.5);
    let mut b = Vec::new();
    m.bake(&mut b);
    assert_eq!(a, b);
}

#[test]
fn hex_to_linear_endpoints() {
    assert_eq!(hex_to_linear(0x000000), Vec3::ZERO);
    let white = hex_to_linear(0xffffff);
    assert!((white - Vec3::ONE).abs().max_element() < 1e-6);
    let mid = hex_to_linear(0x808080);
    assert!((mid.x - 0.2158605).abs() < 1e-4);
}
