//! Primitive shape descriptors and their triangle-list tessellation.
//!
//! Shapes are centered on the origin. Cylinders and cones run along +Y, the
//! torus ring lies in the XY plane around the Z axis. Output is a flat,
//! non-indexed triangle list with counter-clockwise front faces.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Possibly tapered cylinder; a zero top radius makes a cone.
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Cuboid {
        width: f32,
        height: f32,
        depth: f32,
    },
}

impl Shape {
    pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> Self {
        Shape::Cylinder {
            radius_top,
            radius_bottom,
            height,
            segments,
        }
    }

    pub fn cone(radius: f32, height: f32, segments: u32) -> Self {
        Shape::cylinder(0.0, radius, height, segments)
    }

    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Shape::Sphere {
            radius,
            width_segments,
            height_segments,
        }
    }

    pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Self {
        Shape::Torus {
            radius,
            tube,
            radial_segments,
            tubular_segments,
        }
    }

    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Shape::Cuboid {
            width,
            height,
            depth,
        }
    }

    /// Appends this shape's triangles to `out`.
    pub fn tessellate(&self, out: &mut Vec<MeshVertex>) {
        match *self {
            Shape::Cylinder {
                radius_top,
                radius_bottom,
                height,
                segments,
            } => cylinder(out, radius_top, radius_bottom, height, segments.max(3)),
            Shape::Sphere {
                radius,
                width_segments,
                height_segments,
            } => sphere(out, radius, width_segments.max(3), height_segments.max(2)),
            Shape::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            } => torus(out, radius, tube, radial_segments.max(3), tubular_segments.max(3)),
            Shape::Cuboid {
                width,
                height,
                depth,
            } => cuboid(out, width, height, depth),
        }
    }

    /// Number of vertices [`Shape::tessellate`] emits.
    pub fn vertex_count(&self) -> usize {
        match *self {
            Shape::Cylinder {
                radius_top,
                radius_bottom,
                segments,
                ..
            } => {
                let s = segments.max(3) as usize;
                let caps = [radius_top, radius_bottom]
                    .iter()
                    .filter(|r| **r > 0.0)
                    .count();
                s * 6 + caps * s * 3
            }
            Shape::Sphere {
                width_segments,
                height_segments,
                ..
            } => width_segments.max(3) as usize * height_segments.max(2) as usize * 6,
            Shape::Torus {
                radial_segments,
                tubular_segments,
                ..
            } => radial_segments.max(3) as usize * tubular_segments.max(3) as usize * 6,
            Shape::Cuboid { .. } => 36,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshVertex {
    pub position: Vec3,
    pub normal: Vec3,
}

#[inline]
fn push_quad(out: &mut Vec<MeshVertex>, q: [MeshVertex; 4]) {
    // q is ordered counter-clockwise as seen from the front
    out.extend_from_slice(&[q[0], q[1], q[2], q[0], q[2], q[3]]);
}

fn cylinder(out: &mut Vec<MeshVertex>, r_top: f32, r_bottom: f32, height: f32, segments: u32) {
    let half = height * 0.5;
    // side normals lean by the taper
    let slope = (r_bottom - r_top) / height.max(1e-6);
    let ring = |i: u32, r: f32, y: f32| {
        let theta = i as f32 / segments as f32 * TAU;
        let (s, c) = theta.sin_cos();
        let normal = Vec3::new(s, slope, c).normalize();
        MeshVertex {
            position: Vec3::new(r * s, y, r * c),
            normal,
        }
    };
    for i in 0..segments {
        let b0 = ring(i, r_bottom, -half);
        let b1 = ring(i + 1, r_bottom, -half);
        let t1 = ring(i + 1, r_top, half);
        let t0 = ring(i, r_top, half);
        push_quad(out, [b0, b1, t1, t0]);
    }
    for (r, y, up) in [(r_top, half, 1.0_f32), (r_bottom, -half, -1.0_f32)] {
        if r <= 0.0 {
            continue;
        }
        let normal = Vec3::Y * up;
        let center = MeshVertex {
            position: Vec3::new(0.0, y, 0.0),
            normal,
        };
        for i in 0..segments {
            let a = ring(i, r, y);
            let b = ring(i + 1, r, y);
            let a = MeshVertex { normal, ..a };
            let b = MeshVertex { normal, ..b };
            if up > 0.0 {
                out.extend_from_slice(&[center, a, b]);
            } else {
                out.extend_from_slice(&[center, b, a]);
            }
        }
    }
}

fn sphere(out: &mut Vec<MeshVertex>, radius: f32, w_seg: u32, h_seg: u32) {
    let point = |ix: u32, iy: u32| {
        let u = ix as f32 / w_seg as f32;
        let v = iy as f32 / h_seg as f32;
        let (st, ct) = (v * PI).sin_cos();
        let (sp, cp) = (u * TAU).sin_cos();
        let normal = Vec3::new(-cp * st, ct, sp * st);
        MeshVertex {
            position: normal * radius,
            normal,
        }
    };
    for iy in 0..h_seg {
        for ix in 0..w_seg {
            let a = point(ix, iy);
            let b = point(ix, iy + 1);
            let c = point(ix + 1, iy + 1);
            let d = point(ix + 1, iy);
            push_quad(out, [a, b, c, d]);
        }
    }
}

fn torus(out: &mut Vec<MeshVertex>, radius: f32, tube: f32, radial: u32, tubular: u32) {
    let point = |j: u32, i: u32| {
        let u = i as f32 / tubular as f32 * TAU;
        let v = j as f32 / radial as f32 * TAU;
        let (su, cu) = u.sin_cos();
        let (sv, cv) = v.sin_cos();
        let center = Vec3::new(radius * cu, radius * su, 0.0);
        let position = Vec3::new((radius + tube * cv) * cu, (radius + tube * cv) * su, tube * sv);
        MeshVertex {
            position,
            normal: (position - center).normalize_or_zero(),
        }
    };
    for j in 0..radial {
        for i in 0..tubular {
            let a = point(j, i);
            let b = point(j, i + 1);
            let c = point(j + 1, i + 1);
            let d = point(j + 1, i);
            push_quad(out, [a, b, c, d]);
        }
    }
}

fn cuboid(out: &mut Vec<MeshVertex>, width: f32, height: f32, depth: f32) {
    let h = Vec3::new(width, height, depth) * 0.5;
    // (normal, u axis, v axis) with u × v == normal
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    for (n, u, v) in faces {
        let corner = |su: f32, sv: f32| MeshVertex {
            position: (n + u * su + v * sv) * h,
            normal: n,
        };
        push_quad(
            out,
            [
                corner(-1.0, -1.0),
                corner(1.0, -1.0),
                corner(1.0, 1.0),
                corner(-1.0, 1.0),
            ],
        );
    }
}
