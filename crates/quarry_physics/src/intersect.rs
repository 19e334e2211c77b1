//! Ray-vs-primitive intersection in shape-local space.
//!
//! All functions take an origin and a direction that need not be unit
//! length; the returned `t` is the ray parameter, so `origin + dir * t` is
//! the hit point. Only hits with `t >= 0` are reported.

use glam::Vec3;

use crate::mesh::Mesh;

const EPSILON: f32 = 1e-7;

/// Intersection of a local-space ray with a primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalHit {
    pub t: f32,
    pub normal: Vec3,
    /// Hit triangle and its barycentric weights, for meshes only.
    pub triangle: Option<(usize, Vec3)>,
}

impl LocalHit {
    fn surface(t: f32, normal: Vec3) -> Self {
        Self {
            t,
            normal,
            triangle: None,
        }
    }
}

/// Smallest non-negative root of `a t^2 + b t + c = 0`.
fn nearest_root(a: f32, b: f32, c: f32) -> Option<f32> {
    if a.abs() < EPSILON {
        return None;
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let t1 = (-b - sqrt_d) / (2.0 * a);
    let t2 = (-b + sqrt_d) / (2.0 * a);
    if t1 >= 0.0 {
        Some(t1)
    } else if t2 >= 0.0 {
        Some(t2)
    } else {
        None
    }
}

#[must_use]
pub fn ray_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<LocalHit> {
    let oc = origin - center;
    let t = nearest_root(dir.dot(dir), 2.0 * oc.dot(dir), oc.dot(oc) - radius * radius)?;
    let normal = (origin + dir * t - center).normalize_or_zero();
    Some(LocalHit::surface(t, normal))
}

/// Slab test against an axis-aligned box centered on the origin.
///
/// The reported normal is the face the ray enters through, or the face it
/// leaves through when it starts inside the box.
#[must_use]
pub fn ray_box(origin: Vec3, dir: Vec3, half_extents: Vec3) -> Option<LocalHit> {
    let mut tmin = f32::NEG_INFINITY;
    let mut tmax = f32::INFINITY;
    let mut enter_axis = 0;
    let mut exit_axis = 0;

    for axis in 0..3 {
        let (o, d, h) = (origin[axis], dir[axis], half_extents[axis]);
        if d == 0.0 {
            // Parallel to this slab: either always inside it or never.
            if o < -h || o > h {
                return None;
            }
            continue;
        }
        let inv = d.recip();
        let t1 = (-h - o) * inv;
        let t2 = (h - o) * inv;
        let (near, far) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        if near > tmin {
            tmin = near;
            enter_axis = axis;
        }
        if far < tmax {
            tmax = far;
            exit_axis = axis;
        }
    }

    if tmax < 0.0 || tmin > tmax {
        return None;
    }
    // Ray starts inside the box: report the exit point.
    let (t, normal) = if tmin < 0.0 {
        (tmax, axis_normal(exit_axis, dir[exit_axis].signum()))
    } else {
        (tmin, axis_normal(enter_axis, -dir[enter_axis].signum()))
    };
    Some(LocalHit::surface(t, normal))
}

fn axis_normal(axis: usize, sign: f32) -> Vec3 {
    let mut normal = Vec3::ZERO;
    normal[axis] = sign;
    normal
}

/// Y-aligned capsule centered on the origin. `height` includes both caps.
#[must_use]
pub fn ray_capsule(origin: Vec3, dir: Vec3, radius: f32, height: f32) -> Option<LocalHit> {
    let half_segment = (height * 0.5 - radius).max(0.0);
    let mut best: Option<LocalHit> = None;

    // Cylinder body.
    let a = dir.x * dir.x + dir.z * dir.z;
    let b = 2.0 * (origin.x * dir.x + origin.z * dir.z);
    let c = origin.x * origin.x + origin.z * origin.z - radius * radius;
    if let Some(t) = nearest_root(a, b, c) {
        let p = origin + dir * t;
        if p.y.abs() <= half_segment {
            best = Some(LocalHit::surface(t, Vec3::new(p.x, 0.0, p.z).normalize_or_zero()));
        }
    }

    for cap in [Vec3::Y * half_segment, Vec3::NEG_Y * half_segment] {
        if let Some(hit) = ray_sphere(origin, dir, cap, radius) {
            if best.is_none_or(|b| hit.t < b.t) {
                best = Some(hit);
            }
        }
    }
    best
}

/// Möller–Trumbore ray-triangle test. Triangles are double sided.
///
/// Returns `(t, u, v)` where the hit point is `v0 * (1 - u - v) + v1 * u + v2 * v`.
#[must_use]
pub fn ray_triangle(origin: Vec3, dir: Vec3, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<(f32, f32, f32)> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let pvec = dir.cross(edge2);
    let det = edge1.dot(pvec);
    if det.abs() < EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;

    let tvec = origin - v0;
    let u = tvec.dot(pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(edge1);
    let v = dir.dot(qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(qvec) * inv_det;
    (t >= 0.0).then_some((t, u, v))
}

/// Nearest triangle hit on `mesh`. Triangles referencing missing vertices are skipped.
#[must_use]
pub fn ray_mesh(origin: Vec3, dir: Vec3, mesh: &Mesh) -> Option<LocalHit> {
    let positions = mesh.positions();
    let mut best: Option<LocalHit> = None;

    for index in 0..mesh.triangle_count() {
        let Some([i0, i1, i2]) = mesh.triangle(index) else {
            continue;
        };
        let (Some(&v0), Some(&v1), Some(&v2)) = (
            positions.get(i0 as usize),
            positions.get(i1 as usize),
            positions.get(i2 as usize),
        ) else {
            continue;
        };

        if let Some((t, u, v)) = ray_triangle(origin, dir, v0, v1, v2) {
            if best.is_none_or(|b| t < b.t) {
                let mut normal = (v1 - v0).cross(v2 - v0).normalize_or_zero();
                if normal.dot(dir) > 0.0 {
                    normal = -normal;
                }
                best = Some(LocalHit {
                    t,
                    normal,
                    triangle: Some((index, Vec3::new(1.0 - u - v, u, v))),
                });
            }
        }
    }
    best
}
