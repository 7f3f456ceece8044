//! Clipping against the canonical homogeneous clip cube.
//!
//! The clip volume is defined by:
//!
//! ```text
//! -w <= x <= w
//! -w <= y <= w
//! -w <= z <= w
//! ```
//!
//! A triangle is clipped against one plane at a time. Each plane keeps the
//! part of the triangle in its inside half-space: the whole triangle, a
//! smaller triangle (one vertex inside), or a quadrilateral split into two
//! triangles (two vertices inside). The survivors of one plane are clipped
//! against the next, and whatever is left after the sixth plane is a
//! triangle the rasterizer can scan without any further bounds concerns.
//!
//! Vertices minted where an edge crosses a plane interpolate position and
//! attributes linearly in clip space; linear interpolation here preserves
//! both the perspective-correct and the screen-linear attribute classes, so
//! the distinction is resolved later, at rasterization. Flat-rule floats
//! instead copy from the first vertex of the triangle being clipped.

use crate::interp::InterpRule;
use crate::math::vec4::Vec4;
use crate::vertex::ClipVertex;

/// The six planes of the canonical clip-space cube, in clipping order.
///
/// Each plane is defined implicitly by a linear inequality on (x, y, z, w).
/// The signed distance is positive when inside the clip volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipPlane {
    /// Left plane: x >= -w
    Left,
    /// Right plane: x <= w
    Right,
    /// Bottom plane: y >= -w
    Bottom,
    /// Top plane: y <= w
    Top,
    /// Near plane: z >= -w
    Near,
    /// Far plane: z <= w
    Far,
}

impl ClipPlane {
    pub const ALL: [ClipPlane; 6] = [
        ClipPlane::Left,
        ClipPlane::Right,
        ClipPlane::Bottom,
        ClipPlane::Top,
        ClipPlane::Near,
        ClipPlane::Far,
    ];

    /// Returns the signed distance from a clip-space position to this plane.
    /// Positive = inside the clip volume, negative = outside.
    #[inline]
    pub fn signed_distance(&self, p: Vec4) -> f32 {
        match self {
            Self::Left => p.w + p.x,   // x >= -w  =>  w + x >= 0
            Self::Right => p.w - p.x,  // x <= w   =>  w - x >= 0
            Self::Bottom => p.w + p.y, // y >= -w  =>  w + y >= 0
            Self::Top => p.w - p.y,    // y <= w   =>  w - y >= 0
            Self::Near => p.w + p.z,   // z >= -w  =>  w + z >= 0
            Self::Far => p.w - p.z,    // z <= w   =>  w - z >= 0
        }
    }
}

/// Clip one triangle against the planes from `face` onward, collecting the
/// surviving triangles into `out`.
///
/// A vertex exactly on a plane counts as inside, so triangles sharing an
/// edge that lies on a plane clip without producing zero-area slivers.
/// The input triangle is never mutated; every triangle pushed to `out`
/// owns fresh vertices.
pub(crate) fn clip_triangle(
    tri: &[ClipVertex; 3],
    face: usize,
    rules: &[InterpRule],
    out: &mut Vec<[ClipVertex; 3]>,
) {
    if face == ClipPlane::ALL.len() {
        out.push(tri.clone());
        return;
    }

    let plane = ClipPlane::ALL[face];
    let d = [
        plane.signed_distance(tri[0].position),
        plane.signed_distance(tri[1].position),
        plane.signed_distance(tri[2].position),
    ];
    let inside = [d[0] >= 0.0, d[1] >= 0.0, d[2] >= 0.0];

    match inside.iter().filter(|&&i| i).count() {
        3 => clip_triangle(tri, face + 1, rules, out),
        0 => {}
        1 => {
            // One vertex survives; the clipped region is a smaller triangle
            // whose other two corners sit on the plane.
            let a = inside.iter().position(|&i| i).unwrap();
            let b = (a + 1) % 3;
            let c = (a + 2) % 3;
            let split = [
                tri[a].clone(),
                intersect(plane_crossing(&tri[a], &tri[b], d[a], d[b]), &tri[0], rules),
                intersect(plane_crossing(&tri[a], &tri[c], d[a], d[c]), &tri[0], rules),
            ];
            clip_triangle(&split, face + 1, rules, out);
        }
        2 => {
            // One vertex is cut off; the clipped region is a quadrilateral,
            // split along a diagonal into two triangles.
            let o = inside.iter().position(|&i| !i).unwrap();
            let in0 = (o + 1) % 3;
            let in1 = (o + 2) % 3;
            let p1 = intersect(
                plane_crossing(&tri[in1], &tri[o], d[in1], d[o]),
                &tri[0],
                rules,
            );
            let p0 = intersect(
                plane_crossing(&tri[in0], &tri[o], d[in0], d[o]),
                &tri[0],
                rules,
            );
            let first = [tri[in0].clone(), tri[in1].clone(), p1.clone()];
            clip_triangle(&first, face + 1, rules, out);
            let second = [tri[in0].clone(), p1, p0];
            clip_triangle(&second, face + 1, rules, out);
        }
        _ => unreachable!(),
    }
}

struct Crossing<'a> {
    from: &'a ClipVertex,
    to: &'a ClipVertex,
    t: f32,
}

/// Where the edge `from -> to` crosses the current plane, as a fraction of
/// the edge. The caller guarantees the endpoints straddle the plane, so
/// `d_from - d_to` is nonzero.
fn plane_crossing<'a>(
    from: &'a ClipVertex,
    to: &'a ClipVertex,
    d_from: f32,
    d_to: f32,
) -> Crossing<'a> {
    Crossing {
        from,
        to,
        t: d_from / (d_from - d_to),
    }
}

/// Mint the vertex at a plane crossing. Attributes interpolate linearly in
/// clip space except flat-rule floats, which copy from `first`, the first
/// vertex of the triangle being clipped.
fn intersect(crossing: Crossing<'_>, first: &ClipVertex, rules: &[InterpRule]) -> ClipVertex {
    let Crossing { from, to, t } = crossing;
    let attributes = rules
        .iter()
        .enumerate()
        .map(|(i, rule)| match rule {
            InterpRule::Flat => first.attributes[i],
            _ => from.attributes[i] + (to.attributes[i] - from.attributes[i]) * t,
        })
        .collect();
    ClipVertex::new(from.position.lerp(to.position, t), attributes)
}
