//! Barycentric triangle scan conversion.
//!
//! Takes one clip-space triangle that has survived clipping, projects it to
//! the screen, and walks its bounding box testing pixel centers against the
//! signed-area barycentric weights. Covered pixels that pass the depth test
//! get their attributes interpolated and the fragment shader invoked.

use crate::colors;
use crate::interp::{self, InterpRule};
use crate::render::framebuffer::FrameBuffer;
use crate::shader::FragmentShader;
use crate::vertex::{ClipVertex, FragmentInput, FragmentOutput};

/// Everything the raster stage needs for one render call: the target, the
/// fragment stage and its parameters, and the scratch buffer the
/// interpolated attributes are assembled into (reused across pixels).
pub(crate) struct RenderPass<'a> {
    pub framebuffer: &'a mut FrameBuffer,
    pub fragment_shader: &'a dyn FragmentShader,
    pub interp_rules: &'a [InterpRule],
    pub uniform_data: &'a [f32],
    pub fragment_attrs: Vec<f32>,
}

/// Signed area of triangle (a, b, c); positive for counter-clockwise.
#[inline]
fn signed_area(ax: f32, ay: f32, bx: f32, by: f32, cx: f32, cy: f32) -> f32 {
    0.5 * ((bx - ax) * (cy - ay) - (cx - ax) * (by - ay))
}

/// Bounding range of `coords` as whole pixels, clamped to `0..limit`.
/// `None` when the box misses the target entirely.
fn pixel_bounds(coords: [f32; 3], limit: usize) -> Option<(usize, usize)> {
    let lo = coords.iter().fold(f32::INFINITY, |m, &v| m.min(v)).floor() as i64;
    let hi = coords.iter().fold(f32::NEG_INFINITY, |m, &v| m.max(v)).ceil() as i64;
    let lo = lo.max(0);
    let hi = hi.min(limit as i64 - 1);
    (lo <= hi).then_some((lo as usize, hi as usize))
}

pub(crate) fn rasterize_triangle(pass: &mut RenderPass<'_>, tri: &[ClipVertex; 3]) {
    let half_w = pass.framebuffer.width() as f32 * 0.5;
    let half_h = pass.framebuffer.height() as f32 * 0.5;

    // Perspective divide and viewport transform. The -0.5 shift places the
    // center of pixel (p, q) at screen coordinates (p, q).
    let mut x = [0.0f32; 3];
    let mut y = [0.0f32; 3];
    let mut z = [0.0f32; 3];
    for (k, vert) in tri.iter().enumerate() {
        let p = vert.position;
        x[k] = half_w * (p.x / p.w) + half_w - 0.5;
        y[k] = half_h * (p.y / p.w) + half_h - 0.5;
        z[k] = p.z / p.w;
    }

    let area = signed_area(x[0], y[0], x[1], y[1], x[2], y[2]);
    if area.abs() < f32::EPSILON {
        return;
    }

    let Some((min_x, max_x)) = pixel_bounds(x, pass.framebuffer.width()) else {
        return;
    };
    let Some((min_y, max_y)) = pixel_bounds(y, pass.framebuffer.height()) else {
        return;
    };

    for py in min_y..=max_y {
        for px in min_x..=max_x {
            let (cx, cy) = (px as f32, py as f32);

            // Barycentric weights as sub-area ratios; the ratios stay
            // non-negative inside the triangle for either winding.
            let alpha = signed_area(cx, cy, x[1], y[1], x[2], y[2]) / area;
            let beta = signed_area(x[0], y[0], cx, cy, x[2], y[2]) / area;
            let gamma = signed_area(x[0], y[0], x[1], y[1], cx, cy) / area;
            if alpha < 0.0 || beta < 0.0 || gamma < 0.0 {
                continue;
            }

            // Post-divide depth interpolates linearly in screen space.
            // Strictly farther loses; an exact tie lets the newer fragment
            // through, so the later-assembled primitive wins.
            let depth = alpha * z[0] + beta * z[1] + gamma * z[2];
            let idx = pass.framebuffer.index(px, py);
            if depth > pass.framebuffer.depth[idx] {
                continue;
            }

            interp::blend_attributes(
                &mut pass.fragment_attrs,
                pass.interp_rules,
                [&tri[0], &tri[1], &tri[2]],
                [alpha, beta, gamma],
            );
            let mut output = FragmentOutput::default();
            pass.fragment_shader.shade(
                FragmentInput {
                    attributes: &pass.fragment_attrs,
                },
                &mut output,
                pass.uniform_data,
            );

            let c = output.color;
            pass.framebuffer.depth[idx] = depth;
            pass.framebuffer.color[idx] = colors::pack_color(c.x, c.y, c.z, c.w);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::OPAQUE_BLACK;
    use crate::math::vec4::Vec4;

    fn vert(x: f32, y: f32, z: f32, w: f32) -> ClipVertex {
        ClipVertex::new(Vec4::new(x, y, z, w), vec![0.0])
    }

    fn white(_: FragmentInput, out: &mut FragmentOutput, _: &[f32]) {
        out.color = Vec4::new(1.0, 1.0, 1.0, 1.0);
    }

    fn raster(fb: &mut FrameBuffer, tri: &[ClipVertex; 3]) {
        let mut pass = RenderPass {
            framebuffer: fb,
            fragment_shader: &white,
            interp_rules: &[InterpRule::Smooth],
            uniform_data: &[],
            fragment_attrs: Vec::new(),
        };
        rasterize_triangle(&mut pass, tri);
    }

    #[test]
    fn covers_pixel_centers_inside_the_triangle() {
        // Lower-left half of a 4x4 target; the diagonal edge passes exactly
        // through the centers of pixels with column + row == 3.
        let mut fb = FrameBuffer::new(4, 4);
        let tri = [
            vert(-1.0, -1.0, 0.0, 1.0),
            vert(1.0, -1.0, 0.0, 1.0),
            vert(-1.0, 1.0, 0.0, 1.0),
        ];
        raster(&mut fb, &tri);

        let covered = fb.color().iter().filter(|&&c| c != OPAQUE_BLACK).count();
        assert_eq!(covered, 10);
        assert_ne!(fb.get_color(3, 0), Some(OPAQUE_BLACK)); // on the edge
        assert_eq!(fb.get_color(3, 1), Some(OPAQUE_BLACK)); // beyond it
        assert_ne!(fb.get_color(0, 3), Some(OPAQUE_BLACK));
    }

    #[test]
    fn winding_does_not_affect_coverage() {
        let mut fb_ccw = FrameBuffer::new(4, 4);
        let mut fb_cw = FrameBuffer::new(4, 4);
        let a = vert(-1.0, -1.0, 0.0, 1.0);
        let b = vert(1.0, -1.0, 0.0, 1.0);
        let c = vert(-1.0, 1.0, 0.0, 1.0);
        raster(&mut fb_ccw, &[a.clone(), b.clone(), c.clone()]);
        raster(&mut fb_cw, &[a, c, b]);
        assert_eq!(fb_ccw.color(), fb_cw.color());
    }

    #[test]
    fn zero_area_triangle_writes_nothing() {
        let mut fb = FrameBuffer::new(4, 4);
        let tri = [
            vert(-1.0, -1.0, 0.0, 1.0),
            vert(0.0, 0.0, 0.0, 1.0),
            vert(1.0, 1.0, 0.0, 1.0),
        ];
        raster(&mut fb, &tri);
        assert!(fb.color().iter().all(|&c| c == OPAQUE_BLACK));
    }

    #[test]
    fn strictly_farther_fragment_is_rejected() {
        let mut fb = FrameBuffer::new(2, 2);
        let full = |z: f32| {
            [
                vert(-1.0, -1.0, z, 1.0),
                vert(3.0, -1.0, z, 1.0),
                vert(-1.0, 3.0, z, 1.0),
            ]
        };

        raster(&mut fb, &full(0.0));
        let near = fb.depth().to_vec();
        raster(&mut fb, &full(0.5));
        assert_eq!(fb.depth(), &near[..]);
    }
}
