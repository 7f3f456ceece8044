//! Per-fragment attribute interpolation.
//!
//! Each vertex attribute float carries its own [`InterpRule`]. The
//! rasterizer hands this module the screen-space barycentric weights of a
//! covered pixel; the blend below resolves each rule:
//!
//! - `Flat` copies the value from the triangle's first vertex.
//! - `NoPerspective` blends with the screen-space weights directly, so the
//!   result is affine in pixel coordinates.
//! - `Smooth` first converts the screen weights to world-space weights by
//!   dividing each by its vertex `w` and renormalizing, which makes the
//!   result affine in the pre-projection geometry.

use crate::vertex::ClipVertex;

/// How one vertex attribute float is carried to the fragments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InterpRule {
    /// Every fragment receives the value at the triangle's first vertex.
    #[default]
    Flat,
    /// Perspective-correct interpolation.
    Smooth,
    /// Screen-space linear interpolation.
    NoPerspective,
}

/// Convert screen-space barycentric weights to world-space weights for the
/// given triangle.
pub(crate) fn world_weights(screen: [f32; 3], tri: [&ClipVertex; 3]) -> [f32; 3] {
    let a = screen[0] / tri[0].position.w;
    let b = screen[1] / tri[1].position.w;
    let c = screen[2] / tri[2].position.w;
    let sum = a + b + c;
    [a / sum, b / sum, c / sum]
}

/// Blend the attributes of `tri` at the pixel with screen-space weights
/// `screen`, applying each float's rule. The result is written into `out`,
/// which is cleared first; the pipeline reuses one buffer across pixels.
pub(crate) fn blend_attributes(
    out: &mut Vec<f32>,
    rules: &[InterpRule],
    tri: [&ClipVertex; 3],
    screen: [f32; 3],
) {
    let world = rules
        .iter()
        .any(|rule| *rule == InterpRule::Smooth)
        .then(|| world_weights(screen, tri));

    out.clear();
    for (i, rule) in rules.iter().enumerate() {
        let value = match rule {
            InterpRule::Flat => tri[0].attributes[i],
            InterpRule::NoPerspective => {
                screen[0] * tri[0].attributes[i]
                    + screen[1] * tri[1].attributes[i]
                    + screen[2] * tri[2].attributes[i]
            }
            InterpRule::Smooth => {
                let [a, b, c] = world.unwrap();
                a * tri[0].attributes[i] + b * tri[1].attributes[i] + c * tri[2].attributes[i]
            }
        };
        out.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec4::Vec4;
    use approx::assert_relative_eq;

    fn vert(w: f32, attrs: &[f32]) -> ClipVertex {
        ClipVertex::new(Vec4::new(0.0, 0.0, 0.0, w), attrs.to_vec())
    }

    #[test]
    fn flat_takes_first_vertex_value() {
        let tri = [vert(1.0, &[7.0]), vert(1.0, &[1.0]), vert(1.0, &[2.0])];
        let mut out = Vec::new();
        blend_attributes(
            &mut out,
            &[InterpRule::Flat],
            [&tri[0], &tri[1], &tri[2]],
            [0.1, 0.6, 0.3],
        );
        assert_relative_eq!(out[0], 7.0);
    }

    #[test]
    fn noperspective_uses_screen_weights() {
        let tri = [vert(1.0, &[0.0]), vert(2.0, &[1.0]), vert(4.0, &[0.0])];
        let mut out = Vec::new();
        blend_attributes(
            &mut out,
            &[InterpRule::NoPerspective],
            [&tri[0], &tri[1], &tri[2]],
            [0.25, 0.5, 0.25],
        );
        // Vertex w plays no part; the blend is the raw screen-space one.
        assert_relative_eq!(out[0], 0.5);
    }

    #[test]
    fn smooth_matches_equal_w_screen_blend() {
        // With all w equal, world weights collapse to the screen weights.
        let tri = [vert(2.0, &[0.0]), vert(2.0, &[1.0]), vert(2.0, &[0.5])];
        let mut out = Vec::new();
        blend_attributes(
            &mut out,
            &[InterpRule::Smooth],
            [&tri[0], &tri[1], &tri[2]],
            [0.2, 0.3, 0.5],
        );
        assert_relative_eq!(out[0], 0.3 + 0.25, epsilon = 1e-6);
    }

    #[test]
    fn smooth_is_perspective_correct() {
        let tri = [vert(1.0, &[0.0]), vert(2.0, &[1.0]), vert(4.0, &[0.0])];
        let screen = [0.25, 0.375, 0.375];

        let [a, b, c] = world_weights(screen, [&tri[0], &tri[1], &tri[2]]);
        assert_relative_eq!(a + b + c, 1.0, epsilon = 1e-6);

        let mut out = Vec::new();
        blend_attributes(
            &mut out,
            &[InterpRule::Smooth],
            [&tri[0], &tri[1], &tri[2]],
            screen,
        );
        // s = 0.25/1 + 0.375/2 + 0.375/4 = 0.53125; value = (0.375/2)/s
        assert_relative_eq!(out[0], 0.1875 / 0.53125, epsilon = 1e-6);
    }

    #[test]
    fn rules_apply_per_float() {
        let tri = [
            vert(1.0, &[1.0, 0.0, 1.0]),
            vert(1.0, &[2.0, 1.0, 0.0]),
            vert(1.0, &[3.0, 0.0, 0.0]),
        ];
        let rules = [
            InterpRule::Flat,
            InterpRule::NoPerspective,
            InterpRule::Smooth,
        ];
        let mut out = Vec::new();
        blend_attributes(&mut out, &rules, [&tri[0], &tri[1], &tri[2]], [0.5, 0.25, 0.25]);
        assert_relative_eq!(out[0], 1.0);
        assert_relative_eq!(out[1], 0.25);
        assert_relative_eq!(out[2], 0.5);
    }
}
