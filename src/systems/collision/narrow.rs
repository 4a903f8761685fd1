//! Narrow phase - exact intersection tests per shape pair
//!
//! All tests are axis-aligned and strict: shapes that only touch do not overlap.
//! Degenerate geometry (coincident centers) resolves along `FALLBACK_AXIS`.

use crate::core::Vec2;

use super::contact::Contact;

/// Contact normal used when the geometry gives no direction.
pub const FALLBACK_AXIS: Vec2 = Vec2::UNIT_Y;

pub fn circle_circle(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> Contact {
    let delta = center_b - center_a;
    let dist2 = delta.length_squared();
    let reach = radius_a + radius_b;

    if dist2 >= reach * reach {
        return Contact::none();
    }

    let dist = dist2.sqrt();
    let normal = if dist > 0.0 { delta / dist } else { FALLBACK_AXIS };
    Contact::hit(normal, reach - dist)
}

/// Circle A against axis-aligned box B.
pub fn circle_box(center: Vec2, radius: f32, box_center: Vec2, half: Vec2) -> Contact {
    let min = box_center - half;
    let max = box_center + half;
    let closest = center.clamp(min, max);
    let outward = center - closest;
    let dist2 = outward.length_squared();

    if dist2 > 0.0 {
        if dist2 >= radius * radius {
            return Contact::none();
        }
        let dist = dist2.sqrt();
        // `outward` points from the box surface to the circle, A->B is the reverse.
        return Contact::hit(-(outward / dist), radius - dist);
    }

    // Center inside the box: leave through the nearest face.
    let faces = [
        (max.y - center.y, Vec2::new(0.0, -1.0)),
        (center.y - min.y, Vec2::new(0.0, 1.0)),
        (max.x - center.x, Vec2::new(-1.0, 0.0)),
        (center.x - min.x, Vec2::new(1.0, 0.0)),
    ];
    let (depth, normal) = faces
        .iter()
        .copied()
        .fold(faces[0], |best, face| if face.0 < best.0 { face } else { best });
    Contact::hit(normal, depth + radius)
}

/// Axis-aligned box A against axis-aligned box B.
pub fn box_box(center_a: Vec2, half_a: Vec2, center_b: Vec2, half_b: Vec2) -> Contact {
    let delta = center_b - center_a;
    let overlap_x = (half_a.x + half_b.x) - delta.x.abs();
    let overlap_y = (half_a.y + half_b.y) - delta.y.abs();

    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return Contact::none();
    }

    if overlap_x < overlap_y {
        let sign = if delta.x < 0.0 { -1.0 } else { 1.0 };
        Contact::hit(Vec2::new(sign, 0.0), overlap_x)
    } else {
        let sign = if delta.y < 0.0 { -1.0 } else { 1.0 };
        Contact::hit(Vec2::new(0.0, sign), overlap_y)
    }
}
