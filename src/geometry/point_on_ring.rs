use crate::math::Point3;

/// Places a point on a horizontal ring.
///
/// The ring lies in the XZ plane at height `axial_offset`. With
/// `scale_by_distance`, the radius shrinks to `radius / (1 + distance)` so
/// rings further from the vertical center get smaller; at distance zero the
/// radius is used as-is.
#[must_use]
pub fn point_on_ring(
    angle: f64,
    distance: f64,
    radius: f64,
    axial_offset: f64,
    scale_by_distance: bool,
) -> Point3 {
    let radius = if scale_by_distance && distance > 0.0 {
        radius / (1.0 + distance)
    } else {
        radius
    };
    Point3::new(angle.cos() * radius, axial_offset, angle.sin() * radius)
}
