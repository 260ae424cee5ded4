/// Returned for compass text outside the 16-point table.
pub const UNKNOWN_BEARING: i32 = -1;

// Spanish compass rose: O is oeste (west).
const COMPASS_POINTS: [(&str, i32); 16] = [
    ("N", 0),
    ("NNE", 22),
    ("NE", 45),
    ("ENE", 67),
    ("E", 90),
    ("ESE", 112),
    ("SE", 135),
    ("SSE", 157),
    ("S", 180),
    ("SSO", 202),
    ("SO", 225),
    ("OSO", 247),
    ("O", 270),
    ("ONO", 292),
    ("NO", 315),
    ("NNO", 337),
];

/// Convert a compass abbreviation to whole degrees, or [`UNKNOWN_BEARING`].
pub fn bearing_to_degrees(bearing: &str) -> i32 {
    let upper = bearing.to_uppercase();
    COMPASS_POINTS
        .iter()
        .find(|(point, _)| *point == upper)
        .map(|(_, deg)| *deg)
        .unwrap_or(UNKNOWN_BEARING)
}
