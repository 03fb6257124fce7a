//! Stepping the rotation index forward and backward.

/// Rotations in one full cycle. Index runs 1..=ROTATION_COUNT.
pub const ROTATION_COUNT: u8 = 11;

/// Next rotation; 11 wraps to 1.
pub fn next_rotation(rotation: u8) -> u8 {
    if rotation == ROTATION_COUNT {
        1
    } else {
        rotation + 1
    }
}

/// Previous rotation; 1 wraps to 11.
pub fn previous_rotation(rotation: u8) -> u8 {
    if rotation == 1 {
        ROTATION_COUNT
    } else {
        rotation - 1
    }
}

/// Map any integer onto its canonical rotation in 1..=11.
pub fn normalize_rotation(rotation: i64) -> u8 {
    let n = i64::from(ROTATION_COUNT);
    ((rotation.rem_euclid(n) + n - 1) % n + 1) as u8
}
