//! Window icon drawn at startup, so the binary ships without image assets.

use eframe::egui::IconData;

const HEART_RGB: [u8; 3] = [0xd8, 0x1b, 0x60];

/// Returns a square RGBA heart on a transparent background.
///
/// Pixels are inside the heart where `(x² + y² − 1)³ − x²y³ ≤ 0`, with the
/// image scaled so the curve fills most of the square.
#[must_use]
pub fn heart_icon(side: u16) -> IconData {
    let side_f = f32::from(side);
    let half_pixel = 1.3 / side_f;
    let mut rgba = Vec::with_capacity(usize::from(side) * usize::from(side) * 4);
    for py in 0..side {
        for px in 0..side {
            // Offsets from the center in half pixels, so mirrored columns are exact negations.
            let x = (2.0 * f32::from(px) + 1.0 - side_f) * half_pixel;
            let y = 1.2 - (f32::from(py) + 0.5) * 2.0 * half_pixel;
            let alpha = if in_heart(x, y) { 0xff } else { 0x00 };
            rgba.extend_from_slice(&HEART_RGB);
            rgba.push(alpha);
        }
    }
    IconData {
        rgba,
        width: u32::from(side),
        height: u32::from(side),
    }
}

fn in_heart(x: f32, y: f32) -> bool {
    let r = x * x + y * y - 1.0;
    r * r * r - x * x * y * y * y <= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heart_is_filled_in_the_middle_and_clear_in_the_corners() {
        let icon = heart_icon(64);
        assert_eq!(icon.rgba.len(), 64 * 64 * 4);

        let alpha = |px: usize, py: usize| icon.rgba[(py * 64 + px) * 4 + 3];
        assert_eq!(alpha(32, 32), 0xff);
        assert_eq!(alpha(0, 0), 0x00);
        assert_eq!(alpha(63, 0), 0x00);
        assert_eq!(alpha(32, 63), 0x00);
    }

    #[test]
    fn heart_is_mirror_symmetric() {
        let side = 32;
        let icon = heart_icon(32);
        for py in 0..side {
            for px in 0..side / 2 {
                let left = (py * side + px) * 4 + 3;
                let right = (py * side + (side - 1 - px)) * 4 + 3;
                assert_eq!(icon.rgba[left], icon.rgba[right], "row {py}, col {px}");
            }
        }
    }
}
