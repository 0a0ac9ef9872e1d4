//! Alpha edge feathering.

use decal_core::PixelGrid;

/// Smooth hard alpha boundaries into a one-pixel ramp.
///
/// An interior pixel qualifies when its 4-connected neighborhood holds
/// both full transparency and full opacity; it then takes the unweighted
/// mean of its 3x3 neighborhood's alpha, rounded to nearest. Every read
/// goes through a snapshot taken before the pass writes anything, so the
/// result never mixes feathered and unfeathered values. The outer border
/// row and column are never rewritten. Returns the number of pixels
/// feathered.
pub fn feather_alpha(grid: &mut PixelGrid) -> usize {
    let width = grid.width() as usize;
    let height = grid.height() as usize;
    if width < 3 || height < 3 {
        return 0;
    }

    let snapshot = grid.alpha_snapshot();
    let mut feathered = 0;

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let idx = y * width + x;
            let cross = [
                snapshot[idx - 1],
                snapshot[idx + 1],
                snapshot[idx - width],
                snapshot[idx + width],
            ];
            if !(cross.contains(&0) && cross.contains(&255)) {
                continue;
            }

            let mut sum = 0u32;
            for dy in 0..3 {
                let row = (y + dy - 1) * width + x - 1;
                for dx in 0..3 {
                    sum += u32::from(snapshot[row + dx]);
                }
            }
            grid.set_alpha_at(idx, (sum as f32 / 9.0).round() as u8);
            feathered += 1;
        }
    }
    feathered
}
