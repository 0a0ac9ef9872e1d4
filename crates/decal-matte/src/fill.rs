//! Background reachability: border-seeded flood fill and enclosed-hole
//! removal.
//!
//! Only pixels connected to the image border through a contiguous run of
//! key-colored pixels are cleared by the first pass, so key-colored detail
//! inside the subject survives it. The second pass then clears key-colored
//! regions that are sealed off by foreground (the gap between crossed
//! arms and the like), seeding only from pixels conservatively close to
//! the key color.

use std::collections::VecDeque;

use decal_core::PixelGrid;

use crate::matcher::KeyMatcher;

/// Per-pixel classification produced by the reachability passes.
///
/// Classification is terminal: once a pixel is `Background` or
/// `Foreground` it is never reconsidered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelClass {
    /// Not yet visited by any pass.
    #[default]
    Unknown,
    /// Matched the key color; alpha has been cleared.
    Background,
    /// Visited and rejected.
    Foreground,
}

/// 4-connected neighbors of `idx` on a `width` x `height` grid.
pub(crate) fn neighbors4(idx: usize, width: usize, height: usize) -> [Option<usize>; 4] {
    let x = idx % width;
    let y = idx / width;
    [
        if x > 0 { Some(idx - 1) } else { None },
        if x + 1 < width { Some(idx + 1) } else { None },
        if y > 0 { Some(idx - width) } else { None },
        if y + 1 < height { Some(idx + width) } else { None },
    ]
}

/// Clear every key-colored pixel reachable from the image border.
///
/// Multi-source breadth-first traversal over the 4-connected grid. A
/// visited bitmap guards the queue, so each pixel is enqueued at most
/// once; matching pixels are cleared and expanded, non-matching pixels
/// are terminal. Returns the number of pixels cleared.
pub fn border_flood_fill(
    grid: &mut PixelGrid,
    mask: &mut [PixelClass],
    matcher: &KeyMatcher,
) -> usize {
    let width = grid.width() as usize;
    let height = grid.height() as usize;
    if width == 0 || height == 0 {
        return 0;
    }

    let mut visited = vec![false; width * height];
    let mut queue = VecDeque::new();
    for x in 0..width {
        for idx in [x, (height - 1) * width + x] {
            if !visited[idx] {
                visited[idx] = true;
                queue.push_back(idx);
            }
        }
    }
    for y in 0..height {
        for idx in [y * width, y * width + width - 1] {
            if !visited[idx] {
                visited[idx] = true;
                queue.push_back(idx);
            }
        }
    }

    let mut cleared = 0;
    while let Some(idx) = queue.pop_front() {
        if matcher.is_match(grid.rgb_at(idx), false) {
            mask[idx] = PixelClass::Background;
            grid.set_alpha_at(idx, 0);
            cleared += 1;
            for neighbor in neighbors4(idx, width, height).into_iter().flatten() {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        } else {
            mask[idx] = PixelClass::Foreground;
        }
    }
    cleared
}

/// Clear key-colored regions enclosed by foreground, unreachable from the
/// border.
///
/// Runs strictly after [`border_flood_fill`]: already-cleared pixels are
/// skipped through the mask, and one pass-wide `seen` bitmap keeps total
/// work linear no matter how many regions there are. Seeding is
/// conservative (tight RGB distance plus a strict hue re-check); expansion
/// from a seed uses the same general predicate as the border pass.
/// Returns the number of pixels cleared.
pub fn clear_enclosed_holes(
    grid: &mut PixelGrid,
    mask: &mut [PixelClass],
    matcher: &KeyMatcher,
) -> usize {
    let width = grid.width() as usize;
    let height = grid.height() as usize;
    let mut seen = vec![false; width * height];
    let mut queue = VecDeque::new();
    let mut cleared = 0;

    for start in 0..width * height {
        if seen[start] || mask[start] == PixelClass::Background {
            continue;
        }
        if !matcher.is_hole_seed(grid.rgb_at(start)) {
            continue;
        }

        seen[start] = true;
        queue.push_back(start);
        while let Some(idx) = queue.pop_front() {
            if mask[idx] == PixelClass::Background {
                continue;
            }
            if matcher.is_match(grid.rgb_at(idx), false) {
                mask[idx] = PixelClass::Background;
                grid.set_alpha_at(idx, 0);
                cleared += 1;
                for neighbor in neighbors4(idx, width, height).into_iter().flatten() {
                    if !seen[neighbor] {
                        seen[neighbor] = true;
                        queue.push_back(neighbor);
                    }
                }
            } else {
                mask[idx] = PixelClass::Foreground;
            }
        }
    }
    cleared
}
