//! Horizontal layout of logo elements.
//!
//! Elements sit left to right with a fixed gap between neighbours and are
//! centred vertically on a canvas as tall as the tallest element.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub extent: Extent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub gap: u32,
    pub width: u32,
    pub height: u32,
    pub placements: Vec<Placement>,
}

pub fn gap_for(icon_width: u32, ratio: f32) -> u32 {
    (icon_width as f32 * ratio).round().max(0.0) as u32
}

pub fn arrange(extents: &[Extent], gap: u32) -> Layout {
    let height = extents.iter().map(|e| e.height).max().unwrap_or(0);
    let gaps = extents.len().saturating_sub(1) as u32;
    let width = extents.iter().map(|e| e.width).sum::<u32>() + gap * gaps;

    let mut placements = Vec::with_capacity(extents.len());
    let mut cursor = 0;
    for (i, extent) in extents.iter().enumerate() {
        placements.push(Placement {
            x: cursor,
            y: (height - extent.height) / 2,
            extent: *extent,
        });
        if i + 1 < extents.len() {
            cursor += extent.width + gap;
        }
    }

    log::debug!(
        "Layout {}x{} with gap {} across {} elements",
        width,
        height,
        gap,
        placements.len()
    );

    Layout {
        gap,
        width,
        height,
        placements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_rounds_ten_percent() {
        assert_eq!(gap_for(64, 0.1), 6);
        assert_eq!(gap_for(65, 0.1), 7);
        assert_eq!(gap_for(100, 0.1), 10);
        assert_eq!(gap_for(4, 0.1), 0);
        assert_eq!(gap_for(0, 0.1), 0);
    }

    #[test]
    fn test_width_is_sum_plus_gaps() {
        let extents = [Extent::new(120, 50), Extent::new(64, 64), Extent::new(40, 48)];
        let layout = arrange(&extents, 6);

        assert_eq!(layout.width, 120 + 64 + 40 + 6 * 2);
        assert_eq!(layout.height, 64);
        assert_eq!(layout.gap, 6);
    }

    #[test]
    fn test_placements_advance_and_centre() {
        let extents = [Extent::new(120, 50), Extent::new(64, 64), Extent::new(40, 47)];
        let layout = arrange(&extents, 6);

        let xs: Vec<u32> = layout.placements.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0, 126, 196]);

        let ys: Vec<u32> = layout.placements.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![7, 0, 8]);

        let last = layout.placements.last().unwrap();
        assert_eq!(last.x + last.extent.width, layout.width);
    }

    #[test]
    fn test_single_and_empty() {
        let layout = arrange(&[Extent::new(10, 20)], 5);
        assert_eq!(layout.width, 10);
        assert_eq!(layout.height, 20);

        let layout = arrange(&[], 5);
        assert_eq!(layout.width, 0);
        assert_eq!(layout.height, 0);
        assert!(layout.placements.is_empty());
    }
}
