//! Geometry pass: turn panel sizes into world rectangles
//!
//! Each group splits its main-axis extent among its children in proportion to
//! what they ask for, never giving a child less than its minimum. Panels then
//! take their rectangle's size as their current size.

use super::node::{Group, LayoutNode, Rect};

/// One child's claim on its parent's main axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Claim {
    pub preferred: f32,
    pub min: f32,
    /// Keeps `preferred` while flexible siblings can absorb the difference
    pub fixed: bool,
}

/// Split `available` among `claims`.
///
/// When the minimums alone do not fit, every child gets its minimum and the
/// group overflows.
pub fn distribute(available: f32, claims: &[Claim]) -> Vec<f32> {
    let available = available.max(0.0);
    let total_min: f32 = claims.iter().map(|c| c.min).sum();
    if available <= total_min {
        return claims.iter().map(|c| c.min).collect();
    }

    let mut out = vec![0.0; claims.len()];
    let flexible: Vec<usize> = (0..claims.len()).filter(|&i| !claims[i].fixed).collect();
    let fixed_total: f32 = claims
        .iter()
        .filter(|c| c.fixed)
        .map(|c| c.preferred.max(c.min))
        .sum();
    let flexible_min: f32 = flexible.iter().map(|&i| claims[i].min).sum();

    if !flexible.is_empty() && available - fixed_total >= flexible_min {
        for (i, claim) in claims.iter().enumerate() {
            if claim.fixed {
                out[i] = claim.preferred.max(claim.min);
            }
        }
        proportional(available - fixed_total, claims, &flexible, &mut out);
    } else {
        let all: Vec<usize> = (0..claims.len()).collect();
        proportional(available, claims, &all, &mut out);
    }
    out
}

/// Proportional split over `indices`, freezing children that would fall
/// below their minimum and redistributing the rest.
fn proportional(space: f32, claims: &[Claim], indices: &[usize], out: &mut [f32]) {
    let mut free: Vec<usize> = indices.to_vec();
    let mut remaining = space;

    while !free.is_empty() {
        let preferred_sum: f32 = free.iter().map(|&i| claims[i].preferred.max(0.0)).sum();
        let share = |i: usize| {
            if preferred_sum > 0.0 {
                claims[i].preferred.max(0.0) * remaining / preferred_sum
            } else {
                remaining / free.len() as f32
            }
        };

        let violators: Vec<usize> = free
            .iter()
            .copied()
            .filter(|&i| share(i) < claims[i].min)
            .collect();

        if violators.is_empty() {
            for &i in &free {
                out[i] = share(i);
            }
            return;
        }

        for &i in &violators {
            out[i] = claims[i].min;
            remaining -= claims[i].min;
        }
        free.retain(|i| !violators.contains(i));
    }
}

/// Lay out `group` and everything below it inside `rect`
pub fn layout_group(group: &mut Group, rect: Rect) {
    group.rect = rect;
    let o = group.axis.orientation();
    let cross = o.cross();

    let claims: Vec<Claim> = group
        .children()
        .iter()
        .map(|child| Claim {
            preferred: child.preferred_extent(o),
            min: child.min_extent(o),
            fixed: child.is_fixed(),
        })
        .collect();
    let extents = distribute(rect.extent(o), &claims);

    let reversed = group.axis.is_reversed();
    let cross_span = (rect.start(cross), rect.extent(cross));
    let mut cursor = if reversed { rect.end(o) } else { rect.start(o) };

    for (child, extent) in group.children_mut().iter_mut().zip(extents) {
        let start = if reversed {
            cursor -= extent;
            cursor
        } else {
            let start = cursor;
            cursor += extent;
            start
        };
        layout_node(child, Rect::from_spans(o, (start, extent), cross_span));
    }
}

fn layout_node(node: &mut LayoutNode, rect: Rect) {
    match node {
        LayoutNode::Group(group) => layout_group(group, rect),
        LayoutNode::Panel(panel) => {
            // Panels never go below their minimum, even if that overflows
            let width = rect.width.max(panel.min_size.width);
            let height = rect.height.max(panel.min_size.height);
            panel.rect = Rect::new(rect.x, rect.y, width, height);
            panel.size.width = width;
            panel.size.height = height;
        }
    }
}
