//! Pointer gestures translated into selection changes over the visible ordering.
//!
//! Everything here is pure: callers pass the ids in the order the pipeline rendered them, the
//! current selection, and the anchor, and get back the next selection. The view layer only reads
//! modifier keys and element rectangles from the DOM.

use drive_model::FileId;

/// Pointer travel below which a background drag is treated as a click.
pub const MARQUEE_THRESHOLD_PX: f64 = 4.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Modifier keys held during a gesture.
pub struct Modifiers {
    /// Shift: range selection, or continue-select for the marquee.
    pub shift: bool,
    /// Ctrl or Cmd: toggle instead of replace.
    pub toggle: bool,
}

impl Modifiers {
    /// Reads modifiers from a mouse event; Cmd counts as Ctrl.
    pub fn from_mouse(ev: &web_sys::MouseEvent) -> Self {
        Self {
            shift: ev.shift_key(),
            toggle: ev.ctrl_key() || ev.meta_key(),
        }
    }

    /// Modifiers of a checkbox click, which always toggles.
    pub fn checkbox() -> Self {
        Self {
            shift: false,
            toggle: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Selection and anchor after a gesture.
pub struct SelectionChange {
    /// New selection.
    pub selected: Vec<FileId>,
    /// New range anchor.
    pub anchor: Option<FileId>,
}

fn range_between(visible: &[FileId], from: usize, to: usize) -> &[FileId] {
    let (start, end) = if from <= to { (from, to) } else { (to, from) };
    &visible[start..=end]
}

/// Applies a click on `target`.
///
/// Plain clicks select only the target, Ctrl/Cmd toggles it, and Shift selects the inclusive
/// span from the anchor (adding to the selection when Ctrl/Cmd is held too). A Shift-click
/// without a visible anchor falls back to a plain click.
pub fn click(
    visible: &[FileId],
    selected: &[FileId],
    anchor: Option<FileId>,
    target: FileId,
    modifiers: Modifiers,
) -> SelectionChange {
    if modifiers.shift {
        let anchor_index = anchor.and_then(|anchor| visible.iter().position(|id| *id == anchor));
        let target_index = visible.iter().position(|id| *id == target);
        if let (Some(from), Some(to)) = (anchor_index, target_index) {
            let span = range_between(visible, from, to);
            let selected = if modifiers.toggle {
                let mut merged = selected.to_vec();
                merged.extend(span.iter().filter(|id| !selected.contains(id)));
                merged
            } else {
                span.to_vec()
            };
            return SelectionChange { selected, anchor };
        }
    }

    if modifiers.toggle {
        let mut next = selected.to_vec();
        if let Some(index) = next.iter().position(|id| *id == target) {
            next.remove(index);
        } else {
            next.push(target);
        }
        return SelectionChange {
            selected: next,
            anchor: Some(target),
        };
    }

    SelectionChange {
        selected: vec![target],
        anchor: Some(target),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Axis-aligned rectangle in client coordinates.
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
}

impl Rect {
    /// Normalized rectangle spanned by two corner points.
    pub fn from_corners(a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            left: a.0.min(b.0),
            top: a.1.min(b.1),
            right: a.0.max(b.0),
            bottom: a.1.max(b.1),
        }
    }

    /// Width.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Returns `true` when the interiors overlap; touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}

/// Ids whose rectangles intersect `marquee`, in the order given.
pub fn hit_test(marquee: &Rect, items: &[(FileId, Rect)]) -> Vec<FileId> {
    items
        .iter()
        .filter(|(_, rect)| marquee.intersects(rect))
        .map(|(id, _)| *id)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
/// In-progress rubber-band selection.
pub struct MarqueeSession {
    origin: (f64, f64),
    base: Vec<FileId>,
    continue_select: bool,
}

impl MarqueeSession {
    /// Starts a marquee at `origin`. With Shift held the existing selection is kept and hits
    /// toggle against it; otherwise the marquee starts from nothing.
    pub fn begin(origin: (f64, f64), selected: &[FileId], modifiers: Modifiers) -> Self {
        Self {
            origin,
            base: if modifiers.shift {
                selected.to_vec()
            } else {
                Vec::new()
            },
            continue_select: modifiers.shift,
        }
    }

    /// Rectangle between the origin and `pointer`.
    pub fn rect_to(&self, pointer: (f64, f64)) -> Rect {
        Rect::from_corners(self.origin, pointer)
    }

    /// Returns `true` once the pointer moved far enough to count as a drag.
    pub fn is_drag(&self, pointer: (f64, f64)) -> bool {
        let rect = self.rect_to(pointer);
        rect.width() >= MARQUEE_THRESHOLD_PX || rect.height() >= MARQUEE_THRESHOLD_PX
    }

    /// Selection while the pointer is at `pointer`.
    ///
    /// Recomputed from the starting selection each time, so ids entering the rectangle are
    /// selected and ids leaving it revert.
    pub fn selection_at(&self, pointer: (f64, f64), items: &[(FileId, Rect)]) -> Vec<FileId> {
        let hits = hit_test(&self.rect_to(pointer), items);
        if !self.continue_select {
            return hits;
        }

        let mut next: Vec<FileId> = self
            .base
            .iter()
            .copied()
            .filter(|id| !hits.contains(id))
            .collect();
        next.extend(hits.into_iter().filter(|id| !self.base.contains(id)));
        next
    }
}
