//! Registry of slides and their observed visibility.
//!
//! Slides register when they mount and report intersection ratios as their
//! observers fire. Slides are kept in registration order until the platform
//! re-orders them with [`VisibilityRegistry::order_by`], which is how the
//! browser layer keeps them in document order.

use std::cmp::Ordering;

use crate::navigation::Direction;

/// An intersection ratio as stored: clamped to `[0, 1]`, NaN read as 0.
pub fn normalize_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

/// Identity of a registered slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId(u64);

#[derive(Debug, Clone)]
struct SlideEntry<H> {
    id: SlideId,
    handle: Option<H>,
    ratio: f64,
}

/// Ordered slide registry, generic over the platform's element handle.
#[derive(Debug, Clone)]
pub struct VisibilityRegistry<H> {
    next_id: u64,
    slides: Vec<SlideEntry<H>>,
}

impl<H> Default for VisibilityRegistry<H> {
    fn default() -> Self {
        Self {
            next_id: 0,
            slides: Vec::new(),
        }
    }
}

impl<H> VisibilityRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Append a slide. Its element handle can be attached once mounted.
    pub fn register(&mut self) -> SlideId {
        let id = SlideId(self.next_id);
        self.next_id += 1;
        self.slides.push(SlideEntry {
            id,
            handle: None,
            ratio: 0.0,
        });
        id
    }

    /// Remove a slide, returning its handle if one was attached.
    pub fn unregister(&mut self, id: SlideId) -> Option<H> {
        let index = self.index_of(id)?;
        self.slides.remove(index).handle
    }

    /// Attach the mounted element for a slide.
    pub fn attach(&mut self, id: SlideId, handle: H) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.handle = Some(handle);
                true
            }
            None => false,
        }
    }

    pub fn index_of(&self, id: SlideId) -> Option<usize> {
        self.slides.iter().position(|s| s.id == id)
    }

    pub fn handle(&self, index: usize) -> Option<&H> {
        self.slides.get(index)?.handle.as_ref()
    }

    /// Record a slide's intersection ratio, clamped to `[0, 1]`.
    ///
    /// Returns `true` if the stored ratio changed.
    pub fn set_ratio(&mut self, id: SlideId, ratio: f64) -> bool {
        let ratio = normalize_ratio(ratio);
        match self.entry_mut(id) {
            Some(entry) if entry.ratio != ratio => {
                entry.ratio = ratio;
                true
            }
            _ => false,
        }
    }

    pub fn ratio(&self, id: SlideId) -> Option<f64> {
        self.slides.iter().find(|s| s.id == id).map(|s| s.ratio)
    }

    /// Indices of slides that are at least partly visible.
    pub fn visible(&self) -> impl Iterator<Item = usize> + '_ {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, s)| s.ratio > 0.0)
            .map(|(i, _)| i)
    }

    /// The visible slide nearest the edge we'd move away from.
    ///
    /// `Prev` scans from the start of the list, `Next` from the end, so
    /// `Next` yields the last visible slide.
    pub fn first_visible(&self, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Prev => self.visible().next(),
            Direction::Next => self.visible().last(),
        }
    }

    /// Whether the slides already follow `cmp`. Slides without a handle
    /// sort after every mounted slide.
    pub fn is_ordered_by(&self, mut cmp: impl FnMut(&H, &H) -> Ordering) -> bool {
        self.slides
            .windows(2)
            .all(|pair| compare_entries(&pair[0], &pair[1], &mut cmp) != Ordering::Greater)
    }

    /// Re-order slides by their handles. Returns `true` if anything moved.
    ///
    /// The sort is stable, so slides that compare equal keep their
    /// registration order.
    pub fn order_by(&mut self, mut cmp: impl FnMut(&H, &H) -> Ordering) -> bool {
        if self.is_ordered_by(&mut cmp) {
            return false;
        }
        self.slides.sort_by(|a, b| compare_entries(a, b, &mut cmp));
        true
    }

    fn entry_mut(&mut self, id: SlideId) -> Option<&mut SlideEntry<H>> {
        self.slides.iter_mut().find(|s| s.id == id)
    }
}

fn compare_entries<H>(
    a: &SlideEntry<H>,
    b: &SlideEntry<H>,
    cmp: &mut impl FnMut(&H, &H) -> Ordering,
) -> Ordering {
    match (&a.handle, &b.handle) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
