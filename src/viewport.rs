use super::*;
use behaviors::Handler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

/// A programmatic `scrollTo` issued by the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone)]
pub(crate) struct Viewport {
    pub(crate) scroll_y: f64,
    pub(crate) inner_height: f64,
    pub(crate) requests: Vec<ScrollRequest>,
}

impl Viewport {
    pub(crate) fn new(inner_height: f64) -> Self {
        Self {
            scroll_y: 0.0,
            inner_height,
            requests: Vec::new(),
        }
    }

    pub(crate) fn bottom(&self) -> f64 {
        self.scroll_y + self.inner_height
    }

    /// Visible fraction of `layout`, or `None` when it does not intersect.
    pub(crate) fn intersection_ratio(&self, layout: Option<LayoutBox>) -> Option<f64> {
        let layout = layout?;
        let top = self.scroll_y;
        let bottom = self.bottom();
        if layout.height <= 0.0 {
            return (layout.top >= top && layout.top <= bottom).then_some(1.0);
        }
        let visible = layout.bottom().min(bottom) - layout.top.max(top);
        if visible <= 0.0 {
            return None;
        }
        Some((visible / layout.height).min(1.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct WatchId(pub(crate) u64);

#[derive(Debug, Clone)]
pub(crate) struct IntersectionWatch {
    pub(crate) id: WatchId,
    pub(crate) threshold: f64,
    pub(crate) targets: Vec<NodeId>,
    pub(crate) handler: Handler,
}

#[derive(Debug, Default)]
pub(crate) struct WatchStore {
    watches: Vec<IntersectionWatch>,
    next_id: u64,
}

impl WatchStore {
    pub(crate) fn observe(&mut self, threshold: f64, targets: Vec<NodeId>, handler: Handler) -> WatchId {
        self.next_id += 1;
        let id = WatchId(self.next_id);
        self.watches.push(IntersectionWatch {
            id,
            threshold,
            targets,
            handler,
        });
        id
    }

    pub(crate) fn unobserve(&mut self, id: WatchId, target: NodeId) {
        if let Some(watch) = self.watches.iter_mut().find(|watch| watch.id == id) {
            watch.targets.retain(|node| *node != target);
        }
    }

    pub(crate) fn disconnect(&mut self, id: WatchId) -> bool {
        let before = self.watches.len();
        self.watches.retain(|watch| watch.id != id);
        self.watches.len() != before
    }

    pub(crate) fn contains(&self, id: WatchId) -> bool {
        self.watches.iter().any(|watch| watch.id == id)
    }

    pub(crate) fn snapshot(&self) -> Vec<IntersectionWatch> {
        self.watches.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.watches.len()
    }
}
