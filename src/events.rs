use super::*;
use behaviors::Handler;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum EventKind {
    Click,
    Input,
    Focus,
    Blur,
    Submit,
    Scroll,
}

impl EventKind {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Input => "input",
            Self::Focus => "focus",
            Self::Blur => "blur",
            Self::Submit => "submit",
            Self::Scroll => "scroll",
        }
    }

    /// Focus, blur and scroll stay on their target.
    pub(crate) fn bubbles(self) -> bool {
        matches!(self, Self::Click | Self::Input | Self::Submit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum EventTarget {
    Window,
    Node(NodeId),
}

#[derive(Debug, Clone)]
pub(crate) struct EventState {
    pub(crate) kind: EventKind,
    pub(crate) target: EventTarget,
    pub(crate) current_target: EventTarget,
    pub(crate) default_prevented: bool,
}

impl EventState {
    pub(crate) fn new(kind: EventKind, target: EventTarget) -> Self {
        Self {
            kind,
            target,
            current_target: target,
            default_prevented: false,
        }
    }

    pub(crate) fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct ListenerId(pub(crate) u64);

#[derive(Debug, Clone)]
pub(crate) struct Listener {
    pub(crate) id: ListenerId,
    pub(crate) handler: Handler,
}

#[derive(Debug, Default)]
pub(crate) struct ListenerStore {
    map: HashMap<EventTarget, HashMap<EventKind, Vec<Listener>>>,
    next_id: u64,
}

impl ListenerStore {
    pub(crate) fn add(&mut self, target: EventTarget, kind: EventKind, handler: Handler) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.map
            .entry(target)
            .or_default()
            .entry(kind)
            .or_default()
            .push(Listener { id, handler });
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let mut removed = false;
        for events in self.map.values_mut() {
            for listeners in events.values_mut() {
                let before = listeners.len();
                listeners.retain(|listener| listener.id != id);
                removed |= listeners.len() != before;
            }
            events.retain(|_, listeners| !listeners.is_empty());
        }
        self.map.retain(|_, events| !events.is_empty());
        removed
    }

    /// Snapshot, so handlers may register or dispose while the event runs.
    pub(crate) fn get(&self, target: EventTarget, kind: EventKind) -> Vec<Listener> {
        self.map
            .get(&target)
            .and_then(|events| events.get(&kind))
            .cloned()
            .unwrap_or_default()
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.map
            .values()
            .flat_map(|events| events.values())
            .flatten()
            .any(|listener| listener.id == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.map
            .values()
            .flat_map(|events| events.values())
            .map(Vec::len)
            .sum()
    }
}
