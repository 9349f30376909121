//! Element handles written from `onmounted`.
//!
//! A [`NodeRef`] is a reactive slot for a mounted element. [`ComposedRef`]
//! fans one mount out to several slots, so the slide list can be tracked by
//! its own component, the carousel context and the host page at once.

use std::rc::Rc;

use dioxus::prelude::*;

/// Something that can be told which node is currently mounted.
pub trait NodeSlot<T> {
    fn assign(&self, node: Option<T>);
}

/// Reactive handle to a mounted element.
pub struct NodeRef<T: 'static = web_sys::Element> {
    node: Signal<Option<T>>,
}

impl<T: 'static> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for NodeRef<T> {}

impl<T: 'static> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<T: Clone + 'static> NodeRef<T> {
    /// The mounted node, without subscribing the caller. `None` once the
    /// owning component is gone.
    pub fn get(&self) -> Option<T> {
        self.node.try_peek().ok().and_then(|node| node.clone())
    }

    /// The mounted node, re-running the calling scope or effect when it
    /// changes.
    pub fn current(&self) -> Option<T> {
        self.node.read().clone()
    }
}

impl<T: 'static> NodeSlot<T> for NodeRef<T> {
    fn assign(&self, node: Option<T>) {
        // Clearing on unmount can race the owner's own teardown.
        let mut slot = self.node;
        if let Ok(mut current) = slot.try_write() {
            *current = node;
        }
    }
}

/// Create a [`NodeRef`] owned by the current component.
pub fn use_node_ref<T: 'static>() -> NodeRef<T> {
    let node = use_signal(|| None);
    NodeRef { node }
}

/// Several slots assigned together.
pub struct ComposedRef<T> {
    slots: Vec<Rc<dyn NodeSlot<T>>>,
}

impl<T> Default for ComposedRef<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T: Clone> ComposedRef<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, slot: impl NodeSlot<T> + 'static) -> Self {
        self.slots.push(Rc::new(slot));
        self
    }

    pub fn with_opt(self, slot: Option<impl NodeSlot<T> + 'static>) -> Self {
        match slot {
            Some(slot) => self.with(slot),
            None => self,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T: Clone> NodeSlot<T> for ComposedRef<T> {
    fn assign(&self, node: Option<T>) {
        for slot in &self.slots {
            slot.assign(node.clone());
        }
    }
}
