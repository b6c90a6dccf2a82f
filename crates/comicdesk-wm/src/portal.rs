//! Content-preserving portals.
//!
//! Each window's content is created once and parked in a slot keyed by a
//! generational [`PortalKey`]. Showing, hiding, or moving the window only
//! retargets the slot; the content value is never dropped or rebuilt until
//! the window closes. A stale key from a closed window resolves to nothing.

use comicdesk_common::Rect;
use slotmap::{new_key_type, SlotMap};
use tracing::trace;

new_key_type! {
    /// Handle to a window's content slot.
    pub struct PortalKey;
}

/// Where a slot's content is currently mounted.
///
/// A slot has exactly one target at a time, so content can never be
/// attached to two frames at once.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DisplayTarget {
    /// Kept alive off-screen (minimized or not yet laid out).
    #[default]
    Offscreen,
    /// Mounted into the content area of a window frame.
    Frame(Rect),
}

impl DisplayTarget {
    pub fn is_visible(&self) -> bool {
        matches!(self, DisplayTarget::Frame(_))
    }
}

#[derive(Debug)]
struct PortalSlot<C> {
    content: C,
    class_name: Option<String>,
    target: DisplayTarget,
    /// Number of times the slot moved between targets.
    retargets: u64,
}

/// Arena of window content slots.
#[derive(Debug)]
pub struct PortalArena<C> {
    slots: SlotMap<PortalKey, PortalSlot<C>>,
}

impl<C> Default for PortalArena<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> PortalArena<C> {
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
        }
    }

    /// Park new content off-screen and return its key.
    pub fn create(&mut self, content: C, class_name: Option<String>) -> PortalKey {
        self.slots.insert(PortalSlot {
            content,
            class_name,
            target: DisplayTarget::Offscreen,
            retargets: 0,
        })
    }

    /// Drop the slot and hand back its content.
    pub fn remove(&mut self, key: PortalKey) -> Option<C> {
        self.slots.remove(key).map(|slot| slot.content)
    }

    pub fn contains(&self, key: PortalKey) -> bool {
        self.slots.contains_key(key)
    }

    pub fn content(&self, key: PortalKey) -> Option<&C> {
        self.slots.get(key).map(|slot| &slot.content)
    }

    pub fn content_mut(&mut self, key: PortalKey) -> Option<&mut C> {
        self.slots.get_mut(key).map(|slot| &mut slot.content)
    }

    /// Swap in new content, returning the old value.
    pub fn replace_content(&mut self, key: PortalKey, content: C) -> Option<C> {
        self.slots
            .get_mut(key)
            .map(|slot| std::mem::replace(&mut slot.content, content))
    }

    pub fn class_name(&self, key: PortalKey) -> Option<&str> {
        self.slots.get(key).and_then(|slot| slot.class_name.as_deref())
    }

    pub fn set_class_name(&mut self, key: PortalKey, class_name: Option<String>) -> bool {
        match self.slots.get_mut(key) {
            Some(slot) => {
                slot.class_name = class_name;
                true
            }
            None => false,
        }
    }

    pub fn target(&self, key: PortalKey) -> Option<DisplayTarget> {
        self.slots.get(key).map(|slot| slot.target)
    }

    /// How many times the slot has changed target since creation.
    pub fn retargets(&self, key: PortalKey) -> Option<u64> {
        self.slots.get(key).map(|slot| slot.retargets)
    }

    /// Mount the content into `frame`. Returns true if the target changed.
    pub fn show(&mut self, key: PortalKey, frame: Rect) -> bool {
        self.retarget(key, DisplayTarget::Frame(frame))
    }

    /// Move the content off-screen. Returns true if the target changed.
    pub fn hide(&mut self, key: PortalKey) -> bool {
        self.retarget(key, DisplayTarget::Offscreen)
    }

    fn retarget(&mut self, key: PortalKey, target: DisplayTarget) -> bool {
        let Some(slot) = self.slots.get_mut(key) else {
            return false;
        };
        if slot.target == target {
            return false;
        }
        trace!(?key, ?target, "portal retargeted");
        slot.target = target;
        slot.retargets += 1;
        true
    }

    pub fn visible_count(&self) -> usize {
        self.slots.values().filter(|s| s.target.is_visible()).count()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
