use comicdesk_common::EventBus;
use comicdesk_compositor::Compositor;
use comicdesk_wm::{WindowRegistry, WindowStore};

use crate::windows::WindowView;

pub struct Desk {
    pub(super) store: WindowStore<WindowView>,
    pub(super) compositor: Compositor,
    pub(super) registry: WindowRegistry<WindowView>,
    pub(super) events: EventBus,
}
