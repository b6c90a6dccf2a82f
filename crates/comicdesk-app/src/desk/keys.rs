use comicdesk_wm::WindowCommand;

use crate::windows::WindowView;

use super::types::Desk;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeskKey {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl Desk {
    /// Route a key press to the focused window. Returns true if handled.
    pub fn press_key(&mut self, key: DeskKey) -> bool {
        let Some(id) = self.store.focused().map(|w| w.id.clone()) else {
            return false;
        };
        if key == DeskKey::Escape {
            let closes = matches!(self.store.content(&id), Some(WindowView::Test(_)));
            return closes && self.store.execute(WindowCommand::Close(id));
        }
        let Some(view) = self.store.content_mut(&id) else {
            return false;
        };

        match (view, key) {
            (WindowView::Test(panel), DeskKey::ArrowRight) => {
                panel.press_right();
                true
            }
            (WindowView::Reader(reader), DeskKey::ArrowRight) => {
                reader.next_page();
                true
            }
            (WindowView::Reader(reader), DeskKey::ArrowLeft) => {
                reader.prev_page();
                true
            }
            _ => false,
        }
    }
}
