use comicdesk_common::WindowId;
use comicdesk_compositor::Scene;
use serde::Serialize;

use crate::windows::WindowView;

use super::types::Desk;

/// Everything a frontend needs to paint the desk.
#[derive(Debug, Clone, Serialize)]
pub struct DeskSnapshot {
    pub scene: Scene,
    pub views: Vec<ViewEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewEntry {
    pub id: WindowId,
    pub view: WindowView,
}

impl Desk {
    pub fn snapshot(&mut self) -> DeskSnapshot {
        let scene = self.render().clone();
        let views = self
            .store
            .windows()
            .iter()
            .filter_map(|w| {
                self.store.content(&w.id).map(|view| ViewEntry {
                    id: w.id.clone(),
                    view: view.clone(),
                })
            })
            .collect();
        DeskSnapshot { scene, views }
    }
}
