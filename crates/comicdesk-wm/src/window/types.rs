use comicdesk_common::{Rect, Size, WindowId};
use serde::{Deserialize, Serialize};

use crate::geometry::{Measure, StartAnchor};
use crate::portal::PortalKey;

/// Which chrome affordances a window offers. Everything is on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chrome {
    pub closeable: bool,
    pub minimizable: bool,
    pub maximizable: bool,
    pub resizable: bool,
    pub movable: bool,
    pub title_bar: bool,
}

impl Default for Chrome {
    fn default() -> Self {
        Self {
            closeable: true,
            minimizable: true,
            maximizable: true,
            resizable: true,
            movable: true,
            title_bar: true,
        }
    }
}

/// Partial chrome settings. `None` keeps whatever the target already has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeOverrides {
    pub closeable: Option<bool>,
    pub minimizable: Option<bool>,
    pub maximizable: Option<bool>,
    pub resizable: Option<bool>,
    pub movable: Option<bool>,
    pub title_bar: Option<bool>,
}

impl ChromeOverrides {
    /// Every affordance switched off, including the title bar.
    pub fn locked() -> Self {
        Self {
            closeable: Some(false),
            minimizable: Some(false),
            maximizable: Some(false),
            resizable: Some(false),
            movable: Some(false),
            title_bar: Some(false),
        }
    }

    pub fn resolve(&self) -> Chrome {
        self.apply_to(Chrome::default())
    }

    pub fn apply_to(&self, base: Chrome) -> Chrome {
        Chrome {
            closeable: self.closeable.unwrap_or(base.closeable),
            minimizable: self.minimizable.unwrap_or(base.minimizable),
            maximizable: self.maximizable.unwrap_or(base.maximizable),
            resizable: self.resizable.unwrap_or(base.resizable),
            movable: self.movable.unwrap_or(base.movable),
            title_bar: self.title_bar.unwrap_or(base.title_bar),
        }
    }
}

/// How a window wants to appear when it is first opened.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InitialStatus {
    pub start_position: Option<StartAnchor>,
    pub left: Option<Measure>,
    pub top: Option<Measure>,
    pub width: Option<Measure>,
    pub height: Option<Measure>,
    pub is_maximized: Option<bool>,
    pub is_minimized: Option<bool>,
    pub is_focused: Option<bool>,
}

impl InitialStatus {
    pub fn anchored(anchor: StartAnchor) -> Self {
        Self {
            start_position: Some(anchor),
            ..Default::default()
        }
    }

    pub fn anchor(&self) -> StartAnchor {
        self.start_position.unwrap_or_default()
    }

    pub fn with_width(mut self, width: impl Into<Measure>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_height(mut self, height: impl Into<Measure>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn with_size(self, width: impl Into<Measure>, height: impl Into<Measure>) -> Self {
        self.with_width(width).with_height(height)
    }

    pub fn with_position(mut self, left: impl Into<Measure>, top: impl Into<Measure>) -> Self {
        self.left = Some(left.into());
        self.top = Some(top.into());
        self
    }

    pub fn maximized(mut self) -> Self {
        self.is_maximized = Some(true);
        self
    }

    pub fn minimized(mut self) -> Self {
        self.is_minimized = Some(true);
        self
    }

    pub fn unfocused(mut self) -> Self {
        self.is_focused = Some(false);
        self
    }

    /// Fill in missing width/height with the store defaults.
    pub(crate) fn with_sizes_defaulted(mut self, width: f64, height: f64) -> Self {
        self.width.get_or_insert(Measure::Pixels(width));
        self.height.get_or_insert(Measure::Pixels(height));
        self
    }
}

/// Live state of an open window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowStatus {
    pub is_moving: bool,
    pub is_resizing: bool,
    pub is_maximized: bool,
    pub is_minimized: bool,
    pub is_focused: bool,
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
}

impl WindowStatus {
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.left = rect.x;
        self.top = rect.y;
        self.width = rect.width;
        self.height = rect.height;
    }

    /// True when the whole window lies inside a container of `size`.
    pub fn fits_within(&self, size: Size) -> bool {
        self.left >= 0.0
            && self.top >= 0.0
            && self.left + self.width <= size.width
            && self.top + self.height <= size.height
    }
}

/// Geometry saved on maximize so un-maximize can put the window back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RestoreStatus {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
}

impl From<&WindowStatus> for RestoreStatus {
    fn from(status: &WindowStatus) -> Self {
        Self {
            width: status.width,
            height: status.height,
            left: status.left,
            top: status.top,
        }
    }
}

/// One open window as the store tracks it.
///
/// Content lives in the store's portal arena under `portal`, so the
/// instance itself stays cheap to clone and serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowInstance {
    pub id: WindowId,
    pub title: Option<String>,
    pub chrome: Chrome,
    pub class_name: Option<String>,
    pub content_class_name: Option<String>,
    pub unique: bool,
    pub initial_status: InitialStatus,
    pub status: WindowStatus,
    pub restore_status: Option<RestoreStatus>,
    /// Container size the current geometry was last computed against.
    pub original_container_size: Size,
    #[serde(skip)]
    pub portal: PortalKey,
}

impl WindowInstance {
    /// Title bar text: the title, or the id when there is none.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => self.id.as_str(),
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.status.is_minimized
    }

    /// Whether the resize grip should be offered right now.
    pub fn shows_resize_handle(&self) -> bool {
        self.chrome.resizable && !self.status.is_maximized
    }
}
