//! Geometry of window chrome inside a frame, and of the minimized tray.

use comicdesk_common::{Rect, Size};
use comicdesk_config::schema::CompositorConfig;
use comicdesk_wm::Chrome;

use crate::scene::{ButtonKind, ChromeButton};

/// Pixel sizes used to lay out chrome. Built from `[compositor]` config.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromeLayout {
    pub title_bar_height: f64,
    pub button_size: f64,
    pub button_gap: f64,
    pub resize_handle_size: f64,
    pub tray_height: f64,
    pub tray_entry_width: f64,
    pub tray_gap: f64,
}

impl Default for ChromeLayout {
    fn default() -> Self {
        Self::from_config(&CompositorConfig::default())
    }
}

impl ChromeLayout {
    pub fn from_config(config: &CompositorConfig) -> Self {
        Self {
            title_bar_height: config.title_bar_height,
            button_size: config.button_size,
            button_gap: config.button_gap,
            resize_handle_size: config.resize_handle_size,
            tray_height: config.tray_height,
            tray_entry_width: config.tray_entry_width,
            tray_gap: config.tray_gap,
        }
    }

    /// Inset of the button row from the frame's right (and top) edge.
    fn inset(&self) -> f64 {
        self.button_gap * 2.0
    }

    /// Draggable strip across the top of the frame.
    pub fn title_bar_rect(&self, frame: Rect) -> Rect {
        Rect::new(frame.x, frame.y, frame.width, self.title_bar_height.min(frame.height))
    }

    /// Area left for window content.
    pub fn content_rect(&self, frame: Rect, has_title_bar: bool) -> Rect {
        if !has_title_bar {
            return frame;
        }
        let bar = self.title_bar_height.min(frame.height);
        Rect::new(frame.x, frame.y + bar, frame.width, (frame.height - bar).max(0.0))
    }

    /// Bottom-right resize grip.
    pub fn resize_handle_rect(&self, frame: Rect) -> Rect {
        let size = self.resize_handle_size;
        Rect::new(frame.right() - size, frame.bottom() - size, size, size)
    }

    /// Buttons for a frame, left to right.
    ///
    /// With a title bar the row holds minimize, maximize and close as the
    /// chrome allows. Without one only minimize and close are offered,
    /// floating over the content's top-right corner.
    pub fn buttons(&self, frame: Rect, chrome: &Chrome) -> Vec<ChromeButton> {
        let mut kinds = Vec::with_capacity(3);
        if chrome.minimizable {
            kinds.push(ButtonKind::Minimize);
        }
        if chrome.title_bar && chrome.maximizable {
            kinds.push(ButtonKind::Maximize);
        }
        if chrome.closeable {
            kinds.push(ButtonKind::Close);
        }

        let size = self.button_size;
        let y = if chrome.title_bar {
            frame.y + (self.title_bar_height - size).max(0.0) / 2.0
        } else {
            frame.y + self.inset()
        };

        let mut right = frame.right() - self.inset();
        let mut buttons: Vec<ChromeButton> = kinds
            .into_iter()
            .rev()
            .map(|kind| {
                let rect = Rect::new(right - size, y, size, size);
                right = rect.x - self.button_gap;
                ChromeButton { kind, rect }
            })
            .collect();
        buttons.reverse();
        buttons
    }

    /// Strip along the bottom of the container holding minimized windows.
    pub fn tray_rect(&self, container: Size) -> Rect {
        let height = self.tray_height.min(container.height);
        Rect::new(0.0, container.height - height, container.width, height)
    }

    /// Slot `index` inside the tray, counted from the left.
    pub fn tray_entry_rect(&self, tray: Rect, index: usize) -> Rect {
        let gap = self.tray_gap;
        Rect::new(
            tray.x + gap + index as f64 * (self.tray_entry_width + gap),
            tray.y + gap,
            self.tray_entry_width,
            (tray.height - 2.0 * gap).max(0.0),
        )
    }
}
