use comicdesk_wm::{InitialStatus, Measure, StartAnchor, WindowDefinition};
use serde::{Deserialize, Serialize};

use super::view::WindowView;
use super::READER_KEY;

const MIN_ZOOM: f64 = 1.0;
const MAX_ZOOM: f64 = 4.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderProps {
    pub comic: String,
    pub chapter: u32,
}

/// Reading position inside one chapter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReaderView {
    pub comic: String,
    pub chapter: u32,
    /// Zero-based page index.
    pub page: u32,
    pub zoom: f64,
}

impl ReaderView {
    pub fn new(props: ReaderProps) -> Self {
        Self {
            comic: props.comic,
            chapter: props.chapter,
            page: 0,
            zoom: 2.0,
        }
    }

    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.max(MIN_ZOOM).min(MAX_ZOOM);
        }
    }
}

pub(super) fn definition() -> WindowDefinition<WindowView> {
    WindowDefinition::new(READER_KEY, |props: &serde_json::Value| {
        let props: ReaderProps = serde_json::from_value(props.clone()).unwrap_or_default();
        WindowView::Reader(ReaderView::new(props))
    })
    .with_title("Reader")
    .with_content_class_name("h-full w-full")
    .with_initial_status(
        InitialStatus::anchored(StartAnchor::Center).with_size(Measure::percent(70.0), Measure::percent(90.0)),
    )
}
