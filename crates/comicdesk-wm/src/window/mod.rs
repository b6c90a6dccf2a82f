//! Window instance data: chrome flags, status, and the parameter types
//! callers use to open and patch windows.

mod params;
mod types;

pub use params::{WindowCreateParams, WindowPatch};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Measure, StartAnchor};

    #[test]
    fn chrome_defaults_are_all_enabled() {
        let c = Chrome::default();
        assert!(c.closeable && c.minimizable && c.maximizable);
        assert!(c.resizable && c.movable && c.title_bar);
    }

    #[test]
    fn overrides_replace_only_given_flags() {
        let overrides = ChromeOverrides {
            maximizable: Some(false),
            title_bar: Some(false),
            ..Default::default()
        };
        let chrome = overrides.resolve();
        assert!(!chrome.maximizable);
        assert!(!chrome.title_bar);
        assert!(chrome.closeable && chrome.movable);
    }

    #[test]
    fn locked_overrides_disable_everything() {
        let chrome = ChromeOverrides::locked().resolve();
        assert_eq!(
            chrome,
            Chrome {
                closeable: false,
                minimizable: false,
                maximizable: false,
                resizable: false,
                movable: false,
                title_bar: false,
            }
        );
    }

    #[test]
    fn overrides_apply_on_top_of_existing() {
        let base = ChromeOverrides::locked().resolve();
        let merged = ChromeOverrides {
            closeable: Some(true),
            ..Default::default()
        }
        .apply_to(base);
        assert!(merged.closeable);
        assert!(!merged.movable);
    }

    #[test]
    fn initial_status_defaults_fill_only_missing_sizes() {
        let status = InitialStatus::default()
            .with_width(Measure::from("60%"))
            .with_sizes_defaulted(720.0, 480.0);
        assert_eq!(status.width, Some(Measure::from("60%")));
        assert_eq!(status.height, Some(Measure::Pixels(480.0)));
        assert_eq!(status.anchor(), StartAnchor::Center);
    }

    #[test]
    fn initial_status_deserializes_camel_anchor() {
        let status: InitialStatus = serde_json::from_str(
            r#"{"startPosition":"topLeft","width":"100%","height":420,"isFocused":false}"#,
        )
        .unwrap();
        assert_eq!(status.anchor(), StartAnchor::TopLeft);
        assert_eq!(status.width, Some(Measure::from("100%")));
        assert_eq!(status.height, Some(Measure::Pixels(420.0)));
        assert_eq!(status.is_focused, Some(false));
        assert_eq!(status.is_maximized, None);

        let json = serde_json::to_value(InitialStatus::anchored(StartAnchor::BottomRight).maximized()).unwrap();
        assert_eq!(json["startPosition"], "bottomRight");
        assert_eq!(json["isMaximized"], true);
        assert!(json.get("start_position").is_none());
    }

    #[test]
    fn status_bounds_check() {
        let status = WindowStatus {
            left: 700.0,
            top: 0.0,
            width: 400.0,
            height: 300.0,
            ..Default::default()
        };
        assert!(!status.fits_within(comicdesk_common::Size::new(1000.0, 800.0)));
        assert!(status.fits_within(comicdesk_common::Size::new(1100.0, 800.0)));
    }

    #[test]
    fn create_params_builder() {
        let params = WindowCreateParams::new("page")
            .with_id("login")
            .with_title("Login")
            .unique()
            .with_chrome(ChromeOverrides::locked());
        assert_eq!(params.id.as_ref().map(|id| id.as_str()), Some("login"));
        assert_eq!(params.title.as_deref(), Some("Login"));
        assert!(params.unique);
        assert_eq!(params.chrome.movable, Some(false));
        assert_eq!(params.content, "page");
    }
}
