//! Window size validation.

use crate::schema::DeskConfig;

use super::helpers::validate_range;

pub(crate) fn validate_windows(errors: &mut Vec<String>, config: &DeskConfig) {
    let w = &config.windows;
    validate_range(errors, "windows.min_width", w.min_width, 100.0, 4000.0);
    validate_range(errors, "windows.min_height", w.min_height, 100.0, 4000.0);
    validate_range(errors, "windows.mobile_breakpoint", w.mobile_breakpoint, 0.0, 10000.0);

    if w.default_width < w.min_width {
        errors.push(format!(
            "windows.default_width = {} is smaller than windows.min_width = {}",
            w.default_width, w.min_width
        ));
    }
    if w.default_height < w.min_height {
        errors.push(format!(
            "windows.default_height = {} is smaller than windows.min_height = {}",
            w.default_height, w.min_height
        ));
    }
}
