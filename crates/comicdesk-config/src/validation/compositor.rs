//! Chrome and tray geometry validation.

use crate::schema::DeskConfig;

use super::helpers::validate_range;

pub(crate) fn validate_compositor(errors: &mut Vec<String>, config: &DeskConfig) {
    let c = &config.compositor;
    validate_range(errors, "compositor.title_bar_height", c.title_bar_height, 16.0, 120.0);
    validate_range(errors, "compositor.button_size", c.button_size, 8.0, 64.0);
    validate_range(errors, "compositor.button_gap", c.button_gap, 0.0, 32.0);
    validate_range(errors, "compositor.resize_handle_size", c.resize_handle_size, 4.0, 64.0);
    validate_range(errors, "compositor.tray_height", c.tray_height, 16.0, 160.0);
    validate_range(errors, "compositor.tray_entry_width", c.tray_entry_width, 40.0, 600.0);
    validate_range(errors, "compositor.tray_gap", c.tray_gap, 0.0, 32.0);

    if c.button_size > c.title_bar_height {
        errors.push(format!(
            "compositor.button_size = {} does not fit in compositor.title_bar_height = {}",
            c.button_size, c.title_bar_height
        ));
    }
}
