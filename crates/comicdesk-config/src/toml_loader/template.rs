//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# comicdesk configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[windows]
# min_width = 320           # 100-4000
# min_height = 220          # 100-4000
# default_width = 720       # >= min_width
# default_height = 480      # >= min_height
# mobile_breakpoint = 768   # container widths below this use mobile layouts

[compositor]
# title_bar_height = 40     # 16-120
# button_size = 28          # 8-64
# button_gap = 4            # 0-32
# resize_handle_size = 16   # 4-64
# tray_height = 48          # 16-160
# tray_entry_width = 180    # 40-600
# tray_gap = 8              # 0-32

[logging]
# level = "info"            # trace, debug, info, warn, error
"##
    .to_string()
}
