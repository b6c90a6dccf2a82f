use crate::schema::DeskConfig;

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &DeskConfig) {
    let level = config.logging.level.to_ascii_lowercase();
    if !LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = \"{}\" must be one of {}",
            config.logging.level,
            LEVELS.join(", ")
        ));
    }
}
