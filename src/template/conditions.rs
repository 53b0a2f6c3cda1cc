//! Conditional path markers
//!
//! A destination path may embed `{{#flag}}` markers. Each marker is removed
//! from the path when `flag` is set to a yes value in the run configuration;
//! otherwise the file is not generated.

use crate::config::RunConfiguration;
use crate::constants::markers::{CONDITIONAL_CLOSE, CONDITIONAL_OPEN};
use crate::ext::ValueExt;

/// Strips conditional markers from `path` left to right.
///
/// Returns the stripped path and `true` when every flag is enabled. On the
/// first missing or disabled flag, scanning stops and the path is returned as
/// mutated so far (the failing marker already removed) together with `false`.
///
/// The key of a marker ends at the first close marker after it; nesting is
/// not recognized. An open marker with no close marker after it is kept
/// verbatim and ends the scan.
pub fn evaluate(path: &str, run_config: &RunConfiguration) -> (String, bool) {
    let mut path = path.to_string();
    let mut cursor = 0;

    while let Some(found) = path[cursor..].find(CONDITIONAL_OPEN) {
        let open = cursor + found;
        let key_start = open + CONDITIONAL_OPEN.len();
        let Some(key_len) = path[key_start..].find(CONDITIONAL_CLOSE) else {
            log::warn!("Unterminated conditional marker in '{path}'");
            break;
        };
        let close = key_start + key_len;
        let key = path[key_start..close].to_string();

        path.replace_range(open..close + CONDITIONAL_CLOSE.len(), "");

        let enabled = run_config.get(&key).is_some_and(|value| value.is_yes());
        if !enabled {
            log::debug!("Condition '{key}' is not met for '{path}'");
            return (path, false);
        }
        cursor = open;
    }

    (path, true)
}
