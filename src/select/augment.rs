//! Control augmentation
//!
//! Augmenting a control inserts the sentinel "create new" option as its second
//! entry. Augmentation is deliberately not idempotent: calling it twice inserts
//! two sentinels, matching the documented contract.

use tracing::debug;

use crate::config::SelectConfig;
use crate::select::control::{SelectControl, SelectOption};

/// Insert the sentinel option immediately after the first existing option.
///
/// Returns the index of the inserted sentinel. The control must be non-empty,
/// which its constructor guarantees.
pub fn augment(control: &mut SelectControl, config: &SelectConfig) -> usize {
    let at = control
        .insert_after(0, SelectOption::sentinel(config.sentinel_text.clone()))
        .unwrap_or_else(|_| unreachable!("controls are constructed non-empty"));
    debug!(sentinel = %config.sentinel_text, index = at, "augmented control");
    at
}

/// Whether the currently selected option is the sentinel.
///
/// Detection is by exact display-text equality with the configured sentinel
/// text, not by tag. A created option whose text happens to equal the sentinel
/// text will therefore also trigger the flow; see the crate docs.
pub fn is_sentinel_selected(control: &SelectControl, config: &SelectConfig) -> bool {
    control.selected_option().text == config.sentinel_text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::control::OptionTag;

    fn control() -> SelectControl {
        SelectControl::new(
            "/categories",
            vec![
                SelectOption::original("", "Choose one"),
                SelectOption::original("1", "Music"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn sentinel_lands_in_second_position() {
        let mut control = control();
        let before = control.len();
        let at = augment(&mut control, &SelectConfig::default());
        assert_eq!(at, 1);
        assert_eq!(control.len(), before + 1);
        assert_eq!(control.options()[1].text, "-- Create New --");
        assert_eq!(control.options()[1].tag, OptionTag::Sentinel);
        // Selection stays on the original first option
        assert_eq!(control.selected_index(), 0);
    }

    #[test]
    fn augmenting_twice_inserts_two_sentinels() {
        let mut control = control();
        let config = SelectConfig::default();
        augment(&mut control, &config);
        augment(&mut control, &config);
        let sentinels = control
            .options()
            .iter()
            .filter(|o| o.tag == OptionTag::Sentinel)
            .count();
        assert_eq!(sentinels, 2);
    }

    #[test]
    fn detection_matches_by_display_text() {
        let mut control = control();
        let config = SelectConfig::default();
        let at = augment(&mut control, &config);
        assert!(!is_sentinel_selected(&control, &config));
        control.select(at).unwrap();
        assert!(is_sentinel_selected(&control, &config));
    }
}
