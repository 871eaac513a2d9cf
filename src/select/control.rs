//! Selection control and option model
//!
//! A [`SelectControl`] is an ordered list of options with exactly one selected
//! at a time. The selection is stored as an index into the list, so the
//! one-selected invariant holds structurally rather than by bookkeeping. The
//! control also carries the endpoint it was declared with; creating a new
//! entry POSTs there.

use thiserror::Error;

/// Where an option came from, used by widgets for per-kind styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionTag {
    /// Present before augmentation
    Original,
    /// The inserted "create new" entry
    Sentinel,
    /// Returned by the server during a create-new flow
    Created,
}

/// One entry in a selection control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Underlying identifier submitted with the form
    pub value: String,
    /// Text shown to the user
    pub text: String,
    /// Origin of the option
    pub tag: OptionTag,
}

impl SelectOption {
    pub fn original(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            tag: OptionTag::Original,
        }
    }

    pub fn sentinel(text: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            text: text.into(),
            tag: OptionTag::Sentinel,
        }
    }

    pub fn created(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            tag: OptionTag::Created,
        }
    }
}

/// Error mutating or constructing a selection control
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("a selection control needs at least one option")]
    Empty,
    #[error("option index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },
}

/// An ordered list of options with a single selection
#[derive(Debug, Clone)]
pub struct SelectControl {
    endpoint: String,
    options: Vec<SelectOption>,
    selected: usize,
}

impl SelectControl {
    /// Create a control from its original options; the first is selected.
    pub fn new(
        endpoint: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Result<Self, SelectError> {
        if options.is_empty() {
            return Err(SelectError::Empty);
        }
        Ok(Self {
            endpoint: endpoint.into(),
            options,
            selected: 0,
        })
    }

    /// Endpoint the control was declared with
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The single selected option
    pub fn selected_option(&self) -> &SelectOption {
        &self.options[self.selected]
    }

    /// Select the option at `index`
    pub fn select(&mut self, index: usize) -> Result<(), SelectError> {
        if index >= self.options.len() {
            return Err(SelectError::OutOfRange {
                index,
                len: self.options.len(),
            });
        }
        self.selected = index;
        Ok(())
    }

    /// Revert selection to the top entry
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Move the selection up one entry, stopping at the top
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the selection down one entry, stopping at the bottom
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.options.len() {
            self.selected += 1;
        }
    }

    /// Insert `option` immediately after `index` and return the new index.
    ///
    /// The selection is kept on the option it was on before the insert.
    pub fn insert_after(
        &mut self,
        index: usize,
        option: SelectOption,
    ) -> Result<usize, SelectError> {
        if index >= self.options.len() {
            return Err(SelectError::OutOfRange {
                index,
                len: self.options.len(),
            });
        }
        let at = index + 1;
        self.options.insert(at, option);
        if self.selected >= at {
            self.selected += 1;
        }
        Ok(at)
    }

    /// Index of the first option tagged as the sentinel, if any
    pub fn sentinel_index(&self) -> Option<usize> {
        self.options
            .iter()
            .position(|o| o.tag == OptionTag::Sentinel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn first_option_selected_after_construction() {
        let control = control();
        assert_eq!(control.selected_index(), 0);
        assert_eq!(control.selected_option().text, "Choose one");
    }

    #[test]
    fn empty_controls_are_rejected() {
        let err = SelectControl::new("/categories", vec![]).unwrap_err();
        assert!(matches!(err, SelectError::Empty));
    }

    #[test]
    fn select_out_of_range_is_an_error() {
        let mut control = control();
        assert!(control.select(1).is_ok());
        assert!(matches!(
            control.select(5),
            Err(SelectError::OutOfRange { index: 5, len: 2 })
        ));
        // Failed select leaves the previous selection in place
        assert_eq!(control.selected_index(), 1);
    }

    #[test]
    fn insert_after_keeps_selection_on_same_option() {
        let mut control = control();
        control.select(1).unwrap();
        let at = control
            .insert_after(0, SelectOption::sentinel("-- Create New --"))
            .unwrap();
        assert_eq!(at, 1);
        assert_eq!(control.selected_option().text, "Music");
        assert_eq!(control.selected_index(), 2);
    }

    #[test]
    fn selection_movement_stops_at_edges() {
        let mut control = control();
        control.select_previous();
        assert_eq!(control.selected_index(), 0);
        control.select_next();
        control.select_next();
        control.select_next();
        assert_eq!(control.selected_index(), 1);
    }
}
