use crate::time_value::TimeValue;

/// Which editing surface is active. Exactly one at a time; the toggle is a
/// total self-inverse swap, so call sites never branch on a bare bool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Keyboard,
    ClockDial,
}

impl InputMode {
    pub fn toggled(self) -> Self {
        match self {
            InputMode::Keyboard => InputMode::ClockDial,
            InputMode::ClockDial => InputMode::Keyboard,
        }
    }
}

/// The sub-field currently being edited. Only rendered in clock-dial mode;
/// the keyboard surface keeps it to know which box receives digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedField {
    Hours,
    Minutes,
}

/// Everything the editor surface needs to render one frame. The surface holds
/// no state of its own; it is driven entirely by these props and answers with
/// `EditorEvent`s.
#[derive(Debug, Clone, Copy)]
pub struct EditorProps<'a> {
    pub input_mode: InputMode,
    pub focused: FocusedField,
    pub hours: u32,
    pub minutes: u32,
    pub use_24_hour_clock: Option<bool>,
    pub locale: Option<&'a str>,
}

/// Upward notifications from the editor surface. `Change` always carries the
/// full (hours, minutes) pair, pre-validated to 0-23 / 0-59, and may move
/// focus in the same step (two-digit hour entry advances to minutes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    Change {
        focused: Option<FocusedField>,
        hours: u32,
        minutes: u32,
    },
    FocusInput(FocusedField),
}

/// The single source of truth both surfaces write through. Keyboard digits
/// and dial positions are two renderings of this one value.
#[derive(Debug, Clone, Copy)]
pub struct PickerState {
    pub value: TimeValue,
    pub input_mode: InputMode,
    pub focused: FocusedField,
}

impl PickerState {
    pub fn open(value: TimeValue) -> Self {
        Self {
            value,
            input_mode: InputMode::Keyboard,
            focused: FocusedField::Hours,
        }
    }

    pub fn toggle_input_mode(&mut self) {
        self.input_mode = self.input_mode.toggled();
    }

    pub fn set_focus(&mut self, field: FocusedField) {
        self.focused = field;
    }

    pub fn apply(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::Change {
                focused,
                hours,
                minutes,
            } => {
                if let Some(field) = focused {
                    self.focused = field;
                }
                self.value = TimeValue::new(hours, minutes);
            }
            EditorEvent::FocusInput(field) => self.set_focus(field),
        }
    }

    pub fn snapshot(&self) -> TimeValue {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use crate::time_value::TimeValue;

    use super::{EditorEvent, FocusedField, InputMode, PickerState};

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(InputMode::Keyboard.toggled().toggled(), InputMode::Keyboard);
        assert_eq!(
            InputMode::ClockDial.toggled().toggled(),
            InputMode::ClockDial
        );
        assert_eq!(InputMode::Keyboard.toggled(), InputMode::ClockDial);
    }

    #[test]
    fn opens_on_keyboard_with_hours_focused() {
        let state = PickerState::open(TimeValue::new(9, 5));
        assert_eq!(state.input_mode, InputMode::Keyboard);
        assert_eq!(state.focused, FocusedField::Hours);
        assert_eq!(state.value, TimeValue::new(9, 5));
    }

    #[test]
    fn toggling_mode_keeps_value_and_focus() {
        let mut state = PickerState::open(TimeValue::new(9, 5));
        state.set_focus(FocusedField::Minutes);
        state.toggle_input_mode();
        assert_eq!(state.input_mode, InputMode::ClockDial);
        assert_eq!(state.value, TimeValue::new(9, 5));
        assert_eq!(state.focused, FocusedField::Minutes);
    }

    #[test]
    fn change_replaces_value_and_may_advance_focus() {
        let mut state = PickerState::open(TimeValue::new(9, 5));
        state.apply(EditorEvent::Change {
            focused: Some(FocusedField::Minutes),
            hours: 14,
            minutes: 5,
        });
        assert_eq!(state.value, TimeValue::new(14, 5));
        assert_eq!(state.focused, FocusedField::Minutes);

        state.apply(EditorEvent::Change {
            focused: None,
            hours: 14,
            minutes: 30,
        });
        assert_eq!(state.value, TimeValue::new(14, 30));
        assert_eq!(state.focused, FocusedField::Minutes);
    }

    #[test]
    fn focus_notification_is_unconditional() {
        let mut state = PickerState::open(TimeValue::new(9, 5));
        state.apply(EditorEvent::FocusInput(FocusedField::Minutes));
        assert_eq!(state.focused, FocusedField::Minutes);
        state.apply(EditorEvent::FocusInput(FocusedField::Hours));
        assert_eq!(state.focused, FocusedField::Hours);
    }
}
