use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

use crate::picker::{EditorEvent, EditorProps, InputMode, PickerState};
use crate::time_value::TimeValue;

pub const DEFAULT_LABEL: &str = "Select time";
pub const KEYBOARD_PLACEHOLDER_LABEL: &str = "Enter time";
pub const DEFAULT_KEYBOARD_ICON: &str = "keyboard-outline";
pub const DEFAULT_CLOCK_ICON: &str = "clock-outline";

/// How the presentation layer reveals the popup. Passed through untouched;
/// the state machine never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Animation {
    Slide,
    Fade,
    #[default]
    None,
}

impl FromStr for Animation {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "slide" => Ok(Animation::Slide),
            "fade" => Ok(Animation::Fade),
            "none" => Ok(Animation::None),
            other => Err(format!(
                "unknown animation '{other}', expected slide, fade or none"
            )),
        }
    }
}

impl Display for Animation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Animation::Slide => "slide",
            Animation::Fade => "fade",
            Animation::None => "none",
        };
        write!(f, "{name}")
    }
}

/// Caller-supplied configuration for one picker instance. `hours`/`minutes`
/// are the controlled seed value; everything else is appearance and
/// pass-through for the editor surface.
#[derive(Debug, Clone)]
pub struct ModalProps {
    pub hours: Option<u32>,
    pub minutes: Option<u32>,
    pub label: Option<String>,
    pub uppercase: bool,
    pub cancel_label: String,
    pub confirm_label: String,
    pub animation: Animation,
    pub use_24_hour_clock: Option<bool>,
    pub locale: Option<String>,
    pub keyboard_icon: String,
    pub clock_icon: String,
}

impl Default for ModalProps {
    fn default() -> Self {
        Self {
            hours: None,
            minutes: None,
            label: None,
            uppercase: true,
            cancel_label: "Cancel".to_string(),
            confirm_label: "Ok".to_string(),
            animation: Animation::None,
            use_24_hour_clock: None,
            locale: None,
            keyboard_icon: DEFAULT_KEYBOARD_ICON.to_string(),
            clock_icon: DEFAULT_CLOCK_ICON.to_string(),
        }
    }
}

impl ModalProps {
    pub fn with_seed(mut self, hours: Option<u32>, minutes: Option<u32>) -> Self {
        self.hours = hours;
        self.minutes = minutes;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// The transaction shell. Owns picker state for one open/close cycle and the
/// two irrevocable exits: `confirm` emits the current snapshot exactly once
/// and then requests dismissal, `cancel` requests dismissal with no emission.
/// Visibility itself stays with the caller; the shell only fires
/// close-requests through `on_dismiss`.
pub struct TimePickerModal {
    props: ModalProps,
    seed_hours: Option<u32>,
    seed_minutes: Option<u32>,
    state: Option<PickerState>,
    on_dismiss: Box<dyn FnMut()>,
    on_confirm: Box<dyn FnMut(TimeValue)>,
}

impl TimePickerModal {
    /// Both callbacks are mandatory; a caller that has no use for one passes
    /// an empty closure.
    pub fn new(
        props: ModalProps,
        on_dismiss: impl FnMut() + 'static,
        on_confirm: impl FnMut(TimeValue) + 'static,
    ) -> Self {
        let seed_hours = props.hours;
        let seed_minutes = props.minutes;
        Self {
            props,
            seed_hours,
            seed_minutes,
            state: None,
            on_dismiss: Box::new(on_dismiss),
            on_confirm: Box::new(on_confirm),
        }
    }

    pub fn props(&self) -> &ModalProps {
        &self.props
    }

    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&PickerState> {
        self.state.as_ref()
    }

    /// Closed -> Open. Re-seeds from the last known props; absent fields
    /// default independently from `now`.
    pub fn open(&mut self, now: NaiveTime) {
        self.state = Some(PickerState::open(TimeValue::seed_at(
            self.seed_hours,
            self.seed_minutes,
            now,
        )));
    }

    /// Reconciles externally controlled seed props. An external change always
    /// wins over an in-progress local edit, but only fields whose prop value
    /// actually changed since the last reconciliation are touched, each one
    /// independently.
    pub fn sync_seed(&mut self, hours: Option<u32>, minutes: Option<u32>, now: NaiveTime) {
        if hours != self.seed_hours {
            self.seed_hours = hours;
            if let Some(state) = &mut self.state {
                state.value = state.value.with_hours(hours.unwrap_or_else(|| now.hour()));
            }
        }

        if minutes != self.seed_minutes {
            self.seed_minutes = minutes;
            if let Some(state) = &mut self.state {
                state.value = state
                    .value
                    .with_minutes(minutes.unwrap_or_else(|| now.minute()));
            }
        }
    }

    pub fn apply(&mut self, event: EditorEvent) {
        if let Some(state) = &mut self.state {
            state.apply(event);
        }
    }

    pub fn toggle_input_mode(&mut self) {
        if let Some(state) = &mut self.state {
            state.toggle_input_mode();
        }
    }

    /// Emits the snapshot, then requests dismissal. Local state is discarded;
    /// the next open re-seeds from props.
    pub fn confirm(&mut self) {
        if let Some(state) = self.state.take() {
            (self.on_confirm)(state.snapshot());
            (self.on_dismiss)();
        }
    }

    /// Requests dismissal without emitting. No prompt, no undo.
    pub fn cancel(&mut self) {
        if self.state.take().is_some() {
            (self.on_dismiss)();
        }
    }

    /// The visible title. The keyboard surface with no explicit caller label
    /// shows a placeholder; every other combination shows the caller label
    /// (or its default), uppercased when the flag says so.
    pub fn label_text(&self) -> String {
        let mode = self
            .state
            .map(|state| state.input_mode)
            .unwrap_or(InputMode::Keyboard);

        if mode == InputMode::Keyboard && self.props.label.is_none() {
            return KEYBOARD_PLACEHOLDER_LABEL.to_string();
        }

        let label = self
            .props
            .label
            .clone()
            .unwrap_or_else(|| DEFAULT_LABEL.to_string());
        if self.props.uppercase {
            label.to_uppercase()
        } else {
            label
        }
    }

    /// The toggle affordance always depicts the mode a press would switch to.
    pub fn toggle_icon(&self) -> &str {
        match self.state.map(|state| state.input_mode) {
            Some(InputMode::ClockDial) => &self.props.keyboard_icon,
            _ => &self.props.clock_icon,
        }
    }

    pub fn editor_props(&self) -> Option<EditorProps<'_>> {
        self.state.map(|state| EditorProps {
            input_mode: state.input_mode,
            focused: state.focused,
            hours: state.value.hours,
            minutes: state.value.minutes,
            use_24_hour_clock: self.props.use_24_hour_clock,
            locale: self.props.locale.as_deref(),
        })
    }
}
