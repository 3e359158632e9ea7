pub mod config;
pub mod history;
pub mod modal;
pub mod picker;
pub mod time_value;
pub mod ui;

pub use modal::{Animation, ModalProps, TimePickerModal};
pub use picker::{EditorEvent, EditorProps, FocusedField, InputMode, PickerState};
pub use time_value::TimeValue;
