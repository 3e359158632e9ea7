use std::cell::RefCell;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration as StdDuration;

use chrono::{Local, Utc};
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, ExecutableCommand};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::{Frame, Terminal};

use crate::history::{append_pick, history_path, PickRecord};
use crate::modal::{Animation, ModalProps, TimePickerModal};
use crate::picker::{EditorEvent, EditorProps, FocusedField, InputMode};
use crate::time_value::TimeValue;

const FOCUSED_FIELD_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);
const INNER_RING_COLOR: Color = Color::DarkGray;
const REVEAL_FRAMES: u8 = 4;

const DIAL_WIDTH: usize = 27;
const DIAL_HEIGHT: usize = 11;
const OUTER_RADIUS_COLS: f64 = 11.0;
const OUTER_RADIUS_ROWS: f64 = 5.0;
const INNER_RADIUS_COLS: f64 = 5.5;
const INNER_RADIUS_ROWS: f64 = 2.5;

pub fn run_picker(props: ModalProps) -> Result<Option<TimeValue>, Box<dyn Error>> {
	enable_raw_mode()?;
	let mut stdout = io::stdout();
	stdout.execute(EnterAlternateScreen)?;
	let backend = CrosstermBackend::new(stdout);
	let mut terminal = Terminal::new(backend)?;

	let result = run_event_loop(&mut terminal, props);

	disable_raw_mode()?;
	execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
	terminal.show_cursor()?;

	result
}

fn run_event_loop(
	terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
	props: ModalProps,
) -> Result<Option<TimeValue>, Box<dyn Error>> {
	let mut app = App::new(props);
	app.open_picker();

	loop {
		app.tick();
		terminal.draw(|frame| draw_app(frame, &app))?;

		if event::poll(StdDuration::from_millis(250))? {
			if let CEvent::Key(key) = event::read()? {
				if key.kind != KeyEventKind::Press {
					continue;
				}

				let should_quit = if app.visible {
					handle_picker_key(&mut app, key.code)
				} else {
					handle_home_key(&mut app, key.code)
				};

				if should_quit {
					break;
				}
			}
		}
	}

	Ok(app.last_pick)
}

fn draw_app(frame: &mut Frame, app: &App) {
	let layout = Layout::default()
		.direction(Direction::Vertical)
		.constraints([Constraint::Min(10), Constraint::Length(4)])
		.split(frame.area());

	render_home_panel(frame, layout[0], app);
	render_footer(frame, layout[1], app);

	if app.visible {
		render_picker_modal(frame, frame.area(), app);
	}
}

fn render_home_panel(frame: &mut Frame, area: Rect, app: &App) {
	let selection_line = match app.last_pick {
		Some(value) => Line::from(vec![
			Span::raw("Last selection: "),
			Span::styled(
				value.to_string(),
				Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
			),
		]),
		None => Line::from("No time selected yet"),
	};

	let lines = vec![
		Line::from(""),
		selection_line,
		Line::from(""),
		Line::from("Press o to open the picker"),
	];

	let panel = Paragraph::new(lines)
		.alignment(Alignment::Center)
		.block(Block::default().borders(Borders::ALL).title("timedial"));
	frame.render_widget(panel, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
	let footer_lines = if app.visible {
		vec![
			Line::from("digits edit | h/m pick field | Tab switch mode | Enter confirm | Esc cancel"),
			Line::from(app.entry_hint()),
			Line::from(app.status.clone()),
		]
	} else {
		vec![
			Line::from("o open picker | q quit"),
			Line::from(app.status.clone()),
		]
	};

	let footer = Paragraph::new(footer_lines)
		.block(Block::default().borders(Borders::ALL).title("Shortcuts"));
	frame.render_widget(footer, area);
}

fn render_picker_modal(frame: &mut Frame, area: Rect, app: &App) {
	let Some(editor) = app.modal.editor_props() else {
		return;
	};

	let popup = popup_area(area, app);
	frame.render_widget(Clear, popup);

	let block = Block::default()
		.borders(Borders::ALL)
		.title(app.modal.label_text())
		.border_style(reveal_border_style(app));
	let inner = block.inner(popup);
	frame.render_widget(block, popup);

	let rows = Layout::default()
		.direction(Direction::Vertical)
		.constraints([Constraint::Min(5), Constraint::Length(1)])
		.split(inner);

	match editor.input_mode {
		InputMode::Keyboard => render_keyboard_surface(frame, rows[0], app, &editor),
		InputMode::ClockDial => render_dial_surface(frame, rows[0], &editor),
	}
	render_action_row(frame, rows[1], app);
}

fn popup_area(area: Rect, app: &App) -> Rect {
	let mut popup = centered_rect(56, 72, area);
	if app.modal.props().animation == Animation::Slide && app.reveal_frames < REVEAL_FRAMES {
		let offset = u16::from(REVEAL_FRAMES - app.reveal_frames) * 2;
		let lowest = area.height.saturating_sub(popup.height);
		popup.y = popup.y.saturating_add(offset).min(lowest);
	}
	popup
}

fn reveal_border_style(app: &App) -> Style {
	if app.modal.props().animation == Animation::Fade && app.reveal_frames < REVEAL_FRAMES {
		if app.reveal_frames < REVEAL_FRAMES / 2 {
			Style::default().fg(Color::DarkGray)
		} else {
			Style::default().fg(Color::Gray)
		}
	} else {
		Style::default().fg(Color::White)
	}
}

fn render_keyboard_surface(frame: &mut Frame, area: Rect, app: &App, editor: &EditorProps) {
	let twenty_four = effective_24_hour(editor);
	let (hour_display, period) = display_hours(editor.hours, twenty_four);

	let hours_focused = editor.focused == FocusedField::Hours;
	let minutes_focused = editor.focused == FocusedField::Minutes;

	let hour_box = if hours_focused && !app.entry_buffer.is_empty() {
		padded_entry(&app.entry_buffer)
	} else {
		hour_display
	};
	let minute_box = if minutes_focused && !app.entry_buffer.is_empty() {
		padded_entry(&app.entry_buffer)
	} else {
		format!("{:02}", editor.minutes)
	};

	let mut value_spans = vec![
		Span::styled(format!("  {hour_box}  "), field_style(hours_focused)),
		Span::raw(" : "),
		Span::styled(format!("  {minute_box}  "), field_style(minutes_focused)),
	];
	if let Some(period) = period {
		value_spans.push(Span::raw(format!(" {period}")));
	}

	let lines = vec![
		Line::from(""),
		Line::from(""),
		Line::from(value_spans),
		Line::from(""),
		Line::from(Span::styled(
			"Hours     Minutes",
			Style::default().fg(Color::DarkGray),
		)),
	];

	let surface = Paragraph::new(lines).alignment(Alignment::Center);
	frame.render_widget(surface, area);
}

fn render_dial_surface(frame: &mut Frame, area: Rect, editor: &EditorProps) {
	let twenty_four = effective_24_hour(editor);
	let mut grid = vec![vec![(' ', Style::default()); DIAL_WIDTH]; DIAL_HEIGHT];

	match editor.focused {
		FocusedField::Hours => place_hour_labels(&mut grid, editor.hours, twenty_four),
		FocusedField::Minutes => place_minute_labels(&mut grid, editor.minutes),
	}

	let (hour_display, period) = display_hours(editor.hours, twenty_four);
	let mut center = format!("{hour_display}:{:02}", editor.minutes);
	if let Some(period) = period {
		center.push(' ');
		center.push_str(period);
	}
	let center_col = (DIAL_WIDTH - center.len()) / 2;
	place_text(
		&mut grid,
		DIAL_HEIGHT / 2,
		center_col,
		&center,
		Style::default().add_modifier(Modifier::BOLD),
	);

	let lines = grid
		.into_iter()
		.map(|row| {
			Line::from(
				row.into_iter()
					.map(|(ch, style)| Span::styled(ch.to_string(), style))
					.collect::<Vec<_>>(),
			)
		})
		.collect::<Vec<_>>();

	let surface = Paragraph::new(lines).alignment(Alignment::Center);
	frame.render_widget(surface, area);
}

fn place_hour_labels(grid: &mut [Vec<(char, Style)>], selected_hours: u32, twenty_four: bool) {
	for index in 0..12usize {
		let outer_hour = if index == 0 { 12 } else { index as u32 };
		let selected = if twenty_four {
			selected_hours == outer_hour
		} else {
			selected_hours % 12 == outer_hour % 12
		};
		let (row, col) = dial_position(index, OUTER_RADIUS_COLS, OUTER_RADIUS_ROWS);
		place_text(grid, row, col, &format!("{outer_hour:02}"), dial_label_style(selected, false));

		if twenty_four {
			let inner_hour = if index == 0 { 0 } else { index as u32 + 12 };
			let selected = selected_hours == inner_hour;
			let (row, col) = dial_position(index, INNER_RADIUS_COLS, INNER_RADIUS_ROWS);
			place_text(grid, row, col, &format!("{inner_hour:02}"), dial_label_style(selected, true));
		}
	}
}

fn place_minute_labels(grid: &mut [Vec<(char, Style)>], selected_minutes: u32) {
	for index in 0..12usize {
		let minute = index as u32 * 5;
		let selected = selected_minutes == minute;
		let (row, col) = dial_position(index, OUTER_RADIUS_COLS, OUTER_RADIUS_ROWS);
		place_text(grid, row, col, &format!("{minute:02}"), dial_label_style(selected, false));
	}
}

fn dial_position(index: usize, radius_cols: f64, radius_rows: f64) -> (usize, usize) {
	let angle = index as f64 * std::f64::consts::PI / 6.0;
	let center_row = (DIAL_HEIGHT / 2) as f64;
	let center_col = (DIAL_WIDTH / 2) as f64;
	let row = (center_row - angle.cos() * radius_rows).round().max(0.0) as usize;
	let col = (center_col + angle.sin() * radius_cols - 1.0).round().max(0.0) as usize;
	(row, col)
}

fn field_style(focused: bool) -> Style {
	if focused {
		FOCUSED_FIELD_STYLE.add_modifier(Modifier::BOLD)
	} else {
		Style::default().add_modifier(Modifier::BOLD)
	}
}

fn dial_label_style(selected: bool, inner: bool) -> Style {
	if selected {
		FOCUSED_FIELD_STYLE.add_modifier(Modifier::BOLD)
	} else if inner {
		Style::default().fg(INNER_RING_COLOR)
	} else {
		Style::default()
	}
}

fn place_text(grid: &mut [Vec<(char, Style)>], row: usize, col: usize, text: &str, style: Style) {
	for (offset, ch) in text.chars().enumerate() {
		let col = col + offset;
		if row < grid.len() && col < grid[row].len() {
			grid[row][col] = (ch, style);
		}
	}
}

fn render_action_row(frame: &mut Frame, area: Rect, app: &App) {
	let props = app.modal.props();
	let icon = icon_glyph(app.modal.toggle_icon()).unwrap_or("?");

	let line = Line::from(vec![
		Span::styled(format!(" [{icon}] "), Style::default().fg(Color::Yellow)),
		Span::styled("Tab", Style::default().fg(Color::DarkGray)),
		Span::raw("      "),
		Span::styled(
			format!(" {} ", props.cancel_label.to_uppercase()),
			Style::default().fg(Color::LightRed),
		),
		Span::styled("Esc", Style::default().fg(Color::DarkGray)),
		Span::raw("  "),
		Span::styled(
			format!(" {} ", props.confirm_label.to_uppercase()),
			Style::default().fg(Color::LightGreen).add_modifier(Modifier::BOLD),
		),
		Span::styled("Enter", Style::default().fg(Color::DarkGray)),
	]);

	frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
	let popup_layout = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Percentage((100 - percent_y) / 2),
			Constraint::Percentage(percent_y),
			Constraint::Percentage((100 - percent_y) / 2),
		])
		.split(area);
	Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Percentage((100 - percent_x) / 2),
			Constraint::Percentage(percent_x),
			Constraint::Percentage((100 - percent_x) / 2),
		])
		.split(popup_layout[1])[1]
}

fn handle_home_key(app: &mut App, code: KeyCode) -> bool {
	match code {
		KeyCode::Char('q') | KeyCode::Esc => true,
		KeyCode::Char('o') => {
			app.open_picker();
			false
		}
		_ => false,
	}
}

fn handle_picker_key(app: &mut App, code: KeyCode) -> bool {
	let Some(editor) = app.modal.editor_props() else {
		return false;
	};
	let input_mode = editor.input_mode;
	let focused = editor.focused;
	let hours = editor.hours;
	let minutes = editor.minutes;

	match code {
		KeyCode::Esc => app.modal.cancel(),
		KeyCode::Enter => app.modal.confirm(),
		KeyCode::Tab => {
			app.modal.toggle_input_mode();
			app.entry_buffer.clear();
		}
		KeyCode::Char('h') | KeyCode::Left => {
			app.modal.apply(EditorEvent::FocusInput(FocusedField::Hours));
			app.entry_buffer.clear();
		}
		KeyCode::Char('m') | KeyCode::Right => {
			app.modal.apply(EditorEvent::FocusInput(FocusedField::Minutes));
			app.entry_buffer.clear();
		}
		KeyCode::Backspace if input_mode == InputMode::Keyboard => {
			app.entry_buffer.pop();
		}
		KeyCode::Char(value) if value.is_ascii_digit() && input_mode == InputMode::Keyboard => {
			handle_digit_entry(app, value, focused, hours, minutes);
		}
		KeyCode::Up if input_mode == InputMode::ClockDial => {
			app.modal.apply(step_event(focused, hours, minutes, 1));
		}
		KeyCode::Down if input_mode == InputMode::ClockDial => {
			app.modal.apply(step_event(focused, hours, minutes, -1));
		}
		KeyCode::PageUp if input_mode == InputMode::ClockDial => {
			app.modal.apply(step_event(focused, hours, minutes, 5));
		}
		KeyCode::PageDown if input_mode == InputMode::ClockDial => {
			app.modal.apply(step_event(focused, hours, minutes, -5));
		}
		KeyCode::Char(' ')
			if input_mode == InputMode::ClockDial && focused == FocusedField::Hours =>
		{
			app.modal.apply(EditorEvent::FocusInput(FocusedField::Minutes));
		}
		_ => {}
	}

	false
}

fn handle_digit_entry(app: &mut App, digit: char, focused: FocusedField, hours: u32, minutes: u32) {
	app.entry_buffer.push(digit);
	if app.entry_buffer.len() < 2 {
		return;
	}

	let buffer = std::mem::take(&mut app.entry_buffer);
	match commit_keyboard_entry(&buffer, focused, hours, minutes) {
		Ok(event) => app.modal.apply(event),
		Err(err) => app.status = err,
	}
}

/// Turns a completed two-digit entry into an editor notification. A committed
/// hour advances focus to minutes; out-of-range entries never leave the
/// surface.
fn commit_keyboard_entry(
	buffer: &str,
	focused: FocusedField,
	hours: u32,
	minutes: u32,
) -> Result<EditorEvent, String> {
	let entered = buffer
		.parse::<u32>()
		.map_err(|_| format!("invalid entry '{buffer}'"))?;

	match focused {
		FocusedField::Hours => {
			if entered > 23 {
				return Err(format!("invalid hour '{buffer}', expected 00-23"));
			}
			Ok(EditorEvent::Change {
				focused: Some(FocusedField::Minutes),
				hours: entered,
				minutes,
			})
		}
		FocusedField::Minutes => {
			if entered > 59 {
				return Err(format!("invalid minute '{buffer}', expected 00-59"));
			}
			Ok(EditorEvent::Change {
				focused: None,
				hours,
				minutes: entered,
			})
		}
	}
}

fn step_event(focused: FocusedField, hours: u32, minutes: u32, delta: i64) -> EditorEvent {
	match focused {
		FocusedField::Hours => EditorEvent::Change {
			focused: None,
			hours: wrap_add(hours, delta, 24),
			minutes,
		},
		FocusedField::Minutes => EditorEvent::Change {
			focused: None,
			hours,
			minutes: wrap_add(minutes, delta, 60),
		},
	}
}

fn wrap_add(value: u32, delta: i64, modulus: i64) -> u32 {
	(((value as i64 + delta) % modulus + modulus) % modulus) as u32
}

fn effective_24_hour(editor: &EditorProps) -> bool {
	editor
		.use_24_hour_clock
		.unwrap_or_else(|| locale_prefers_24_hour(editor.locale))
}

fn locale_prefers_24_hour(locale: Option<&str>) -> bool {
	let Some(locale) = locale else {
		return true;
	};
	let language = locale.split(['-', '_']).next().unwrap_or("");
	!language.eq_ignore_ascii_case("en")
}

fn display_hours(hours: u32, twenty_four: bool) -> (String, Option<&'static str>) {
	if twenty_four {
		(format!("{hours:02}"), None)
	} else {
		let period = if hours < 12 { "AM" } else { "PM" };
		let display = match hours % 12 {
			0 => 12,
			other => other,
		};
		(format!("{display:02}"), Some(period))
	}
}

fn padded_entry(buffer: &str) -> String {
	let mut pending = buffer.to_string();
	while pending.len() < 2 {
		pending.push('_');
	}
	pending
}

fn icon_glyph(name: &str) -> Option<&'static str> {
	match name {
		"keyboard-outline" | "keyboard" => Some("⌨"),
		"clock-outline" | "clock" => Some("◷"),
		_ => None,
	}
}

#[derive(Debug, Default)]
struct ShellRequests {
	confirmed: Option<TimeValue>,
	close_requested: bool,
}

struct App {
	modal: TimePickerModal,
	shell: Rc<RefCell<ShellRequests>>,
	visible: bool,
	seed_hours: Option<u32>,
	seed_minutes: Option<u32>,
	entry_buffer: String,
	reveal_frames: u8,
	status: String,
	last_pick: Option<TimeValue>,
	history_path: PathBuf,
}

impl App {
	fn new(props: ModalProps) -> Self {
		let shell = Rc::new(RefCell::new(ShellRequests::default()));
		let for_dismiss = Rc::clone(&shell);
		let for_confirm = Rc::clone(&shell);
		let seed_hours = props.hours;
		let seed_minutes = props.minutes;

		let modal = TimePickerModal::new(
			props,
			move || for_dismiss.borrow_mut().close_requested = true,
			move |value| for_confirm.borrow_mut().confirmed = Some(value),
		);

		Self {
			modal,
			shell,
			visible: false,
			seed_hours,
			seed_minutes,
			entry_buffer: String::new(),
			reveal_frames: REVEAL_FRAMES,
			status: "Ready".to_string(),
			last_pick: None,
			history_path: history_path(),
		}
	}

	fn open_picker(&mut self) {
		self.modal.open(Local::now().time());
		self.visible = true;
		self.entry_buffer.clear();
		self.reveal_frames = match self.modal.props().animation {
			Animation::None => REVEAL_FRAMES,
			Animation::Slide | Animation::Fade => 0,
		};
	}

	/// Once per frame: reconcile controlled props, drain shell requests,
	/// advance the reveal animation.
	fn tick(&mut self) {
		self.modal
			.sync_seed(self.seed_hours, self.seed_minutes, Local::now().time());
		self.drain_shell_requests();
		if self.visible && self.reveal_frames < REVEAL_FRAMES {
			self.reveal_frames += 1;
		}
	}

	fn drain_shell_requests(&mut self) {
		let confirmed = self.shell.borrow_mut().confirmed.take();
		if let Some(value) = confirmed {
			self.last_pick = Some(value);
			self.status = format!("selected {value}");
			let record = PickRecord::new(value, Utc::now());
			if let Err(err) = append_pick(&self.history_path, &record) {
				self.status = format!("selected {value} (warning: failed to record: {err})");
			}
		}

		let close_requested = std::mem::take(&mut self.shell.borrow_mut().close_requested);
		if close_requested {
			self.visible = false;
			self.entry_buffer.clear();
		}
	}

	fn entry_hint(&self) -> String {
		let Some(editor) = self.modal.editor_props() else {
			return String::new();
		};

		let field = match editor.focused {
			FocusedField::Hours => "hours",
			FocusedField::Minutes => "minutes",
		};

		match editor.input_mode {
			InputMode::Keyboard => {
				if self.entry_buffer.is_empty() {
					format!("Edit {field}: type two digits")
				} else {
					format!("Edit {field}: {}", padded_entry(&self.entry_buffer))
				}
			}
			InputMode::ClockDial => {
				format!("Dial {field}: Up/Down step 1 | PgUp/PgDn step 5 | Space next field")
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::picker::{EditorEvent, FocusedField};

	use super::{
		commit_keyboard_entry, dial_position, display_hours, icon_glyph, locale_prefers_24_hour,
		padded_entry, step_event, wrap_add, DIAL_HEIGHT, DIAL_WIDTH, INNER_RADIUS_COLS,
		INNER_RADIUS_ROWS, OUTER_RADIUS_COLS, OUTER_RADIUS_ROWS,
	};

	#[test]
	fn committed_hours_advance_focus_to_minutes() {
		let event = commit_keyboard_entry("14", FocusedField::Hours, 9, 5)
			.expect("entry should commit");
		assert_eq!(
			event,
			EditorEvent::Change {
				focused: Some(FocusedField::Minutes),
				hours: 14,
				minutes: 5,
			}
		);
	}

	#[test]
	fn committed_minutes_keep_focus() {
		let event = commit_keyboard_entry("30", FocusedField::Minutes, 14, 5)
			.expect("entry should commit");
		assert_eq!(
			event,
			EditorEvent::Change {
				focused: None,
				hours: 14,
				minutes: 30,
			}
		);
	}

	#[test]
	fn rejects_out_of_range_entries() {
		assert!(commit_keyboard_entry("24", FocusedField::Hours, 9, 5).is_err());
		assert!(commit_keyboard_entry("60", FocusedField::Minutes, 9, 5).is_err());
		assert!(commit_keyboard_entry("xx", FocusedField::Hours, 9, 5).is_err());
	}

	#[test]
	fn accepts_range_edges() {
		assert!(commit_keyboard_entry("00", FocusedField::Hours, 9, 5).is_ok());
		assert!(commit_keyboard_entry("23", FocusedField::Hours, 9, 5).is_ok());
		assert!(commit_keyboard_entry("59", FocusedField::Minutes, 9, 5).is_ok());
	}

	#[test]
	fn dial_steps_wrap_around() {
		assert_eq!(
			step_event(FocusedField::Hours, 23, 5, 1),
			EditorEvent::Change {
				focused: None,
				hours: 0,
				minutes: 5,
			}
		);
		assert_eq!(
			step_event(FocusedField::Minutes, 9, 0, -1),
			EditorEvent::Change {
				focused: None,
				hours: 9,
				minutes: 59,
			}
		);
	}

	#[test]
	fn wrap_add_covers_both_directions() {
		assert_eq!(wrap_add(0, -5, 60), 55);
		assert_eq!(wrap_add(55, 5, 60), 0);
		assert_eq!(wrap_add(12, 0, 24), 12);
	}

	#[test]
	fn dial_positions_stay_inside_the_grid() {
		for index in 0..12 {
			let (row, col) = dial_position(index, OUTER_RADIUS_COLS, OUTER_RADIUS_ROWS);
			assert!(row < DIAL_HEIGHT, "outer row {row} for index {index}");
			assert!(col + 2 <= DIAL_WIDTH, "outer col {col} for index {index}");

			let (row, col) = dial_position(index, INNER_RADIUS_COLS, INNER_RADIUS_ROWS);
			assert!(row < DIAL_HEIGHT, "inner row {row} for index {index}");
			assert!(col + 2 <= DIAL_WIDTH, "inner col {col} for index {index}");
		}
	}

	#[test]
	fn locale_only_disables_24_hour_for_english() {
		assert!(locale_prefers_24_hour(None));
		assert!(locale_prefers_24_hour(Some("fi-FI")));
		assert!(locale_prefers_24_hour(Some("de")));
		assert!(!locale_prefers_24_hour(Some("en")));
		assert!(!locale_prefers_24_hour(Some("en-US")));
		assert!(!locale_prefers_24_hour(Some("en_GB")));
	}

	#[test]
	fn renders_twelve_hour_display_with_period() {
		assert_eq!(display_hours(0, false), ("12".to_string(), Some("AM")));
		assert_eq!(display_hours(12, false), ("12".to_string(), Some("PM")));
		assert_eq!(display_hours(14, false), ("02".to_string(), Some("PM")));
		assert_eq!(display_hours(14, true), ("14".to_string(), None));
	}

	#[test]
	fn pads_pending_entries() {
		assert_eq!(padded_entry("1"), "1_");
		assert_eq!(padded_entry(""), "__");
	}

	#[test]
	fn maps_known_icon_names() {
		assert_eq!(icon_glyph("keyboard-outline"), Some("⌨"));
		assert_eq!(icon_glyph("clock-outline"), Some("◷"));
		assert_eq!(icon_glyph("sparkles"), None);
	}
}
