use std::env;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time_value::TimeValue;

const HISTORY_FILE: &str = "history.jsonl";
const MAX_HISTORY_ENTRIES: usize = 200;

/// One confirmed selection, as appended to the history file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickRecord {
	pub picked_at: DateTime<Utc>,
	#[serde(flatten)]
	pub value: TimeValue,
}

impl PickRecord {
	pub fn new(value: TimeValue, picked_at: DateTime<Utc>) -> Self {
		Self { picked_at, value }
	}
}

#[derive(Debug)]
pub enum HistoryError {
	Io(std::io::Error),
	JsonDecode(serde_json::Error),
	JsonEncode(serde_json::Error),
}

impl Display for HistoryError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			HistoryError::Io(err) => write!(f, "io error: {err}"),
			HistoryError::JsonDecode(err) => write!(f, "failed to parse history entry: {err}"),
			HistoryError::JsonEncode(err) => write!(f, "failed to encode history entry: {err}"),
		}
	}
}

impl std::error::Error for HistoryError {}

pub fn history_path() -> PathBuf {
	state_dir().join(HISTORY_FILE)
}

/// Appends one record and keeps the file bounded to the newest
/// MAX_HISTORY_ENTRIES lines.
pub fn append_pick(path: &Path, record: &PickRecord) -> Result<(), HistoryError> {
	let mut lines = read_lines(path)?;
	lines.push(serde_json::to_string(record).map_err(HistoryError::JsonEncode)?);
	if lines.len() > MAX_HISTORY_ENTRIES {
		let excess = lines.len() - MAX_HISTORY_ENTRIES;
		lines.drain(..excess);
	}

	if let Some(parent) = path.parent() {
		if !parent.as_os_str().is_empty() {
			fs::create_dir_all(parent).map_err(HistoryError::Io)?;
		}
	}

	let mut blob = lines.join("\n");
	blob.push('\n');
	fs::write(path, blob).map_err(HistoryError::Io)
}

/// Recent picks, newest first.
pub fn recent_picks(path: &Path, limit: usize) -> Result<Vec<PickRecord>, HistoryError> {
	let lines = read_lines(path)?;
	let mut records = Vec::new();
	for line in lines.iter().rev().take(limit) {
		records.push(serde_json::from_str(line).map_err(HistoryError::JsonDecode)?);
	}

	Ok(records)
}

fn read_lines(path: &Path) -> Result<Vec<String>, HistoryError> {
	let raw = match fs::read_to_string(path) {
		Ok(content) => content,
		Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
		Err(err) => return Err(HistoryError::Io(err)),
	};

	Ok(raw
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_string)
		.collect())
}

pub fn state_dir() -> PathBuf {
	if let Some(path) = env::var_os("TIMEDIAL_STATE_DIR") {
		return PathBuf::from(path);
	}

	#[cfg(target_os = "windows")]
	{
		if let Some(path) = env::var_os("LOCALAPPDATA") {
			return PathBuf::from(path).join("timedial");
		}
	}

	if let Some(path) = env::var_os("XDG_STATE_HOME") {
		return PathBuf::from(path).join("timedial");
	}

	if let Some(path) = env::var_os("HOME") {
		return PathBuf::from(path)
			.join(".local")
			.join("state")
			.join("timedial");
	}

	PathBuf::from(".timedial")
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::path::PathBuf;

	use chrono::{TimeZone, Utc};

	use crate::time_value::TimeValue;

	use super::{append_pick, recent_picks, PickRecord};

	fn temp_file(name: &str) -> PathBuf {
		let mut path = std::env::temp_dir();
		path.push(format!("{}_{}", name, std::process::id()));
		path
	}

	#[test]
	fn round_trips_picks_newest_first() {
		let path = temp_file("timedial_history_roundtrip.jsonl");
		let _ = fs::remove_file(&path);

		let morning = Utc.with_ymd_and_hms(2026, 8, 6, 8, 0, 0).unwrap();
		let evening = Utc.with_ymd_and_hms(2026, 8, 6, 20, 0, 0).unwrap();
		append_pick(&path, &PickRecord::new(TimeValue::new(9, 5), morning))
			.expect("append should succeed");
		append_pick(&path, &PickRecord::new(TimeValue::new(14, 30), evening))
			.expect("append should succeed");

		let records = recent_picks(&path, 10).expect("read should succeed");
		assert_eq!(records.len(), 2);
		assert_eq!(records[0].value, TimeValue::new(14, 30));
		assert_eq!(records[1].value, TimeValue::new(9, 5));

		let limited = recent_picks(&path, 1).expect("read should succeed");
		assert_eq!(limited.len(), 1);
		assert_eq!(limited[0].value, TimeValue::new(14, 30));

		let _ = fs::remove_file(path);
	}

	#[test]
	fn bounds_the_file_to_the_newest_entries() {
		let path = temp_file("timedial_history_bound.jsonl");
		let _ = fs::remove_file(&path);

		let stamp = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
		for minute in 0..210u32 {
			append_pick(
				&path,
				&PickRecord::new(TimeValue::new(minute / 60, minute % 60), stamp),
			)
			.expect("append should succeed");
		}

		let records = recent_picks(&path, usize::MAX).expect("read should succeed");
		assert_eq!(records.len(), 200);
		assert_eq!(records[0].value, TimeValue::new(3, 29));

		let _ = fs::remove_file(path);
	}

	#[test]
	fn missing_file_reads_as_empty() {
		let path = temp_file("timedial_history_missing.jsonl");
		let _ = fs::remove_file(&path);
		let records = recent_picks(&path, 10).expect("read should succeed");
		assert!(records.is_empty());
	}
}
