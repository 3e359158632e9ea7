use std::error::Error;
use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};

use timedial::config::{load_config, resolve_config_path};
use timedial::history::{history_path, recent_picks};
use timedial::modal::{Animation, ModalProps};
use timedial::ui::run_picker;

#[derive(Debug, Parser)]
#[command(name = "timedial", about = "Terminal time picker with keyboard and clock-dial entry")]
struct Cli {
	#[arg(long)]
	config: Option<PathBuf>,
	#[arg(long)]
	hours: Option<u32>,
	#[arg(long)]
	minutes: Option<u32>,
	#[arg(long)]
	label: Option<String>,
	#[arg(long)]
	no_uppercase: bool,
	#[arg(long)]
	cancel_label: Option<String>,
	#[arg(long)]
	confirm_label: Option<String>,
	#[arg(long)]
	animation: Option<Animation>,
	#[arg(long)]
	use_24_hour_clock: Option<bool>,
	#[arg(long)]
	locale: Option<String>,
	#[arg(long)]
	keyboard_icon: Option<String>,
	#[arg(long)]
	clock_icon: Option<String>,
	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
	Pick,
	History {
		#[arg(long, default_value_t = 20)]
		limit: usize,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> Result<(), Box<dyn Error>> {
	let cli = Cli::parse();

	if let Some(Command::History { limit }) = &cli.command {
		print_recent_picks(*limit)?;
		return Ok(());
	}

	let props = build_props(&cli)?;

	match cli.command.unwrap_or(Command::Pick) {
		Command::Pick => match run_picker(props)? {
			Some(value) => println!("{value}"),
			None => println!("no time selected"),
		},
		Command::History { .. } => {}
	}

	Ok(())
}

fn build_props(cli: &Cli) -> Result<ModalProps, Box<dyn Error>> {
	if let Some(hours) = cli.hours {
		if hours > 23 {
			return Err(format!("invalid --hours {hours}, expected 0-23").into());
		}
	}
	if let Some(minutes) = cli.minutes {
		if minutes > 59 {
			return Err(format!("invalid --minutes {minutes}, expected 0-59").into());
		}
	}

	let config_path = resolve_config_path(cli.config.clone());
	let config = load_config(&config_path)?;
	let mut props = config
		.apply_to(ModalProps::default())?
		.with_seed(cli.hours, cli.minutes);

	if let Some(label) = &cli.label {
		props.label = Some(label.clone());
	}
	if cli.no_uppercase {
		props.uppercase = false;
	}
	if let Some(cancel_label) = &cli.cancel_label {
		props.cancel_label = cancel_label.clone();
	}
	if let Some(confirm_label) = &cli.confirm_label {
		props.confirm_label = confirm_label.clone();
	}
	if let Some(animation) = cli.animation {
		props.animation = animation;
	}
	if let Some(use_24_hour_clock) = cli.use_24_hour_clock {
		props.use_24_hour_clock = Some(use_24_hour_clock);
	}
	if let Some(locale) = &cli.locale {
		props.locale = Some(locale.clone());
	}
	if let Some(keyboard_icon) = &cli.keyboard_icon {
		props.keyboard_icon = keyboard_icon.clone();
	}
	if let Some(clock_icon) = &cli.clock_icon {
		props.clock_icon = clock_icon.clone();
	}

	Ok(props)
}

fn print_recent_picks(limit: usize) -> Result<(), Box<dyn Error>> {
	let records = recent_picks(&history_path(), limit)?;
	if records.is_empty() {
		println!("no recorded picks");
		return Ok(());
	}

	for (index, record) in records.iter().enumerate() {
		println!(
			"{:>2}. {}  (picked {})",
			index + 1,
			record.value,
			record.picked_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
		);
	}

	Ok(())
}
