use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

/// Debug topics accepted by `--debug-filter`
pub const TOPICS: [&str; 3] = ["input", "spawn", "collision"];

// Custom logger structure
#[derive(Debug)]
struct ShooterLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

impl ShooterLogger {
    // Debug and trace records only pass if their target matches a filter topic
    fn passes_filter(&self, metadata: &Metadata) -> bool {
        match &self.debug_filters {
            Some(filters)
                if metadata.level() == log::Level::Debug
                    || metadata.level() == log::Level::Trace =>
            {
                filters.contains(metadata.target())
                    || filters.iter().any(|f| metadata.target().starts_with(f.as_str()))
            }
            _ => true,
        }
    }
}

/// Pull a frame number out of messages of the form "... Frame N ..."
fn frame_context(message: &str) -> Option<u64> {
    let start = message.find("Frame ")? + 6;
    let digits: String = message[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

impl log::Log for ShooterLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && self.passes_filter(metadata)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level_color = match record.level() {
            log::Level::Error => "\x1B[31m", // Red
            log::Level::Warn => "\x1B[33m",  // Yellow
            log::Level::Info => "\x1B[32m",  // Green
            log::Level::Debug => "\x1B[36m", // Cyan
            log::Level::Trace => "\x1B[35m", // Magenta
        };
        let reset = "\x1B[0m";
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        let message = record.args().to_string();
        let context = match frame_context(&message) {
            Some(frame) => format!("[F{:05}] ", frame),
            None => String::new(),
        };

        let mut output = format!(
            "{timestamp} {level_color}{level:5}{reset} {context}{target}: {message}",
            level = record.level(),
            target = record.target(),
        );

        if let Some(module_path) = record.module_path() {
            if module_path != record.target() {
                output.push_str(&format!(" [{}]", module_path));
            }
        }

        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", output);
        let _ = stdout.flush();
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

static LOGGER: OnceLock<ShooterLogger> = OnceLock::new();

/// Parse a `--log-level` value. Unknown names fall back to `Info`.
pub fn parse_level(name: &str) -> LevelFilter {
    match name.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

fn parse_filters(filter_str: &str) -> HashSet<String> {
    filter_str
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Filter entries that name none of the known `TOPICS`
pub fn unknown_topics(filter_str: &str) -> Vec<String> {
    let mut unknown: Vec<String> = parse_filters(filter_str)
        .into_iter()
        .filter(|topic| !TOPICS.contains(&topic.as_str()))
        .collect();
    unknown.sort();
    unknown
}

// Initialize the logger with optional debug filters
pub fn init_logger(level: LevelFilter, debug_filter: Option<String>) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ShooterLogger {
        level,
        debug_filters: debug_filter.as_deref().map(parse_filters),
    });
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

// Helper macros for specific debug topics
#[macro_export]
macro_rules! debug_input {
    ($($arg:tt)*) => {
        log::debug!(target: "input", $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_spawn {
    ($($arg:tt)*) => {
        log::debug!(target: "spawn", $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_collision {
    ($($arg:tt)*) => {
        log::debug!(target: "collision", $($arg)*)
    };
}
