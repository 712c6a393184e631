use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
}

pub struct Logger {
    prefix: Option<String>,
    min_level: LogLevel,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        let min_level = if verbose { LogLevel::Debug } else { LogLevel::Info };
        Self { prefix, min_level }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn format_line(&self, level: LogLevel, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let level_tag = match level {
            LogLevel::Debug => "[debug] ",
            LogLevel::Info => "",
        };
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}] {}{}", timestamp, prefix, level_tag, message),
            None => format!("[{}] {}{}", timestamp, level_tag, message),
        }
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if self.enabled(level) {
            println!("{}", self.format_line(level, message));
        }
    }
}

pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

/// Debug output before `init_logger` is dropped; info goes to stderr.
pub fn log(level: LogLevel, message: &str) {
    match LOGGER.get() {
        Some(logger) => logger.log(level, message),
        None if level == LogLevel::Info => eprintln!("{}", message),
        None => {}
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Debug, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_logger_skips_debug() {
        let logger = Logger::new(None, false);
        assert!(logger.enabled(LogLevel::Info));
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(Logger::new(None, true).enabled(LogLevel::Debug));
    }

    #[test]
    fn test_prefix_and_level_tag_in_line() {
        let logger = Logger::new(Some("Client".to_string()), true);
        let line = logger.format_line(LogLevel::Debug, "moved");
        assert!(line.contains("][Client] [debug] moved"), "{line}");

        let plain = Logger::new(None, false).format_line(LogLevel::Info, "hello");
        assert!(plain.starts_with('['));
        assert!(plain.ends_with("] hello"));
    }
}
