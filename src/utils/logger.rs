use crate::shared::constants;
use lazy_static::lazy_static;
use std::backtrace::Backtrace;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Clone)]
struct LogFiles {
    error_path: PathBuf,
    debug_path: PathBuf,
}

lazy_static! {
    static ref LOG_FILES: Mutex<Option<LogFiles>> = Mutex::new(None);
}

fn append_line(path: &Path, line: &str) {
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "{}", line);
    }
}

fn start_file(path: &Path, title: &str) {
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
    {
        let _ = writeln!(
            file,
            "=== {} {} Log Started: {} ===",
            constants::APP_NAME,
            title,
            chrono::Local::now()
        );
    }
}

/// Starts fresh error/debug logs in the working directory and routes
/// panics into them.
pub fn init() {
    let dir = std::env::current_dir().unwrap_or_default();
    let files = LogFiles {
        error_path: dir.join(constants::ERROR_LOG_FILE),
        debug_path: dir.join(constants::DEBUG_LOG_FILE),
    };

    start_file(&files.error_path, "Error");
    start_file(&files.debug_path, "Debug");

    if let Ok(mut slot) = LOG_FILES.lock() {
        *slot = Some(files.clone());
    }

    panic::set_hook(Box::new(move |info| {
        let backtrace = Backtrace::capture();
        let msg = match info.payload().downcast_ref::<&str>() {
            Some(s) => *s,
            None => match info.payload().downcast_ref::<String>() {
                Some(s) => &s[..],
                None => "Box<Any>",
            },
        };

        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown".to_string());

        let report = format!(
            "\nPANIC at {}:\nMessage: {}\nBacktrace:\n{:?}\n",
            location, msg, backtrace
        );

        append_line(&files.error_path, &report);
        append_line(&files.debug_path, &report);
        eprintln!(
            "{} panicked: {}. See {} for details.",
            constants::APP_NAME,
            msg,
            files.error_path.display()
        );
    }));
}

pub fn log(level: &str, msg: &str) {
    let Ok(guard) = LOG_FILES.lock() else {
        return;
    };
    if let Some(files) = guard.as_ref() {
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        let line = format!("[{}][{}] {}", timestamp, level, msg);
        append_line(&files.debug_path, &line);

        if level == "ERROR" {
            append_line(&files.error_path, &line);
        }
    }
}

pub fn info(msg: &str) {
    log("INFO", msg);
}

pub fn error(msg: &str) {
    log("ERROR", msg);
}

pub fn debug(msg: &str) {
    log("DEBUG", msg);
}
