use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Mutex,
};

pub struct ScrimLogger {
    quiet: AtomicBool,
    verbose: AtomicBool,
    log_file: Mutex<Option<File>>,
    target_colors: Mutex<HashMap<String, usize>>,
    next_color_index: AtomicUsize,
}

impl ScrimLogger {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        let log_file = scrim_core::paths::ensure_data_dir()
            .and_then(|_| scrim_core::paths::log_file_path())
            .and_then(|path| {
                match OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&path)
                {
                    Ok(file) => Some(file),
                    Err(e) => {
                        eprintln!("Warning: Failed to open log file at {:?}: {}", path, e);
                        None
                    }
                }
            });

        Self {
            quiet: AtomicBool::new(quiet),
            verbose: AtomicBool::new(verbose),
            log_file: Mutex::new(log_file),
            target_colors: Mutex::new(HashMap::new()),
            next_color_index: AtomicUsize::new(0),
        }
    }

    fn color_for_target(&self, target: &str) -> String {
        let colors: &[fn(&str) -> ColoredString] = &[
            |s| s.green(),
            |s| s.yellow(),
            |s| s.blue(),
            |s| s.magenta(),
            |s| s.cyan(),
        ];

        let color_index = {
            let mut target_colors = self.target_colors.lock().unwrap();
            *target_colors.entry(target.to_string()).or_insert_with(|| {
                let index = self.next_color_index.fetch_add(1, Ordering::SeqCst);
                index % colors.len()
            })
        };

        colors[color_index](target).to_string()
    }

    fn level_tag(level: Level) -> &'static str {
        match level {
            Level::Error => "[E]",
            Level::Warn => "[W]",
            Level::Info => "[I]",
            Level::Debug => "[D]",
            Level::Trace => "[T]",
        }
    }

    fn short_target<'a>(record: &'a Record<'a>) -> &'a str {
        record.target().split("::").last().unwrap_or("")
    }

    fn format_log(&self, record: &Record) -> String {
        let level_str = Self::level_tag(record.level());
        let target = Self::short_target(record);
        let target = if target.is_empty() {
            String::new()
        } else {
            format!("[{}] ", self.color_for_target(target).dimmed())
        };

        let message = format!("{} {}{}", level_str, target, record.args());

        match record.level() {
            Level::Error => message.red().bold().to_string(),
            Level::Warn => message.yellow().bold().to_string(),
            Level::Info => message.replace(level_str, &level_str.green().bold().to_string()),
            _ => message.replace(level_str, &level_str.blue().bold().to_string()),
        }
    }

    fn format_log_plain(&self, record: &Record) -> String {
        let target = Self::short_target(record);
        let target = if target.is_empty() {
            String::new()
        } else {
            format!("[{target}] ")
        };
        format!("{} {}{}", Self::level_tag(record.level()), target, record.args())
    }
}

impl Log for ScrimLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if self.quiet.load(Ordering::SeqCst) {
            // Quiet mode: only Info, Warn, Error
            metadata.level() <= Level::Info
        } else if self.verbose.load(Ordering::SeqCst) {
            metadata.level() <= Level::Trace
        } else {
            // Default mode: up to Debug (no Trace)
            metadata.level() <= Level::Debug
        }
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{}", self.format_log(record));

            let plain_message = self.format_log_plain(record);
            if let Ok(mut file_opt) = self.log_file.lock() {
                if let Some(file) = file_opt.as_mut() {
                    let _ = writeln!(file, "{}", plain_message);
                    let _ = file.flush();
                }
            }
        }
    }

    fn flush(&self) {}
}

pub fn init_logger(quiet: bool, verbose: bool) -> Result<(), log::SetLoggerError> {
    let logger = ScrimLogger::new(quiet, verbose);
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
