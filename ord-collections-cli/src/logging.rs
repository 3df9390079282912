use anyhow::{anyhow, bail, Result};
use log::{Level, LevelFilter, Log, Metadata, Record};
use crate::console::eprint_in_color;

struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let color = match record.level() {
            Level::Error => 31,
            Level::Warn => 93,
            Level::Info => 34,
            Level::Debug => 32,
            Level::Trace => 90,
        };
        eprint_in_color(
            format_args!("[{:>5}] {}\n", record.level(), record.args()),
            color,
        );
    }

    fn flush(&self) {}
}


pub fn level_filter(level: Option<&str>) -> Result<LevelFilter> {
    Ok(match level.map(|l| l.to_ascii_uppercase()).as_deref() {
        None | Some("OFF") => LevelFilter::Off,
        Some("ERROR") => LevelFilter::Error,
        Some("WARN") => LevelFilter::Warn,
        Some("INFO") => LevelFilter::Info,
        Some("DEBUG") => LevelFilter::Debug,
        Some("TRACE") => LevelFilter::Trace,
        Some(other) => bail!("unknown log level `{}`", other),
    })
}

pub fn init(level: Option<&str>) -> Result<()> {
    static LOGGER: SimpleLogger = SimpleLogger;
    let filter = level_filter(level)?;
    log::set_logger(&LOGGER).map_err(|e| anyhow!("{}", e))?;
    log::set_max_level(filter);
    Ok(())
}
