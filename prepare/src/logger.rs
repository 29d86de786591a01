use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// сообщения пишутся в stderr, чтобы не смешиваться со статистикой в stdout
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger
{
    fn enabled(&self, metadata: &Metadata) -> bool
    {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record)
    {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// устанавливаем логгер: Info по умолчанию, Debug - при --verbose
pub fn init(verbose: bool) -> Result<(), SetLoggerError>
{
    log::set_logger(&LOGGER)?;

    log::set_max_level(match verbose {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    });

    Ok(())
}
