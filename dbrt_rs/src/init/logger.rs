use std::error::Error;
use std::path::Path;
use std::sync::Once;

use ftail::Ftail;
use log::LevelFilter;

fn convert_str_to_log_level(log_level : &'_ str) -> LevelFilter {
    match log_level {
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "trace" => LevelFilter::Trace,
        "info" => LevelFilter::Info,
        _ => LevelFilter::Error
    }
}

static LOGGER_INIT_ONCE : Once = Once::new();

/// set up the process logger. only the first call does anything,
/// later calls return Ok without touching the sink.
pub fn init_once(log_level : &'_ str, log_file : Option<&'_ str>, max_size : u64) -> Result<(), Box<dyn Error>> {
    let mut ret : Result<(), Box<dyn Error>> = Ok(());

    LOGGER_INIT_ONCE.call_once(|| {
        let level = convert_str_to_log_level(log_level);
        let mut ftail = Ftail::new().datetime_format("%Y-%m-%d %H:%M:%S%.3f").max_file_size(max_size);

        ftail = ftail.console(level);

        if let Some(file_path) = log_file {
            let chk_write = std::fs::OpenOptions::new()
                .write(true)
                .create(true)
                .append(true)
                .open(file_path.trim().to_string());

            if let Err(e) = chk_write {
                ret = Err(format!("logger init, log file [{}] not writable - {}", file_path, e).into());
                return;
            }

            ftail = ftail.single_file(Path::new(file_path), true, level);
        }

        ret = match ftail.init() {
            Ok(_) => Ok(()),
            Err(e) => Err(format!("logger init failed - {}", e).into())
        };
    });

    ret
}
