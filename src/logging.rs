use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Initialise logging. The default level is `info`; `debug` can be enabled
/// via the settings file, in which case `RUST_LOG` may override the level.
///
/// Output always goes to stderr. When `log_file` is given every line is also
/// appended to that file. Calling this more than once keeps the first subscriber.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    // When debug logging is disabled we force `info` level regardless of the
    // `RUST_LOG` environment variable.
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let appender = log_file.as_deref().and_then(split_path).and_then(|(dir, name)| {
        RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(name.to_string_lossy())
            .build(&dir)
            .map_err(|e| eprintln!("failed to open log file in {}: {e}", dir.display()))
            .ok()
    });

    match appender {
        Some(appender) => {
            let _ = builder
                .with_ansi(false)
                .with_writer(std::io::stderr.and(appender))
                .try_init();
        }
        None => {
            let _ = builder.try_init();
        }
    }
}

fn split_path(path: &Path) -> Option<(PathBuf, PathBuf)> {
    let name = path.file_name()?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Some((dir, PathBuf::from(name)))
}
