//! `cellgrid` binary: parse arguments, prepare the grid and run the UI.

use anyhow::{Context, Result};
use bubbletea_rs::Program;
use cellgrid::config::{validate_dimensions, Config, MAX_COLS, MAX_ROWS};
use cellgrid::grid::TerminalSize;
use cellgrid::{codec, set_launch_options, App, GridError, LaunchOptions};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Exit status for unusable startup parameters.
const EXIT_CONFIGURATION: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "cellgrid", version, about = "Edit a table of text cells in the terminal")]
struct CliArgs {
    /// Number of rows (1-100); asked for interactively when omitted
    #[arg(long, value_name = "N")]
    rows: Option<usize>,

    /// Number of columns (1-10); asked for interactively when omitted
    #[arg(long, value_name = "N")]
    cols: Option<usize>,

    /// Where the save command writes the table
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// CSV file to fill the grid from at startup
    #[arg(long, value_name = "FILE")]
    load: Option<PathBuf>,

    /// JSON config file with layout and defaults
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write diagnostics to this file (filtered by RUST_LOG)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => Config::load(path).or_else(exit_on_configuration)?,
        None => Config::default(),
    };

    let log_file = args.log_file.clone().or_else(|| config.log_file.clone());
    let _guard = match &log_file {
        Some(path) => Some(init_tracing(path)?),
        None => None,
    };

    let options = prepare(&args, config).or_else(exit_on_configuration)?;
    set_launch_options(options)?;

    let program = Program::<App>::builder()
        .alt_screen(true)
        .build()
        .context("failed to set up the terminal")?;
    program.run().await.context("terminal program failed")?;

    tracing::info!("exited");
    Ok(())
}

/// Resolves the table size, output path and imported content.
fn prepare(args: &CliArgs, config: Config) -> cellgrid::Result<LaunchOptions> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let rows = match args.rows {
        Some(rows) => rows,
        None => prompt_number(&mut input, &mut output, "rows", MAX_ROWS)?,
    };
    let cols = match args.cols {
        Some(cols) => cols,
        None => prompt_number(&mut input, &mut output, "columns", MAX_COLS)?,
    };
    validate_dimensions(rows, cols)?;

    let destination = args.output.clone().unwrap_or(config.output);
    let terminal = terminal_size();
    let options = LaunchOptions::new(rows, cols, terminal, config.layout, destination)?;
    tracing::info!(
        rows,
        cols,
        width = terminal.width,
        height = terminal.height,
        output = %options.output.display(),
        "starting"
    );

    match &args.load {
        Some(path) => {
            let records = codec::load(path)?;
            Ok(options.with_records(&records, path))
        }
        None => Ok(options),
    }
}

/// Size of the controlling terminal, or 80×24 when it cannot be queried.
///
/// The runtime only reports sizes on resize, so the first frame needs this.
fn terminal_size() -> TerminalSize {
    match crossterm::terminal::size() {
        Ok((width, height)) => TerminalSize::new(width, height),
        Err(e) => {
            tracing::warn!(error = %e, "could not query terminal size, assuming 80x24");
            TerminalSize::default()
        }
    }
}

/// Asks for a number in `1..=max` until one is given.
///
/// # Errors
///
/// [`GridError::Configuration`] when input ends before a valid number.
fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    what: &str,
    max: usize,
) -> cellgrid::Result<usize> {
    let mut line = String::new();
    loop {
        write!(output, "Enter number of {what} (1-{max}): ")
            .and_then(|()| output.flush())
            .map_err(|e| GridError::io(Path::new("<stdout>"), e))?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .map_err(|e| GridError::io(Path::new("<stdin>"), e))?;
        if read == 0 {
            return Err(GridError::Configuration(format!(
                "no number of {what} given"
            )));
        }

        match line.trim().parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(n),
            _ => {
                writeln!(output, "Please enter a whole number between 1 and {max}.")
                    .map_err(|e| GridError::io(Path::new("<stdout>"), e))?;
            }
        }
    }
}

/// Prints configuration errors and exits with status 2; passes others on.
fn exit_on_configuration<T>(err: GridError) -> Result<T> {
    if let GridError::Configuration(_) = err {
        eprintln!("cellgrid: {err}");
        std::process::exit(EXIT_CONFIGURATION);
    }
    Err(err.into())
}

/// Sends log output to `path`; the terminal belongs to the UI.
fn init_tracing(path: &Path) -> Result<WorkerGuard> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("log file path {} has no file name", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .init();
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_accepts_valid_number() {
        let mut input = Cursor::new("12\n");
        let mut output = Vec::new();
        let n = prompt_number(&mut input, &mut output, "rows", MAX_ROWS).unwrap();
        assert_eq!(n, 12);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Enter number of rows (1-100): "
        );
    }

    #[test]
    fn test_prompt_repeats_until_valid() {
        let mut input = Cursor::new("0\nabc\n11\n4\n");
        let mut output = Vec::new();
        let n = prompt_number(&mut input, &mut output, "columns", MAX_COLS).unwrap();
        assert_eq!(n, 4);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Enter number of columns (1-10): ").count(), 4);
    }

    /// Accepts `budget` bytes, then fails every write.
    struct ShortWriter {
        budget: usize,
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf.len() > self.budget {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.budget -= buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_prompt_retry_message_write_failure_is_io_error() {
        let prompt = "Enter number of rows (1-100): ";
        let mut input = Cursor::new("0\n5\n");
        let mut output = ShortWriter {
            budget: prompt.len(),
        };
        let err = prompt_number(&mut input, &mut output, "rows", MAX_ROWS).unwrap_err();
        assert!(matches!(err, GridError::Io { .. }));
    }

    #[test]
    fn test_prompt_end_of_input_is_configuration_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let err = prompt_number(&mut input, &mut output, "rows", MAX_ROWS).unwrap_err();
        assert!(matches!(err, GridError::Configuration(_)));
    }

    #[test]
    fn test_cli_flags() {
        let args = CliArgs::try_parse_from([
            "cellgrid", "--rows", "20", "--cols", "5", "-o", "out.csv",
        ])
        .unwrap();
        assert_eq!(args.rows, Some(20));
        assert_eq!(args.cols, Some(5));
        assert_eq!(args.output, Some(PathBuf::from("out.csv")));
        assert!(args.load.is_none());
    }
}
