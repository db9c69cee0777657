use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use error_set::error_set;
use line_diff_view::{
    Algorithm, ContextSize, DiffView, LineDiffer, SimilarEngine, SpanError, render_selection,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

error_set! {
    /// Errors from the line-diff-view command line
    CliError := {
        #[display("Failed to read {path}: {message}")]
        ReadFailed { path: String, message: String },
        #[display("Failed to serialize output: {message}")]
        SerializeFailed { message: String },
        #[display("Failed to write output: {message}")]
        WriteFailed { message: String },
        #[display("No line at index {index}: the view has {len} lines")]
        NoSuchLine { index: usize, len: usize },
        SpanError(SpanError),
    }
}

#[derive(Parser)]
#[command(name = "line-diff-view")]
#[command(version, about = "Line-numbered diff of two files with context windowing")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the line-by-line difference between two files
    Show {
        /// Original file
        old: PathBuf,
        /// Changed file
        new: PathBuf,
        /// Unchanged lines to keep around each change (0 keeps all)
        #[arg(short = 'U', long, default_value_t = 0)]
        context: u32,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Line diff algorithm
        #[arg(long, value_enum, default_value_t = DiffAlgorithm::Myers)]
        algorithm: DiffAlgorithm,
        /// Print only the line at this position in the view
        #[arg(long, value_name = "INDEX")]
        select: Option<usize>,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Print the man page
    Man,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum DiffAlgorithm {
    Myers,
    Patience,
    Lcs,
}

impl From<DiffAlgorithm> for Algorithm {
    fn from(algorithm: DiffAlgorithm) -> Self {
        match algorithm {
            DiffAlgorithm::Myers => Algorithm::Myers,
            DiffAlgorithm::Patience => Algorithm::Patience,
            DiffAlgorithm::Lcs => Algorithm::Lcs,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(2)
        }
    }
}

/// Exit status follows diff(1): 0 identical, 1 different, 2 trouble
fn run(command: Commands) -> Result<ExitCode, CliError> {
    match command {
        Commands::Show {
            old,
            new,
            context,
            format,
            algorithm,
            select,
        } => {
            let differ = LineDiffer::new()
                .with_engine(SimilarEngine::new(algorithm.into()))
                .with_context(ContextSize::new(context));
            let view = differ.compute(read_text(&old)?, read_text(&new)?)?;

            let output = match select {
                Some(index) => format_selection(&view, index, format)?,
                None => format_view(&view, format)?,
            };
            write_stdout(&output)?;

            Ok(if view.is_content_equal {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Commands::Completions { shell } => {
            let mut out = Vec::new();
            clap_complete::generate(shell, &mut Cli::command(), "line-diff-view", &mut out);
            write_stdout(&String::from_utf8_lossy(&out))?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Man => {
            let mut out = Vec::new();
            clap_mangen::Man::new(Cli::command())
                .render(&mut out)
                .map_err(|e| CliError::WriteFailed {
                    message: e.to_string(),
                })?;
            write_stdout(&String::from_utf8_lossy(&out))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Read a file as text, replacing invalid UTF-8
fn read_text(path: &Path) -> Result<String, CliError> {
    let bytes = std::fs::read(path).map_err(|e| CliError::ReadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn format_view(view: &DiffView, format: Format) -> Result<String, CliError> {
    match format {
        Format::Text => Ok(view.to_string()),
        Format::Json => to_json(view),
    }
}

fn format_selection(view: &DiffView, index: usize, format: Format) -> Result<String, CliError> {
    let selection = view.select(index).ok_or(CliError::NoSuchLine {
        index,
        len: view.lines.len(),
    })?;

    match format {
        Format::Text => Ok(format!("{}\n", render_selection(&selection))),
        Format::Json => to_json(&selection),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value)
        .map(|json| json + "\n")
        .map_err(|e| CliError::SerializeFailed {
            message: e.to_string(),
        })
}

fn write_stdout(output: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| CliError::WriteFailed {
            message: e.to_string(),
        })
}
