//! Command implementations and argument parsing for the tsunagi CLI.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use tsunagi_core::{QuickFindUF, UnionFind, UnionFindError, WeightedQuickUnionUF};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "tsunagi",
    about = "Merge site pairs from a connections file and report components."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Merge the site pairs listed in a connections file.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a connections file: first line `n`, then one `p q` pair per
    /// line.
    pub path: PathBuf,

    /// Disjoint-set implementation to drive.
    #[arg(long, value_enum, default_value_t = Algorithm::Weighted)]
    pub algorithm: Algorithm,
}

/// Selectable disjoint-set implementations.
///
/// Quick-find answers queries in constant time but pays a full scan per
/// merge; the weighted forest amortises both. Pick quick-find only when
/// queries vastly outnumber merges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Eager quick-find: O(1) find, O(n) union.
    QuickFind,
    /// Weighted quick-union with path halving: near-constant amortised
    /// operations.
    Weighted,
}

impl Algorithm {
    /// Returns the label used in spans and summaries.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::QuickFind => "quick-find",
            Self::Weighted => "weighted",
        }
    }

    fn construct(self, sites: usize) -> Box<dyn UnionFind> {
        match self {
            Self::QuickFind => Box::new(QuickFindUF::new(sites)),
            Self::Weighted => Box::new(WeightedQuickUnionUF::new(sites)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading the connections file.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input held no site count.
    #[error("input ended before a site count")]
    MissingSiteCount,
    /// A token could not be parsed as a site number.
    #[error("line {line}: `{text}` is not a valid site number: {source}")]
    InvalidInteger {
        /// 1-based line number in the input.
        line: usize,
        /// The offending token.
        text: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },
    /// A pair line did not hold exactly two tokens.
    #[error("line {line}: expected `p q`, got `{text}`")]
    MalformedPair {
        /// 1-based line number in the input.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },
    /// The core structure rejected a site argument.
    #[error(transparent)]
    Core(#[from] UnionFindError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Implementation that processed the workload.
    pub algorithm: Algorithm,
    /// Number of sites in the universe.
    pub sites: usize,
    /// Pairs that merged two previously separate components, in input
    /// order.
    pub merged: Vec<(usize, usize)>,
    /// Number of components left after all merges.
    pub components: usize,
    /// Aligned dump of the structure's final internal state.
    pub state: String,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing, or merging fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use tsunagi_cli::cli::{Algorithm, Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\n0 1\n1 2\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         algorithm: Algorithm::Weighted,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.merged, vec![(0, 1), (1, 2)]);
/// assert_eq!(summary.components, 1);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = field::Empty, algorithm = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand { path, algorithm } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("algorithm", field::display(algorithm.label()));

    let source = read_connections(&path)?;
    let summary = run_source(algorithm, &source)?;
    info!(
        sites = summary.sites,
        merged = summary.merged.len(),
        components = summary.components,
        "command completed"
    );
    Ok(summary)
}

#[instrument(name = "cli.read_connections", err, fields(path = field::Empty))]
pub(super) fn read_connections(path: &Path) -> Result<String, CliError> {
    Span::current().record("path", field::display(path.display()));
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs the merge workload in `source` against a fresh structure.
///
/// The input format is the connections file format: the first non-blank
/// line is the site count, every following non-blank line a whitespace-
/// separated pair. A pair already connected is skipped; every other pair
/// is merged and recorded in the summary.
///
/// # Errors
/// Returns [`CliError`] when the input is malformed or a site is out of
/// range for the declared universe.
///
/// # Examples
/// ```
/// use tsunagi_cli::cli::{Algorithm, run_source};
///
/// let summary = run_source(Algorithm::Weighted, "5\n0 1\n2 3\n1 3\n1 0\n")?;
/// assert_eq!(summary.merged, vec![(0, 1), (2, 3), (1, 3)]);
/// assert_eq!(summary.components, 2);
/// # Ok::<(), tsunagi_cli::cli::CliError>(())
/// ```
pub fn run_source(algorithm: Algorithm, source: &str) -> Result<ExecutionSummary, CliError> {
    let connections = parse_connections(source)?;
    let mut uf = algorithm.construct(connections.sites);
    let merged = drive(uf.as_mut(), &connections.pairs)?;

    Ok(ExecutionSummary {
        algorithm,
        sites: connections.sites,
        merged,
        components: uf.components(),
        state: uf.to_string(),
    })
}

struct Connections {
    sites: usize,
    pairs: Vec<(usize, usize)>,
}

fn parse_connections(source: &str) -> Result<Connections, CliError> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (count_line, count_text) = lines.next().ok_or(CliError::MissingSiteCount)?;
    let sites = parse_site(count_line, count_text)?;

    let mut pairs = Vec::new();
    for (line, text) in lines {
        let mut tokens = text.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(p), Some(q), None) => {
                pairs.push((parse_site(line, p)?, parse_site(line, q)?));
            }
            _ => {
                return Err(CliError::MalformedPair {
                    line,
                    text: text.to_owned(),
                });
            }
        }
    }

    Ok(Connections { sites, pairs })
}

fn parse_site(line: usize, text: &str) -> Result<usize, CliError> {
    text.parse().map_err(|source| CliError::InvalidInteger {
        line,
        text: text.to_owned(),
        source,
    })
}

/// Merges every pair that connects two separate components, returning the
/// accepted pairs in input order.
fn drive(
    uf: &mut dyn UnionFind,
    pairs: &[(usize, usize)],
) -> Result<Vec<(usize, usize)>, UnionFindError> {
    let mut merged = Vec::new();
    for &(p, q) in pairs {
        if uf.connected(p, q)? {
            continue;
        }
        uf.union(p, q)?;
        merged.push((p, q));
    }
    Ok(merged)
}

/// Renders `summary` to `writer`: one `p q` line per accepted merge, then
/// the structure's state dump, then the component count.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::io::Cursor;
/// # use tsunagi_cli::cli::{Algorithm, render_summary, run_source};
/// #
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let summary = run_source(Algorithm::QuickFind, "2\n0 1\n")?;
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert_eq!(text, "0 1\nsite 0 1\nid   1 1\ncomponents: 1\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    for (p, q) in &summary.merged {
        writeln!(writer, "{p} {q}")?;
    }
    writeln!(writer, "{}", summary.state)?;
    writeln!(writer, "components: {}", summary.components)?;
    Ok(())
}
