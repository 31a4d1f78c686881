//! Command implementations and argument parsing for the topicsim CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use topicsim_core::{
    Corpus, CorpusGeneratorBuilder, DEFAULT_DOCUMENTS, DEFAULT_SEED, DEFAULT_TOKENS,
    DEFAULT_TOPICS, GeneratorError, LabelScheme, SeedPolicy,
};
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "topicsim",
    about = "Generate synthetic corpora with known topic structure."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a corpus and write it to stdout.
    Generate(GenerateCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of documents to generate.
    #[arg(long, default_value_t = DEFAULT_DOCUMENTS)]
    pub documents: usize,

    /// Number of latent topics.
    #[arg(long, default_value_t = DEFAULT_TOPICS)]
    pub topics: usize,

    /// Tokens per topic vocabulary and per document.
    #[arg(long, default_value_t = DEFAULT_TOKENS)]
    pub tokens: usize,

    /// Base seed for all random draws.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// How the seed is spread across generation stages.
    #[arg(long = "seed-policy", value_enum, default_value_t = SeedPolicyArg::Legacy)]
    pub seed_policy: SeedPolicyArg,

    /// Token identifier scheme.
    #[arg(long, value_enum, default_value_t = LabelArg::Letters)]
    pub labels: LabelArg,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Command-line spelling of [`SeedPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeedPolicyArg {
    /// Restart every stage and document from the base seed.
    Legacy,
    /// Derive a distinct seed per stage and document.
    Derived,
    /// Share one generator across the whole run.
    Threaded,
}

impl From<SeedPolicyArg> for SeedPolicy {
    fn from(value: SeedPolicyArg) -> Self {
        match value {
            SeedPolicyArg::Legacy => Self::Legacy,
            SeedPolicyArg::Derived => Self::Derived,
            SeedPolicyArg::Threaded => Self::Threaded,
        }
    }
}

/// Command-line spelling of [`LabelScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LabelArg {
    /// `a0`, `b3`: at most 26 topics.
    Letters,
    /// `t0_0`, `t41_3`: any number of topics.
    Numeric,
}

impl From<LabelArg> for LabelScheme {
    fn from(value: LabelArg) -> Self {
        match value {
            LabelArg::Letters => Self::Letters,
            LabelArg::Numeric => Self::Numeric,
        }
    }
}

/// Corpus encodings supported on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One document per line, tokens separated by spaces.
    Text,
    /// A single JSON object with topics, mixtures, and documents.
    Json,
    /// The token dictionary followed by one bag-of-words line per document.
    Bow,
}

impl OutputFormat {
    pub(super) const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Bow => "bow",
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Corpus generation rejected the supplied arguments.
    #[error(transparent)]
    Core(#[from] GeneratorError),
}

/// Result of a CLI command, ready to be rendered.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Requested output encoding.
    pub format: OutputFormat,
    /// Generated corpus and its ground truth.
    pub corpus: Corpus,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation fails.
///
/// # Examples
/// ```
/// use topicsim_cli::cli::{Cli, run_cli};
/// use clap::Parser;
///
/// let cli = Cli::parse_from(["topicsim", "generate", "--documents", "3", "--topics", "2"]);
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.corpus.len(), 3);
/// # Ok::<(), topicsim_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<GenerationSummary, CliError> {
    match cli.command {
        Command::Generate(generate) => {
            Span::current().record("command", field::display("generate"));
            run_generate(&generate)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(
        documents = command.documents,
        topics = command.topics,
        tokens = command.tokens,
        seed = command.seed,
        format = field::Empty,
    ),
)]
pub(super) fn run_generate(command: &GenerateCommand) -> Result<GenerationSummary, CliError> {
    Span::current().record("format", field::display(command.format.as_str()));
    let corpus = CorpusGeneratorBuilder::new()
        .with_documents(command.documents)
        .with_topics(command.topics)
        .with_tokens(command.tokens)
        .with_seed(command.seed)
        .with_seed_policy(command.seed_policy.into())
        .with_labels(command.labels.into())
        .build()?
        .generate()?;

    info!(documents = corpus.len(), "command completed");
    Ok(GenerationSummary {
        format: command.format,
        corpus,
    })
}
