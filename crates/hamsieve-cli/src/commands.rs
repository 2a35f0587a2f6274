//! CLI commands: train, classify, eval, stats.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;

use hamsieve_bayes::Classifier;
use hamsieve_core::Error;
use hamsieve_corpus::{evaluate, read_document, train_corpus};
use hamsieve_store::CountStore;
use hamsieve_tokenize::{FeatureExtractor, TokenizerConfig};

/// Hamsieve — persistent Naive Bayes spam classification.
#[derive(Parser, Debug)]
#[command(name = "hamsieve", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Train a model from a labeled directory corpus
    Train(TrainArgs),
    /// Classify documents (files, or stdin when no paths are given)
    Classify(ClassifyArgs),
    /// Evaluate a model against a labeled corpus and report accuracy
    Eval(EvalArgs),
    /// Show label and document counts of a model
    Stats(StatsArgs),
}

/// Feature extraction flags shared by train, classify, and eval.
///
/// The model database stores only counts, not the extraction settings, so
/// classification and evaluation must run with the same flags the model
/// was trained with.
#[derive(Args, Debug, Default)]
pub struct TokenizerArgs {
    /// Disable stopword removal
    #[arg(long)]
    pub no_stopwords: bool,

    /// Disable bigram features
    #[arg(long)]
    pub no_bigrams: bool,

    /// Disable capitalization features
    #[arg(long)]
    pub no_caps: bool,

    /// Disable document flag features (links, shouting)
    #[arg(long)]
    pub no_flags: bool,

    /// Additional stopword (repeatable)
    #[arg(long = "stopword", value_name = "WORD")]
    pub custom_stopwords: Vec<String>,

    /// Word to exempt from stopword removal (repeatable, case-sensitive)
    #[arg(long = "allow", value_name = "WORD")]
    pub allowlist: Vec<String>,

    /// Minimum token length, exclusive (default 2)
    #[arg(long, value_name = "LEN")]
    pub min_len: Option<usize>,

    /// Maximum token length, exclusive (default 20)
    #[arg(long, value_name = "LEN")]
    pub max_len: Option<usize>,
}

impl TokenizerArgs {
    /// Build and validate the tokenizer configuration these flags describe.
    pub fn to_config(&self) -> hamsieve_core::Result<TokenizerConfig> {
        let mut config = TokenizerConfig {
            stopwords_enabled: !self.no_stopwords,
            bigrams_enabled: !self.no_bigrams,
            capitalization_enabled: !self.no_caps,
            document_flags_enabled: !self.no_flags,
            custom_stopwords: self.custom_stopwords.clone(),
            allowlist: self.allowlist.clone(),
            ..Default::default()
        };
        if let Some(len) = self.min_len {
            config.min_token_len = len;
        }
        if let Some(len) = self.max_len {
            config.max_token_len = len;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Corpus root: immediate subdirectories are labels
    #[arg(short, long, value_name = "DIR")]
    pub corpus: PathBuf,

    /// Model database file (.redb), created if missing
    #[arg(short, long, value_name = "FILE")]
    pub db: PathBuf,

    #[command(flatten)]
    pub tokenizer: TokenizerArgs,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Trained model database file (.redb)
    #[arg(short, long, value_name = "FILE")]
    pub db: PathBuf,

    /// Documents to classify; reads stdin when empty
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Maximum number of ranked labels to print
    #[arg(short, long, default_value_t = hamsieve_bayes::DEFAULT_LIMIT)]
    pub limit: usize,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub tokenizer: TokenizerArgs,
}

#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Labeled corpus to evaluate against
    #[arg(short, long, value_name = "DIR")]
    pub corpus: PathBuf,

    /// Trained model database file (.redb)
    #[arg(short, long, value_name = "FILE")]
    pub db: PathBuf,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub tokenizer: TokenizerArgs,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Model database file (.redb)
    #[arg(short, long, value_name = "FILE")]
    pub db: PathBuf,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Train(args) => train(args),
        Command::Classify(args) => classify(args),
        Command::Eval(args) => eval(args),
        Command::Stats(args) => stats(args),
    }
}

fn train(args: TrainArgs) -> Result<()> {
    tracing::info!(
        corpus = %args.corpus.display(),
        db = %args.db.display(),
        "training model"
    );
    let classifier = Classifier::new(CountStore::create(&args.db)?);
    let extractor = FeatureExtractor::new(args.tokenizer.to_config()?);

    let report = train_corpus(&classifier, &args.corpus, &extractor)
        .with_context(|| format!("training from {}", args.corpus.display()))?;

    println!("{report}");
    Ok(())
}

fn classify(args: ClassifyArgs) -> Result<()> {
    tracing::info!(db = %args.db.display(), documents = args.paths.len(), "classifying");
    let classifier = Classifier::new(CountStore::open_read_only(&args.db)?);
    ensure_trained(classifier.store())?;
    let extractor = FeatureExtractor::new(args.tokenizer.to_config()?);

    if args.paths.is_empty() {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("reading document from stdin")?;
        let text = lossy_text(&bytes);
        print_ranking(&classifier, &extractor, "<stdin>", &text, args.limit, args.json)?;
        return Ok(());
    }

    for path in &args.paths {
        let text = read_document(path)
            .with_context(|| format!("reading {}", path.display()))?;
        print_ranking(
            &classifier,
            &extractor,
            &path.display().to_string(),
            &text,
            args.limit,
            args.json,
        )?;
    }
    Ok(())
}

fn print_ranking(
    classifier: &Classifier,
    extractor: &FeatureExtractor,
    name: &str,
    text: &str,
    limit: usize,
    as_json: bool,
) -> Result<()> {
    let features = extractor.extract(text);
    let ranked = classifier.classify(&features, Some(limit))?;

    if as_json {
        println!("{}", serde_json::to_string(&json!({ "document": name, "ranking": ranked }))?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("{name}: no ranking");
        return Ok(());
    }
    let ranking = ranked
        .iter()
        .map(|s| format!("{} ({:.6e})", s.label, s.score))
        .collect::<Vec<_>>()
        .join(", ");
    println!("{name}: {ranking}");
    Ok(())
}

fn eval(args: EvalArgs) -> Result<()> {
    tracing::info!(
        corpus = %args.corpus.display(),
        db = %args.db.display(),
        "evaluating model"
    );
    let classifier = Classifier::new(CountStore::open_read_only(&args.db)?);
    let extractor = FeatureExtractor::new(args.tokenizer.to_config()?);

    let report = evaluate(&classifier, &args.corpus, &extractor)
        .with_context(|| format!("evaluating {}", args.corpus.display()))?;

    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("[{}]", args.corpus.display());
        println!("{report}");
    }
    Ok(())
}

fn stats(args: StatsArgs) -> Result<()> {
    tracing::info!(db = %args.db.display(), "reading model stats");
    let store = CountStore::open_read_only(&args.db)?;
    ensure_trained(&store)?;
    let labels = store.labels()?;
    let total = store.total_count()?;

    if args.json {
        let mut entries = Vec::new();
        for label in &labels {
            entries.push(json!({
                "label": label,
                "documents": store.label_count(label)?,
            }));
        }
        println!(
            "{}",
            serde_json::to_string(&json!({ "total": total, "labels": entries }))?
        );
        return Ok(());
    }

    for label in &labels {
        println!("{label}: {} documents", store.label_count(label)?);
    }
    println!("total: {total} documents");
    Ok(())
}

/// Stdin documents get the same lossy decoding as corpus files: raw mail
/// bodies are not reliably valid UTF-8.
fn lossy_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Classification and stats require at least one trained document.
fn ensure_trained(store: &CountStore) -> hamsieve_core::Result<()> {
    if store.total_count()? == 0 {
        return Err(Error::EmptyModel);
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
