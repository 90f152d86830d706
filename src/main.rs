//! Application entry point: polyglot assistant command line.
//!
//! # Startup sequence
//!
//! 1. Parse arguments.
//! 2. Initialise logging (`-v` raises the default filter to `debug`).
//! 3. Load [`AppConfig`] from disk (defaults on first run or on error), then
//!    apply environment overrides.
//! 4. Create the [`tokio`] runtime and build the [`PipelineOrchestrator`].
//! 5. Run the selected subcommand.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use polyglot_assistant::{
    config::{AppConfig, AppPaths},
    language::{self, LanguageCode, LANGUAGE_REFERENCE},
    media::AudioHandle,
    nlp::TextNormalizer,
    pipeline::{Mode, PipelineOrchestrator, ProcessRequest, EXAMPLES},
};

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Multi-modal assistant: translate, answer voice commands, or transcribe.
#[derive(Parser, Debug)]
#[command(name = "polyglot-assistant")]
#[command(version)]
#[command(about = "Translate, answer voice commands, or transcribe text and speech")]
#[command(long_about = "Processes typed text or a recorded audio file in one of three modes.

EXAMPLES:
    polyglot-assistant process --text \"Hello, how are you today?\" --mode translation --target es
    polyglot-assistant process --text \"What time is it?\" --mode \"Voice Command\" --output fr --speak
    polyglot-assistant process --audio question.wav --mode transcription
    polyglot-assistant speak --text \"Hola\" --language es
    polyglot-assistant normalize --text \"The quick brown fox jumps over the lazy dog.\"

CONFIGURATION:
    Settings live in settings.toml under the platform config directory.
    --config or POLYGLOT_CONFIG point at another file.
    POLYGLOT_API_KEY fills any api_key left empty.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (defaults to $POLYGLOT_CONFIG, then the platform config directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Process text or audio in one of the three modes
    Process(ProcessArgs),

    /// Convert text to speech and print the audio file path
    Speak {
        /// Text to speak
        #[arg(short, long)]
        text: String,

        /// Language code for the speech (defaults to the configured language)
        #[arg(short, long, default_value = "")]
        language: String,
    },

    /// Print the normalized form of a text
    Normalize {
        /// Text to normalize
        #[arg(short, long)]
        text: String,
    },

    /// List suggested language codes
    Languages,

    /// List the built-in example requests, or run one of them
    Examples {
        /// Index of the example to run
        #[arg(long, value_name = "N")]
        run: Option<usize>,
    },

    /// Show the settings file location, or write a default one
    Config {
        /// Write a default settings.toml (overwrites an existing file)
        #[arg(long)]
        init: bool,
    },
}

#[derive(clap::Args, Debug)]
struct ProcessArgs {
    /// Text input
    #[arg(short, long)]
    text: Option<String>,

    /// Audio file input (takes precedence over --text)
    #[arg(short, long, value_name = "PATH")]
    audio: Option<PathBuf>,

    /// Mode: Translation, Voice Command, or Transcription
    #[arg(short, long, default_value = "Translation")]
    mode: String,

    /// Target language for Translation mode (e.g. 'es', 'fr')
    #[arg(long, default_value = "")]
    target: String,

    /// Translate the final result into this language (other modes only)
    #[arg(short, long, default_value = "")]
    output: String,

    /// Also synthesise the result to speech
    #[arg(short, long)]
    speak: bool,

    /// Language for --speak (defaults to --output, then the configured language)
    #[arg(long, value_name = "CODE")]
    speak_language: Option<String>,
}

impl ProcessArgs {
    fn to_request(&self) -> ProcessRequest {
        ProcessRequest {
            text: self.text.clone(),
            audio: self.audio.clone().map(AudioHandle::from),
            mode: self.mode.clone(),
            target_language: self.target.as_str().into(),
            output_language: self.output.as_str().into(),
        }
    }

    fn speech_language(&self) -> LanguageCode {
        match &self.speak_language {
            Some(code) => code.as_str().into(),
            None => self.output.as_str().into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Subcommands
// ---------------------------------------------------------------------------

async fn run_process(assistant: &PipelineOrchestrator, args: &ProcessArgs) {
    let result = assistant.process(&args.to_request()).await;
    println!("{}", result.text);

    if args.speak {
        speak(assistant, &result.text, &args.speech_language()).await;
    }
}

async fn speak(assistant: &PipelineOrchestrator, text: &str, language: &LanguageCode) {
    match assistant.synthesize(text, language).await {
        Some(audio) => println!("Audio: {audio}"),
        None => log::info!("no audio produced"),
    }
}

async fn run_examples(assistant: &PipelineOrchestrator, run: Option<usize>) -> anyhow::Result<()> {
    let Some(index) = run else {
        for (i, example) in EXAMPLES.iter().enumerate() {
            println!("{i}: [{}] {}", example.mode, example.text);
        }
        return Ok(());
    };

    let example = EXAMPLES
        .get(index)
        .with_context(|| format!("no example #{index} (0..{})", EXAMPLES.len()))?;
    let result = assistant.process(&example.to_request()).await;
    println!("{}", result.text);
    Ok(())
}

fn print_languages() {
    for (code, name) in LANGUAGE_REFERENCE {
        println!("{code}  {name}");
    }
    log::debug!(
        "any ISO 639-1/639-3 code is accepted, e.g. 'it' = {:?}",
        language::english_name("it")
    );
}

fn run_config(path: PathBuf, init: bool) -> anyhow::Result<()> {
    if init {
        AppConfig::default()
            .save_to(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Wrote default settings to {}", path.display());
    } else {
        println!("{}", path.display());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 1. Logging
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings_path = AppPaths::resolve(cli.config.clone()).settings_file;

    // Commands that need neither config nor the runtime.
    match &cli.command {
        Commands::Config { init } => return run_config(settings_path, *init),
        Commands::Languages => {
            print_languages();
            return Ok(());
        }
        _ => {}
    }

    // 2. Configuration
    let mut config = AppConfig::load_from(&settings_path).unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });
    config.apply_env();

    if let Commands::Normalize { text } = &cli.command {
        let normalizer = TextNormalizer::for_language(&config.normalizer.language);
        println!("{}", normalizer.normalize(text));
        return Ok(());
    }

    // 3. Tokio runtime
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;

    // 4. Orchestrator
    let assistant = PipelineOrchestrator::from_config(&config);
    log::debug!(
        "pipeline ready (modes: {})",
        Mode::ALL.map(|m| m.label()).join(", ")
    );

    rt.block_on(async {
        match &cli.command {
            Commands::Process(args) => run_process(&assistant, args).await,
            Commands::Speak { text, language } => {
                speak(&assistant, text, &language.as_str().into()).await
            }
            Commands::Examples { run } => return run_examples(&assistant, *run).await,
            Commands::Normalize { .. } | Commands::Languages | Commands::Config { .. } => {}
        }
        Ok(())
    })
}
