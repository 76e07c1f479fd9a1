// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError, error, info};
use std::io::{Read, Write};

use chatlingo::app_config::{self, Config, TranslationProvider};
use chatlingo::language_utils::{normalize_code, resolve_language_or_default, LanguageCode};
use chatlingo::translation::{log_chat_session_end, log_chat_session_start, TranslationService};

/// CLI Wrapper for TranslationProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationProvider {
    Google,
    Mock,
}

impl From<CliTranslationProvider> for TranslationProvider {
    fn from(cli_provider: CliTranslationProvider) -> Self {
        match cli_provider {
            CliTranslationProvider::Google => TranslationProvider::Google,
            CliTranslationProvider::Mock => TranslationProvider::Mock,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate text from a supported language into English
    ToEnglish {
        /// Source language code ('ar' or 'bn'; 'en' passes through)
        #[arg(short, long)]
        source_language: String,

        #[command(flatten)]
        input: TextInput,
    },

    /// Translate English text, keeping target-language field markers intact
    FromEnglish {
        /// Target language code ('ar' or 'bn'; 'en' passes through)
        #[arg(short, long)]
        target_language: String,

        #[command(flatten)]
        input: TextInput,
    },

    /// List supported languages
    Languages,

    /// Print translation memory statistics as JSON
    MemoryStats,

    /// Check that the configured provider is reachable
    Check,

    /// Generate shell completions for chatlingo
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args, Debug)]
struct TextInput {
    /// Text to translate; read from stdin when omitted
    text: Option<String>,

    /// Session identifier for log correlation (random when omitted)
    #[arg(long)]
    session_id: Option<String>,
}

impl TextInput {
    fn read_text(&self) -> Result<String> {
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read text from stdin")?;
                Ok(buffer.trim_end_matches('\n').to_string())
            }
        }
    }

    fn session_id(&self) -> String {
        self.session_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
    }
}

/// chatlingo - field-preserving chat translation
///
/// Translates chat text between English, Arabic and Bengali while keeping
/// `name_xx`, `description_xx`, `specification_xx` and `brand_xx` markers of
/// the target language untouched.
#[derive(Parser, Debug)]
#[command(name = "chatlingo")]
#[command(version)]
#[command(about = "Field-preserving chat translation")]
#[command(long_about = "chatlingo translates chat text through Google Translate while preserving localized field markers.

EXAMPLES:
    chatlingo from-english -t bn 'Hello, name_bn: \"বন্ধু\"'   # Translate to Bengali
    chatlingo to-english -s ar < message.txt                 # Translate stdin to English
    chatlingo memory-stats                                   # Show translation memory
    chatlingo completions bash > chatlingo.bash              # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Plain stderr logger
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let _ = writeln!(
                std::io::stderr(),
                "{} {:<5} {}: {}",
                now,
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn load_config(options: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load_or_create(&options.config_path)?;

    if let Some(provider) = &options.provider {
        config.translation.provider = provider.clone().into();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Trace is the ceiling; the effective level is set once config is loaded
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "chatlingo", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());

    let service = TranslationService::from_config(&config.translation)?;
    info!("Using provider: {}", config.translation.provider.display_name());

    match &cli.command {
        Commands::ToEnglish { source_language, input } => {
            let text = input.read_text()?;
            let session_id = input.session_id();
            let source = resolve_language_or_default(&normalize_code(source_language));

            log_chat_session_start(&session_id, source, &text);
            let translated = service
                .translate_to_english(&text, source.as_str(), &session_id)
                .await;
            log_chat_session_end(&session_id, LanguageCode::En, &translated);
            println!("{}", translated);
        }
        Commands::FromEnglish { target_language, input } => {
            let text = input.read_text()?;
            let session_id = input.session_id();
            let target = resolve_language_or_default(&normalize_code(target_language));

            log_chat_session_start(&session_id, LanguageCode::En, &text);
            let translated = service
                .translate_from_english(&text, target.as_str(), &session_id)
                .await;
            log_chat_session_end(&session_id, target, &translated);
            println!("{}", translated);
        }
        Commands::Languages => {
            for language in LanguageCode::ALL {
                println!("{}\t{}", language, language.name());
            }
        }
        Commands::MemoryStats => {
            let stats = service.translation_memory_stats();
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Commands::Check => {
            if let Err(e) = service.test_connection().await {
                error!("Provider check failed: {}", e);
                return Err(anyhow!("Provider '{}' is not reachable: {}", service.provider_name(), e));
            }
            println!("Provider '{}' is reachable", service.provider_name());
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}
