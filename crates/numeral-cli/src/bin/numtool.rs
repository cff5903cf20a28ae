use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use numeral_cli::commands::{config_ops, convert_ops, identify_ops};

#[derive(Parser)]
#[command(name = "numtool", about = "Spelled-out number conversion tool")]
struct Cli {
    /// Log conversion steps to stderr (filter with RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Settings TOML to use instead of the built-in defaults
    #[arg(long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Spell out a number
    Encode {
        value: u64,
        /// Language code (default: engine.default_language)
        #[arg(short, long)]
        lang: Option<String>,
        /// Rendering option as key=value, repeatable
        #[arg(short = 'o', long = "opt")]
        opts: Vec<String>,
    },
    /// Parse a spelled-out number
    Decode {
        text: String,
        /// Language code; identified from the text when omitted
        #[arg(short, long)]
        lang: Option<String>,
        /// Language used when identification fails
        #[arg(long)]
        fallback: Option<String>,
        #[arg(short = 'o', long = "opt")]
        opts: Vec<String>,
    },
    /// Rank the languages a text may be written in
    Identify {
        text: String,
        /// Directory of <code>.dict word lists (default: built-in vocabularies)
        #[arg(long)]
        dict_dir: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check that decoding the spelling of every value gives it back
    Roundtrip {
        #[arg(short, long)]
        lang: Option<String>,
        #[arg(long, default_value = "0")]
        from: u64,
        #[arg(long, default_value = "100000")]
        to: u64,
        #[arg(short = 'o', long = "opt")]
        opts: Vec<String>,
    },
    /// Inspect engine settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Inspect vocabulary tables
    Vocab {
        #[command(subcommand)]
        action: VocabAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the built-in default settings TOML
    Export,
    /// Parse and validate a settings TOML file
    Validate { file: String },
}

#[derive(Subcommand)]
enum VocabAction {
    /// Print the built-in vocabulary TOML of a language
    Export { lang: String },
    /// Parse and validate a vocabulary TOML file
    Validate { file: String },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init_logging();
    }
    if let Some(file) = &cli.config {
        config_ops::settings_load(file);
    }

    match cli.command {
        Command::Encode { value, lang, opts } => {
            convert_ops::encode_cmd(value, lang.as_deref(), &opts)
        }
        Command::Decode {
            text,
            lang,
            fallback,
            opts,
        } => convert_ops::decode_cmd(&text, lang.as_deref(), fallback.as_deref(), &opts),
        Command::Identify {
            text,
            dict_dir,
            json,
        } => identify_ops::identify_cmd(&text, dict_dir.as_deref(), json),
        Command::Roundtrip {
            lang,
            from,
            to,
            opts,
        } => convert_ops::roundtrip_cmd(lang.as_deref(), from, to, &opts),
        Command::Settings { action } => match action {
            SettingsAction::Export => config_ops::settings_export(),
            SettingsAction::Validate { file } => config_ops::settings_validate(&file),
        },
        Command::Vocab { action } => match action {
            VocabAction::Export { lang } => config_ops::vocab_export(&lang),
            VocabAction::Validate { file } => config_ops::vocab_validate(&file),
        },
    }
}
