use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cumber_cli::commands::generate_ops::GenerateOptions;
use cumber_cli::commands::{config_ops, dict_ops, generate_ops};
use cumber_cli::dict_source;
use cumber_cli::trace_init::init_tracing;
use cumber_core::generator::Diversity;
use cumber_core::settings;

#[derive(Parser)]
#[command(
    name = "namebatch",
    about = "Generates spells to summon Benedict Cumberbatch"
)]
struct Cli {
    /// Number of names to generate (default: 10)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..=9999))]
    count: Option<u16>,
    /// Name diversity (0 = low [default], 1 = high)
    #[arg(long, value_name = "D", value_parser = clap::value_parser!(u8).range(0..=1))]
    diversity: Option<u8>,
    /// Dictionary file, CMU text or compiled (default: cached download)
    #[arg(long, global = true)]
    dict: Option<PathBuf>,
    /// Settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    config: Option<String>,
    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// Words drawn per name before giving up (0 = unlimited)
    #[arg(long)]
    max_draws: Option<usize>,
    /// Write JSON trace logs here (requires --features trace)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Download the CMU Pronouncing Dictionary
    Fetch {
        /// Source URL (default: settings dictionary.url)
        #[arg(long)]
        url: Option<String>,
        /// Output file (default: the cached dictionary path)
        output: Option<PathBuf>,
    },
    /// Compile a CMU text dictionary into the binary format
    Compile {
        /// CMU text file
        input: String,
        /// Output file
        output: String,
    },
    /// Show dictionary format and word count
    Info {
        /// Dictionary file
        file: String,
    },
    /// Show transcription, syllables, stress and last vowel of words
    Inspect {
        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let _trace = init_tracing(cli.log_dir.as_deref());

    if let Some(config) = &cli.config {
        config_ops::load_custom(config);
    }
    let settings = settings::settings();

    match cli.command {
        None => {
            let opts = GenerateOptions {
                count: cli.count.unwrap_or(settings.generator.count),
                diversity: match cli.diversity {
                    Some(level) => Diversity::try_from(level)
                        .expect("clap restricts --diversity to 0..=1"),
                    None => settings.generator.diversity(),
                },
                max_draws: cli.max_draws.unwrap_or(settings.generator.max_draws),
                seed: cli.seed,
                dict: cli.dict,
                url: settings.dictionary.url.clone(),
            };
            generate_ops::generate(&opts);
        }
        Some(Command::Fetch { url, output }) => {
            let url = url.unwrap_or_else(|| settings.dictionary.url.clone());
            let output = output
                .or(cli.dict)
                .unwrap_or_else(dict_source::default_dict_path);
            dict_ops::fetch(&url, &output);
        }
        Some(Command::Compile { input, output }) => dict_ops::compile(&input, &output),
        Some(Command::Info { file }) => dict_ops::info(&file),
        Some(Command::Inspect { words }) => {
            let dict = cli.dict.unwrap_or_else(dict_source::default_dict_path);
            dict_ops::inspect(&dict, &words);
        }
        Some(Command::SettingsExport) => config_ops::settings_export(),
        Some(Command::SettingsValidate { file }) => config_ops::settings_validate(&file),
    }
}
