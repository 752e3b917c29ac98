use crate::config::toml_config::TomlConfig;
use crate::config::{GenerateSettings, OutputFormat, DEFAULT_COUNT};
use crate::utils::error::Result;
use crate::utils::validation::{validate_config_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "cpf-gen")]
#[command(about = "Generate and validate fictitious CPF numbers for testing")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// How many identifiers to generate (default 20)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cap on redraws of a degenerate base
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Print bare digits instead of DDD.DDD.DDD-DD
    #[arg(long)]
    pub plain: bool,

    /// Print a JSON array instead of one value per line
    #[arg(long)]
    pub json: bool,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check one or more identifiers
    Validate {
        #[arg(required = true)]
        candidates: Vec<String>,
    },
    /// Punctuate (possibly partial) digit strings
    Format {
        #[arg(required = true)]
        values: Vec<String>,
    },
}

impl CliConfig {
    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Ok(Some(file))
            }
            None => Ok(None),
        }
    }

    /// Flags win over the file, the file wins over defaults.
    pub fn settings(&self, file: Option<&TomlConfig>) -> GenerateSettings {
        let generate = file.map(|f| &f.generate);
        let defaults = GenerateSettings::default();

        let count = self
            .count
            .or_else(|| generate.and_then(|g| g.count))
            .unwrap_or(DEFAULT_COUNT);

        let format = if self.json {
            OutputFormat::Json
        } else {
            file.and_then(|f| f.output.format).unwrap_or(defaults.format)
        };

        GenerateSettings {
            count: GenerateSettings::clamp_count(count),
            seed: self.seed.or_else(|| generate.and_then(|g| g.seed)),
            max_attempts: self
                .max_attempts
                .or_else(|| generate.and_then(|g| g.max_attempts))
                .unwrap_or(defaults.max_attempts),
            plain: self.plain || generate.and_then(|g| g.plain).unwrap_or(defaults.plain),
            format,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_config_path(path)?;
        }
        if let Some(max_attempts) = self.max_attempts {
            GenerateSettings::check_max_attempts("max_attempts", max_attempts)?;
        }
        Ok(())
    }
}
