use anyhow::Context;
use clap::Parser;
use cpf_gen::app::commands::{run_format, run_generate, run_validate};
use cpf_gen::utils::{logger, validation::Validate};
use cpf_gen::{CliConfig, Command};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &config.command {
        Some(Command::Validate { candidates }) => {
            let all_valid = run_validate(candidates, &mut out)?;
            if !all_valid {
                out.flush()?;
                std::process::exit(1);
            }
        }
        Some(Command::Format { values }) => run_format(values, &mut out)?,
        None => {
            let file = config
                .load_file()
                .with_context(|| format!("failed to load config file {:?}", config.config))?;
            let settings = config.settings(file.as_ref());
            settings.validate()?;
            tracing::debug!("Generate settings: {:?}", settings);

            if let Err(e) = run_generate(&settings, &mut out) {
                eprintln!("💡 {}", e.recovery_suggestion());
                return Err(e).context("generation failed");
            }
        }
    }

    Ok(())
}
