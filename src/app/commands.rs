use std::io::Write;

use crate::config::{GenerateSettings, OutputFormat};
use crate::core::generator::Generator;
use crate::core::mask::mask;
use crate::core::validator::check;
use crate::domain::model::Cpf;
use crate::utils::error::Result;

/// Generates `settings.count` identifiers and writes them out in order.
pub fn run_generate<W: Write>(settings: &GenerateSettings, out: &mut W) -> Result<usize> {
    let cpfs = match settings.seed {
        Some(seed) => {
            tracing::debug!("Using seed {}", seed);
            Generator::from_seed(seed)
                .with_max_attempts(Some(settings.max_attempts))
                .generate_many(settings.count)?
        }
        None => Generator::from_thread_rng()
            .with_max_attempts(Some(settings.max_attempts))
            .generate_many(settings.count)?,
    };

    let render = |cpf: &Cpf| {
        if settings.plain {
            cpf.plain()
        } else {
            cpf.to_string()
        }
    };

    match settings.format {
        OutputFormat::Text => {
            for cpf in &cpfs {
                writeln!(out, "{}", render(cpf))?;
            }
        }
        OutputFormat::Json => {
            let rendered: Vec<String> = cpfs.iter().map(render).collect();
            serde_json::to_writer(&mut *out, &rendered)?;
            writeln!(out)?;
        }
    }

    tracing::info!("Generated {} identifiers", cpfs.len());
    Ok(cpfs.len())
}

/// Writes one verdict line per candidate. Returns true when all are valid.
pub fn run_validate<W: Write>(candidates: &[String], out: &mut W) -> Result<bool> {
    let mut all_valid = true;
    for candidate in candidates {
        match check(candidate) {
            Ok(_) => writeln!(out, "{}\tvalid", candidate)?,
            Err(rejection) => {
                all_valid = false;
                tracing::debug!("{} rejected: {}", candidate, rejection);
                writeln!(out, "{}\tinvalid ({})", candidate, rejection)?;
            }
        }
    }
    Ok(all_valid)
}

pub fn run_format<W: Write>(values: &[String], out: &mut W) -> Result<()> {
    for value in values {
        writeln!(out, "{}", mask(value))?;
    }
    Ok(())
}
