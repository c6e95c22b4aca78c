// src/presentation.rs
use std::io::{self, Write};

use envstamp_shared_kernel::{PresentationError, Result};
use envstamp_usecase::StampResult;
use serde::Serialize;

use crate::config::OutputFormat;

#[derive(Serialize)]
struct JsonOut<'a> {
    ok: bool,
    data: &'a StampResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    document: Option<&'a str>,
}

/// Human status line, matching what build scripts grep for.
#[must_use]
pub fn status_line(result: &StampResult) -> String {
    format!(
        "Version set to {}, build date set to {}",
        result.composite_version, result.build_date
    )
}

/// Stderr warning for a revision lookup that fell back to the bare version.
#[must_use]
pub fn warning_line(result: &StampResult) -> Option<String> {
    result
        .revision_warning
        .as_ref()
        .map(|reason| {
            format!("warning: Unable to get git commit hash: {reason}")
        })
}

pub fn print_result(result: &StampResult, format: OutputFormat) -> Result<()> {
    if let Some(warning) = warning_line(result) {
        eprintln!("{warning}");
    }
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, result, format)
}

/// Dry runs put the rendered document on stdout (text) or into the JSON body.
pub fn write_result(
    out: &mut impl Write,
    result: &StampResult,
    format: OutputFormat,
) -> Result<()> {
    let io_err = |source: io::Error| PresentationError::Render {
        format: "status".to_string(),
        details: source.to_string(),
    };

    match format {
        OutputFormat::Json => {
            let body = JsonOut {
                ok: true,
                data: result,
                document: (!result.written)
                    .then_some(result.document.as_str()),
            };
            let json = serde_json::to_string_pretty(&body)?;
            writeln!(out, "{json}").map_err(io_err)?;
        }
        OutputFormat::Text if !result.written => {
            writeln!(out, "{}", result.document).map_err(io_err)?;
            eprintln!(
                "{} (dry run, {} not modified)",
                status_line(result),
                result.output.display()
            );
        }
        OutputFormat::Text => {
            writeln!(out, "{}", status_line(result)).map_err(io_err)?;
        }
    }
    Ok(())
}
