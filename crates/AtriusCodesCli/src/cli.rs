//! # FHIR Codes CLI
//!
//! Command-line access to the built-in FHIR code systems: list them, show a
//! concept table, resolve a single value, or validate the coded values of a
//! JSON document.
//!
//! ## Command Line Options
//!
//! ```text
//! fhir-codes [OPTIONS] <COMMAND>
//!
//! Commands:
//!   list                               List the built-in code systems
//!   show <SYSTEM>                      Show the concepts of one code system
//!   lookup <SYSTEM> <INPUT> [--by-name] Resolve one value in a code system
//!   check <SYSTEM> [-i <INPUT>]        Validate coded values in a JSON document
//!
//! Options:
//!   -l, --log-level <LEVEL>   Log level [env: FHIR_CODES_LOG_LEVEL] [default: warn]
//!   -f, --format <FORMAT>     Output format: text, json [env: FHIR_CODES_FORMAT] [default: text]
//! ```
//!
//! `<SYSTEM>` is a canonical URL, a FHIR id or an enum name, e.g.
//! `http://hl7.org/fhir/name-use`, `name-use` or `NameUse`.
//!
//! ## Usage Examples
//!
//! ```bash
//! fhir-codes show publication-status
//! fhir-codes lookup AdministrativeGender Female --by-name
//! echo '["active", {"id": "s1", "value": "retired"}]' | fhir-codes check publication-status
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use atrius_fhir_codes::{
    CodeSystem, CodedValue, Concept, Extension, Registry, RegistryError, registry,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(name = "fhir-codes", version)]
#[command(about = "Inspect FHIR code systems and validate coded values")]
#[command(
    long_about = "Inspect the built-in FHIR code systems and validate coded values against them\n\nEnvironment variables:\n  FHIR_CODES_LOG_LEVEL - Log level: error, warn, info, debug, trace (default: warn)\n  FHIR_CODES_FORMAT - Output format: text, json (default: text)"
)]
pub struct Args {
    /// Log level (error, warn, info, debug, trace)
    #[arg(
        short,
        long,
        global = true,
        env = "FHIR_CODES_LOG_LEVEL",
        default_value = "warn"
    )]
    pub log_level: String,

    /// Output format
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        env = "FHIR_CODES_FORMAT",
        default_value_t = OutputFormat::Text
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the built-in code systems
    List,

    /// Show the concepts of one code system
    Show {
        /// Canonical URL, id or name of the code system
        system: String,
    },

    /// Resolve one value in a code system
    Lookup {
        /// Canonical URL, id or name of the code system
        system: String,

        /// Wire-string to resolve
        input: String,

        /// Match the symbolic name (e.g. `EnteredInError`) instead of the wire-string
        #[arg(long)]
        by_name: bool,
    },

    /// Validate coded values in a JSON document against a code system
    ///
    /// The document is one coded value (a string, an element object or null)
    /// or an array of them.
    Check {
        /// Canonical URL, id or name of the code system
        system: String,

        /// Path to the JSON document (use '-' for stdin)
        #[arg(short, long, default_value = "-")]
        input: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init_tracing(level: &str) {
    let filter = format!("atrius_fhir_codes={level},atrius_codes_cli={level}");
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .init();
}

/// Main CLI execution function
pub fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let registry = registry();
    tracing::debug!(command = ?args.command, format = ?args.format, "running");

    match &args.command {
        Command::List => list(registry, args.format, out),
        Command::Show { system } => show(find_system(registry, system)?, args.format, out),
        Command::Lookup {
            system,
            input,
            by_name,
        } => {
            let system = find_system(registry, system)?;
            let concept = if *by_name {
                system.from_symbolic_name(input)?
            } else {
                system.lookup(input)?
            };
            write_concept(concept, args.format, out)
        }
        Command::Check { system, input } => {
            let system = find_system(registry, system)?;
            let content = read_input(input)?;
            let document: Value = serde_json::from_str(&content)
                .with_context(|| format!("failed parsing JSON from {}", input.display()))?;
            check(system, &document, args.format, out)
        }
    }
}

fn find_system(registry: &Registry, key: &str) -> Result<&'static CodeSystem> {
    Ok(registry
        .get(key)
        .ok_or_else(|| RegistryError::UnknownSystem(key.to_string()))?)
}

#[derive(Serialize)]
struct SystemRow {
    name: &'static str,
    id: &'static str,
    url: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'static str>,
    concepts: usize,
}

impl From<&'static CodeSystem> for SystemRow {
    fn from(system: &'static CodeSystem) -> Self {
        SystemRow {
            name: system.name(),
            id: system.id(),
            url: system.url(),
            version: system.version(),
            concepts: system.len(),
        }
    }
}

#[derive(Serialize)]
struct ConceptRow {
    code: &'static str,
    name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<&'static str>,
}

impl From<&'static Concept> for ConceptRow {
    fn from(concept: &'static Concept) -> Self {
        ConceptRow {
            code: concept.code,
            name: concept.name,
            display: concept.display,
        }
    }
}

#[derive(Serialize)]
struct CheckRow {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn list(registry: &Registry, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let rows: Vec<SystemRow> = registry.iter().map(SystemRow::from).collect();
    match format {
        OutputFormat::Json => write_json(&rows, out),
        OutputFormat::Text => {
            for row in &rows {
                writeln!(out, "{:<32} {:>3}  {}", row.name, row.concepts, row.url)?;
            }
            Ok(())
        }
    }
}

fn show(system: &'static CodeSystem, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let concepts: Vec<ConceptRow> = system.concepts().iter().map(ConceptRow::from).collect();
            write_json(
                &serde_json::json!({
                    "system": SystemRow::from(system),
                    "policy": format!("{:?}", system.policy()),
                    "concept": concepts,
                }),
                out,
            )
        }
        OutputFormat::Text => {
            writeln!(out, "{} ({})", system.name(), system.id())?;
            writeln!(out, "url: {}", system.url())?;
            if let Some(version) = system.version() {
                writeln!(out, "version: {version}")?;
            }
            writeln!(out, "policy: {:?}", system.policy())?;
            for concept in system.concepts() {
                write_concept_line(concept, out)?;
            }
            Ok(())
        }
    }
}

fn write_concept(concept: &'static Concept, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(&ConceptRow::from(concept), out),
        OutputFormat::Text => write_concept_line(concept, out),
    }
}

fn write_concept_line(concept: &Concept, out: &mut impl Write) -> Result<()> {
    match concept.display {
        Some(display) => writeln!(out, "{:<24} {:<24} {display}", concept.code, concept.name)?,
        None => writeln!(out, "{:<24} {}", concept.code, concept.name)?,
    }
    Ok(())
}

fn check(
    system: &'static CodeSystem,
    document: &Value,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let entries: Vec<&Value> = match document {
        Value::Array(items) => items.iter().collect(),
        single => vec![single],
    };

    let mut rows = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let row = match CodedValue::<Extension>::from_json(system, entry) {
            Ok(value) => CheckRow {
                index,
                id: value.id().map(str::to_string),
                code: value.code(),
                error: None,
            },
            Err(err) => {
                tracing::debug!(index, error = %err, "rejected coded value");
                CheckRow {
                    index,
                    id: None,
                    code: None,
                    error: Some(err.to_string()),
                }
            }
        };
        rows.push(row);
    }

    match format {
        OutputFormat::Json => write_json(&rows, out)?,
        OutputFormat::Text => {
            for row in &rows {
                match &row.error {
                    Some(error) => writeln!(out, "[{}] error: {error}", row.index)?,
                    None => writeln!(out, "[{}] ok {}", row.index, row.code.unwrap_or("(no value)"))?,
                }
            }
        }
    }

    let rejected = rows.iter().filter(|row| row.error.is_some()).count();
    if rejected > 0 {
        bail!(
            "{rejected} of {} coded value(s) rejected by {}",
            rows.len(),
            system.url()
        );
    }
    tracing::info!(system = system.url(), values = rows.len(), "all coded values valid");
    Ok(())
}

fn write_json<T: Serialize>(value: &T, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Read input from file or stdin
fn read_input(path: &Path) -> Result<String> {
    if path.to_str() == Some("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed reading stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed reading {}", path.display()))
    }
}
