use crate::{
    Engine, FixError, Options, RepairLogEntry, join_features_with_log, repair_arcs_with_log,
    truncate_features_str_with_log, write_json,
};
use serde_json::Value;
use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use thiserror::Error;

/// The three command-line utilities built from this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    ArcRepair,
    FeatureJoiner,
    FeatureTruncator,
}

impl Tool {
    pub fn program(self) -> &'static str {
        match self {
            Tool::ArcRepair => "arc-repair",
            Tool::FeatureJoiner => "feature-joiner",
            Tool::FeatureTruncator => "feature-truncator",
        }
    }

    fn summary(self) -> &'static str {
        match self {
            Tool::ArcRepair => "Quote bare `new Arc(...)` tokens under \"arcs\" and derive arc records.",
            Tool::FeatureJoiner => "Join adjacent JSON objects into {\"features\":[...]} and print the count.",
            Tool::FeatureTruncator => "Keep the first N entries of \"features\" and print the count.",
        }
    }

    fn takes_engine(self) -> bool {
        matches!(self, Tool::ArcRepair | Tool::FeatureJoiner)
    }
}

fn print_help(tool: Tool) {
    let mut extra = String::new();
    if tool.takes_engine() {
        extra.push_str("    --engine ENGINE       scan|patch (default scan)\n");
    }
    if tool == Tool::FeatureTruncator {
        extra.push_str("    --limit N             Maximum number of features (default 70000)\n");
    }
    eprintln!(
        "Usage: {prog} -i INPUT -o OUTPUT [OPTIONS]\n\
         \n\
         {summary}\n\
         \n\
         Options:\n\
           -i, --input FILE          Read from FILE\n\
           -o, --output FILE         Write to FILE (created or overwritten)\n\
               --pretty              Pretty-print output\n\
               --ensure-ascii        Escape non-ASCII as \\uXXXX\n\
               --log                 Print the repair log to stderr\n\
         {extra}\
           -h, --help                Show this help\n",
        prog = tool.program(),
        summary = tool.summary(),
        extra = extra,
    );
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    #[error("Missing {what} for {flag}")]
    MissingValue { flag: &'static str, what: &'static str },
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),
    #[error("Unknown engine: {0}")]
    UnknownEngine(String),
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),
    #[error("Missing required option {0}")]
    MissingRequired(&'static str),
}

/// One configured run: where to read, where to write, and how.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub input: PathBuf,
    pub output: PathBuf,
    pub opts: Options,
}

#[derive(Debug, Clone)]
pub enum CliCommand {
    Help,
    Run(Invocation),
}

pub fn parse_args<I>(tool: Tool, args: I) -> Result<CliCommand, ArgError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    let mut opts = Options::default();
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-i" | "--input" => {
                i += 1;
                let v = args.get(i).ok_or(ArgError::MissingValue { flag: "--input", what: "FILE" })?;
                input = Some(PathBuf::from(v));
            }
            "-o" | "--output" => {
                i += 1;
                let v = args.get(i).ok_or(ArgError::MissingValue { flag: "--output", what: "FILE" })?;
                output = Some(PathBuf::from(v));
            }
            "--pretty" => {
                opts.pretty = true;
            }
            "--ensure-ascii" => {
                opts.ensure_ascii = true;
            }
            "--log" => {
                opts.logging = true;
            }
            "--engine" if tool.takes_engine() => {
                i += 1;
                let v = args.get(i).ok_or(ArgError::MissingValue { flag: "--engine", what: "ENGINE" })?;
                opts.engine = match v.to_lowercase().as_str() {
                    "scan" | "scanner" => Engine::Scanner,
                    "patch" => Engine::TextPatch,
                    other => return Err(ArgError::UnknownEngine(other.to_string())),
                };
            }
            "--limit" if tool == Tool::FeatureTruncator => {
                i += 1;
                let v = args.get(i).ok_or(ArgError::MissingValue { flag: "--limit", what: "N" })?;
                opts.feature_limit = v.parse().map_err(|_| ArgError::InvalidLimit(v.clone()))?;
            }
            s if s.starts_with('-') => {
                return Err(ArgError::UnknownOption(s.to_string()));
            }
            other => {
                return Err(ArgError::UnexpectedArgument(other.to_string()));
            }
        }
        i += 1;
    }

    let input = input.ok_or(ArgError::MissingRequired("--input"))?;
    let output = output.ok_or(ArgError::MissingRequired("--output"))?;
    Ok(CliCommand::Run(Invocation { input, output, opts }))
}

pub fn run(tool: Tool) -> Result<(), Box<dyn std::error::Error>> {
    let invocation = match parse_args(tool, env::args().skip(1)) {
        Ok(CliCommand::Help) => {
            print_help(tool);
            return Ok(());
        }
        Ok(CliCommand::Run(inv)) => inv,
        Err(e) => {
            eprintln!("{}: {}", tool.program(), e);
            eprintln!("Try '{} --help' for more information.", tool.program());
            std::process::exit(2);
        }
    };
    execute(tool, &invocation)?;
    Ok(())
}

/// Read, transform and write once. Prints the feature count to stdout for the
/// joiner and the truncator.
pub fn execute(tool: Tool, inv: &Invocation) -> Result<(), FixError> {
    let content = fs::read_to_string(&inv.input)
        .map_err(|e| FixError::from_io(&format!("reading {}", inv.input.display()), e))?;

    let (value, count, log): (Value, Option<usize>, Vec<RepairLogEntry>) = match tool {
        Tool::ArcRepair => {
            let (v, log) = repair_arcs_with_log(&content, &inv.opts)?;
            (v, None, log)
        }
        Tool::FeatureJoiner => {
            let (doc, log) = join_features_with_log(&content, &inv.opts)?;
            (doc.value, Some(doc.count), log)
        }
        Tool::FeatureTruncator => {
            let (doc, log) = truncate_features_str_with_log(&content, &inv.opts)?;
            (doc.value, Some(doc.count), log)
        }
    };

    for entry in &log {
        eprintln!("{}: {} near {:?}", entry.position, entry.message, entry.context);
    }
    if let Some(n) = count {
        println!("{}", n);
    }

    let write_err = |e: std::io::Error| FixError::from_io(&format!("writing {}", inv.output.display()), e);
    let file = File::create(&inv.output).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    write_json(&mut writer, &value, &inv.opts)?;
    writer.flush().map_err(write_err)?;
    Ok(())
}
