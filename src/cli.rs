//! Command line front end for the `vector_calc` binary
//!
//! The argument model lives in the library so that commands can be evaluated
//! and tested without spawning a process. Vectors are written as
//! comma-separated coordinates, e.g. `1,2,3` or `"(4, -2, 5)"`.
//!
//! Positionals accept leading hyphens so negative coordinates parse. Flags
//! therefore go before the subcommand: `vector_calc -v add 1,0 0,1`.

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use crate::errors::Result;
use crate::operand::Operand;
use crate::vector::Vector;

/// Euclidean vector calculator
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Evaluates Euclidean vector operations on comma-separated coordinates",
    long_about = None
)]
pub struct Args {
    /// Increase log verbosity (-v warn, -vv info, -vvv debug, -vvvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Operations exposed on the command line
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print size, length and classification of a vector
    Info {
        #[arg(allow_hyphen_values = true)]
        vector: Vector,
    },

    /// Print the grid bearing of every axis in radians
    Bearings {
        #[arg(allow_hyphen_values = true)]
        vector: Vector,
    },

    /// Build a vector from a length and one bearing per axis
    FromBearings {
        #[arg(allow_hyphen_values = true)]
        length: f64,
        #[arg(required = true, allow_hyphen_values = true)]
        bearings: Vec<f64>,
    },

    /// Negate every coordinate
    Invert {
        #[arg(allow_hyphen_values = true)]
        vector: Vector,
    },

    /// Add one or more vectors to the first one
    ///
    /// Operands are read up to a `;` or the end of the line, so flags such as
    /// `-v` may follow a terminated list.
    Add {
        #[arg(allow_hyphen_values = true)]
        vector: Vector,
        #[arg(required = true, allow_hyphen_values = true, value_terminator = ";")]
        operands: Vec<Operand>,
    },

    /// Multiply every coordinate by a scalar
    Scale {
        #[arg(allow_hyphen_values = true)]
        vector: Vector,
        #[arg(allow_hyphen_values = true)]
        scalar: Operand,
    },

    /// Scale a vector to unit length
    Normalize {
        #[arg(allow_hyphen_values = true)]
        vector: Vector,
    },

    /// Dot product of two vectors
    Dot {
        #[arg(allow_hyphen_values = true)]
        a: Vector,
        #[arg(allow_hyphen_values = true)]
        b: Vector,
    },

    /// Angle between two vectors in radians
    Angle {
        #[arg(allow_hyphen_values = true)]
        a: Vector,
        #[arg(allow_hyphen_values = true)]
        b: Vector,
    },

    /// Whether two vectors are orthogonal
    Orthogonal {
        #[arg(allow_hyphen_values = true)]
        a: Vector,
        #[arg(allow_hyphen_values = true)]
        b: Vector,
    },

    /// Whether two vectors are collinear
    Collinear {
        #[arg(allow_hyphen_values = true)]
        a: Vector,
        #[arg(allow_hyphen_values = true)]
        b: Vector,
    },

    /// Cross product of two 3-dimensional vectors
    Cross {
        #[arg(allow_hyphen_values = true)]
        a: Vector,
        #[arg(allow_hyphen_values = true)]
        b: Vector,
    },

    /// Scalar triple product a · (b × c)
    Triple {
        #[arg(allow_hyphen_values = true)]
        a: Vector,
        #[arg(allow_hyphen_values = true)]
        b: Vector,
        #[arg(allow_hyphen_values = true)]
        c: Vector,
    },
}

impl Command {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Command::Info { .. } => "info",
            Command::Bearings { .. } => "bearings",
            Command::FromBearings { .. } => "from-bearings",
            Command::Invert { .. } => "invert",
            Command::Add { .. } => "add",
            Command::Scale { .. } => "scale",
            Command::Normalize { .. } => "normalize",
            Command::Dot { .. } => "dot",
            Command::Angle { .. } => "angle",
            Command::Orthogonal { .. } => "orthogonal",
            Command::Collinear { .. } => "collinear",
            Command::Cross { .. } => "cross",
            Command::Triple { .. } => "triple",
        }
    }
}

/// Formats a list of numbers the same way a [`Vector`] displays
fn format_list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("({})", items.join(", "))
}

/// Evaluates a command and returns the text to print
pub fn evaluate(command: &Command) -> Result<String> {
    let output = match command {
        Command::Info { vector } => format!(
            "size: {}\nlength: {}\nnull vector: {}\nunit vector: {}",
            vector.size(),
            vector.length(),
            vector.is_null_vector(),
            vector.is_unit_vector()
        ),
        Command::Bearings { vector } => format_list(&vector.grid_bearings()),
        Command::FromBearings { length, bearings } => {
            Vector::from_grid_bearings(*length, bearings.iter().copied())?.to_string()
        }
        Command::Invert { vector } => vector.inverted_vector().to_string(),
        Command::Add { vector, operands } => {
            vector.added_operands_vector(operands)?.to_string()
        }
        Command::Scale { vector, scalar } => {
            vector.scaled_vector(scalar.as_scalar()?)?.to_string()
        }
        Command::Normalize { vector } => vector.normalized_vector().to_string(),
        Command::Dot { a, b } => a.dot_product(b)?.to_string(),
        Command::Angle { a, b } => a.angle(b)?.to_string(),
        Command::Orthogonal { a, b } => a.is_orthogonal(b)?.to_string(),
        Command::Collinear { a, b } => a.is_collinear(b)?.to_string(),
        Command::Cross { a, b } => a.cross_product(b)?.to_string(),
        Command::Triple { a, b, c } => a.triple_product(b, c)?.to_string(),
    };

    log::debug!("{} -> {}", command.name(), output.replace('\n', "; "));
    Ok(output)
}

/// Converts a verbosity count to a log filter
pub fn log_filter_from_level(level: u8) -> LevelFilter {
    match level {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialises logging for the binary
///
/// The verbosity count sets the top level filter; `RUST_LOG` is applied on
/// top of it. Calling this more than once keeps the first logger.
pub fn setup_logging(log_level: u8) {
    use std::io::Write;

    let mut builder = env_logger::Builder::new();
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{:5} [{}]: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .filter_level(log_filter_from_level(log_level))
        .parse_default_env();

    if builder.try_init().is_err() {
        log::debug!("Logger already initialised");
    }
}
