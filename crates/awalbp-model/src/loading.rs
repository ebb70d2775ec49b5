// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Instance loader for the AWALBP parameter file format.
//!
//! This module turns whitespace-delimited text resources into a validated
//! `Instance`, demultiplexing the count-dependent sections of the format into
//! named fields and cross-checking them for consistency.
//!
//! The format is positional: nine fixed leading lines, then one task-list
//! line per workstation (the workstation count is itself read from the second
//! line), then two trailing per-task lines. Because the repeating section has
//! a variable length, the loader first checks the overall line count against
//! the declared workstation count, so that a file with a missing or surplus
//! workstation line is reported as a section-length problem instead of
//! cascading into misleading checksum failures.
//!
//! The loader accepts any `BufRead`, file path, raw reader, or string slice,
//! making it convenient to integrate with benchmarks, tests, and tooling.
//! Input is fully read into memory before tokenization, so file handles are
//! released before any parsing or validation work begins. Blank lines are
//! skipped, and `#` introduces a comment running to the end of the line; no
//! integer token can contain `#`, so comments never change the accepted
//! grammar. Errors carry the origin of the input (the file path, when loaded
//! through `from_path`) and the offending quantity.

use crate::instance::{
    FIELD_NAMES, Instance, InstanceBuilder, ValidationError, ValidationErrorKind, widen,
};
use awalbp_core::math::triangular::triangular;
use num_traits::{PrimInt, Signed};
use std::{
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};
use tracing::{debug, trace};

/// The number of fixed leading lines of the format.
const FIXED_LINES: usize = 9;

/// The number of trailing per-task lines of the format.
const TRAILING_LINES: usize = 2;

/// The origin label used when the input does not come from a file path.
const DEFAULT_ORIGIN: &str = "<input>";

/// The error type for the instance loading process.
#[derive(Debug)]
pub enum InstanceLoadError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// A token could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// The input ended before the fixed sections of the format were complete.
    Truncated(TruncatedError),
    /// A line that must carry a single value carried a different number.
    MalformedLine(MalformedLineError),
    /// The task or workstation count is invalid (must be > 0 and
    /// representable).
    InvalidDimensions(InvalidDimensionsError),
    /// The mapped record failed one of the consistency checks.
    Validation(ValidationError),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The origin of the input (file path or `"<input>"`).
    pub origin: String,
    /// The 1-based line number of the offending token in the raw input.
    pub line: usize,
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: could not parse token '{}' on line {} as type {}",
            self.origin, self.token, self.line, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

/// Details about an input that ended inside the fixed sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncatedError {
    /// The origin of the input.
    pub origin: String,
    /// The name of the first field without a line.
    pub missing_field: &'static str,
    /// The number of non-blank data lines the input held.
    pub lines_found: usize,
}

impl std::fmt::Display for TruncatedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: input ended after {} data lines, before field '{}'",
            self.origin, self.lines_found, self.missing_field
        )
    }
}

impl std::error::Error for TruncatedError {}

/// Details about a scalar field line with the wrong number of tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLineError {
    /// The origin of the input.
    pub origin: String,
    /// The name of the field whose line is malformed.
    pub field: &'static str,
    /// The number of values the field requires.
    pub expected: usize,
    /// The number of values the line held.
    pub found: usize,
}

impl std::fmt::Display for MalformedLineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: expected {} value(s) on the '{}' line, but found {}",
            self.origin, self.expected, self.field, self.found
        )
    }
}

impl std::error::Error for MalformedLineError {}

/// Details about invalid instance dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDimensionsError {
    /// The origin of the input.
    pub origin: String,
    /// The task count as read from the file.
    pub tasks: i128,
    /// The workstation count as read from the file.
    pub workstations: i128,
}

impl std::fmt::Display for InvalidDimensionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: task and workstation counts must be positive (number_of_tasks: {}, number_of_workstations: {})",
            self.origin, self.tasks, self.workstations
        )
    }
}

impl std::error::Error for InvalidDimensionsError {}

impl std::fmt::Display for InstanceLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::Truncated(e) => write!(f, "Truncated input: {}", e),
            Self::MalformedLine(e) => write!(f, "Malformed line: {}", e),
            Self::InvalidDimensions(e) => write!(f, "Invalid dimensions: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for InstanceLoadError {}

impl From<std::io::Error> for InstanceLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for InstanceLoadError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<TruncatedError> for InstanceLoadError {
    fn from(e: TruncatedError) -> Self {
        Self::Truncated(e)
    }
}

impl From<MalformedLineError> for InstanceLoadError {
    fn from(e: MalformedLineError) -> Self {
        Self::MalformedLine(e)
    }
}

impl From<InvalidDimensionsError> for InstanceLoadError {
    fn from(e: InvalidDimensionsError) -> Self {
        Self::InvalidDimensions(e)
    }
}

/// A configurable loader for AWALBP problem instances.
///
/// The format this loader expects is as follows (whitespace-separated tokens,
/// one field per line, blank lines and `#` comments ignored):
///
/// ```raw
/// N                       (number of tasks)
/// M                       (number of workstations)
/// L_1 ... L_M             (left accessibility window endpoints)
/// R_1 ... R_M             (right accessibility window endpoints)
/// W                       (horizontal size of the workpiece)
/// d                       (distance between right borders)
/// t                       (intermediate time between stages)
/// e                       (elementary step length)
/// task_1 ... task_N       (task identifiers)
/// a_1_1 ... a_1_k1        (tasks of workstation 1)
/// ...
/// a_M_1 ... a_M_kM        (tasks of workstation M; all lists together
///                          sum to N * (N + 1) / 2)
/// p_1 ... p_N             (task processing times)
/// b_1 ... b_N             (distances to right border, each in [0, W])
/// ```
///
/// # Configuration
/// * `trace`: When enabled, the loader emits a per-line classification trace
///   through the `tracing` facade. The trace is a side effect only and never
///   affects the returned value.
///
/// # Examples
///
/// ```rust
/// # use awalbp_model::loading::InstanceLoader;
/// # use awalbp_model::instance::Instance;
///
/// let data = "2\n1\n0\n5\n10\n3\n2\n1\n1 2\n1 2\n3 4\n2 1\n";
/// let instance: Instance<i64> = InstanceLoader::new().from_str(data).expect("valid instance");
/// assert_eq!(instance.num_tasks(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceLoader {
    trace: bool,
}

impl Default for InstanceLoader {
    fn default() -> Self {
        Self { trace: false }
    }
}

impl InstanceLoader {
    /// Creates a new `InstanceLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether the loader emits a per-line classification trace.
    #[inline]
    pub fn trace(mut self, yes: bool) -> Self {
        self.trace = yes;
        self
    }

    /// Loads an instance from a file path.
    ///
    /// The path is stamped into every error as the input origin.
    pub fn from_path<T, P>(&self, path: P) -> Result<Instance<T>, InstanceLoadError>
    where
        T: PrimInt + Signed + FromStr,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        self.parse_content(&path.display().to_string(), &content)
    }

    /// Loads an instance from a type implementing `BufRead`.
    pub fn from_bufread<T, R>(&self, mut rdr: R) -> Result<Instance<T>, InstanceLoadError>
    where
        T: PrimInt + Signed + FromStr,
        R: BufRead,
    {
        let mut content = String::new();
        rdr.read_to_string(&mut content)?;
        self.parse_content(DEFAULT_ORIGIN, &content)
    }

    /// Loads an instance from a generic reader.
    #[inline]
    pub fn from_reader<T, R>(&self, r: R) -> Result<Instance<T>, InstanceLoadError>
    where
        T: PrimInt + Signed + FromStr,
        R: Read,
    {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads an instance from a string slice.
    #[inline]
    pub fn from_str<T>(&self, s: &str) -> Result<Instance<T>, InstanceLoadError>
    where
        T: PrimInt + Signed + FromStr,
    {
        self.parse_content(DEFAULT_ORIGIN, s)
    }

    /// Tokenizes, maps, and validates one instance file held in memory.
    fn parse_content<T>(&self, origin: &str, content: &str) -> Result<Instance<T>, InstanceLoadError>
    where
        T: PrimInt + Signed + FromStr,
    {
        let lines = tokenize_lines::<T>(origin, content)?;

        if lines.len() < 2 {
            return Err(TruncatedError {
                origin: origin.to_owned(),
                missing_field: FIELD_NAMES[lines.len()],
                lines_found: lines.len(),
            }
            .into());
        }

        let tasks_value = scalar_field(origin, &lines[0], FIELD_NAMES[0])?;
        let stations_value = scalar_field(origin, &lines[1], FIELD_NAMES[1])?;

        let tasks = tasks_value.to_usize().filter(|&n| n > 0);
        let stations = stations_value.to_usize().filter(|&m| m > 0);
        let (num_tasks, num_workstations) = match (tasks, stations) {
            // The checksum must be computable; dimensions that overflow it
            // cannot describe a real instance.
            (Some(n), Some(m)) if triangular(n as i128).is_some() => (n, m),
            _ => {
                return Err(InvalidDimensionsError {
                    origin: origin.to_owned(),
                    tasks: widen(tasks_value),
                    workstations: widen(stations_value),
                }
                .into());
            }
        };

        if self.trace {
            debug!(origin, num_tasks, num_workstations, "read instance dimensions");
        }

        if lines.len() < FIXED_LINES {
            return Err(TruncatedError {
                origin: origin.to_owned(),
                missing_field: FIELD_NAMES[lines.len()],
                lines_found: lines.len(),
            }
            .into());
        }

        // With both the fixed and trailing section lengths dictated by the
        // grammar, the repeating section length follows from the line count.
        let observed = lines.len().saturating_sub(FIXED_LINES + TRAILING_LINES);
        if observed != num_workstations {
            return Err(InstanceLoadError::Validation(
                ValidationError::new(ValidationErrorKind::WorkstationCount {
                    expected: num_workstations,
                    observed,
                })
                .with_origin(origin),
            ));
        }

        let repeating_end = FIXED_LINES + num_workstations;
        let mut builder = InstanceBuilder::new(num_tasks, num_workstations);

        for (position, line) in lines.into_iter().enumerate() {
            if self.trace {
                trace!(
                    position,
                    tokens = line.len(),
                    field = %field_label(position, num_workstations),
                    "classified line"
                );
            }

            match position {
                0 | 1 => {} // dimensions, consumed above
                2 => {
                    builder.set_accessibility_windows_left(line);
                }
                3 => {
                    builder.set_accessibility_windows_right(line);
                }
                4 => {
                    let value = scalar_field(origin, &line, FIELD_NAMES[4])?;
                    builder.set_size_of_workpiece_horizontal(value);
                }
                5 => {
                    let value = scalar_field(origin, &line, FIELD_NAMES[5])?;
                    builder.set_distance_between_right_borders(value);
                }
                6 => {
                    let value = scalar_field(origin, &line, FIELD_NAMES[6])?;
                    builder.set_intermediate_time_between_stages(value);
                }
                7 => {
                    let value = scalar_field(origin, &line, FIELD_NAMES[7])?;
                    builder.set_elementary_step_length(value);
                }
                8 => {
                    builder.set_tasks(line);
                }
                p if p < repeating_end => {
                    builder.push_workstation_tasks(line);
                }
                p if p == repeating_end => {
                    builder.set_task_processing_times(line);
                }
                _ => {
                    builder.set_border_distances(line);
                }
            }
        }

        builder
            .build()
            .map_err(|error| InstanceLoadError::Validation(error.with_origin(origin)))
    }
}

/// Splits the content into non-blank lines and parses every whitespace
/// delimited token as `T`. `#` starts a comment running to the end of the
/// line; a line that is blank after comment stripping is skipped. Line
/// numbers in errors refer to the raw input, counting blank and comment
/// lines.
fn tokenize_lines<T>(origin: &str, content: &str) -> Result<Vec<Vec<T>>, ParseTokenError>
where
    T: FromStr,
{
    let mut lines = Vec::new();
    for (number, raw) in content.lines().enumerate() {
        let line = match raw.find('#') {
            Some(comment_start) => &raw[..comment_start],
            None => raw,
        };
        if line.trim().is_empty() {
            continue;
        }

        let mut tokens = Vec::new();
        for token in line.split_whitespace() {
            let value = token.parse::<T>().map_err(|_| ParseTokenError {
                origin: origin.to_owned(),
                line: number + 1,
                token: token.to_owned(),
                type_name: std::any::type_name::<T>(),
            })?;
            tokens.push(value);
        }
        lines.push(tokens);
    }
    Ok(lines)
}

/// Extracts the single value of a scalar field line.
fn scalar_field<T>(
    origin: &str,
    line: &[T],
    field: &'static str,
) -> Result<T, MalformedLineError>
where
    T: Copy,
{
    if line.len() != 1 {
        return Err(MalformedLineError {
            origin: origin.to_owned(),
            field,
            expected: 1,
            found: line.len(),
        });
    }
    Ok(line[0])
}

/// Names the field a line position maps to, for the classification trace.
fn field_label(position: usize, num_workstations: usize) -> String {
    if position < FIXED_LINES {
        FIELD_NAMES[position].to_owned()
    } else if position < FIXED_LINES + num_workstations {
        format!("{}{}", FIELD_NAMES[9], position - FIXED_LINES + 1)
    } else {
        FIELD_NAMES[position - num_workstations + 1].to_owned()
    }
}
