//! Positional argument parsing
//!
//! Every ledger operation receives an ordered list of strings. An
//! [`ArgReader`] checks the count and non-emptiness of the whole list up
//! front, then hands out typed values by position. All of this happens
//! before any store access, so a rejected call never writes anything.

use crate::error::CoreError;

/// Typed access to a validated positional argument list
#[derive(Debug)]
pub struct ArgReader<'a> {
    args: &'a [String],
    names: &'static [&'static str],
}

impl<'a> ArgReader<'a> {
    /// Validates that `args` has one non-empty entry per name in `names`
    ///
    /// # Arguments
    ///
    /// * `args` - Positional arguments as received
    /// * `names` - Argument names, used in error messages
    ///
    /// # Errors
    ///
    /// - `InvalidArgumentCount` if the lengths differ
    /// - `InvalidArgumentValue` naming the first empty argument
    pub fn new(args: &'a [String], names: &'static [&'static str]) -> Result<Self, CoreError> {
        if args.len() != names.len() {
            return Err(CoreError::InvalidArgumentCount {
                expected: names.len(),
                actual: args.len(),
            });
        }

        if let Some((_, name)) = args.iter().zip(names).find(|(value, _)| value.is_empty()) {
            return Err(CoreError::invalid_argument(*name, "must be non-empty"));
        }

        Ok(Self { args, names })
    }

    fn name(&self, index: usize) -> &'static str {
        self.names.get(index).copied().unwrap_or("argument")
    }

    /// The raw argument at `index`
    pub fn text(&self, index: usize) -> Result<&'a str, CoreError> {
        self.args
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| CoreError::invalid_argument(self.name(index), "missing"))
    }

    /// The argument at `index`, lowercased
    pub fn lowercase(&self, index: usize) -> Result<String, CoreError> {
        Ok(self.text(index)?.to_lowercase())
    }

    /// The argument at `index` parsed as a decimal integer
    pub fn int(&self, index: usize) -> Result<i64, CoreError> {
        parse_int(self.text(index)?, self.name(index))
    }

    /// The argument at `index` parsed as a non-negative decimal integer
    pub fn non_negative(&self, index: usize) -> Result<i64, CoreError> {
        let value = self.int(index)?;
        if value < 0 {
            return Err(CoreError::invalid_argument(self.name(index), "must not be negative"));
        }
        Ok(value)
    }

    /// The argument at `index` parsed as a boolean
    pub fn boolean(&self, index: usize) -> Result<bool, CoreError> {
        parse_bool(self.text(index)?, self.name(index))
    }
}

/// Parses a decimal integer with an optional sign
///
/// # Arguments
///
/// * `value` - Raw argument text
/// * `name` - Argument name reported on failure
///
/// # Returns
///
/// The parsed value, or `InvalidArgumentValue` naming the argument
pub fn parse_int(value: &str, name: &str) -> Result<i64, CoreError> {
    value
        .parse::<i64>()
        .map_err(|_| CoreError::invalid_argument(name, "must be a numeric string"))
}

/// Parses a boolean spelling
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(value: &str, name: &str) -> Result<bool, CoreError> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(CoreError::invalid_argument(name, "must be a bool string")),
    }
}
