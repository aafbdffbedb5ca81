//! Ledger function DTOs

use serde::{Deserialize, Serialize};

/// Body of an invoke or query call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunctionRequest {
    /// Positional string arguments
    #[serde(default)]
    pub args: Vec<String>,
}

impl FunctionRequest {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}
