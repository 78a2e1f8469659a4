//! Decoding of call envelopes and their positional arguments.
//!
//! The main entry points are [`parse_call`], which turns a JSON envelope
//! into a [`Call`], and [`Args`], which dispatchers use to pull typed
//! values out of `Call::args`.

use serde_json::Value;

use crate::types::{Call, ContractName};

/// Errors raised before a call reaches any registry.
///
/// A record that does not exist is not an interchange error; it is a
/// successful decode followed by a `404` response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterchangeError {
    #[error("unknown contract: '{0}'")]
    UnknownContract(String),

    #[error("contract '{contract}' has no function '{function}'")]
    UnknownFunction {
        contract: ContractName,
        function: String,
    },

    #[error("'{function}' takes {expected} argument(s), got {actual}")]
    Arity {
        function: String,
        expected: usize,
        actual: usize,
    },

    #[error("'{function}' argument {index}: expected {expected}")]
    ArgumentType {
        function: String,
        index: usize,
        expected: &'static str,
    },

    #[error("malformed call envelope: {0}")]
    Malformed(String),
}

/// Decode a `{"contract": ..., "function": ..., "args": [...]}` envelope.
pub fn parse_call(envelope: &Value) -> Result<Call, InterchangeError> {
    let contract = envelope
        .get("contract")
        .and_then(|v| v.as_str())
        .ok_or_else(|| InterchangeError::Malformed("missing 'contract' field".to_string()))?
        .parse::<ContractName>()?;

    let function = envelope
        .get("function")
        .and_then(|v| v.as_str())
        .ok_or_else(|| InterchangeError::Malformed("missing 'function' field".to_string()))?
        .to_string();

    let args = match envelope.get("args") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(_) => {
            return Err(InterchangeError::Malformed(
                "'args' must be an array".to_string(),
            ))
        }
    };

    Ok(Call {
        contract,
        function,
        args,
    })
}

/// Positional argument reader bound to one call.
pub struct Args<'a> {
    function: &'a str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    pub fn new(call: &'a Call) -> Self {
        Args {
            function: &call.function,
            values: &call.args,
        }
    }

    /// Require exactly `expected` arguments.
    pub fn expect_len(&self, expected: usize) -> Result<(), InterchangeError> {
        if self.values.len() != expected {
            return Err(InterchangeError::Arity {
                function: self.function.to_string(),
                expected,
                actual: self.values.len(),
            });
        }
        Ok(())
    }

    pub fn u64(&self, index: usize) -> Result<u64, InterchangeError> {
        self.get(index)
            .and_then(|v| v.as_u64())
            .ok_or_else(|| self.type_error(index, "unsigned integer"))
    }

    pub fn u32(&self, index: usize) -> Result<u32, InterchangeError> {
        self.get(index)
            .and_then(|v| v.as_u64())
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| self.type_error(index, "32-bit unsigned integer"))
    }

    pub fn string(&self, index: usize) -> Result<String, InterchangeError> {
        self.get(index)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| self.type_error(index, "string"))
    }

    fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    fn type_error(&self, index: usize, expected: &'static str) -> InterchangeError {
        InterchangeError::ArgumentType {
            function: self.function.to_string(),
            index,
            expected,
        }
    }
}
