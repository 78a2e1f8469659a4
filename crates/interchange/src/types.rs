//! Typed envelopes for the registry call interface.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The four registry contracts a call can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContractName {
    AssetRegistration,
    InspectionTracking,
    MaintenanceScheduling,
    PerformanceMonitoring,
}

impl ContractName {
    pub const ALL: [ContractName; 4] = [
        ContractName::AssetRegistration,
        ContractName::InspectionTracking,
        ContractName::MaintenanceScheduling,
        ContractName::PerformanceMonitoring,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractName::AssetRegistration => "asset-registration",
            ContractName::InspectionTracking => "inspection-tracking",
            ContractName::MaintenanceScheduling => "maintenance-scheduling",
            ContractName::PerformanceMonitoring => "performance-monitoring",
        }
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractName {
    type Err = crate::InterchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContractName::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| crate::InterchangeError::UnknownContract(s.to_string()))
    }
}

/// One synchronous invocation of a registry function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub contract: ContractName,
    /// Kebab-case function name, e.g. `"register-asset"`.
    pub function: String,
    /// Positional arguments in declaration order.
    #[serde(default)]
    pub args: Vec<Value>,
}

impl Call {
    pub fn new(contract: ContractName, function: impl Into<String>, args: Vec<Value>) -> Self {
        Call {
            contract,
            function: function.into(),
            args,
        }
    }
}

/// Structured result of a call.
///
/// Callers must check `success` before reading `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<u32>,
}

impl CallResponse {
    /// Success carrying a payload. Absent reads use `Value::Null`.
    pub fn ok(value: impl Into<Value>) -> Self {
        CallResponse {
            success: true,
            value: Some(value.into()),
            error: None,
        }
    }

    /// Success with no payload (status transitions, upserts).
    pub fn ok_empty() -> Self {
        CallResponse {
            success: true,
            value: None,
            error: None,
        }
    }

    pub fn err(code: u32) -> Self {
        CallResponse {
            success: false,
            value: None,
            error: Some(code),
        }
    }

    /// The payload of a successful response, `None` on failure or when absent.
    pub fn value(&self) -> Option<&Value> {
        if self.success {
            self.value.as_ref()
        } else {
            None
        }
    }
}
