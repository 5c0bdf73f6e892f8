//! `SearchReportV1`: per-solve observability artifact.
//!
//! The report records what one solve did (passes run, nodes touched, the
//! fingerprint of the board it describes) so a run can be inspected after
//! the fact without rerunning it. It is observability-only: serialized with
//! plain `serde_json` and never hashed into any decision surface.

/// Aggregate counters and bindings for one completed solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReportV1 {
    /// Fingerprint of the input board (`"sha256:..."`).
    pub root_fingerprint: String,
    /// Length of the returned move sequence.
    pub solution_length: u32,
    /// The depth limit at which the solution was found.
    pub final_depth_limit: u32,
    /// Number of bounded passes run (`final_depth_limit + 1`).
    pub passes_run: u32,
    /// Nodes expanded (children generated for them), summed over all passes.
    pub nodes_expanded: u64,
    /// Child nodes created, summed over all passes.
    pub nodes_generated: u64,
}

impl SearchReportV1 {
    /// Convert to a `serde_json::Value`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "schema_version": "search_report_v1",
            "root_fingerprint": self.root_fingerprint,
            "solution_length": self.solution_length,
            "final_depth_limit": self.final_depth_limit,
            "passes_run": self.passes_run,
            "nodes_expanded": self.nodes_expanded,
            "nodes_generated": self.nodes_generated,
        })
    }

    /// Serialize to compact JSON bytes.
    #[must_use]
    pub fn to_json_bytes(&self) -> Vec<u8> {
        // Compact serialization of a value built from plain fields; the
        // serializer has no failure path here.
        serde_json::to_vec(&self.to_json_value()).unwrap_or_default()
    }

    /// Parse back from JSON bytes, as written by [`Self::to_json_bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`ReportParseError`] on malformed JSON, an unknown schema
    /// version, or a missing field.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, ReportParseError> {
        let value: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| ReportParseError::Malformed { detail: e.to_string() })?;
        let version = value
            .get("schema_version")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();
        if version != "search_report_v1" {
            return Err(ReportParseError::VersionMismatch {
                found: version.to_string(),
            });
        }
        let str_field = |name: &str| -> Result<String, ReportParseError> {
            value
                .get(name)
                .and_then(serde_json::Value::as_str)
                .map(ToString::to_string)
                .ok_or_else(|| ReportParseError::MissingField { name: name.into() })
        };
        let u64_field = |name: &str| -> Result<u64, ReportParseError> {
            value
                .get(name)
                .and_then(serde_json::Value::as_u64)
                .ok_or_else(|| ReportParseError::MissingField { name: name.into() })
        };
        let u32_field = |name: &str| -> Result<u32, ReportParseError> {
            u32::try_from(u64_field(name)?)
                .map_err(|_| ReportParseError::MissingField { name: name.into() })
        };
        Ok(Self {
            root_fingerprint: str_field("root_fingerprint")?,
            solution_length: u32_field("solution_length")?,
            final_depth_limit: u32_field("final_depth_limit")?,
            passes_run: u32_field("passes_run")?,
            nodes_expanded: u64_field("nodes_expanded")?,
            nodes_generated: u64_field("nodes_generated")?,
        })
    }
}

/// Typed failure for report parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportParseError {
    /// Not valid JSON.
    Malformed { detail: String },
    /// `schema_version` is not recognized.
    VersionMismatch { found: String },
    /// A required field is missing or has the wrong type.
    MissingField { name: String },
}

impl std::fmt::Display for ReportParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed { detail } => write!(f, "malformed report JSON: {detail}"),
            Self::VersionMismatch { found } => {
                write!(f, "unrecognized report schema version: {found:?}")
            }
            Self::MissingField { name } => write!(f, "report field missing or mistyped: {name}"),
        }
    }
}

impl std::error::Error for ReportParseError {}
