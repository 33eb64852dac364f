//! Google Test report document model
//!
//! Defines the parsed report structure, the per-case failure indicator,
//! and validation of untrusted JSON into that structure.

use serde_json::Value;
use thiserror::Error;

/// Shape violations in a parsed report document
#[derive(Error, Debug)]
pub enum StructureError {
    #[error("report root must be a JSON object")]
    RootNotObject,

    #[error("report has no 'testsuites' field")]
    MissingTestsuites,

    #[error("'testsuites' must be an array")]
    TestsuitesNotArray,

    #[error("suite #{index} must be a JSON object")]
    SuiteNotObject { index: usize },

    #[error("suite #{index} has no 'name' string")]
    MissingSuiteName { index: usize },

    #[error("suite '{suite}' has no 'testsuite' array")]
    MissingSuiteCases { suite: String },

    #[error("suite '{suite}': case #{index} must be a JSON object")]
    CaseNotObject { suite: String, index: usize },

    #[error("suite '{suite}': case #{index} has no 'value_param' string")]
    MissingValueParam { suite: String, index: usize },

    #[error("suite '{suite}': case '{case}' has a 'failures' field that is not an array")]
    FailuresNotArray { suite: String, case: String },
}

/// Root of a parsed test result document
#[derive(Clone, Debug, PartialEq)]
pub struct TestReport {
    /// Suites in input order
    pub suites: Vec<TestSuite>,
}

/// One named grouping of test cases
#[derive(Clone, Debug, PartialEq)]
pub struct TestSuite {
    /// Display name of the suite
    pub name: String,

    /// Cases in input order
    pub cases: Vec<TestCase>,
}

/// One executed test case
#[derive(Clone, Debug, PartialEq)]
pub struct TestCase {
    /// Human-readable label of what the case exercises
    pub value_param: String,

    /// Failure indicator recorded by the test runner
    pub failures: Failures,
}

/// Failure indicator of a single test case
///
/// Only presence and emptiness matter; the entries themselves are opaque.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Failures {
    /// No `failures` field in the case entry (a JSON `null` counts as absent)
    #[default]
    Absent,

    /// A `failures` array was present, possibly empty
    Listed(Vec<Value>),
}

/// Outcome of a single test case
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestStatus {
    Pass,
    Fail,
}

impl TestStatus {
    /// Marker glyph used in the rendered report
    pub fn glyph(&self) -> &'static str {
        match self {
            TestStatus::Pass => "✅",
            TestStatus::Fail => "❌",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, TestStatus::Pass)
    }
}

impl TestCase {
    /// A case fails only when its failure list is present and non-empty.
    pub fn status(&self) -> TestStatus {
        match &self.failures {
            Failures::Listed(entries) if !entries.is_empty() => TestStatus::Fail,
            _ => TestStatus::Pass,
        }
    }
}

impl TestReport {
    /// Validate a parsed JSON document against the expected report shape.
    ///
    /// Stops at the first violation; the error names the offending suite
    /// and case. Extra keys anywhere in the document are ignored.
    pub fn from_value(document: &Value) -> Result<Self, StructureError> {
        let root = document.as_object().ok_or(StructureError::RootNotObject)?;
        let suites_field = root
            .get("testsuites")
            .ok_or(StructureError::MissingTestsuites)?;
        let entries = suites_field
            .as_array()
            .ok_or(StructureError::TestsuitesNotArray)?;

        let mut suites = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            suites.push(parse_suite(entry, index)?);
        }

        Ok(Self { suites })
    }

    /// Total number of cases across all suites
    pub fn case_count(&self) -> usize {
        self.suites.iter().map(|s| s.cases.len()).sum()
    }

    /// Number of passing cases
    pub fn passed(&self) -> usize {
        self.cases().filter(|c| c.status().is_pass()).count()
    }

    /// Number of failing cases
    pub fn failed(&self) -> usize {
        self.cases().filter(|c| !c.status().is_pass()).count()
    }

    fn cases(&self) -> impl Iterator<Item = &TestCase> {
        self.suites.iter().flat_map(|s| s.cases.iter())
    }
}

fn parse_suite(entry: &Value, index: usize) -> Result<TestSuite, StructureError> {
    let suite = entry
        .as_object()
        .ok_or(StructureError::SuiteNotObject { index })?;
    let name = suite
        .get("name")
        .and_then(Value::as_str)
        .ok_or(StructureError::MissingSuiteName { index })?
        .to_string();
    let case_entries = suite
        .get("testsuite")
        .and_then(Value::as_array)
        .ok_or_else(|| StructureError::MissingSuiteCases {
            suite: name.clone(),
        })?;

    let mut cases = Vec::with_capacity(case_entries.len());
    for (case_index, case_entry) in case_entries.iter().enumerate() {
        cases.push(parse_case(case_entry, &name, case_index)?);
    }

    Ok(TestSuite { name, cases })
}

fn parse_case(entry: &Value, suite: &str, index: usize) -> Result<TestCase, StructureError> {
    let case = entry
        .as_object()
        .ok_or_else(|| StructureError::CaseNotObject {
            suite: suite.to_string(),
            index,
        })?;
    let value_param = case
        .get("value_param")
        .and_then(Value::as_str)
        .ok_or_else(|| StructureError::MissingValueParam {
            suite: suite.to_string(),
            index,
        })?
        .to_string();

    let failures = match case.get("failures") {
        None | Some(Value::Null) => Failures::Absent,
        Some(Value::Array(entries)) => Failures::Listed(entries.clone()),
        Some(_) => {
            return Err(StructureError::FailuresNotArray {
                suite: suite.to_string(),
                case: value_param,
            })
        }
    };

    Ok(TestCase {
        value_param,
        failures,
    })
}
