use serde_derive::{Deserialize, Serialize};

// Wire keys are the hyphenated names mandated by the browser CSP reporting
// spec, so every field carries a rename. Browsers differ in which fields they
// populate; anything missing decodes to its empty/zero value.

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CspViolation {
    #[serde(rename = "csp-report", default)]
    pub report: CspReport,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CspReport {
    #[serde(rename = "document-uri", default)]
    pub document_uri: String,

    #[serde(default)]
    pub referrer: String,

    #[serde(rename = "violated-directive", default)]
    pub violated_directive: String,

    #[serde(rename = "original-policy", default)]
    pub original_policy: String,

    #[serde(rename = "blocked-uri", default)]
    pub blocked_uri: String,

    #[serde(rename = "script-sample", default)]
    pub script_sample: String,

    #[serde(rename = "line-number", default)]
    pub line_number: i64,
}
