use crate::error::RecorderError;
use crate::report::CspReport;
use chrono::{DateTime, Utc};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde_derive::Serialize;

pub const APP_NAME: &str = "CSP Violation";

const CLEF_CONTENT_TYPE: &str = "application/vnd.serilog.clef";

// One event per ingested report, shaped as a CLEF line so the Seq collector
// can ingest it directly. The report rides along as a nested `violation`
// property rather than flattened fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViolationEvent {
    #[serde(rename = "@t")]
    pub timestamp: DateTime<Utc>,

    #[serde(rename = "@mt")]
    pub message: String,

    #[serde(rename = "AppName")]
    pub app_name: &'static str,

    pub violation: CspReport,
}

impl ViolationEvent {
    pub fn new(report: CspReport) -> ViolationEvent {
        ViolationEvent {
            timestamp: Utc::now(),
            message: format!("CSP-Violation received: {}", report.violated_directive),
            app_name: APP_NAME,
            violation: report,
        }
    }
}

pub trait EventSink: Send + Sync {
    fn record(&self, event: ViolationEvent);
}

pub struct SeqSink {
    client: Client,
    endpoint: Url,
}

impl SeqSink {
    pub fn new(seq_url: &str) -> anyhow::Result<SeqSink> {
        let endpoint = Url::parse(seq_url)?.join("ingest/clef")?;

        Ok(SeqSink {
            client: Client::new(),
            endpoint,
        })
    }
}

impl EventSink for SeqSink {
    // Fire-and-forget: the handler must not wait for the collector, and a
    // failed send drops the event after a warning. No retry, no buffering.
    fn record(&self, event: ViolationEvent) {
        let body = match serde_json::to_string(&event) {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!("dropping violation event, encode failed: {err}");
                return;
            }
        };

        let request = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, CLEF_CONTENT_TYPE)
            .body(body);

        tokio::spawn(async move {
            match request.send().await {
                Ok(res) if !res.status().is_success() => {
                    tracing::warn!("log sink rejected event: {}", res.status());
                }
                Ok(_) => {}
                Err(err) => {
                    let err = RecorderError::SinkUnavailable(err);
                    tracing::warn!("dropping violation event: {err}");
                }
            }
        });
    }
}
