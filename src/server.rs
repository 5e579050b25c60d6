//! Stdio host for the bridge.
//!
//! Serves the allow-listed operations as line-delimited JSON over
//! stdin/stdout: one request object per line in, one response object per
//! line out. EOF on stdin ends the host.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use log::debug;

use crate::bridge;

/// One bridge call from the presentation layer.
#[derive(Debug, Deserialize)]
pub struct BridgeRequest {
    #[serde(default)]
    pub id: Option<Value>,
    pub op: String,
    #[serde(default)]
    pub args: Value,
}

/// The host's reply: a result on success, a rendered message on failure.
#[derive(Debug, Serialize)]
pub struct BridgeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BridgeResponse {
    fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            id,
            result: Some(result),
            error: None,
        }
    }

    fn failure(id: Option<Value>, message: String) -> Self {
        Self {
            id,
            result: None,
            error: Some(message),
        }
    }
}

/// Handles a single request line.
///
/// An unparseable line yields an id-less error response rather than
/// tearing down the host; every other failure is scoped to the one
/// operation that caused it.
pub async fn handle_request(line: &str) -> BridgeResponse {
    let request: BridgeRequest = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(err) => return BridgeResponse::failure(None, format!("parse error: {}", err)),
    };

    debug!("dispatching {}", request.op);
    match bridge::dispatch(&request.op, request.args).await {
        Ok(result) => BridgeResponse::success(request.id, result),
        Err(err) => BridgeResponse::failure(request.id, err.to_string()),
    }
}

/// Runs the host loop until stdin closes.
pub async fn run() -> std::io::Result<()> {
    let stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(stdin).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_request(&line).await;
        let payload = serde_json::to_string(&response).map_err(std::io::Error::other)?;
        stdout.write_all(payload.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    Ok(())
}
