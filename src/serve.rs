// src/serve.rs
//! JSON-lines request loop.
//!
//! Each input line is one call:
//!
//! ```json
//! {"id": 7, "method": "index.head", "params": {"remotePath": "~/src", "rescan": 5000000000}}
//! ```
//!
//! and produces exactly one output line carrying the same `id` and either a
//! `result` or an `error` string. A `null` or absent `params` is passed to the
//! gateway as a missing request.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info};
use remote_index_ports::IndexCache;
use remote_index_usecase::{IndexGateway, IndexRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const METHOD_HEAD: &str = "index.head";
pub const METHOD_GET: &str = "index.get";

#[derive(Debug, Deserialize)]
struct Call {
    #[serde(default)]
    id: Value,
    method: String,
    #[serde(default)]
    params: Option<IndexRequest>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Reply {
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Reply {
    fn ok(id: Value, result: Value) -> Self {
        Self { id, result: Some(result), error: None }
    }

    fn err(id: Value, error: impl ToString) -> Self {
        Self { id, result: None, error: Some(error.to_string()) }
    }
}

/// Answers calls from `input` until EOF. Per-call failures become error replies;
/// only I/O failures on the streams end the loop.
///
/// # Errors
/// Returns an error when reading `input` or writing `output` fails.
pub fn serve<C: IndexCache>(gateway: &IndexGateway<C>, input: impl BufRead, mut output: impl Write) -> Result<usize> {
    info!("serving index requests on stdio");
    let mut served = 0;
    for line in input.lines() {
        let line = line.context("failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = handle_line(gateway, &line);
        serde_json::to_writer(&mut output, &reply).context("failed to encode reply")?;
        output.write_all(b"\n").context("failed to write reply")?;
        output.flush().context("failed to flush reply")?;
        served += 1;
    }
    info!("input closed after {served} calls");
    Ok(served)
}

pub fn handle_line<C: IndexCache>(gateway: &IndexGateway<C>, line: &str) -> Reply {
    let call: Call = match serde_json::from_str(line) {
        Ok(call) => call,
        Err(err) => return Reply::err(id_of(line), format!("invalid call: {err}")),
    };
    debug!("call {} id={}", call.method, call.id);

    let params = call.params.as_ref();
    let result = match call.method.as_str() {
        METHOD_HEAD => gateway.head(params).map(serde_json::to_value),
        METHOD_GET => gateway.get(params).map(serde_json::to_value),
        other => return Reply::err(call.id, format!("unknown method: {other}")),
    };

    match result {
        Ok(Ok(value)) => Reply::ok(call.id, value),
        Ok(Err(err)) => Reply::err(call.id, format!("failed to encode result: {err}")),
        Err(err) => Reply::err(call.id, err),
    }
}

/// Best-effort `id` recovery from a line that failed to parse as a call.
fn id_of(line: &str) -> Value {
    serde_json::from_str::<Value>(line)
        .ok()
        .and_then(|mut v| v.get_mut("id").map(Value::take))
        .unwrap_or(Value::Null)
}
