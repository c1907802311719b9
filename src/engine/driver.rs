// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::Write;

use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::codec;
use crate::config::{Config, Mode};
use crate::engine::{EmissionReceiver, ProcessorHost};
use crate::errors::DriverError;
use crate::term::Term;

/// Counts from one [`LineDriver::run`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DriveSummary {
    /// Non-blank input lines decoded into records.
    pub records: usize,
    /// `point` or `batch` calls made on the host.
    pub calls: usize,
}

/// Feeds line-delimited JSON records through an initialized host.
///
/// Blank lines are skipped. In batch mode records are grouped into
/// `batch_size` chunks and a shorter final chunk is flushed at end of input.
/// After every call the reply is written as `{"reply": ..}`, followed by
/// each emission as `{"emit": ..}`, one JSON document per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDriver {
    mode: Mode,
    batch_size: usize,
}

impl LineDriver {
    pub fn new(mode: Mode, batch_size: usize) -> Self {
        Self {
            mode,
            batch_size: batch_size.max(1),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.mode, cfg.batch_size)
    }

    pub async fn run<R, W>(
        &self,
        host: &mut ProcessorHost,
        emissions: &mut EmissionReceiver,
        input: R,
        out: &mut W,
    ) -> Result<DriveSummary, DriverError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        let mut pending: Vec<Term> = Vec::new();
        let mut summary = DriveSummary::default();
        let mut line_no = 0usize;

        while let Some(line) = lines.next_line().await? {
            line_no += 1;
            if line.trim().is_empty() {
                continue;
            }

            let value: Value = serde_json::from_str(&line).map_err(|source| DriverError::Json {
                line: line_no,
                source,
            })?;
            let point = codec::from_json(&value).map_err(|source| DriverError::Codec {
                line: line_no,
                source,
            })?;
            summary.records += 1;

            match self.mode {
                Mode::Point => {
                    let reply = host.point(point).await?;
                    summary.calls += 1;
                    write_output(reply, emissions, out)?;
                }
                Mode::Batch => {
                    pending.push(point);
                    if pending.len() >= self.batch_size {
                        flush_batch(host, &mut pending, emissions, out).await?;
                        summary.calls += 1;
                    }
                }
            }
        }

        if !pending.is_empty() {
            flush_batch(host, &mut pending, emissions, out).await?;
            summary.calls += 1;
        }

        Ok(summary)
    }
}

async fn flush_batch<W: Write>(
    host: &mut ProcessorHost,
    pending: &mut Vec<Term>,
    emissions: &mut EmissionReceiver,
    out: &mut W,
) -> Result<(), DriverError> {
    let batch = std::mem::take(pending);
    let reply = host.batch(batch).await?;
    write_output(reply, emissions, out)
}

/// Write a call's reply, then everything emitted during the call.
pub fn write_output<W: Write>(
    reply: Option<Term>,
    emissions: &mut EmissionReceiver,
    out: &mut W,
) -> Result<(), DriverError> {
    if let Some(reply) = reply {
        let value = codec::to_json(&reply).map_err(DriverError::Output)?;
        writeln!(out, "{}", json!({ "reply": value }))?;
    }
    while let Ok(emission) = emissions.try_recv() {
        let value = codec::to_json(&emission.into_term()).map_err(DriverError::Output)?;
        writeln!(out, "{}", json!({ "emit": value }))?;
    }

    out.flush()?;
    Ok(())
}
