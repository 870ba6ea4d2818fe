use crate::{conf::ClientConf, deadline::Deadline};
use anyhow::{Context, Result};
use std::fs;
use tracing::{error, info, warn};

/// Single-shot client: one GET against the quote server, then the raw
/// response body goes to the output file. A transport error propagates (the
/// binary treats it as fatal); a response that arrives after the deadline is
/// discarded; file trouble is logged and swallowed.
pub async fn run(conf: &ClientConf, deadline: Deadline) -> Result<()> {
    let client = reqwest::Client::new();
    let res = client
        .get(&conf.server_url)
        .timeout(conf.timeout())
        .send()
        .await
        .context("Unable to call the quote server")?;

    if deadline.expired() {
        warn!("Deadline expired before the response was read, discarding it");
        return Ok(());
    }

    match res.text().await {
        Ok(body) => write_quote(&conf.output_path, &body),
        Err(e) => error!(%e, "Unable to read the server response"),
    }

    Ok(())
}

fn write_quote(path: &str, body: &str) {
    match fs::write(path, format!("Dólar: {}", body)) {
        Ok(()) => info!(%path, "Saved quote"),
        Err(e) => error!(%e, %path, "Unable to write quote file"),
    }
}
