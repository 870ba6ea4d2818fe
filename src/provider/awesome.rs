use crate::{
    conf::{DecodePolicy, ServerConf},
    model::Quote,
};
use anyhow::{Context, Error, Result};
use std::{collections::HashMap, time::Duration};
use tracing::{error, info};

/// Fetches the current USD/BRL quote from the AwesomeAPI endpoint. The
/// payload keys a single quote object by pair code ("USDBRL") and is
/// unwrapped here. Transport failures always propagate; body-read and decode
/// failures follow the configured policy.
pub async fn fetch(conf: &ServerConf, budget: Duration) -> Result<Quote> {
    let client = reqwest::Client::new();
    let res = client
        .get(&conf.upstream_url)
        .timeout(budget)
        .send()
        .await
        .context("Unable to call the upstream quote API")?;

    let body = match res.text().await {
        Ok(body) => body,
        Err(e) => {
            let e = Error::new(e).context("Unable to read the upstream response");
            return lenient(conf.on_decode_error, e);
        }
    };

    let quotes: HashMap<String, Quote> = match serde_json::from_str(&body) {
        Ok(quotes) => quotes,
        Err(e) => {
            let e = Error::new(e).context("Unable to parse the upstream response");
            return lenient(conf.on_decode_error, e);
        }
    };

    let quote = quotes.into_iter().map(|(_, v)| v).next().unwrap_or_default();
    info!(bid = %quote.bid, "Fetched upstream quote");
    Ok(quote)
}

fn lenient(policy: DecodePolicy, e: Error) -> Result<Quote> {
    match policy {
        DecodePolicy::ZeroValue => {
            error!(%e, "Rejected upstream response, continuing with a zero-valued quote");
            Ok(Quote::default())
        }
        DecodePolicy::PropagateError => Err(e),
    }
}
