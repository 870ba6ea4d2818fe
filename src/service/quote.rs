use crate::{
    conf::ServerConf,
    deadline::Deadline,
    model::Quote,
    provider::awesome,
    repository::quotes,
};
use anyhow::{anyhow, Result};
use tokio::task;
use tracing::{error, warn};

/// Fetch stage. A failure here is fatal to the request. The expiry pre-check
/// is a fast path only; the request timeout inside the fetcher is the
/// authoritative enforcement and the two may disagree under load.
pub async fn fetch(conf: &ServerConf, deadline: &Deadline) -> Result<Quote> {
    if deadline.expired() {
        warn!("Deadline expired before the upstream call was dispatched");
        return Err(anyhow!("request deadline expired"));
    }

    awesome::fetch(conf, deadline.remaining()).await
}

/// Persistence stage, best effort: skipped when the deadline has already
/// elapsed, and never surfaced to the caller. Returns whether a write was
/// attempted.
pub async fn persist(conf: &ServerConf, deadline: &Deadline, quote: &Quote) -> bool {
    if deadline.expired() {
        warn!("Deadline expired, skipping persistence");
        return false;
    }

    let db_url = conf.db_url.clone();
    let quote = quote.clone();

    if let Err(e) = task::spawn_blocking(move || quotes::persist(&db_url, &quote)).await {
        error!(%e, "Persistence task failed");
        return false;
    }

    true
}
