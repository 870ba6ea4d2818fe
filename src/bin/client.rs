use cotacao::{client, conf::Conf, deadline::Deadline};
use std::process::exit;
use tracing::error;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let conf = Conf::new().unwrap_or_else(|e| {
        error!(%e, "Unable to load configuration");
        exit(1);
    });

    let deadline = Deadline::after(conf.client.timeout());

    client::run(&conf.client, deadline).await.unwrap_or_else(|e| {
        error!(%e, "Unable to reach the quote server");
        exit(1);
    });
}
