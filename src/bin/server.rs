use cotacao::conf::Conf;
use std::process::exit;
use tracing::{error, info};

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    tracing_subscriber::fmt::init();

    let conf = Conf::new().unwrap_or_else(|e| {
        error!(%e, "Unable to load configuration");
        exit(1);
    });

    info!(port = conf.server.port, "Starting quote server");
    let figment = rocket::Config::figment().merge(("port", conf.server.port));
    cotacao::prepare(rocket::custom(figment), conf).launch().await?;

    Ok(())
}
