use anyhow::Result;
use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::time::Duration;

#[derive(Clone, Deserialize)]
pub struct Conf {
    pub server: ServerConf,
    pub client: ClientConf,
}

#[derive(Clone, Deserialize)]
pub struct ServerConf {
    pub port: u16,
    pub request_timeout_ms: u64,
    pub upstream_url: String,
    pub db_url: String,
    pub on_decode_error: DecodePolicy,
}

#[derive(Clone, Deserialize)]
pub struct ClientConf {
    pub server_url: String,
    pub timeout_ms: u64,
    pub output_path: String,
}

/// What the upstream fetcher does when the response body can't be read or
/// parsed. `ZeroValue` keeps the request alive with an empty quote,
/// `PropagateError` fails it like a transport error.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum DecodePolicy {
    ZeroValue,
    PropagateError,
}

impl Conf {
    pub fn new() -> Result<Conf> {
        let default_conf = include_bytes!("../cotacao.conf");
        let default_conf = String::from_utf8_lossy(default_conf);

        let conf: Conf = Figment::new()
            .merge(Toml::string(&default_conf))
            .merge(Toml::file("cotacao.conf"))
            .extract()?;

        Ok(conf)
    }
}

impl ServerConf {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl ClientConf {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
