use crate::{conf::Conf, model::Quote, prepare};
use rocket::local::asynchronous::Client;
use tempfile::TempDir;

pub const USDBRL_PAYLOAD: &str = r#"{
    "USDBRL": {
        "code": "USD",
        "codein": "BRL",
        "name": "Dólar Americano/Real Brasileiro",
        "high": "5.4502",
        "low": "5.3904",
        "varBid": "0.0203",
        "pctChange": "0.38",
        "bid": "5.4321",
        "ask": "5.4335",
        "timestamp": "1718374200",
        "create_date": "2024-06-14 14:30:00"
    }
}"#;

pub async fn client(conf: Conf) -> Client {
    Client::untracked(prepare(rocket::build(), conf))
        .await
        .unwrap()
}

pub fn conf(upstream_url: &str, dir: &TempDir) -> Conf {
    let mut conf = Conf::new().unwrap();
    conf.server.upstream_url = upstream_url.to_string();
    conf.server.db_url = dir.path().join("cotacao.db").display().to_string();
    // Roomy budget so success-path tests don't race the deadline on slow
    // machines. Timeout tests shrink it explicitly.
    conf.server.request_timeout_ms = 2000;
    conf
}

pub fn quote() -> Quote {
    Quote {
        code: "USD".to_string(),
        codein: "BRL".to_string(),
        name: "Dólar Americano/Real Brasileiro".to_string(),
        high: "5.4502".to_string(),
        low: "5.3904".to_string(),
        var_bid: "0.0203".to_string(),
        pct_change: "0.38".to_string(),
        bid: "5.4321".to_string(),
        ask: "5.4335".to_string(),
        timestamp: "1718374200".to_string(),
        create_date: "2024-06-14 14:30:00".to_string(),
    }
}
