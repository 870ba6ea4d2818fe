use crate::{conf::Conf, deadline::Deadline, model::ApiError, service::quote};
use rocket::{serde::json::Json, State};

/// One deadline covers both stages. Fetch failure fails the request with 408;
/// a skipped or failed persistence does not, the bid is returned regardless.
#[rocket::get("/")]
pub async fn get(conf: &State<Conf>) -> Result<Json<String>, ApiError> {
    let deadline = Deadline::after(conf.server.request_timeout());

    let quote = quote::fetch(&conf.server, &deadline)
        .await
        .map_err(ApiError::timeout)?;

    quote::persist(&conf.server, &deadline, &quote).await;

    Ok(Json(quote.bid))
}
