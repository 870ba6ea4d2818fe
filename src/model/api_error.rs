use anyhow::Error;
use rocket::{
    http::{ContentType, Status},
    request::Request,
    response::{self, Responder, Response},
};
use std::io::Cursor;
use tracing::error;

#[derive(Debug)]
pub struct ApiError {
    pub status: Status,
    pub message: String,
    pub error: Option<Error>,
}

impl ApiError {
    pub fn timeout(error: Error) -> ApiError {
        ApiError {
            status: Status::RequestTimeout,
            message: "Erro ao consumir API".to_string(),
            error: Some(error),
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        if let Some(error) = self.error {
            error!(%error, "Error from controller");
        }

        Response::build()
            .header(ContentType::Plain)
            .status(self.status)
            .sized_body(self.message.len(), Cursor::new(self.message))
            .ok()
    }
}
