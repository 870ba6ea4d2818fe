pub mod api_error;
pub use api_error::ApiError;
pub mod quote;
pub use quote::Quote;
