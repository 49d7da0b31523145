mod error;
mod http;
#[cfg(test)]
mod mock;
mod r#trait;

pub use error::PostSenderError;
pub use http::HttpPostSender;
#[cfg(test)]
pub use mock::{MockPostSender, RecordedPost};
pub use r#trait::PostSender;
