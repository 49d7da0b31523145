//! Post `multipart/form-data` forms over HTTP and capture the response.
//!
//! Callers hold something implementing [`PostSender`]. [`HttpPostSender`]
//! is the network-backed implementation; tests use a mock sender that
//! records calls and replays canned responses without touching the network.

pub mod capture;
pub mod config;
pub mod form;
pub mod sender;

pub use config::{ConfigError, PostSenderConfig};
pub use form::{content_type, generate_boundary, get_form_data, is_valid_boundary, FormData};
pub use sender::{HttpPostSender, PostSender, PostSenderError};
