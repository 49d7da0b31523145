mod capture;
mod error;

pub use capture::{capture_into, deliver, into_text};
pub use error::CaptureError;
