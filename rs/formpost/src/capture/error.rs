use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Short write: consumed {consumed} of {offered} bytes")]
    ShortWrite { offered: usize, consumed: usize },
}
