use bytes::Bytes;
use reqwest::StatusCode;
use std::future::Future;
use std::sync::{Arc, Mutex};

use super::{PostSender, PostSenderError};
use crate::capture::{capture_into, deliver, into_text};
use crate::form::FormData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPost {
    pub url: String,
    pub form_data: FormData,
}

/// Stands in for [`HttpPostSender`](super::HttpPostSender) without any I/O.
/// Every call is recorded, then the configured chunks are replayed through
/// the same capture path a real response takes.
pub struct MockPostSender {
    received_data: Arc<Mutex<Vec<RecordedPost>>>,
    status: StatusCode,
    chunks: Vec<Bytes>,
    failure: Option<String>,
    max_response_bytes: Option<usize>,
}

impl MockPostSender {
    pub fn new(received_data: Arc<Mutex<Vec<RecordedPost>>>) -> Self {
        MockPostSender {
            received_data,
            status: StatusCode::OK,
            chunks: Vec::new(),
            failure: None,
            max_response_bytes: None,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn with_chunks<I, B>(mut self, chunks: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Bytes>,
    {
        self.chunks = chunks.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_response_bytes(mut self, limit: usize) -> Self {
        self.max_response_bytes = Some(limit);
        self
    }

    /// Every send fails after being recorded, as a dropped connection would.
    pub fn failing(mut self, reason: &str) -> Self {
        self.failure = Some(reason.to_owned());
        self
    }

    fn record(&self, url: &str, form_data: &FormData) -> Result<(), PostSenderError> {
        // received data is evaluated in the tests
        let mut data = self
            .received_data
            .lock()
            .map_err(|e| PostSenderError::Mock(e.to_string()))?;
        data.push(RecordedPost {
            url: url.to_owned(),
            form_data: form_data.clone(),
        });
        Ok(())
    }

    fn replay(
        &self,
        response_text: &mut String,
    ) -> Result<StatusCode, PostSenderError> {
        if let Some(reason) = &self.failure {
            return Err(PostSenderError::Mock(reason.clone()));
        }
        let mut buffer = Vec::new();
        {
            let mut write = capture_into(&mut buffer, self.max_response_bytes);
            for chunk in &self.chunks {
                deliver(&mut write, chunk)?;
            }
        }
        *response_text = into_text(buffer);
        Ok(self.status)
    }
}

impl PostSender for MockPostSender {
    fn send(
        &self,
        url: &str,
        response_text: &mut String,
        form_data: &FormData,
    ) -> impl Future<Output = Result<StatusCode, PostSenderError>> + Send {
        response_text.clear();
        let result = self
            .record(url, form_data)
            .and_then(|()| self.replay(response_text));
        async move { result }
    }
}
