use std::future::Future;

use reqwest::StatusCode;

use super::{HttpPostSender, PostSenderError};
use crate::form::FormData;

pub trait PostSender {
    /// Posts `form_data` to `url` as `multipart/form-data`.
    ///
    /// `response_text` is cleared and then holds the full response body.
    /// `Ok` carries whatever HTTP status the server answered with, including
    /// 4xx and 5xx. Failing to get a complete response is an `Err`, and
    /// `response_text` is left empty.
    fn send(
        &self,
        url: &str,
        response_text: &mut String,
        form_data: &FormData,
    ) -> impl Future<Output = Result<StatusCode, PostSenderError>> + Send;
}

impl PostSender for HttpPostSender {
    fn send(
        &self,
        url: &str,
        response_text: &mut String,
        form_data: &FormData,
    ) -> impl Future<Output = Result<StatusCode, PostSenderError>> + Send {
        self.post_form(url, response_text, form_data)
    }
}
