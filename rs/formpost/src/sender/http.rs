use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tracing::debug;

use super::PostSenderError;
use crate::capture::{capture_into, deliver, into_text};
use crate::config::PostSenderConfig;
use crate::form::{content_type, generate_boundary, get_form_data, FormData};

#[derive(Clone)]
pub struct HttpPostSender {
    pub client: Client,
    config: PostSenderConfig,
}

impl HttpPostSender {
    pub fn new(config: PostSenderConfig) -> Result<Self, PostSenderError> {
        config.validate()?;
        let client = Client::builder().use_rustls_tls().build()?;
        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, PostSenderError> {
        Self::new(PostSenderConfig::from_env()?)
    }

    pub fn config(&self) -> &PostSenderConfig {
        &self.config
    }

    fn boundary(&self) -> String {
        self.config
            .boundary
            .clone()
            .unwrap_or_else(generate_boundary)
    }

    pub async fn post_form(
        &self,
        url: &str,
        response_text: &mut String,
        form_data: &FormData,
    ) -> Result<StatusCode, PostSenderError> {
        response_text.clear();

        let boundary = self.boundary();
        let body = get_form_data(&boundary, form_data);
        debug!(
            "Posting {} fields to {url} with boundary {boundary}",
            form_data.len()
        );

        let mut response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, content_type(&boundary))
            .body(body)
            .send()
            .await?;
        let status = response.status();

        let mut buffer = Vec::new();
        {
            let mut write = capture_into(&mut buffer, self.config.max_response_bytes);
            while let Some(chunk) = response.chunk().await? {
                deliver(&mut write, &chunk)?;
            }
        }
        debug!("Received {status} from {url}, {} bytes", buffer.len());

        *response_text = into_text(buffer);
        Ok(status)
    }
}
