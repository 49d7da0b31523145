use tracing::warn;

use super::CaptureError;

/// Returns the write callback for one response.
///
/// Each call appends the chunk to `buffer` and reports how many bytes were
/// taken. With a `limit`, the buffer never grows past it and the callback
/// consumes only what still fits.
pub fn capture_into(
    buffer: &mut Vec<u8>,
    limit: Option<usize>,
) -> impl FnMut(&[u8]) -> usize + Send + '_ {
    move |chunk: &[u8]| {
        let consumed = match limit {
            Some(limit) => limit.saturating_sub(buffer.len()).min(chunk.len()),
            None => chunk.len(),
        };
        buffer.extend_from_slice(&chunk[..consumed]);
        consumed
    }
}

/// Hands `chunk` to `write`. Consuming fewer bytes than offered aborts the
/// transfer.
pub fn deliver<F>(write: &mut F, chunk: &[u8]) -> Result<(), CaptureError>
where
    F: FnMut(&[u8]) -> usize,
{
    let offered = chunk.len();
    let consumed = write(chunk);
    if consumed < offered {
        warn!("Aborting transfer, consumed {consumed} of {offered} bytes");
        return Err(CaptureError::ShortWrite { offered, consumed });
    }
    Ok(())
}

/// Decodes the captured body. Invalid UTF-8 sequences become U+FFFD, so a
/// complete response always yields text.
pub fn into_text(buffer: Vec<u8>) -> String {
    match String::from_utf8(buffer) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
