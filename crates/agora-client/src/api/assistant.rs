//! Streaming chat with the site assistant.

use agora_types::protocol::{AssistantRequest, ChatMessage};
use agora_types::ValidationError;
use futures::stream::{self, StreamExt};

use crate::client::{ensure_success, GatewayClient};
use crate::error::ClientError;

/// Reply text as it arrives, one chunk per network read.
#[cfg(not(target_arch = "wasm32"))]
pub type ReplyStream = futures::stream::BoxStream<'static, Result<String, ClientError>>;

/// Reply text as it arrives, one chunk per network read.
#[cfg(target_arch = "wasm32")]
pub type ReplyStream = futures::stream::LocalBoxStream<'static, Result<String, ClientError>>;

/// Decodes UTF-8 across chunk boundaries.
#[derive(Debug, Default)]
struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    fn push(&mut self, bytes: &[u8]) -> String {
        self.pending.extend_from_slice(bytes);
        let valid = match std::str::from_utf8(&self.pending) {
            Ok(_) => self.pending.len(),
            // Incomplete sequence at the end: hold it for the next chunk.
            Err(e) if e.error_len().is_none() => e.valid_up_to(),
            Err(_) => self.pending.len(),
        };
        let rest = self.pending.split_off(valid);
        let text = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending = rest;
        text
    }

    fn finish(&mut self) -> String {
        let text = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        text
    }
}

impl GatewayClient {
    /// Send the whole conversation and stream the assistant's reply.
    pub async fn ask(&self, messages: &[ChatMessage]) -> Result<ReplyStream, ClientError> {
        let url = self.config().assistant_url.clone().ok_or_else(|| ValidationError::Invalid {
            field: "assistant_url".to_string(),
            message: "assistant endpoint is not configured".to_string(),
        })?;

        let body = AssistantRequest { messages: messages.to_vec() };
        let response = self.http().post(&url).json(&body).send().await?;
        let response = ensure_success(response).await?;

        let state = (Box::pin(response.bytes_stream()), Utf8Decoder::default());
        let chunks = stream::unfold(Some(state), |state| async move {
            let (mut bytes, mut decoder) = state?;
            loop {
                match bytes.next().await {
                    Some(Ok(chunk)) => {
                        let text = decoder.push(&chunk);
                        if !text.is_empty() {
                            return Some((Ok(text), Some((bytes, decoder))));
                        }
                    },
                    Some(Err(e)) => return Some((Err(ClientError::from(e)), None)),
                    None => {
                        let tail = decoder.finish();
                        return (!tail.is_empty()).then(|| (Ok(tail), None));
                    },
                }
            }
        });

        #[cfg(not(target_arch = "wasm32"))]
        let chunks = chunks.boxed();
        #[cfg(target_arch = "wasm32")]
        let chunks = chunks.boxed_local();
        Ok(chunks)
    }

    /// Like [`GatewayClient::ask`] but waits for the full reply.
    pub async fn ask_text(&self, messages: &[ChatMessage]) -> Result<String, ClientError> {
        let mut stream = self.ask(messages).await?;
        let mut reply = String::new();
        while let Some(chunk) = stream.next().await {
            reply.push_str(&chunk?);
        }
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoder_holds_split_sequence() {
        let mut decoder = Utf8Decoder::default();
        let bytes = "привет".as_bytes();
        assert_eq!(decoder.push(&bytes[..3]), "п");
        assert_eq!(decoder.push(&bytes[3..]), "ривет");
        assert_eq!(decoder.finish(), "");
    }

    #[test]
    fn test_decoder_flushes_garbage() {
        let mut decoder = Utf8Decoder::default();
        assert_eq!(decoder.push(&[b'o', b'k', 0xFF]), "ok\u{FFFD}");
        assert_eq!(decoder.push(&[0xD0]), "");
        assert_eq!(decoder.finish(), "\u{FFFD}");
    }
}
