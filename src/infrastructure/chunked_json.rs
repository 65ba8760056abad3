// Chunked JSON streaming: each frame is a 4-byte big-endian length + payload
use crate::infrastructure::http_response::brotli_compress;
use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use futures::stream::Stream;
use futures::StreamExt;
use serde::Serialize;

/// Create a chunked streaming response from a stream of serializable frames
pub async fn chunked_json_stream<S, T>(
    stream: S,
    compress: bool,
) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = T> + Send + 'static,
    T: Serialize + Send + Sync + 'static,
{
    let byte_stream = stream.then(move |frame| async move { serialize_chunk(&frame, compress).await });

    // Chunks are compressed one by one, so the response as a whole carries no
    // Content-Encoding; clients must not try to inflate the HTTP body.
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from_stream(byte_stream))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Serialize one frame to a length-prefixed chunk
pub async fn serialize_chunk<T: Serialize>(frame: &T, compress: bool) -> Result<Bytes, std::io::Error> {
    let json = serde_json::to_vec(frame)?;

    let payload = if compress {
        brotli_compress(json).await?
    } else {
        json
    };

    let mut chunk = BytesMut::with_capacity(4 + payload.len());
    chunk.put_u32(payload.len() as u32);
    chunk.put_slice(&payload);

    Ok(chunk.freeze())
}

/// Helper to create a streaming response from a receiver
pub async fn stream_from_receiver<T>(
    mut rx: tokio::sync::mpsc::Receiver<T>,
    compress: bool,
) -> impl IntoResponse
where
    T: Serialize + Send + Sync + 'static,
{
    let stream = async_stream::stream! {
        while let Some(frame) = rx.recv().await {
            yield frame;
        }
    };

    match chunked_json_stream(stream, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Split a framed body back into its JSON payloads (uncompressed frames only)
#[cfg(test)]
pub fn decode_frames(mut body: &[u8]) -> Vec<serde_json::Value> {
    let mut frames = Vec::new();
    while body.len() >= 4 {
        let len = u32::from_be_bytes([body[0], body[1], body[2], body[3]]) as usize;
        frames.push(serde_json::from_slice(&body[4..4 + len]).unwrap());
        body = &body[4 + len..];
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_chunk_has_length_prefix() {
        let chunk = serialize_chunk(&serde_json::json!({ "a": 1 }), false).await.unwrap();
        assert_eq!(&chunk[..4], &7u32.to_be_bytes());
        assert_eq!(&chunk[4..], br#"{"a":1}"#);
    }

    #[tokio::test]
    async fn test_receiver_frames_become_body_chunks() {
        let (tx, rx) = tokio::sync::mpsc::channel(4);
        tx.send(1u32).await.unwrap();
        tx.send(2u32).await.unwrap();
        drop(tx);

        let response = stream_from_receiver(rx, false).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(decode_frames(&body), vec![serde_json::json!(1), serde_json::json!(2)]);
    }
}
