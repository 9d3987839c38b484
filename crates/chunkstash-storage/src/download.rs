//! Download fetch: proxy a resolved URL back as a byte stream.

use crate::error::{StorageError, StorageResult};
use bytes::Bytes;
use chunkstash_core::Provider;
use futures::{Stream, StreamExt};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use std::time::Duration;

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

// Some providers reject default client identifiers, so the proxy fetches with
// a browser-like User-Agent.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// GET the resolved URL and hand back the body as a stream of chunks.
///
/// The bytes pass through verbatim (still encrypted). A zero-byte body on an
/// otherwise successful fetch is logged as suspicious but not treated as an
/// error; in practice it usually means the stored link has expired.
pub(crate) async fn fetch(
    http: &reqwest::Client,
    url: &str,
    provider: Provider,
) -> StorageResult<impl Stream<Item = Result<Bytes, StorageError>> + Send + 'static> {
    let response = http
        .get(url)
        .header(USER_AGENT, BROWSER_USER_AGENT)
        .header(ACCEPT, "*/*")
        .timeout(DOWNLOAD_TIMEOUT)
        .send()
        .await?;

    let status = response.status();
    if status != StatusCode::OK {
        if status == StatusCode::UNSUPPORTED_MEDIA_TYPE {
            tracing::warn!(
                provider = %provider,
                "Remote returned 415; the stored link has likely expired"
            );
        }
        tracing::error!(provider = %provider, status = status.as_u16(), "Remote fetch failed");
        return Err(StorageError::RemoteStatus(status.as_u16()));
    }

    let byte_stream = Box::pin(response.bytes_stream());
    let counted = futures::stream::unfold(
        (byte_stream, 0u64, provider),
        |(mut inner, mut count, provider)| async move {
            match inner.next().await {
                Some(Ok(chunk)) => {
                    count += chunk.len() as u64;
                    Some((Ok(chunk), (inner, count, provider)))
                }
                Some(Err(e)) => Some((Err(StorageError::Transport(e)), (inner, count, provider))),
                None => {
                    if count == 0 {
                        tracing::warn!(
                            provider = %provider,
                            "0 bytes streamed from resolved download URL"
                        );
                    } else {
                        tracing::debug!(provider = %provider, bytes = count, "Stream complete");
                    }
                    None
                }
            }
        },
    );

    Ok(counted)
}
