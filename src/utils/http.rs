use reqwest::StatusCode;
use std::time::Duration;

const MAX_BACKOFF: Duration = Duration::from_secs(60);

/// Runs a request closure until it succeeds or retries run out.
///
/// Network errors, 429 (honoring a `Retry-After` header) and 5xx
/// responses are retried with doubling delays; other error statuses
/// come back immediately for the caller to interpret. The final
/// non-success response is returned rather than swallowed, so callers
/// can read the status and body.
pub async fn request_with_retry<F, Fut>(
    mut task: F,
    max_retries: u32,
) -> Result<reqwest::Response, String>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
{
    let mut attempt = 0;
    let mut delay = Duration::from_millis(1000);

    loop {
        attempt += 1;
        match task().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    return Ok(response);
                }

                // Out of retries: hand the error response back as-is
                if attempt > max_retries {
                    return Ok(response);
                }

                if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
                    // Prefer the wait the server asked for
                    let retry_delay = response
                        .headers()
                        .get("retry-after")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|v| v.parse::<u64>().ok())
                        .map(Duration::from_secs)
                        .unwrap_or(delay);

                    tracing::warn!(
                        %status,
                        attempt,
                        max_retries,
                        ?retry_delay,
                        "request failed, retrying"
                    );
                    tokio::time::sleep(retry_delay).await;
                    delay = std::cmp::min(delay * 2, MAX_BACKOFF);
                    continue;
                }

                // 4xx other than 429 won't get better with retries
                return Ok(response);
            }
            Err(e) => {
                if attempt > max_retries {
                    return Err(format!(
                        "Network request failed after {} attempts: {}",
                        max_retries, e
                    ));
                }
                tracing::warn!(error = %e, attempt, max_retries, ?delay, "network error, retrying");
                tokio::time::sleep(delay).await;
                delay = std::cmp::min(delay * 2, MAX_BACKOFF);
            }
        }
    }
}
