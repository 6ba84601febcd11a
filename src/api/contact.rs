use dioxus::logger::tracing::{error, info};
use futures_util::future::{FutureExt, LocalBoxFuture};
use once_cell::sync::Lazy;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Fields posted to the form backend, form-encoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),

    #[error("form backend answered {status}: {detail}")]
    Rejected { status: u16, detail: String },
}

/// Anything that can deliver a contact submission to a form action URL.
pub trait FormTransport {
    fn post<'a>(
        &'a self,
        action: &'a str,
        submission: &'a ContactSubmission,
    ) -> LocalBoxFuture<'a, Result<(), SubmitError>>;
}

/// Posts through the shared reqwest client (fetch on wasm).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HttpTransport;

impl FormTransport for HttpTransport {
    fn post<'a>(
        &'a self,
        action: &'a str,
        submission: &'a ContactSubmission,
    ) -> LocalBoxFuture<'a, Result<(), SubmitError>> {
        async move {
            let response = HTTP_CLIENT
                .post(action)
                .header(ACCEPT, "application/json")
                .form(submission)
                .send()
                .await
                .map_err(|e| SubmitError::Network(e.to_string()))?;

            let status = response.status();
            if status.is_success() {
                return Ok(());
            }

            let body = response.text().await.unwrap_or_default();
            Err(SubmitError::Rejected {
                status: status.as_u16(),
                detail: describe_rejection(&body),
            })
        }
        .boxed_local()
    }
}

#[derive(Debug, Default, Deserialize)]
struct BackendReply {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Vec<BackendFieldError>,
}

#[derive(Debug, Deserialize)]
struct BackendFieldError {
    #[serde(default)]
    field: Option<String>,
    message: String,
}

/// Best-effort summary of a form backend's JSON error body.
pub fn describe_rejection(body: &str) -> String {
    let Ok(reply) = serde_json::from_str::<BackendReply>(body) else {
        return "no details".to_string();
    };

    let mut parts: Vec<String> = reply
        .errors
        .into_iter()
        .map(|err| match err.field {
            Some(field) => format!("{field}: {}", err.message),
            None => err.message,
        })
        .collect();
    if let Some(message) = reply.error {
        parts.insert(0, message);
    }

    if parts.is_empty() {
        "no details".to_string()
    } else {
        parts.join("; ")
    }
}

/// Deliver one submission and log the outcome. Never retries.
pub async fn deliver<T: FormTransport + ?Sized>(
    transport: &T,
    action: &str,
    submission: &ContactSubmission,
) -> Result<(), SubmitError> {
    let result = transport.post(action, submission).await;
    match &result {
        Ok(()) => info!(action, "contact form submitted"),
        Err(err) => error!(action, %err, "contact form submission failed"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_field_errors() {
        let body = r#"{"errors":[{"field":"email","message":"should be an email"},{"message":"rate limited"}]}"#;
        assert_eq!(
            describe_rejection(body),
            "email: should be an email; rate limited"
        );
    }

    #[test]
    fn describes_top_level_error() {
        assert_eq!(describe_rejection(r#"{"error":"Form not found"}"#), "Form not found");
    }

    #[test]
    fn unparseable_bodies_have_no_details() {
        assert_eq!(describe_rejection("<html>502</html>"), "no details");
        assert_eq!(describe_rejection("{}"), "no details");
    }

    #[test]
    fn rejection_message_includes_status() {
        let err = SubmitError::Rejected {
            status: 422,
            detail: "no details".to_string(),
        };
        assert_eq!(err.to_string(), "form backend answered 422: no details");
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod http {
        use super::*;
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        /// Accept one connection, answer it with `status` and `body`, and
        /// hand back the raw request text.
        async fn answer_once(
            status: &'static str,
            body: &'static str,
        ) -> (String, tokio::task::JoinHandle<String>) {
            let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
            let url = format!("http://{}/f/contact", listener.local_addr().expect("addr"));

            let handle = tokio::spawn(async move {
                let (mut socket, _) = listener.accept().await.expect("accept");
                let mut raw = Vec::new();
                let mut buf = [0u8; 1024];
                loop {
                    let n = socket.read(&mut buf).await.expect("read");
                    if n == 0 {
                        break;
                    }
                    raw.extend_from_slice(&buf[..n]);
                    if request_complete(&raw) {
                        break;
                    }
                }

                let reply = format!(
                    "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(reply.as_bytes()).await.expect("write");
                socket.shutdown().await.ok();
                String::from_utf8_lossy(&raw).into_owned()
            });

            (url, handle)
        }

        fn request_complete(raw: &[u8]) -> bool {
            let text = String::from_utf8_lossy(raw);
            let Some((head, body)) = text.split_once("\r\n\r\n") else {
                return false;
            };
            let length = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            body.len() >= length
        }

        fn submission() -> ContactSubmission {
            ContactSubmission {
                name: "Jo Doe".to_string(),
                email: "a@b.co".to_string(),
                message: "Great show, keep it up".to_string(),
            }
        }

        #[tokio::test]
        async fn posts_form_encoded_and_asks_for_json() {
            let (url, server) = answer_once("200 OK", r#"{"ok":true}"#).await;

            let result = HttpTransport.post(&url, &submission()).await;
            let request = server.await.expect("server task");

            assert_eq!(result, Ok(()));
            let lower = request.to_ascii_lowercase();
            assert!(request.starts_with("POST /f/contact HTTP/1.1"));
            assert!(lower.contains("accept: application/json"));
            assert!(lower.contains("content-type: application/x-www-form-urlencoded"));
            assert!(request.ends_with("name=Jo+Doe&email=a%40b.co&message=Great+show%2C+keep+it+up"));
        }

        #[tokio::test]
        async fn non_success_status_is_rejected_with_details() {
            let (url, server) = answer_once(
                "422 Unprocessable Entity",
                r#"{"errors":[{"field":"email","message":"bad"}]}"#,
            )
            .await;

            let result = HttpTransport.post(&url, &submission()).await;
            server.await.expect("server task");

            assert_eq!(
                result,
                Err(SubmitError::Rejected {
                    status: 422,
                    detail: "email: bad".to_string(),
                })
            );
        }

        #[tokio::test]
        async fn unreachable_backend_is_a_network_error() {
            let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
            let url = format!("http://{}/f/contact", listener.local_addr().expect("addr"));
            drop(listener);

            let result = HttpTransport.post(&url, &submission()).await;
            assert!(matches!(result, Err(SubmitError::Network(_))));
        }
    }
}
