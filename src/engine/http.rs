//! Blocking HTTP implementation of the engine client

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use super::{EngineClient, EngineResponse, Method, TransportRequest};
use crate::config::EngineSettings;
use crate::error::{Result, engine_unreachable};

/// Engine client speaking HTTP to the engine's REST endpoint
pub struct HttpEngineClient {
    client: Client,
    base_url: String,
    username: Option<String>,
    password: Option<String>,
}

impl HttpEngineClient {
    pub fn new(settings: &EngineSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| engine_unreachable(&settings.url, e.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.url.trim_end_matches('/').to_string(),
            username: settings.username.clone(),
            password: settings.password.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL a request is sent to
    pub fn request_url(&self, request: &TransportRequest) -> String {
        format!(
            "{}/{}",
            self.base_url,
            request.path_and_query().trim_start_matches('/')
        )
    }
}

impl EngineClient for HttpEngineClient {
    fn transport_request(&self, request: &TransportRequest) -> Result<EngineResponse> {
        let url = self.request_url(request);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        if let Some(username) = &self.username {
            builder = builder.basic_auth(username, self.password.as_ref());
        }

        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        let response = builder
            .send()
            .map_err(|e| engine_unreachable(&self.base_url, e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .unwrap_or_else(|e| format!("<unreadable body: {e}>"));

        Ok(EngineResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(url: &str) -> EngineSettings {
        EngineSettings {
            url: url.to_string(),
            ..EngineSettings::default()
        }
    }

    #[test]
    fn test_request_url_joins_path_and_query() {
        let client = HttpEngineClient::new(&settings("http://localhost:9200/")).unwrap();
        let request = TransportRequest::put("_transform/t1").with_query("defer_validation=true");
        assert_eq!(
            client.request_url(&request),
            "http://localhost:9200/_transform/t1?defer_validation=true"
        );
    }

    #[test]
    fn test_request_url_keeps_base_path() {
        let client = HttpEngineClient::new(&settings("https://es.example.com/cluster")).unwrap();
        let request = TransportRequest::post("/_transform/t1/_start");
        assert_eq!(
            client.request_url(&request),
            "https://es.example.com/cluster/_transform/t1/_start"
        );
    }

    #[test]
    fn test_unreachable_engine_is_an_error() {
        // Port 9 (discard) on loopback is not expected to run an HTTP server
        let client = HttpEngineClient::new(&EngineSettings {
            url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
            ..EngineSettings::default()
        })
        .unwrap();
        let err = client
            .transport_request(&TransportRequest::get("_cat/health"))
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::AssetSyncError::EngineUnreachable { .. }
        ));
    }

    #[test]
    fn test_truncated_body_is_reported() {
        use std::io::{Read, Write};
        use std::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = stream.read(&mut chunk).unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..read]);
            }
            // Announces more bytes than it sends, then closes
            stream
                .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\npartial")
                .unwrap();
        });

        let client = HttpEngineClient::new(&settings(&url)).unwrap();
        let response = client
            .transport_request(&TransportRequest::post("_transform/t1/_start"))
            .unwrap();
        server.join().unwrap();

        assert_eq!(response.status, 500);
        assert!(
            response.body.starts_with("<unreadable body:"),
            "got: {}",
            response.body
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_sends_request_to_engine() {
        use wiremock::matchers::{basic_auth, body_string, method, path, query_param};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/_transform/t1"))
            .and(query_param("defer_validation", "true"))
            .and(basic_auth("elastic", "changeme"))
            .and(body_string(r#"{"content": "data"}"#))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"acknowledged":true}"#))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/_transform/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let settings = EngineSettings {
            url: server.uri(),
            username: Some("elastic".to_string()),
            password: Some("changeme".to_string()),
            ..EngineSettings::default()
        };

        // The blocking client must live outside the async runtime
        let (created, missing) = tokio::task::spawn_blocking(move || {
            let client = HttpEngineClient::new(&settings).unwrap();
            let created = client.transport_request(
                &TransportRequest::put("_transform/t1")
                    .with_query("defer_validation=true")
                    .with_body(r#"{"content": "data"}"#),
            );
            let missing = client.transport_request(&TransportRequest::delete("_transform/gone"));
            (created, missing)
        })
        .await
        .unwrap();

        let created = created.unwrap();
        assert_eq!(created.status, 200);
        assert_eq!(created.body, r#"{"acknowledged":true}"#);
        // Non-2xx answers are returned, not turned into errors
        assert_eq!(missing.unwrap().status, 404);
    }
}
