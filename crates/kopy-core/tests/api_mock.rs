//! Client tests against a local mock of the documents API.
//!
//! Each test binds a listener on a random loopback port, serves exactly
//! one canned response from a thread, and hands the captured request back
//! for assertions.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use kopy_core::{Client, Config, KopyError, Security};

const REFERENCE_BLOB: &str = "U2FsdGVkX1/XnDGaEACaoTEhm7YsBicuJNgLrFSMKe0=";

struct MockServer {
    base_url: String,
    handle: thread::JoinHandle<String>,
}

impl MockServer {
    /// Serve one request with the given status line, content type, and body.
    fn serve(status: &str, content_type: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
        let port = listener.local_addr().unwrap().port();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            content_type,
            body.len(),
            body
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let request = read_request(&mut stream);
            stream.write_all(response.as_bytes()).expect("write response");
            request
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            handle,
        }
    }

    fn client(&self) -> Client {
        Client::new(&Config {
            base_url: self.base_url.clone(),
            ..Config::default()
        })
        .expect("client builds")
    }

    /// The full request (headers + body) the server saw.
    fn request(self) -> String {
        self.handle.join().expect("server thread")
    }
}

/// Read headers plus a Content-Length body off the stream.
fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).expect("read headers");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        assert!(n > 0, "connection closed before headers completed");
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).expect("read body");
        assert!(n > 0, "connection closed before body completed");
        buf.extend_from_slice(&chunk[..n]);
    }

    String::from_utf8_lossy(&buf).to_string()
}

#[test]
fn create_plaintext_document() {
    let server = MockServer::serve("200 OK", "application/json", r#"{"key":"abc123"}"#);
    let client = server.client();

    let key = client
        .create_document("hello world", None, 600)
        .expect("create succeeds");
    assert_eq!(key, "abc123");

    let request = server.request();
    assert!(request.starts_with("POST /documents HTTP/1.1"));
    assert!(request.contains("security=default"));
    assert!(request.contains("keep=600"));
    assert!(request.contains("hello"));
}

#[test]
fn create_encrypted_document_sends_blob_not_plaintext() {
    let server = MockServer::serve("200 OK", "application/json", r#"{"key":"abc123"}"#);
    let client = server.client();

    let key = client
        .create_document("attack at dawn", Some("9ACJQzDPFiVJXC"), 600)
        .expect("create succeeds");
    assert_eq!(key, "abc123");

    let request = server.request();
    assert!(request.contains("security=encrypted"));
    assert!(!request.contains("attack"));
    // Form body carries base64, percent-encoded; the Salted__ prefix
    // always encodes to U2FsdGVkX1.
    assert!(request.contains("U2FsdGVkX1"));
}

#[test]
fn create_response_without_key_is_rejected() {
    let server = MockServer::serve("200 OK", "application/json", r#"{"unexpected":true}"#);
    let client = server.client();

    let result = client.create_document("hello", None, 600);
    assert!(matches!(result, Err(KopyError::InvalidDocument(_))));
    server.request();
}

#[test]
fn retrieve_plaintext_document() {
    let server = MockServer::serve(
        "200 OK",
        "application/json",
        r#"{"data":"hello world","security":"default"}"#,
    );
    let client = server.client();

    let document = client
        .retrieve_document("abc123", None)
        .expect("retrieve succeeds");
    assert_eq!(document.data, "hello world");
    assert_eq!(document.security, Security::Default);

    let request = server.request();
    assert!(request.starts_with("GET /documents/abc123 HTTP/1.1"));
}

#[test]
fn retrieve_encrypted_document_decrypts() {
    let body = format!(r#"{{"data":"{}","security":"encrypted"}}"#, REFERENCE_BLOB);
    let server = MockServer::serve("200 OK", "application/json", &body);
    let client = server.client();

    let document = client
        .retrieve_document("abc123", Some("9ACJQzDPFiVJXC"))
        .expect("retrieve succeeds");
    assert_eq!(document.data, "attack at dawn");
    assert_eq!(document.security, Security::Encrypted);
    server.request();
}

#[test]
fn retrieve_encrypted_without_passphrase() {
    let body = format!(r#"{{"data":"{}","security":"encrypted"}}"#, REFERENCE_BLOB);
    let server = MockServer::serve("200 OK", "application/json", &body);
    let client = server.client();

    let result = client.retrieve_document("abc123", None);
    assert!(matches!(result, Err(KopyError::PassphraseRequired)));
    server.request();
}

#[test]
fn retrieve_missing_document() {
    let server = MockServer::serve(
        "404 Not Found",
        "application/json",
        r#"{"message":"Document not found."}"#,
    );
    let client = server.client();

    let result = client.retrieve_document("gone", None);
    assert!(matches!(result, Err(KopyError::DocumentNotFound)));
    server.request();
}

#[test]
fn retrieve_unknown_scheme() {
    let server = MockServer::serve(
        "200 OK",
        "application/json",
        r#"{"data":"x","security":"rot13"}"#,
    );
    let client = server.client();

    let result = client.retrieve_document("abc123", None);
    assert!(matches!(result, Err(KopyError::UnknownScheme(scheme)) if scheme == "rot13"));
    server.request();
}

#[test]
fn retrieve_rejects_non_json_response() {
    let server = MockServer::serve("200 OK", "text/html", "<html>maintenance</html>");
    let client = server.client();

    let result = client.retrieve_document("abc123", None);
    assert!(matches!(result, Err(KopyError::InvalidDocument(_))));
    server.request();
}
