//! Admin API tests against a real listener
//!
//! Requests are written as raw HTTP/1.1 so the `Host` header is fully under
//! the test's control.

mod common;

use common::{CORRUPTED_RECIPE, PERFECT_RECIPE, RECIPE_WITHOUT_EXCERPT, TestContent};
use frontmatter_seo::server::{self, AppState};
use serde_json::{Value, json};
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    async fn start(content: &TestContent, dev_mode: bool) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();
        let state = AppState::new(content.content_root(), dev_mode);
        tokio::spawn(async move {
            server::serve_on(listener, state, async {
                let _ = rx.await;
            })
            .await
            .unwrap();
        });
        Self {
            addr,
            shutdown: Some(tx),
        }
    }

    async fn request(&self, method: &str, path: &str, host: &str, body: Option<&str>) -> (u16, Value) {
        let mut stream = TcpStream::connect(self.addr).await.unwrap();
        let body = body.unwrap_or("");
        let request = format!(
            "{method} {path} HTTP/1.1\r\nHost: {host}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut raw = Vec::new();
        stream.read_to_end(&mut raw).await.unwrap();
        let raw = String::from_utf8(raw).unwrap();

        let status: u16 = raw
            .split_whitespace()
            .nth(1)
            .and_then(|code| code.parse().ok())
            .unwrap_or_else(|| panic!("no status line in response:\n{raw}"));
        let (head, payload) = raw
            .split_once("\r\n\r\n")
            .unwrap_or_else(|| panic!("no header terminator in response:\n{raw}"));
        let payload = if head.to_ascii_lowercase().contains("transfer-encoding: chunked") {
            dechunk(payload)
        } else {
            payload.to_string()
        };
        let json = serde_json::from_str(&payload).unwrap_or(Value::Null);
        (status, json)
    }

    async fn get(&self, path: &str) -> (u16, Value) {
        self.request("GET", path, &format!("localhost:{}", self.addr.port()), None)
            .await
    }

    async fn put(&self, path: &str, body: &Value) -> (u16, Value) {
        let body = body.to_string();
        self.request(
            "PUT",
            path,
            &format!("127.0.0.1:{}", self.addr.port()),
            Some(&body),
        )
        .await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

fn dechunk(payload: &str) -> String {
    let mut out = String::new();
    let mut rest = payload;
    while let Some((size_line, tail)) = rest.split_once("\r\n") {
        let size = usize::from_str_radix(size_line.trim(), 16).unwrap_or(0);
        if size == 0 {
            break;
        }
        out.push_str(&tail[..size]);
        rest = tail[size..].trim_start_matches("\r\n");
    }
    out
}

#[tokio::test]
async fn test_listing() {
    let content = TestContent::new();
    content.write_doc("recipes/pancakes.mdx", PERFECT_RECIPE);
    content.write_doc("articles/tomato-soup.mdx", RECIPE_WITHOUT_EXCERPT);
    content.write_doc("posts/lemon-cake.mdx", CORRUPTED_RECIPE);
    let server = TestServer::start(&content, false).await;

    let (status, json) = server.get("/api/admin/seo").await;
    assert_eq!(status, 200);
    assert_eq!(
        json["summary"],
        json!({ "total": 3, "perfect": 1, "withIssues": 2, "withWarnings": 0 })
    );
    let documents = json["documents"].as_array().unwrap();
    assert_eq!(documents[0]["path"], "recipes/pancakes.mdx");
    assert_eq!(documents[1]["issues"], json!(["missing-excerpt"]));
    assert_eq!(documents[2]["issues"], json!(["parse-error"]));
    assert!(documents[2]["error"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn test_get_document() {
    let content = TestContent::new();
    content.write_doc("articles/pancakes.mdx", PERFECT_RECIPE);
    let server = TestServer::start(&content, false).await;

    let (status, json) = server.get("/api/admin/content/pancakes").await;
    assert_eq!(status, 200);
    assert_eq!(json["slug"], "pancakes");
    assert_eq!(json["directory"], "articles");
    assert_eq!(json["path"], "articles/pancakes.mdx");
    assert_eq!(json["repaired"], false);
    assert_eq!(json["frontmatter"]["publishedAt"], "2024-03-01T10:00:00.000Z");
    assert_eq!(json["frontmatter"]["heroImage"]["alt"], "A stack of pancakes");
    assert!(json["content"].as_str().unwrap().starts_with("# Classic"));
}

#[tokio::test]
async fn test_get_repairs_in_memory() {
    let content = TestContent::new();
    content.write_doc("recipes/lemon-cake.mdx", CORRUPTED_RECIPE);
    let server = TestServer::start(&content, false).await;

    let (status, json) = server.get("/api/admin/content/lemon-cake").await;
    assert_eq!(status, 200);
    assert_eq!(json["repaired"], true);
    assert_eq!(json["frontmatter"]["title"], "Lemon Drizzle Cake with Sugar Glaze");
    assert_eq!(content.read_doc("recipes/lemon-cake.mdx"), CORRUPTED_RECIPE);
}

#[tokio::test]
async fn test_get_errors() {
    let content = TestContent::new();
    content.write_doc("recipes/raw.mdx", "no header\n");
    let server = TestServer::start(&content, false).await;

    let (status, json) = server.get("/api/admin/content/missing").await;
    assert_eq!(status, 404);
    assert_eq!(json["code"], "frontmatter_seo::content::not_found");
    assert!(json.get("details").is_none());

    let (status, _) = server.get("/api/admin/content/..%2Fsecret").await;
    assert_eq!(status, 400);

    let (status, json) = server.get("/api/admin/content/raw").await;
    assert_eq!(status, 422);
    assert!(json["error"].as_str().unwrap().contains("Malformed"));
}

#[tokio::test]
async fn test_dev_mode_includes_details() {
    let content = TestContent::new();
    let server = TestServer::start(&content, true).await;

    let (status, json) = server.get("/api/admin/content/missing").await;
    assert_eq!(status, 404);
    assert!(json["details"].as_str().unwrap().contains("DocumentNotFound"));
}

#[tokio::test]
async fn test_put_replaces_document() {
    let content = TestContent::new();
    content.write_doc("recipes/tomato-soup.mdx", RECIPE_WITHOUT_EXCERPT);
    let server = TestServer::start(&content, false).await;

    let body = json!({
        "frontmatter": {
            "title": "Tomato Soup",
            "publishedAt": "2024-01-10",
            "tags": ["soup", "vegetarian"],
            "draft": null
        },
        "content": "# Tomato Soup\n"
    });
    let (status, json) = server.put("/api/admin/content/tomato-soup", &body).await;
    assert_eq!(status, 200);
    assert_eq!(
        json,
        json!({ "success": true, "slug": "tomato-soup", "path": "recipes/tomato-soup.mdx" })
    );

    let text = content.read_doc("recipes/tomato-soup.mdx");
    assert_eq!(
        text,
        "---\ntitle: \"Tomato Soup\"\npublishedAt: \"2024-01-10\"\ntags:\n  - \"soup\"\n  - \"vegetarian\"\n---\n\n# Tomato Soup\n"
    );
}

#[tokio::test]
async fn test_put_without_content_keeps_body() {
    let content = TestContent::new();
    content.write_doc("recipes/pancakes.mdx", PERFECT_RECIPE);
    let server = TestServer::start(&content, false).await;

    let body = json!({ "frontmatter": { "title": "Pancakes" } });
    let (status, _) = server.put("/api/admin/content/pancakes", &body).await;
    assert_eq!(status, 200);

    let text = content.read_doc("recipes/pancakes.mdx");
    let original_body = frontmatter_seo::frontmatter::body_of(PERFECT_RECIPE);
    assert!(text.ends_with(original_body));
    assert!(text.starts_with("---\ntitle: \"Pancakes\"\n---\n"));
}

#[tokio::test]
async fn test_put_rejects_bad_requests() {
    let content = TestContent::new();
    content.write_doc("recipes/pancakes.mdx", PERFECT_RECIPE);
    let server = TestServer::start(&content, false).await;

    let (status, json) = server
        .put("/api/admin/content/pancakes", &json!({ "frontmatter": ["not", "a", "map"] }))
        .await;
    assert_eq!(status, 400);
    assert_eq!(json["code"], "frontmatter_seo::server::invalid_request");

    let (status, _) = server
        .put("/api/admin/content/pancakes", &json!({ "content": "no header" }))
        .await;
    assert_eq!(status, 400);

    let (status, _) = server
        .put("/api/admin/content/unknown", &json!({ "frontmatter": {} }))
        .await;
    assert_eq!(status, 404);

    assert_eq!(content.read_doc("recipes/pancakes.mdx"), PERFECT_RECIPE);
}

#[tokio::test]
async fn test_foreign_host_is_rejected_before_file_access() {
    let content = TestContent::new();
    content.write_doc("recipes/pancakes.mdx", PERFECT_RECIPE);
    let server = TestServer::start(&content, false).await;

    for host in ["example.com", "10.0.0.5:4321", "localhost.evil.test"] {
        let (status, json) = server.request("GET", "/api/admin/seo", host, None).await;
        assert_eq!(status, 403, "host {host}");
        assert_eq!(
            json,
            json!({ "error": "Admin API is only available on localhost" })
        );
    }

    let body = json!({ "frontmatter": { "title": "Hijacked" } }).to_string();
    let (status, _) = server
        .request("PUT", "/api/admin/content/pancakes", "example.com", Some(&body))
        .await;
    assert_eq!(status, 403);
    assert_eq!(content.read_doc("recipes/pancakes.mdx"), PERFECT_RECIPE);
}

#[tokio::test]
async fn test_loopback_host_variants_are_allowed() {
    let content = TestContent::new();
    let server = TestServer::start(&content, false).await;

    for host in ["localhost", "admin.localhost:4321", "127.0.0.1", "[::1]:4321"] {
        let (status, _) = server.request("GET", "/api/admin/seo", host, None).await;
        assert_eq!(status, 200, "host {host}");
    }
}
