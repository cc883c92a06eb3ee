use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dropctl_api::{DropletCreateImage, DropletCreateRequest, DropletCreateSshKey};
use dropctl_client::droplet::{create_droplet, delete_droplet, find_droplet};
use dropctl_client::{ClientError, DropletApi, DropletTemplate, HttpClient, StaticTokenSource};

const TOKEN: &str = "dop_v1_test";

fn client(server: &MockServer) -> HttpClient {
    HttpClient::builder(StaticTokenSource::new(TOKEN))
        .base_url(server.uri())
        .build()
        .unwrap()
}

fn droplet_json(id: u64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "memory": 1024,
        "vcpus": 1,
        "disk": 25,
        "status": "active",
        "region": {"slug": "nyc3", "name": "New York 3", "available": true},
        "size_slug": "s-1vcpu-1gb",
        "image": {"id": 1, "name": "18.04 (LTS) x64", "slug": "ubuntu-18-04-x64", "distribution": "Ubuntu"},
        "networks": {"v4": [], "v6": []},
        "tags": [],
        "created_at": "2020-07-21T18:37:44Z"
    })
}

#[tokio::test]
async fn test_list_droplets_sends_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .and(header("Authorization", "Bearer dop_v1_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "droplets": [droplet_json(1, "a"), droplet_json(2, "super-cool-droplet")],
            "links": {},
            "meta": {"total": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let droplets = client(&server).list_droplets().await.unwrap();
    assert_eq!(droplets.len(), 2);
    assert_eq!(droplets[1].name, "super-cool-droplet");
}

#[tokio::test]
async fn test_find_droplet_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "droplets": [
                droplet_json(1, "a"),
                droplet_json(2, "super-cool-droplet"),
                droplet_json(3, "b")
            ]
        })))
        .mount(&server)
        .await;

    let found = find_droplet(&client(&server), "super-cool-droplet")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, 2);
}

#[tokio::test]
async fn test_list_keys() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/account/keys"))
        .and(header("Authorization", "Bearer dop_v1_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ssh_keys": [
                {"id": 512189, "fingerprint": "3b:16:bf", "public_key": "ssh-rsa AAAA", "name": "laptop"}
            ],
            "links": {},
            "meta": {"total": 1}
        })))
        .mount(&server)
        .await;

    let keys = client(&server).list_keys().await.unwrap();
    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0].fingerprint, "3b:16:bf");
}

#[tokio::test]
async fn test_create_droplet_posts_request_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/droplets"))
        .and(header("Authorization", "Bearer dop_v1_test"))
        .and(body_json(json!({
            "name": "super-cool-droplet",
            "region": "nyc3",
            "size": "s-1vcpu-1gb",
            "image": "ubuntu-18-04-x64",
            "ssh_keys": [512189]
        })))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_json(json!({"droplet": droplet_json(42, "super-cool-droplet")})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = DropletCreateRequest {
        name: "super-cool-droplet".to_string(),
        region: "nyc3".to_string(),
        size: "s-1vcpu-1gb".to_string(),
        image: DropletCreateImage::slug("ubuntu-18-04-x64"),
        ssh_keys: vec![DropletCreateSshKey {
            id: 512_189,
            fingerprint: "3b:16:bf".to_string(),
        }],
        tags: vec![],
    };

    let droplet = client(&server).create_droplet(&request).await.unwrap();
    assert_eq!(droplet.id, 42);
}

#[tokio::test]
async fn test_delete_droplet_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "droplets": [droplet_json(7, "doomed")]
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v2/droplets/7"))
        .and(header("Authorization", "Bearer dop_v1_test"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let deleted = delete_droplet(&client(&server), "doomed").await.unwrap();
    assert_eq!(deleted.id, 7);
}

#[tokio::test]
async fn test_delete_missing_droplet_issues_no_delete() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"droplets": []})))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let err = delete_droplet(&client(&server), "x").await.unwrap_err();
    assert!(matches!(err, ClientError::DropletNotFound { .. }));
}

#[tokio::test]
async fn test_api_error_uses_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "id": "unauthorized",
            "message": "Unable to authenticate you."
        })))
        .mount(&server)
        .await;

    let err = client(&server).list_droplets().await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Unable to authenticate you.");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_api_error_with_plain_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/account/keys"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = client(&server).list_keys().await.unwrap_err();
    assert!(
        matches!(err, ClientError::Api { status: 503, ref message } if message == "upstream unavailable")
    );
}

#[tokio::test]
async fn test_create_droplet_attaches_listed_keys() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/account/keys"))
        .and(header("Authorization", "Bearer dop_v1_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ssh_keys": [
                {"id": 512189, "fingerprint": "3b:16:bf", "public_key": "ssh-rsa AAAA", "name": "laptop"},
                {"id": 0, "fingerprint": "aa:bb:cc", "public_key": "ssh-ed25519 AAAA", "name": "ci"}
            ],
            "links": {},
            "meta": {"total": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/droplets"))
        .and(header("Authorization", "Bearer dop_v1_test"))
        .and(body_json(json!({
            "name": "x",
            "region": "nyc3",
            "size": "s-1vcpu-1gb",
            "image": "ubuntu-18-04-x64",
            "ssh_keys": [512189, "aa:bb:cc"]
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"droplet": droplet_json(43, "x")})))
        .expect(1)
        .mount(&server)
        .await;

    let created = create_droplet(&client(&server), "x", &DropletTemplate::default())
        .await
        .unwrap();
    assert_eq!(created.id, 43);
    assert_eq!(created.name, "x");
}

#[tokio::test]
async fn test_malformed_body_is_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server).list_droplets().await.unwrap_err();
    assert!(matches!(err, ClientError::Json(_)), "unexpected error: {err}");
}

#[tokio::test]
async fn test_api_error_with_empty_body_uses_status_reason() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = client(&server).list_droplets().await.unwrap_err();
    assert!(
        matches!(err, ClientError::Api { status: 502, ref message } if message == "Bad Gateway")
    );
}
