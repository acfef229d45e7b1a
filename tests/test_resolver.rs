use coho::error::ServerError;
use coho::net::resolver;

#[tokio::test]
async fn test_resolve_literal_address() {
    let addrs = resolver::resolve("127.0.0.1", "8080").await.unwrap();

    assert!(!addrs.is_empty());
    assert_eq!(addrs.first().port(), 8080);
    assert!(addrs.first().ip().is_loopback());
}

#[tokio::test]
async fn test_resolve_localhost() {
    let addrs = resolver::resolve("localhost", "8080").await.unwrap();

    assert!(addrs.len() >= 1);
    for addr in addrs.iter() {
        assert_eq!(addr.port(), 8080);
    }
}

#[tokio::test]
async fn test_resolve_rejects_non_numeric_service() {
    let err = resolver::resolve("127.0.0.1", "http").await.unwrap_err();

    match err {
        ServerError::Resolution { service, reason, .. } => {
            assert_eq!(service, "http");
            assert!(reason.contains("port"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_resolve_rejects_empty_host() {
    let err = resolver::resolve("", "8080").await.unwrap_err();
    assert!(matches!(err, ServerError::Resolution { .. }));
}

#[tokio::test]
async fn test_resolve_rejects_empty_service() {
    let err = resolver::resolve("localhost", "").await.unwrap_err();
    assert!(matches!(err, ServerError::Resolution { .. }));
}
