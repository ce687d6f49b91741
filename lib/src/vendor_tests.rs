use super::*;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

#[test]
fn lookup_key_strips_separators_and_uppercases() {
    let key = lookup_key(MacAddr::new(0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0x01));
    assert_eq!(key, "AABBCCDDEE01");
}

#[test]
fn returns_response_body_as_vendor_name() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    // single-shot server that captures the request line and answers 200
    let server = thread::spawn(move || -> String {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 1024];
        let n = stream.read(&mut buf).unwrap();

        let body = "Acme Corp";
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();

        String::from_utf8_lossy(&buf[..n]).to_string()
    });

    let client = MacVendorsClient::with_base_url(format!("http://{}", addr));

    let vendor =
        client.resolve(MacAddr::new(0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0x01));

    let request = server.join().unwrap();

    assert!(request.starts_with("GET /AABBCCDDEE01 "));
    assert_eq!(vendor, "Acme Corp");
}

#[test]
fn unreachable_endpoint_resolves_to_unknown() {
    let client =
        MacVendorsClient::with_base_url("http://127.0.0.1:9".to_string());

    let vendor =
        client.resolve(MacAddr::new(0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0x01));

    assert_eq!(vendor, UNKNOWN_VENDOR);
}

#[test]
fn malformed_endpoint_resolves_to_unknown() {
    let client = MacVendorsClient::with_base_url("not a url".to_string());

    let vendor = client.resolve(MacAddr::default());

    assert_eq!(vendor, UNKNOWN_VENDOR);
}
