//! Tests for the record codec
//!
//! These tests verify:
//! - Records survive encode/decode unchanged
//! - Truncated, mis-versioned and tampered values are rejected as corrupt
//! - Cursor decoding keeps order and stops at the first bad value

use inventory::codec::{decode, decode_all, encode, FORMAT_VERSION, HEADER_SIZE};
use inventory::{InventoryError, Server};

// =============================================================================
// Helper Functions
// =============================================================================

fn server(id: &str, fqdn: &str, ip: &str, tags: &[&str]) -> Server {
    Server {
        id: id.to_string(),
        fqdn: fqdn.to_string(),
        ip: ip.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn assert_corrupt(bytes: &[u8]) {
    match decode(bytes) {
        Err(InventoryError::CorruptRecord(_)) => {}
        other => panic!("expected CorruptRecord, got {:?}", other),
    }
}

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_encode_decode_preserves_record() {
    let original = server("id-1", "web01.example.com", "2001:db8::1", &["web", "web", "prod"]);

    let bytes = encode(&original).unwrap();
    let decoded = decode(&bytes).unwrap();

    assert_eq!(decoded, original);
}

#[test]
fn test_encode_decode_preserves_edge_case_records() {
    let many_tags: Vec<String> = (0..500).map(|i| format!("tag-{}", i)).collect();
    let records = vec![
        server("", "", "", &[""]),
        server("ünïcødé-id", "héllo.例え.jp", "::ffff:192.0.2.1", &["🚀", "web", "🚀"]),
        Server {
            id: "x".repeat(4096),
            fqdn: "long.example.com".to_string(),
            ip: "255.255.255.255".to_string(),
            tags: many_tags,
        },
    ];

    for record in records {
        let decoded = decode(&encode(&record).unwrap()).unwrap();
        assert_eq!(decoded, record);
    }
}

#[test]
fn test_encode_decode_preserves_generated_records() {
    for i in 0..200u32 {
        let tags: Vec<String> = (0..(i % 7 + 1)).map(|t| format!("g{}-{}", i % 5, t)).collect();
        let record = Server {
            id: format!("id-{:08x}", i.wrapping_mul(2654435761)),
            fqdn: format!("host{}.{}.example.com", i, "sub.".repeat((i % 4) as usize)),
            ip: if i % 2 == 0 {
                format!("10.{}.{}.{}", i % 256, (i * 7) % 256, (i * 13) % 256)
            } else {
                format!("2001:db8::{:x}", i)
            },
            tags,
        };

        let decoded = decode(&encode(&record).unwrap()).unwrap();
        assert_eq!(decoded, record);
    }
}

#[test]
fn test_encode_writes_header() {
    let bytes = encode(&server("id-1", "a.com", "1.1.1.1", &["web"])).unwrap();

    assert!(bytes.len() > HEADER_SIZE);
    assert_eq!(bytes[0], FORMAT_VERSION);

    let crc = u32::from_be_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]);
    assert_eq!(crc, crc32fast::hash(&bytes[HEADER_SIZE..]));
}

#[test]
fn test_encode_is_stable() {
    let record = server("id-1", "a.com", "1.1.1.1", &["web"]);

    assert_eq!(encode(&record).unwrap(), encode(&record).unwrap());
}

// =============================================================================
// Corruption Tests
// =============================================================================

#[test]
fn test_decode_empty_is_corrupt() {
    assert_corrupt(&[]);
}

#[test]
fn test_decode_truncated_header_is_corrupt() {
    assert_corrupt(&[FORMAT_VERSION, 0, 0]);
}

#[test]
fn test_decode_unknown_version_is_corrupt() {
    let mut bytes = encode(&server("id-1", "a.com", "1.1.1.1", &["web"])).unwrap();
    bytes[0] = 0x7f;

    assert_corrupt(&bytes);
}

#[test]
fn test_decode_flipped_payload_byte_is_corrupt() {
    let mut bytes = encode(&server("id-1", "a.com", "1.1.1.1", &["web"])).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xff;

    assert_corrupt(&bytes);
}

#[test]
fn test_decode_truncated_payload_is_corrupt() {
    let bytes = encode(&server("id-1", "a.com", "1.1.1.1", &["web"])).unwrap();

    assert_corrupt(&bytes[..bytes.len() - 2]);
}

#[test]
fn test_decode_garbage_payload_with_valid_checksum_is_corrupt() {
    let payload = [0xffu8; 3];
    let mut bytes = vec![FORMAT_VERSION];
    bytes.extend_from_slice(&crc32fast::hash(&payload).to_be_bytes());
    bytes.extend_from_slice(&payload);

    assert_corrupt(&bytes);
}

// =============================================================================
// Cursor Decoding Tests
// =============================================================================

#[test]
fn test_decode_all_keeps_cursor_order() {
    let a = server("a", "a.com", "1.1.1.1", &["web"]);
    let b = server("b", "b.com", "2.2.2.2", &["db"]);
    let values = vec![Ok(encode(&a).unwrap()), Ok(encode(&b).unwrap())];

    let decoded = decode_all(values).unwrap();

    assert_eq!(decoded, vec![a, b]);
}

#[test]
fn test_decode_all_empty_cursor() {
    let values: Vec<inventory::Result<Vec<u8>>> = Vec::new();

    assert!(decode_all(values).unwrap().is_empty());
}

#[test]
fn test_decode_all_fails_on_corrupt_value() {
    let good = encode(&server("a", "a.com", "1.1.1.1", &["web"])).unwrap();
    let values = vec![Ok(good), Ok(vec![1u8, 2, 3])];

    assert!(matches!(
        decode_all(values),
        Err(InventoryError::CorruptRecord(_))
    ));
}

#[test]
fn test_decode_all_propagates_cursor_error() {
    let values: Vec<inventory::Result<Vec<u8>>> =
        vec![Err(InventoryError::Storage("cursor broke".to_string()))];

    assert!(matches!(decode_all(values), Err(InventoryError::Storage(_))));
}
