use stringpool::{Error, StringBuilder};

#[test]
fn appends_in_order() {
    let mut sb = StringBuilder::new();
    sb.push_byte(b'a');
    sb.push_str("bc");
    sb.push_char('d');
    sb.push_bytes(b"ef");
    assert_eq!(sb.as_str().unwrap(), "abcdef");
    assert_eq!(sb.len(), 6);
    assert_eq!(sb.to_string(), "abcdef");
}

#[test]
fn multibyte_chars() {
    let mut sb = StringBuilder::new();
    sb.push_char('é');
    sb.push_char('😀');
    sb.extend(["ü", "ß"]);
    sb.extend("ñ".chars());
    assert_eq!(sb.as_str().unwrap(), "é😀üßñ");
    assert_eq!(sb.len(), "é😀üßñ".len());
}

#[test]
fn reset_keeps_capacity() {
    let mut sb = StringBuilder::with_capacity(32);
    sb.push_str("some text");
    let capacity = sb.capacity();
    sb.reset();
    assert!(sb.is_empty());
    assert_eq!(sb.len(), 0);
    assert_eq!(sb.as_str().unwrap(), "");
    assert_eq!(sb.capacity(), capacity);
}

#[test]
fn grow_reserves() {
    let mut sb = StringBuilder::new();
    assert_eq!(sb.capacity(), 0);
    sb.grow(100);
    assert!(sb.capacity() >= 100);
    assert!(sb.is_empty());
}

#[test]
fn raw_bytes_not_utf8() {
    let mut sb = StringBuilder::new();
    for b in 0..=255u8 {
        sb.push_byte(b);
    }
    assert_eq!(sb.len(), 256);
    assert_eq!(sb.as_bytes()[200], 200);
    assert!(matches!(sb.as_str(), Err(Error::InvalidUtf8(_))));
    assert!(sb.to_string_lossy().contains('\u{fffd}'));
    assert!(matches!(sb.into_string(), Err(Error::InvalidUtf8(_))));
}

#[test]
fn fmt_write() {
    use std::fmt::Write;

    let mut sb = StringBuilder::new();
    write!(sb, "{} + {:?}", 1, "one").unwrap();
    assert_eq!(sb.as_str().unwrap(), "1 + \"one\"");
}

#[test]
fn io_write() {
    use std::io::Write;

    let mut sb = StringBuilder::new();
    sb.write_all(b"io ").unwrap();
    assert_eq!(sb.write(b"bytes").unwrap(), 5);
    sb.flush().unwrap();
    assert_eq!(sb.into_bytes(), b"io bytes".to_vec());
}

#[test]
fn conversions() {
    let sb = StringBuilder::from(String::from("owned"));
    assert_eq!(sb.clone().into_string().unwrap(), "owned");
    assert_eq!(sb, StringBuilder::from("owned"));
    assert_eq!(sb.as_bytes(), b"owned");
}

#[test]
fn debug_shows_content() {
    let sb = StringBuilder::from("dbg");
    let debug = format!("{sb:?}");
    assert!(debug.starts_with("StringBuilder"));
    assert!(debug.contains("\"dbg\""));
}

#[cfg(feature = "serde")]
#[test]
fn serializes_as_string() {
    let sb = StringBuilder::from("json");
    assert_eq!(serde_json::to_string(&sb).unwrap(), "\"json\"");
}
