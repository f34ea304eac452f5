use super::*;

#[test]
fn stores_bytes_verbatim() {
    let line = SourceLine::new("echo \u{1F600}\n");
    assert_eq!(line.as_bytes(), "echo \u{1F600}\n".as_bytes());
    assert_eq!(line.len(), 10);
    assert!(!line.is_empty());
}

#[test]
fn empty_line() {
    let line = SourceLine::new("");
    assert!(line.is_empty());
    assert_eq!(line.len(), 0);
    assert_eq!(line.nul_positions().count(), 0);
}

#[test]
fn conversions_agree() {
    let a = SourceLine::from("ls -l");
    let b = SourceLine::from(String::from("ls -l"));
    let c = SourceLine::from(b"ls -l".as_slice());
    let d = SourceLine::from(b"ls -l".to_vec());
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(c, d);
}

#[test]
fn clones_share_storage() {
    let a = SourceLine::new("x");
    let b = a.clone();
    assert!(std::ptr::eq(a.as_bytes(), b.as_bytes()));
}

#[test]
fn slice_by_span() {
    let line = SourceLine::new("echo hi");
    assert_eq!(line.slice(Span::new(5, 7)), Some(b"hi".as_slice()));
    assert_eq!(line.slice(Span::new(7, 7)), Some(b"".as_slice()));
    assert_eq!(line.slice(Span::new(5, 9)), None);
}

#[test]
fn finds_interior_nuls() {
    let line = SourceLine::from_bytes(b"a\0b\0");
    assert_eq!(line.nul_positions().collect::<Vec<_>>(), vec![1, 3]);
    assert!(line.has_nul());
    assert!(!SourceLine::new("abc").has_nul());
}

#[test]
fn debug_shows_text() {
    assert_eq!(format!("{:?}", SourceLine::new("ls")), "SourceLine(\"ls\")");
}
