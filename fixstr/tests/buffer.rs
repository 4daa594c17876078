use std::fmt::Write as _;

use fixstr::{
    buffer::{FixedStr, StrBuf},
    error::Error,
};

#[test]
fn buf_str_test() {
    let mut buf = [0; 1024];
    let mut buf = StrBuf::new(&mut buf);
    assert!(buf.is_empty());
    assert_eq!(buf.to_str().unwrap(), "");

    write!(buf, "{:08x}", 0x4928).unwrap();
    assert_eq!(buf.to_str().unwrap(), "00004928");

    writeln!(buf, "Hello World!").unwrap();
    assert_eq!(buf.to_str().unwrap(), "00004928Hello World!\n");

    let mut buf = [0; 2];
    let mut buf = StrBuf::new(&mut buf);

    write!(buf, "a").unwrap();
    assert_eq!(buf.to_str().unwrap(), "a");

    assert!(write!(buf, "b").is_err());
    assert_eq!(buf.to_str().unwrap(), "a");

    let mut buf = [0; 2];
    let mut buf = StrBuf::new(&mut buf);

    assert!(write!(buf, "cd").is_err());
    assert_eq!(buf.to_str().unwrap(), "c");
}

#[test]
fn str_buf_keeps_existing_content() {
    let mut raw = *b"ab\0zz";
    let mut buf = StrBuf::new(&mut raw);
    assert_eq!(buf.len(), 2);
    assert_eq!(buf.capacity(), 5);

    assert_eq!(buf.append("c"), Ok(3));
    assert_eq!(buf.as_bytes(), b"abc");
    assert_eq!(buf.as_bytes_with_nul(), b"abc\0");
    assert_eq!(raw, *b"abc\0z");
}

#[test]
fn str_buf_empty_clears() {
    let mut raw = *b"abc\0";
    let buf = StrBuf::empty(&mut raw);
    assert!(buf.is_empty());
    assert_eq!(buf.as_bytes_with_nul(), b"\0");
}

#[test]
fn str_buf_operations() {
    let mut raw = [0xff; 8];
    let mut buf = StrBuf::new(&mut raw);

    assert_eq!(buf.copy("abc"), Ok(3));
    assert_eq!(buf.append_multi(&["de", "f"]), Ok(6));
    assert_eq!(buf.to_str().unwrap(), "abcdef");

    assert_eq!(buf.copy_multi(&["12", "34"]), Ok(4));
    assert_eq!(buf.append_with_length("5678", 2), Ok(6));
    assert_eq!(buf.to_str().unwrap(), "123456");

    assert_eq!(buf.copy_with_length("xyz", 1), Ok(1));
    assert_eq!(buf.to_str().unwrap(), "x");

    assert_eq!(buf.append("0123456789"), Err(Error::Truncated));
    assert_eq!(buf.to_str().unwrap(), "x012345");
    assert_eq!(buf.len(), buf.capacity() - 1);
}

#[test]
fn str_buf_unterminated_input() {
    let mut raw = *b"abcd";
    let mut buf = StrBuf::new(&mut raw);
    assert_eq!(buf.len(), 4);
    assert_eq!(buf.as_bytes_with_nul(), b"abcd");

    assert_eq!(buf.append(""), Err(Error::Truncated));
    assert_eq!(buf.as_bytes_with_nul(), b"abc\0");
}

#[test]
fn zero_capacity() {
    let mut raw: [u8; 0] = [];
    let mut buf = StrBuf::new(&mut raw);
    assert_eq!(buf.capacity(), 0);
    assert!(buf.is_empty());
    assert_eq!(buf.as_bytes_with_nul(), b"");
    assert_eq!(buf.append("a"), Err(Error::InvalidTarget));
    assert!(write!(buf, "a").is_err());

    let mut s = FixedStr::<0>::new();
    assert_eq!(s.copy("a"), Err(Error::InvalidTarget));
    assert_eq!(s.as_bytes_with_nul(), b"");
}

#[test]
fn fixed_str_basics() {
    let mut s = FixedStr::<6>::new();
    assert_eq!(s.capacity(), 6);
    assert!(s.is_empty());

    assert_eq!(s.copy("ab"), Ok(2));
    assert_eq!(s.append("cde"), Ok(5));
    assert_eq!(s, "abcde");
    assert_eq!(s.as_bytes_with_nul(), b"abcde\0");

    assert_eq!(s.append("f"), Err(Error::Truncated));
    assert_eq!(s, "abcde");

    s.clear();
    assert!(s.is_empty());
    assert_eq!(s, FixedStr::<6>::default());
}

#[test]
fn fixed_str_format() {
    let mut s = FixedStr::<16>::new();
    write!(s, "{}-{:03}", "id", 7).unwrap();
    assert_eq!(s, "id-007");
    assert_eq!(format!("{}", s), "id-007");
    assert_eq!(format!("{:?}", s), "FixedStr { buf: \"id-007\" }");

    let mut s = FixedStr::<4>::new();
    assert!(write!(s, "{}", 123456).is_err());
    assert_eq!(s, "123");
}

#[test]
fn fixed_str_invalid_utf8() {
    let mut s = FixedStr::<8>::new();
    s.copy(&[b'a', 0xff, b'b'][..]).unwrap();
    assert!(s.to_str().is_err());
    assert_eq!(format!("{}", s), "a\u{fffd}b");
    assert_eq!(format!("{:?}", s), "FixedStr { buf: \"a\\xffb\" }");
}

#[test]
fn fixed_str_compares_content_only() {
    let mut a = FixedStr::<8>::new();
    let mut b = FixedStr::<8>::new();
    a.copy("longer").unwrap();
    a.copy("ab").unwrap();
    b.copy("ab").unwrap();
    assert_eq!(a, b);

    let mut c = FixedStr::<3>::new();
    c.copy("ab").unwrap();
    assert_eq!(a, c);

    use std::collections::HashSet;
    let set: HashSet<_> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn buffers_as_sources() {
    let mut name = FixedStr::<8>::new();
    name.copy("world").unwrap();

    let mut s = FixedStr::<16>::new();
    s.copy("hello ").unwrap();
    s.append(&name).unwrap();
    assert_eq!(s, "hello world");

    let mut raw = [0; 4];
    let mut view = StrBuf::new(&mut raw);
    assert_eq!(view.copy(&s), Err(Error::Truncated));
    assert_eq!(view.to_str().unwrap(), "hel");
}

#[test]
fn as_buf_writes_through() {
    let mut s = FixedStr::<8>::new();
    {
        let mut buf = s.as_buf();
        write!(buf, "{}", 42).unwrap();
    }
    assert_eq!(s, "42");
    assert_eq!(s.clone(), "42");
}
