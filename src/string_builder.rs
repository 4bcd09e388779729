use std::borrow::Cow;
use std::fmt::{self, Debug, Display};
use std::io;

use crate::error::Result;

/// An append-only, growable text buffer.
///
/// Content is only ever appended until [`reset`](StringBuilder::reset) empties
/// it. Resetting keeps the allocation, which is what makes pooling a builder
/// worthwhile.
///
/// The buffer stores bytes. Text appended through [`push_str`] and
/// [`push_char`] is always valid UTF-8; raw bytes appended through
/// [`push_byte`] or [`push_bytes`] may not be, in which case [`as_str`]
/// returns an error and [`to_string_lossy`] substitutes replacement
/// characters.
///
/// # Example
///
/// ```rust
/// use stringpool::StringBuilder;
///
/// let mut sb = StringBuilder::new();
/// sb.push_str("a");
/// sb.push_char('b');
/// sb.push_byte(b'c');
/// assert_eq!(sb.as_str().unwrap(), "abc");
/// sb.reset();
/// assert!(sb.is_empty());
/// ```
///
/// [`push_str`]: StringBuilder::push_str
/// [`push_char`]: StringBuilder::push_char
/// [`push_byte`]: StringBuilder::push_byte
/// [`push_bytes`]: StringBuilder::push_bytes
/// [`as_str`]: StringBuilder::as_str
/// [`to_string_lossy`]: StringBuilder::to_string_lossy
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct StringBuilder {
    buf: Vec<u8>,
}

impl StringBuilder {
    /// Create an empty builder without allocating.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Create an empty builder with room for at least `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Append a single byte.
    #[inline]
    pub fn push_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Append a string slice.
    #[inline]
    pub fn push_str(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
    }

    /// Append the UTF-8 encoding of a char.
    #[inline]
    pub fn push_char(&mut self, c: char) {
        let mut tmp = [0u8; 4];
        self.buf.extend_from_slice(c.encode_utf8(&mut tmp).as_bytes());
    }

    /// Append raw bytes.
    #[inline]
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Number of bytes accumulated so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been appended since creation or the last reset.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of bytes the builder can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Reserve space for at least `additional` more bytes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stringpool::StringBuilder;
    ///
    /// let mut sb = StringBuilder::new();
    /// sb.grow(64);
    /// assert!(sb.capacity() >= 64);
    /// assert!(sb.is_empty());
    /// ```
    pub fn grow(&mut self, additional: usize) {
        self.buf.reserve(additional);
    }

    /// Discard the content, keeping the allocation.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Shrink the allocation down to `max` bytes if it is larger.
    pub(crate) fn shrink_to(&mut self, max: usize) {
        self.buf.shrink_to(max);
    }

    /// The accumulated bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// The accumulated content as text.
    ///
    /// Fails only if raw bytes that are not valid UTF-8 were appended.
    pub fn as_str(&self) -> Result<&str> {
        Ok(std::str::from_utf8(&self.buf)?)
    }

    /// The accumulated content as text, replacing invalid UTF-8 sequences
    /// with `U+FFFD`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stringpool::StringBuilder;
    ///
    /// let mut sb = StringBuilder::new();
    /// sb.push_str("ok");
    /// sb.push_byte(0xff);
    /// assert_eq!(sb.to_string_lossy(), "ok\u{fffd}");
    /// ```
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.buf)
    }

    /// Consume the builder and return its content as a `String`.
    pub fn into_string(self) -> Result<String> {
        Ok(String::from_utf8(self.buf)?)
    }

    /// Consume the builder and return its raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl Display for StringBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl Debug for StringBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringBuilder")
            .field("content", &self.to_string_lossy())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl fmt::Write for StringBuilder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.push_char(c);
        Ok(())
    }
}

impl io::Write for StringBuilder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.push_bytes(buf);
        Ok(buf.len())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.push_bytes(buf);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> Extend<&'a str> for StringBuilder {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for s in iter {
            self.push_str(s);
        }
    }
}

impl Extend<char> for StringBuilder {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            self.push_char(c);
        }
    }
}

impl From<String> for StringBuilder {
    fn from(s: String) -> Self {
        Self {
            buf: s.into_bytes(),
        }
    }
}

impl From<&str> for StringBuilder {
    fn from(s: &str) -> Self {
        Self {
            buf: s.as_bytes().to_vec(),
        }
    }
}

impl AsRef<[u8]> for StringBuilder {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StringBuilder {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string_lossy())
    }
}
