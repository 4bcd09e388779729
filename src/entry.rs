use std::fmt::{self, Display};
use std::hash::Hash;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crate::{Pool, StringBuilder};

/// A builder borrowed from a [`Pool`].
///
/// `Entry` holds a [`StringBuilder`] taken from the pool and a reference to
/// the pool. When the `Entry` is dropped, the builder is reset and returned
/// to the pool.
#[derive(Debug)]
pub struct Entry<'a> {
    // `item` is always `Some` until the entry is dropped or detached.
    pub(crate) item: Option<StringBuilder>,
    pub(crate) pool: &'a Pool,
}

impl PartialEq for Entry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.item.eq(&other.item)
    }
}

impl Eq for Entry<'_> {}

impl Hash for Entry<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.item.hash(state)
    }
}

impl Drop for Entry<'_> {
    fn drop(&mut self) {
        if let Some(item) = self.item.take() {
            self.pool.release(item);
        }
    }
}

impl Deref for Entry<'_> {
    type Target = StringBuilder;
    fn deref(&self) -> &Self::Target {
        self.item.as_ref().unwrap()
    }
}

impl DerefMut for Entry<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.item.as_mut().unwrap()
    }
}

impl Display for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.get(), f)
    }
}

impl fmt::Write for Entry<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Entry<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(self.get(), serializer)
    }
}

impl Entry<'_> {
    /// Get reference to the inner builder.
    pub fn get(&self) -> &StringBuilder {
        self
    }

    /// Get mutable reference to the inner builder.
    pub fn get_mut(&mut self) -> &mut StringBuilder {
        self
    }

    /// Take the builder out without returning it to the pool.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stringpool::Pool;
    ///
    /// let pool = Pool::new();
    /// let mut entry = pool.get();
    /// entry.push_str("kept");
    /// let sb = entry.detach();
    /// assert_eq!(pool.idle(), 0);
    /// assert_eq!(sb.into_string().unwrap(), "kept");
    /// ```
    pub fn detach(mut self) -> StringBuilder {
        self.item.take().unwrap()
    }

    /// Copy the content out as a `String` and return the builder to the pool.
    ///
    /// Invalid UTF-8 is replaced with `U+FFFD`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stringpool::Pool;
    ///
    /// let pool = Pool::new();
    /// let mut entry = pool.get();
    /// entry.push_str("done");
    /// assert_eq!(entry.finish(), "done");
    /// assert_eq!(pool.idle(), 1);
    /// ```
    pub fn finish(self) -> String {
        self.to_string_lossy().into_owned()
    }
}

/// A builder taken from a shared [`Pool`].
///
/// `OwnedEntry` holds a [`StringBuilder`] and an `Arc` reference to the
/// pool, so it is `'static` and can be sent to another thread. When the
/// `OwnedEntry` is dropped, the builder is reset and returned to the pool.
#[derive(Debug)]
pub struct OwnedEntry {
    // `item` is always `Some` until the entry is dropped or detached.
    pub(crate) item: Option<StringBuilder>,
    pub(crate) pool: Arc<Pool>,
}

impl PartialEq for OwnedEntry {
    fn eq(&self, other: &Self) -> bool {
        self.item.eq(&other.item)
    }
}

impl Eq for OwnedEntry {}

impl Hash for OwnedEntry {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.item.hash(state)
    }
}

impl Drop for OwnedEntry {
    fn drop(&mut self) {
        if let Some(item) = self.item.take() {
            self.pool.release(item);
        }
    }
}

impl Deref for OwnedEntry {
    type Target = StringBuilder;
    fn deref(&self) -> &Self::Target {
        self.item.as_ref().unwrap()
    }
}

impl DerefMut for OwnedEntry {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.item.as_mut().unwrap()
    }
}

impl Display for OwnedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.get(), f)
    }
}

impl fmt::Write for OwnedEntry {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for OwnedEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(self.get(), serializer)
    }
}

impl OwnedEntry {
    /// Get reference to the inner builder.
    pub fn get(&self) -> &StringBuilder {
        self
    }

    /// Get mutable reference to the inner builder.
    pub fn get_mut(&mut self) -> &mut StringBuilder {
        self
    }

    /// Get the pool this builder will be returned to.
    pub fn pool(&self) -> &Arc<Pool> {
        &self.pool
    }

    /// Take the builder out without returning it to the pool.
    pub fn detach(mut self) -> StringBuilder {
        self.item.take().unwrap()
    }

    /// Copy the content out as a `String` and return the builder to the pool.
    pub fn finish(self) -> String {
        self.to_string_lossy().into_owned()
    }
}
