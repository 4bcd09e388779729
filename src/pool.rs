use std::sync::Arc;

use crossbeam_queue::SegQueue;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::{Entry, OwnedEntry, StringBuilder};

/// A concurrent pool of reusable [`StringBuilder`]s.
///
/// The pool is an unbounded, unordered free list. [`acquire`](Pool::acquire)
/// hands out an idle builder or creates a fresh one when none is idle, and
/// [`release`](Pool::release) resets a builder and keeps it for the next
/// caller. Both are lock-free and never block.
///
/// # Examples
///
/// ```rust
/// use stringpool::Pool;
/// use std::sync::{Arc, mpsc};
///
/// let pool = Arc::new(Pool::new());
///
/// let (tx, rx) = mpsc::channel();
/// let clone_pool = pool.clone();
/// let tx1 = tx.clone();
/// let sender1 = std::thread::spawn(move || {
///     let mut sb = clone_pool.get_owned();
///     sb.push_str("1");
///     tx1.send((1, sb)).unwrap();
/// });
///
/// let clone_pool = pool.clone();
/// let sender2 = std::thread::spawn(move || {
///     let mut sb = clone_pool.get_owned();
///     sb.push_str("2");
///     tx.send((2, sb)).unwrap();
/// });
///
/// let receiver = std::thread::spawn(move || {
///     for _ in 0..2 {
///         let (id, sb) = rx.recv().unwrap();
///         assert_eq!(sb.as_str().unwrap(), id.to_string());
///     }
/// });
///
/// sender1.join().unwrap();
/// sender2.join().unwrap();
/// receiver.join().unwrap();
/// assert_eq!(pool.idle(), 2);
/// ```
#[derive(Debug)]
pub struct Pool {
    /// Configuration of the pool.
    config: Config,
    /// Idle builders waiting to be reused.
    queue: SegQueue<StringBuilder>,
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

impl Pool {
    /// Create a new pool with the default configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stringpool::Pool;
    ///
    /// let pool = Pool::new();
    /// assert_eq!(pool.idle(), 0);
    /// ```
    pub fn new() -> Self {
        Self::build(Config::default())
    }

    /// Create a new pool with `prealloc` idle builders ready for use.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stringpool::Pool;
    ///
    /// let pool = Pool::with_prealloc(4);
    /// assert_eq!(pool.idle(), 4);
    /// let sb = pool.acquire();
    /// assert_eq!(pool.idle(), 3);
    /// ```
    pub fn with_prealloc(prealloc: usize) -> Self {
        Self::build(Config {
            prealloc,
            ..Default::default()
        })
    }

    /// Create a new pool with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid. Use
    /// [`try_with_config`](Pool::try_with_config) to get an error instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stringpool::{Config, Pool};
    ///
    /// let mut config = Config::default();
    /// config.buffer_capacity = 128;
    /// let pool = Pool::with_config(config);
    /// let sb = pool.acquire();
    /// assert!(sb.capacity() >= 128);
    /// ```
    pub fn with_config(config: Config) -> Self {
        match Self::try_with_config(config) {
            Ok(pool) => pool,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a new pool with the given configuration, validating it first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stringpool::{Config, Error, Pool};
    ///
    /// let config = Config {
    ///     buffer_capacity: 1024,
    ///     max_buffer_capacity: Some(16),
    ///     ..Default::default()
    /// };
    /// assert!(matches!(Pool::try_with_config(config), Err(Error::InvalidConfig { .. })));
    /// ```
    pub fn try_with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: Config) -> Self {
        debug!(
            prealloc = config.prealloc,
            buffer_capacity = config.buffer_capacity,
            max_buffer_capacity = ?config.max_buffer_capacity,
            "creating string pool"
        );
        let pool = Self {
            queue: SegQueue::new(),
            config,
        };
        for _ in 0..pool.config.prealloc {
            pool.queue.push(pool.fresh());
        }
        pool
    }

    /// Get the configuration of the pool.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the number of idle builders waiting in the pool.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stringpool::Pool;
    ///
    /// let pool = Pool::new();
    /// let sb = pool.acquire();
    /// assert_eq!(pool.idle(), 0);
    /// pool.release(sb);
    /// assert_eq!(pool.idle(), 1);
    /// ```
    pub fn idle(&self) -> usize {
        self.queue.len()
    }

    /// Take a builder out of the pool.
    ///
    /// Returns an idle builder if there is one, otherwise a freshly created
    /// one. The returned builder is always empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stringpool::Pool;
    ///
    /// let pool = Pool::new();
    /// let mut sb = pool.acquire();
    /// sb.push_str("abc");
    /// assert_eq!(sb.as_str().unwrap(), "abc");
    /// pool.release(sb);
    /// let sb = pool.acquire();
    /// assert_eq!(sb.as_str().unwrap(), "");
    /// ```
    pub fn acquire(&self) -> StringBuilder {
        match self.queue.pop() {
            Some(sb) => sb,
            None => {
                trace!(
                    buffer_capacity = self.config.buffer_capacity,
                    "pool is empty, allocating a new builder"
                );
                self.fresh()
            }
        }
    }

    /// Reset a builder and return it to the pool for reuse.
    ///
    /// Builders that did not come from this pool are accepted as well.
    pub fn release(&self, mut sb: StringBuilder) {
        sb.reset();
        if let Some(max) = self.config.max_buffer_capacity {
            if sb.capacity() > max {
                trace!(capacity = sb.capacity(), max, "shrinking released builder");
                sb.shrink_to(max);
            }
        }
        debug_assert!(sb.is_empty(), "a released builder must be empty");
        self.queue.push(sb);
    }

    /// Take a builder out of the pool, wrapped in an [`Entry`] which returns
    /// it to the pool on drop.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stringpool::Pool;
    ///
    /// let pool = Pool::new();
    /// {
    ///     let mut sb = pool.get();
    ///     sb.push_str("Hello, World!");
    ///     assert_eq!(sb.as_str().unwrap(), "Hello, World!");
    /// }
    /// assert_eq!(pool.idle(), 1);
    /// assert!(pool.get().is_empty());
    /// ```
    pub fn get(&self) -> Entry<'_> {
        Entry {
            item: Some(self.acquire()),
            pool: self,
        }
    }

    /// Take a builder out of a shared pool, wrapped in an [`OwnedEntry`]
    /// which may outlive the borrow of the pool and move across threads.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stringpool::Pool;
    /// use std::sync::Arc;
    ///
    /// let pool = Arc::new(Pool::new());
    /// let mut sb = pool.get_owned();
    /// let handle = std::thread::spawn(move || {
    ///     sb.push_str("from a thread");
    ///     sb.finish()
    /// });
    /// assert_eq!(handle.join().unwrap(), "from a thread");
    /// assert_eq!(pool.idle(), 1);
    /// ```
    pub fn get_owned(self: &Arc<Self>) -> OwnedEntry {
        OwnedEntry {
            item: Some(self.acquire()),
            pool: self.clone(),
        }
    }

    /// Drop every idle builder and free its memory.
    ///
    /// Builders currently handed out are unaffected and may still be
    /// released afterwards.
    pub fn clear(&self) {
        let mut dropped = 0usize;
        while self.queue.pop().is_some() {
            dropped += 1;
        }
        debug!(dropped, "cleared idle builders");
    }

    fn fresh(&self) -> StringBuilder {
        StringBuilder::with_capacity(self.config.buffer_capacity)
    }
}

/// Configuration for the pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Number of idle builders to create up front.
    pub prealloc: usize,
    /// Initial capacity in bytes of each newly created builder.
    pub buffer_capacity: usize,
    /// Builders whose capacity exceeds this are shrunk to it when released.
    pub max_buffer_capacity: Option<usize>,
}

impl Config {
    /// Check that the configuration is consistent.
    pub fn validate(&self) -> Result<()> {
        match self.max_buffer_capacity {
            Some(max) if self.buffer_capacity > max => Err(Error::InvalidConfig {
                buffer_capacity: self.buffer_capacity,
                max_buffer_capacity: max,
            }),
            _ => Ok(()),
        }
    }
}
