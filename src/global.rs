//! The process-wide default pool.
//!
//! The default pool is created on first use with [`Config::default()`], or
//! explicitly and exactly once through [`init`].

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::error::{Error, Result};
use crate::{Config, Entry, Pool, StringBuilder};

static DEFAULT_POOL: OnceCell<Pool> = OnceCell::new();

/// Initialize the default pool with the given configuration.
///
/// Must be called before the first use of the default pool. Returns
/// [`Error::AlreadyInitialized`] if the default pool already exists, and
/// [`Error::InvalidConfig`] if the configuration is invalid.
///
/// # Example
///
/// ```rust
/// use stringpool::{Config, Error};
///
/// let pool = stringpool::init(Config { prealloc: 2, ..Default::default() }).unwrap();
/// assert_eq!(pool.idle(), 2);
/// assert!(matches!(stringpool::init(Config::default()), Err(Error::AlreadyInitialized)));
/// ```
pub fn init(config: Config) -> Result<&'static Pool> {
    let pool = Pool::try_with_config(config)?;
    DEFAULT_POOL
        .set(pool)
        .map_err(|_| Error::AlreadyInitialized)?;
    debug!("initialized default string pool");
    Ok(global())
}

/// Get the default pool, creating it with the default configuration if it
/// does not exist yet.
pub fn global() -> &'static Pool {
    DEFAULT_POOL.get_or_init(|| {
        debug!("initializing default string pool with default configuration");
        Pool::new()
    })
}

/// Take a builder from the default pool.
///
/// # Example
///
/// ```rust
/// let mut sb = stringpool::get();
/// sb.push_str("hello");
/// assert_eq!(sb.as_str().unwrap(), "hello");
/// stringpool::release(sb);
/// assert!(stringpool::get().is_empty());
/// ```
pub fn get() -> StringBuilder {
    global().acquire()
}

/// Reset a builder and return it to the default pool.
pub fn release(sb: StringBuilder) {
    global().release(sb)
}

/// Take a builder from the default pool, returned automatically on drop.
pub fn get_entry() -> Entry<'static> {
    global().get()
}
