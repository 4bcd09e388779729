//! A concurrent pool of reusable string builders.
//!
//! Text-heavy code often builds many short-lived strings. Instead of
//! allocating a new buffer for each one, borrow a [`StringBuilder`] from a
//! [`Pool`], append to it, read the result and give it back. The pool resets
//! the builder and keeps its allocation for the next caller.
//!
//! # Features
//!
//! - Thread-safe: multiple threads can acquire and release builders
//! concurrently through a lock-free free list.
//! - Unbounded: acquiring from an empty pool creates a new builder.
//! - A process-wide default pool behind [`get`] and [`release`].
//! - RAII guards ([`Entry`], [`OwnedEntry`]) that return builders on drop.
//!
//! # Examples
//!
//! ## Explicit acquire and release
//!
//! ```rust
//! use stringpool::Pool;
//!
//! let pool = Pool::new();
//! let mut sb = pool.acquire();
//! sb.push_str("a");
//! sb.push_str("b");
//! sb.push_str("c");
//! assert_eq!(sb.as_str().unwrap(), "abc");
//! pool.release(sb);
//!
//! let sb = pool.acquire();
//! assert_eq!(sb.as_str().unwrap(), "");
//! ```
//!
//! ## Default pool
//!
//! ```rust
//! use std::fmt::Write;
//!
//! let mut sb = stringpool::get();
//! for i in 0..3 {
//!     write!(sb, "{i} ").unwrap();
//! }
//! assert_eq!(sb.as_str().unwrap(), "0 1 2 ");
//! stringpool::release(sb);
//! ```
//!
//! ## Guard returned on drop
//!
//! ```rust
//! use stringpool::Pool;
//!
//! let pool = Pool::new();
//! let text = {
//!     let mut sb = pool.get();
//!     sb.push_str("Hello, World!");
//!     sb.finish()
//! };
//! assert_eq!(text, "Hello, World!");
//! assert_eq!(pool.idle(), 1);
//! ```
//!
//! # Caller obligations
//!
//! [`Pool::release`] takes the builder by value, so a builder cannot be used
//! or released again once it is back in the pool. Releasing a builder that
//! was created elsewhere is allowed; it simply joins the pool.

mod builder;
mod entry;
mod error;
mod global;
mod pool;
mod string_builder;

pub use builder::PoolBuilder;
pub use entry::{Entry, OwnedEntry};
pub use error::{Error, Result};
pub use global::{get, get_entry, global, init, release};
pub use pool::{Config, Pool};
pub use string_builder::StringBuilder;
