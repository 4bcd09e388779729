use crate::error::Result;
use crate::{Config, Pool};

/// A builder for creating a [`Pool`] with custom configuration.
///
/// # Example
///
/// ```rust
/// use stringpool::PoolBuilder;
///
/// let pool = PoolBuilder::new().prealloc(4).buffer_capacity(256).build();
/// assert_eq!(pool.idle(), 4);
/// assert!(pool.acquire().capacity() >= 256);
/// ```
#[derive(Debug, Default)]
pub struct PoolBuilder {
    /// Configuration of the pool.
    config: Config,
}

impl PoolBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the number of idle builders created up front.
    pub fn prealloc(&mut self, prealloc: usize) -> &mut Self {
        self.config.prealloc = prealloc;
        self
    }

    /// Set the initial capacity in bytes of newly created builders.
    pub fn buffer_capacity(&mut self, capacity: usize) -> &mut Self {
        self.config.buffer_capacity = capacity;
        self
    }

    /// Shrink released builders whose capacity exceeds `max` bytes.
    pub fn max_buffer_capacity(&mut self, max: usize) -> &mut Self {
        self.config.max_buffer_capacity = Some(max);
        self
    }

    /// Build the pool with the current configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn build(&mut self) -> Pool {
        let config = std::mem::take(&mut self.config);
        Pool::with_config(config)
    }

    /// Build the pool with the current configuration, or return an error if
    /// it is invalid.
    pub fn try_build(&mut self) -> Result<Pool> {
        let config = std::mem::take(&mut self.config);
        Pool::try_with_config(config)
    }
}
