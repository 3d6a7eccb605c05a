use crate::ConfigError;

/// Configuration for [`RingBuffer`](crate::RingBuffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Physical ring size as power of 2 (default: 12 = 4K slots, 4K - 1 usable)
    pub ring_bits: u8,
    /// Enable metrics collection (slight overhead)
    pub enable_metrics: bool,
}

impl Config {
    /// Largest `ring_bits` for which `1 << ring_bits` fits in a `usize`.
    pub const MAX_RING_BITS: u8 = (usize::BITS - 1) as u8;

    /// Creates a new configuration with custom settings.
    pub const fn new(ring_bits: u8, enable_metrics: bool) -> Self {
        Self {
            ring_bits,
            enable_metrics,
        }
    }

    /// Builds a configuration for an exact physical capacity.
    ///
    /// The capacity is never rounded: anything other than a non-zero power
    /// of two is rejected.
    pub fn from_capacity(capacity: usize) -> Result<Self, ConfigError> {
        if !capacity.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo(capacity));
        }
        Ok(Self::new(capacity.trailing_zeros() as u8, false))
    }

    /// Enables or disables metrics collection.
    pub const fn with_metrics(mut self, enable_metrics: bool) -> Self {
        self.enable_metrics = enable_metrics;
        self
    }

    /// Checks that `ring_bits` describes an addressable capacity.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.ring_bits > Self::MAX_RING_BITS {
            return Err(ConfigError::RingBitsTooLarge {
                bits: self.ring_bits,
                max: Self::MAX_RING_BITS,
            });
        }
        Ok(())
    }

    /// Returns the physical number of slots (`C`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        1 << self.ring_bits
    }

    /// Returns the number of slots callers can fill (`C - 1`).
    #[inline]
    pub const fn usable_capacity(&self) -> usize {
        self.capacity() - 1
    }

    /// Returns the mask for index wrapping.
    #[inline]
    pub const fn mask(&self) -> usize {
        self.capacity() - 1
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ring_bits: 12, // 4K slots
            enable_metrics: false,
        }
    }
}

/// Low latency configuration (1K slots, fits in L1 cache for word-sized items)
pub const LOW_LATENCY_CONFIG: Config = Config::new(10, false);

/// High throughput configuration (64K slots)
pub const HIGH_THROUGHPUT_CONFIG: Config = Config::new(16, false);
