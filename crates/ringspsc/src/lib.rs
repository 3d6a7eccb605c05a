//! RingSPSC - Lock-Free Single-Producer Single-Consumer Ring Buffer
//!
//! A fixed-capacity hand-off queue between exactly one producer thread and
//! exactly one consumer thread. `push` and `pop` are wait-free, never
//! allocate after construction, and report a full or empty buffer as a
//! `Result` instead of blocking.
//!
//! # Key Features
//!
//! - Power-of-two storage with mask-based index wrapping
//! - Acquire/Release index publication, no locks and no CAS
//! - Cache-padded head and tail (no false sharing between the two threads)
//! - `Producer`/`Consumer` split handles enforce the SPSC rule at compile time
//! - Optional metrics counters
//!
//! One slot is kept free to tell full from empty, so a buffer built with
//! capacity `C` holds `C - 1` elements.
//!
//! # Example
//!
//! ```
//! use ringspsc_rs::{Empty, RingBuffer};
//! use std::thread;
//!
//! let (mut producer, mut consumer) = RingBuffer::<u64>::new(1024).split();
//!
//! let handle = thread::spawn(move || {
//!     for i in 0..10_000 {
//!         let mut item = i;
//!         // Busy-retry on Full; callers choose their own backoff.
//!         while let Err(full) = producer.push(item) {
//!             item = full.into_inner();
//!             std::hint::spin_loop();
//!         }
//!     }
//! });
//!
//! let mut expected = 0;
//! while expected < 10_000 {
//!     match consumer.pop() {
//!         Ok(value) => {
//!             assert_eq!(value, expected);
//!             expected += 1;
//!         }
//!         Err(Empty) => std::hint::spin_loop(),
//!     }
//! }
//! handle.join().unwrap();
//! ```

mod config;
mod error;
mod handle;
mod invariants;
mod metrics;
mod ring;
mod sync;

pub use config::{Config, HIGH_THROUGHPUT_CONFIG, LOW_LATENCY_CONFIG};
pub use error::{ConfigError, Empty, Full};
pub use handle::{Consumer, Producer};
pub use metrics::{Metrics, MetricsSnapshot};
pub use ring::RingBuffer;
