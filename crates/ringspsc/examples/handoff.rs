use ringspsc_rs::{Config, RingBuffer};
use std::thread;
use std::time::Instant;

/// 64-byte message, one cache line per slot.
#[derive(Debug, Clone, Copy)]
struct Tick {
    seq: u64,
    payload: [u64; 7],
}

fn main() {
    println!("RingSPSC Hand-off Example");
    println!("=========================\n");

    let config = Config::new(
        12,   // 4K slots (4095 usable)
        true, // metrics on so we can see backpressure
    );

    const N: u64 = 5_000_000;

    println!("Configuration:");
    println!("  Physical slots: {}", config.capacity());
    println!("  Usable slots: {}", config.usable_capacity());
    println!("  Messages: {}\n", N);

    let (mut producer, mut consumer) = RingBuffer::<Tick>::with_config(config).split();
    let start = Instant::now();

    let producer_handle = thread::spawn(move || {
        for seq in 0..N {
            let mut tick = Tick {
                seq,
                payload: [seq; 7],
            };
            // Busy-poll on Full: the queue itself never waits
            while let Err(full) = producer.push(tick) {
                tick = full.into_inner();
                std::hint::spin_loop();
            }
        }
        producer
    });

    let mut expected = 0u64;
    let mut checksum = 0u64;
    while expected < N {
        if let Ok(tick) = consumer.pop() {
            assert_eq!(tick.seq, expected, "out-of-order delivery");
            checksum = checksum.wrapping_add(tick.payload[0]);
            expected += 1;
        } else {
            std::hint::spin_loop();
        }
    }

    let elapsed = start.elapsed();
    let producer = producer_handle.join().unwrap();
    let metrics = producer.metrics();

    println!("Results:");
    println!("  Received: {}", expected);
    println!("  Checksum: {}", checksum);
    println!("  Time: {:.3}s", elapsed.as_secs_f64());
    println!(
        "  Throughput: {:.2} M msg/s",
        N as f64 / elapsed.as_secs_f64() / 1_000_000.0
    );
    println!("  Full rejections: {}", metrics.full_rejections);
    println!("  Empty polls: {}", metrics.empty_polls);
}
