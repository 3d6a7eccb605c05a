use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use crossbeam_utils::Backoff;
use ringspsc_rs::{RingBuffer, HIGH_THROUGHPUT_CONFIG, LOW_LATENCY_CONFIG};
use std::thread;

const MSG_COUNT: u64 = 1_000_000;

fn bench_push_pop_single_thread(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_thread");
    group.throughput(Throughput::Elements(1));

    group.bench_function("push_pop", |b| {
        let mut ring = RingBuffer::<u64>::with_config(LOW_LATENCY_CONFIG);
        let mut i = 0u64;
        b.iter(|| {
            let _ = ring.push(black_box(i));
            i = i.wrapping_add(1);
            black_box(ring.pop())
        });
    });

    group.finish();
}

fn bench_spsc_handoff(c: &mut Criterion) {
    let mut group = c.benchmark_group("spsc");
    group.throughput(Throughput::Elements(MSG_COUNT));
    group.sample_size(20);

    for &ring_bits in &[LOW_LATENCY_CONFIG.ring_bits, HIGH_THROUGHPUT_CONFIG.ring_bits] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_slots", 1usize << ring_bits)),
            &ring_bits,
            |b, &bits| {
                b.iter(|| {
                    let (mut producer, mut consumer) =
                        RingBuffer::<u64>::new(1usize << bits).split();

                    // Producer thread
                    let producer_handle = thread::spawn(move || {
                        let backoff = Backoff::new();
                        for i in 0..MSG_COUNT {
                            let mut item = i;
                            while let Err(full) = producer.push(item) {
                                item = full.into_inner();
                                backoff.snooze();
                            }
                            backoff.reset();
                        }
                    });

                    // Consumer thread
                    let mut count = 0u64;
                    while count < MSG_COUNT {
                        if let Ok(item) = consumer.pop() {
                            black_box(item);
                            count += 1;
                        } else {
                            std::hint::spin_loop();
                        }
                    }

                    producer_handle.join().unwrap();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_push_pop_single_thread, bench_spsc_handoff);
criterion_main!(benches);
