#![cfg(not(feature = "loom"))]

use ringspsc_rs::{Empty, Full, RingBuffer};

#[test]
fn test_capacity_four_fills_at_three() {
    let mut ring = RingBuffer::new(4);
    assert_eq!(ring.capacity(), 3);

    assert_eq!(ring.push(1), Ok(()));
    assert_eq!(ring.push(2), Ok(()));
    assert_eq!(ring.push(3), Ok(()));
    assert_eq!(ring.push(4), Err(Full(4)));
}

#[test]
fn test_new_buffer_is_empty() {
    let mut ring = RingBuffer::<i32>::new(4);
    assert!(ring.is_empty());
    assert_eq!(ring.pop(), Err(Empty));
    assert!(ring.is_empty());
    assert_eq!(ring.len(), 0);
}

#[test]
fn test_wrap_around() {
    let mut ring = RingBuffer::new(4);

    assert!(ring.push(10).is_ok());
    assert!(ring.push(20).is_ok());
    assert!(ring.push(30).is_ok());

    assert_eq!(ring.pop(), Ok(10));
    assert_eq!(ring.pop(), Ok(20));

    assert!(ring.push(40).is_ok());
    assert!(ring.push(50).is_ok());

    assert_eq!(ring.pop(), Ok(30));
    assert_eq!(ring.pop(), Ok(40));
    assert_eq!(ring.pop(), Ok(50));
    assert_eq!(ring.pop(), Err(Empty));
}

#[test]
fn test_full_leaves_content_unchanged() {
    let mut ring = RingBuffer::new(8);
    for i in 0..ring.capacity() as u32 {
        assert!(ring.push(i).is_ok(), "push {} failed before capacity", i);
    }

    let len_before = ring.len();
    assert_eq!(ring.push(999), Err(Full(999)));
    assert_eq!(ring.len(), len_before);

    // First pushed element is still at the front
    assert_eq!(ring.pop(), Ok(0));
}

#[test]
fn test_drained_buffer_reports_empty() {
    let mut ring = RingBuffer::new(16);
    for i in 0..10u64 {
        ring.push(i).unwrap();
    }
    while ring.pop().is_ok() {}

    assert_eq!(ring.pop(), Err(Empty));
    assert_eq!(ring.pop(), Err(Empty));
    assert!(ring.is_empty());

    // Still usable after repeated empty polls
    ring.push(42).unwrap();
    assert_eq!(ring.pop(), Ok(42));
}

#[test]
fn test_fifo_ordering_without_interleaving() {
    const N: u64 = 1000;
    let mut ring = RingBuffer::new(1024);

    for i in 0..N {
        ring.push(i).unwrap();
    }

    let mut expected = 0;
    while let Ok(item) = ring.pop() {
        assert_eq!(item, expected, "FIFO violation: expected {}, got {}", expected, item);
        expected += 1;
    }
    assert_eq!(expected, N);
}

#[test]
fn test_is_empty_is_idempotent() {
    let mut ring = RingBuffer::new(4);
    assert_eq!(ring.is_empty(), ring.is_empty());

    ring.push('x').unwrap();
    let first = ring.is_empty();
    let second = ring.is_empty();
    assert!(!first);
    assert_eq!(first, second);
}

#[test]
fn test_many_wraps_preserve_order() {
    let mut ring = RingBuffer::new(8);
    let mut next_in = 0u32;
    let mut next_out = 0u32;

    // Uneven batch sizes so head and tail cross the physical end at different points
    for batch in [1usize, 5, 7, 3, 6, 2, 7, 4].iter().cycle().take(200) {
        for _ in 0..*batch {
            if ring.push(next_in).is_ok() {
                next_in += 1;
            }
        }
        for _ in 0..(*batch).div_ceil(2) {
            if let Ok(value) = ring.pop() {
                assert_eq!(value, next_out);
                next_out += 1;
            }
        }
        assert!(ring.len() <= ring.capacity());
    }

    while let Ok(value) = ring.pop() {
        assert_eq!(value, next_out);
        next_out += 1;
    }
    assert_eq!(next_in, next_out);
}

#[test]
fn test_heap_elements_move_through() {
    let mut ring = RingBuffer::new(4);
    ring.push(String::from("alpha")).unwrap();
    ring.push(String::from("beta")).unwrap();

    let popped = ring.pop().unwrap();
    assert_eq!(popped, "alpha");

    ring.push(String::from("gamma")).unwrap();
    ring.push(String::from("delta")).unwrap();

    let rest: Vec<String> = std::iter::from_fn(|| ring.pop().ok()).collect();
    assert_eq!(rest, ["beta", "gamma", "delta"]);
}

#[test]
fn test_buffer_can_be_moved_whole() {
    let mut ring = RingBuffer::new(4);
    ring.push(1u8).unwrap();

    let mut moved = ring;
    moved.push(2).unwrap();
    assert_eq!(moved.pop(), Ok(1));
    assert_eq!(moved.pop(), Ok(2));
}
