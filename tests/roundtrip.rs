use std::sync::atomic::{AtomicUsize, Ordering};

use enough::Unstoppable;
use zenebf::*;

/// Lets `allowed` checks pass, then reports cancellation.
struct StopAfter {
    allowed: usize,
    seen: AtomicUsize,
}

impl StopAfter {
    fn new(allowed: usize) -> Self {
        Self {
            allowed,
            seen: AtomicUsize::new(0),
        }
    }
}

impl Stop for StopAfter {
    fn check(&self) -> Result<(), StopReason> {
        if self.seen.fetch_add(1, Ordering::Relaxed) < self.allowed {
            Ok(())
        } else {
            Err(StopReason::Cancelled)
        }
    }
}

#[test]
fn scenario_two_by_three() {
    let data = b"eb2 3\n1 2 3 4 5 6\n";
    let grid = decode(data, Unstoppable).unwrap();
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.row(0), Some(&[1, 2, 3][..]));
    assert_eq!(grid.row(1), Some(&[4, 5, 6][..]));
    assert_eq!(grid.row(2), None);

    let encoded = encode(&grid);
    assert_eq!(encoded, b"eb2 3\n1 2 3\n4 5 6\n");
}

#[test]
fn magic_is_e_then_b() {
    assert_eq!(ebf::MAGIC, *b"eb");
    assert_eq!(u16::from_le_bytes(ebf::MAGIC), 0x6265);
}

#[test]
fn grid_roundtrip_checkerboard() {
    let (h, w) = (6u32, 9u32);
    let mut values = Vec::new();
    for y in 0..h {
        for x in 0..w {
            values.push(if (x + y) % 2 == 0 { 255 } else { 0 });
        }
    }
    let grid = Grid::new(h, w, values).unwrap();
    let decoded = decode(&encode(&grid), Unstoppable).unwrap();
    assert_eq!(decoded, grid);
}

#[test]
fn grid_roundtrip_extreme_values() {
    let grid = Grid::from_rows(&[[0, u32::MAX], [1, 4_000_000_000]]).unwrap();
    let decoded = decode(&encode(&grid), Unstoppable).unwrap();
    assert_eq!(decoded, grid);
    assert_eq!(decoded.get(0, 1), Some(u32::MAX));
}

#[test]
fn single_value_grid() {
    let grid = decode(b"eb1 1 42", Unstoppable).unwrap();
    assert_eq!(grid.values(), &[42]);
    assert_eq!(encode(&grid), b"eb1 1\n42\n");
}

#[test]
fn normalizes_irregular_whitespace() {
    let data = b"eb  2\r\n\t2 10\n\n 20   30\x0c40 \n";
    let grid = decode(data, Unstoppable).unwrap();
    assert_eq!(encode(&grid), b"eb2 2\n10 20\n30 40\n");
}

#[test]
fn reencoding_is_stable() {
    let data = b"eb3 2 9 8 7 6 5 4 trailing words";
    let first = encode(&decode(data, Unstoppable).unwrap());
    let second = encode(&decode(&first, Unstoppable).unwrap());
    assert_eq!(first, second);
}

#[test]
fn write_to_matches_encode() {
    let grid = Grid::from_rows(&[vec![3, 1, 4], vec![1, 5, 9], vec![2, 6, 5]]).unwrap();
    let mut out = Vec::new();
    write_to(&grid, &mut out).unwrap();
    assert_eq!(out, encode(&grid));
}

#[test]
fn info_probe() {
    let info = EbfInfo::from_bytes(b"eb480 640\n").unwrap();
    assert_eq!(info.height, 480);
    assert_eq!(info.width, 640);
    assert_eq!(info.value_count(), 307_200);
}

#[test]
fn info_probe_max_dimensions() {
    let info = EbfInfo::from_bytes(b"eb262144 262144").unwrap();
    assert_eq!(info.value_count(), 262_144u64 * 262_144);
}

#[test]
fn limits_reject_large() {
    let data = b"eb2 3\n1 2 3 4 5 6\n";
    let limits = Limits {
        max_pixels: Some(5),
        ..Default::default()
    };
    let result = DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(Unstoppable);
    match result.unwrap_err() {
        EbfError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn memory_limit_counts_four_bytes_per_value() {
    let data = b"eb2 3\n1 2 3 4 5 6\n";
    let tight = Limits {
        max_memory_bytes: Some(23),
        ..Default::default()
    };
    assert!(matches!(
        DecodeRequest::new(data).with_limits(&tight).decode(Unstoppable),
        Err(EbfError::LimitExceeded(_))
    ));

    let exact = Limits {
        max_memory_bytes: Some(24),
        ..Default::default()
    };
    assert!(DecodeRequest::new(data).with_limits(&exact).decode(Unstoppable).is_ok());
}

#[test]
fn width_limit_applies_to_second_dimension() {
    let limits = Limits {
        max_width: Some(2),
        ..Default::default()
    };
    let result = DecodeRequest::new(b"eb3 2 1 2 3 4 5 6")
        .with_limits(&limits)
        .decode(Unstoppable);
    assert!(result.is_ok());
    let result = DecodeRequest::new(b"eb2 3 1 2 3 4 5 6")
        .with_limits(&limits)
        .decode(Unstoppable);
    assert!(matches!(result, Err(EbfError::LimitExceeded(_))));
}

#[test]
fn grid_constructor_validates() {
    assert!(matches!(
        Grid::new(2, 2, vec![1, 2, 3]),
        Err(EbfError::ValueCountMismatch {
            expected: 4,
            actual: 3
        })
    ));
    assert!(matches!(
        Grid::new(0, 2, vec![]),
        Err(EbfError::BadDimensions(_))
    ));
    assert!(matches!(
        Grid::from_rows(&[vec![1, 2], vec![3]]),
        Err(EbfError::ValueCountMismatch { .. })
    ));
    assert!(matches!(
        Grid::from_rows::<Vec<u32>>(&[]),
        Err(EbfError::BadDimensions(_))
    ));
}

#[test]
fn grid_accessors() {
    let grid = Grid::new(2, 2, vec![10, 11, 20, 21]).unwrap();
    assert_eq!(grid.get(1, 0), Some(20));
    assert_eq!(grid.get(0, 2), None);
    assert_eq!(grid.get(2, 0), None);
    let rows: Vec<&[u32]> = grid.rows().collect();
    assert_eq!(rows, [&[10, 11][..], &[20, 21][..]]);
    let img = grid.as_imgref();
    assert_eq!((img.width(), img.height()), (2, 2));
    assert_eq!(grid.into_values(), vec![10, 11, 20, 21]);
}

#[test]
fn height_limit_applies_to_first_dimension() {
    let limits = Limits {
        max_height: Some(2),
        ..Default::default()
    };
    let result = DecodeRequest::new(b"eb2 3 1 2 3 4 5 6")
        .with_limits(&limits)
        .decode(Unstoppable);
    assert!(result.is_ok());
    let result = DecodeRequest::new(b"eb3 2 1 2 3 4 5 6")
        .with_limits(&limits)
        .decode(Unstoppable);
    assert!(matches!(result, Err(EbfError::LimitExceeded(_))));
}

#[test]
fn cancelled_before_values() {
    let data = b"eb2 3\n1 2 3 4 5 6\n";
    let stop = StopAfter::new(0);
    match decode(data, &stop) {
        Err(EbfError::Cancelled(StopReason::Cancelled)) => {}
        other => panic!("expected Cancelled, got {other:?}"),
    }
    assert_eq!(stop.seen.load(Ordering::Relaxed), 1);
}

#[test]
fn cancelled_inside_value_loop() {
    let data = b"eb2 3\n1 2 3 4 5 6\n";
    let stop = StopAfter::new(1);
    assert!(matches!(
        decode(data, &stop),
        Err(EbfError::Cancelled(StopReason::Cancelled))
    ));
    assert_eq!(stop.seen.load(Ordering::Relaxed), 2);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn ragged_rows_with_wide_first_row_rejected() {
    let mut rows = vec![vec![0u32; 262_144]];
    rows.resize(262_144, Vec::new());
    match Grid::from_rows(&rows) {
        Err(EbfError::ValueCountMismatch { expected, actual }) => {
            assert_eq!(expected, 262_144 * 262_144);
            assert_eq!(actual, 262_144);
        }
        other => panic!("expected ValueCountMismatch, got {other:?}"),
    }
}

#[test]
fn ragged_short_first_row_rejected() {
    assert!(matches!(
        Grid::from_rows(&[vec![1], vec![2, 3]]),
        Err(EbfError::ValueCountMismatch {
            expected: 2,
            actual: 3
        })
    ));
}
