mod common;

use common::fixtures::{matrix, MockError, VisitCounter};
use grid_par::ops::{parallel_matrix_read_write, try_parallel_matrix_read_write};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn negates_every_cell() {
    let mut m = matrix(4, 3, true);
    parallel_matrix_read_write(&mut m, |_, _, v| !v);
    assert!(m.iter().flatten().all(|&v| !v));
}

#[test]
fn indexes_columns_first() {
    let mut m: Vec<Vec<(usize, usize)>> = (0..3)
        .map(|x| (0..5).map(|y| (x, y)).collect())
        .collect();
    let counter = VisitCounter::new(3, 5);
    parallel_matrix_read_write(&mut m, |x, y, v| {
        assert_eq!(v, (x, y));
        counter.hit(x, y);
        (y, x)
    });
    assert!(counter.all_exactly_once());
    assert_eq!(m[2][4], (4, 2));
}

#[test]
fn single_cell_matrix() {
    let mut m = vec![vec![41]];
    parallel_matrix_read_write(&mut m, |_, _, v| v + 1);
    assert_eq!(m, vec![vec![42]]);
}

#[test]
fn owned_elements_are_replaced() {
    let mut m = matrix(2, 2, String::from("cell"));
    parallel_matrix_read_write(&mut m, |x, y, s| format!("{s}-{x}{y}"));
    assert_eq!(m[1][0], "cell-10");
    assert_eq!(m[0][1], "cell-01");
}

#[test]
fn jagged_matrix_panics_before_any_delegate() {
    let calls = AtomicUsize::new(0);
    let mut m = vec![vec![0u8; 2], vec![0u8; 2], vec![0u8; 1]];
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        parallel_matrix_read_write(&mut m, |_, _, v| {
            calls.fetch_add(1, Ordering::Relaxed);
            v
        });
    }));
    assert!(outcome.is_err());
    assert_eq!(calls.load(Ordering::Relaxed), 0);
}

#[test]
#[should_panic(expected = "inconsistent column lengths")]
fn empty_matrix_panics() {
    let mut m: Vec<Vec<i32>> = Vec::new();
    parallel_matrix_read_write(&mut m, |_, _, v| v);
}

#[test]
#[should_panic(expected = "inconsistent column lengths")]
fn empty_columns_panic() {
    let mut m: Vec<Vec<i32>> = vec![Vec::new(), Vec::new()];
    parallel_matrix_read_write(&mut m, |_, _, v| v);
}

#[test]
fn try_variant_reports_failing_coordinates() {
    let mut m = matrix(3, 4, 0i64);
    let err = try_parallel_matrix_read_write(&mut m, |x, y, v| {
        if (x, y) == (2, 1) {
            Err(MockError)
        } else {
            Ok(v - 1)
        }
    })
    .unwrap_err();
    assert_eq!(err.cell(), (2, 1));
    assert_eq!(m[2][1], 0);
}

#[test]
fn try_variant_succeeds() {
    let mut m = matrix(3, 4, 1u32);
    let result = try_parallel_matrix_read_write(&mut m, |x, y, v| {
        Ok::<_, MockError>(v + (x * 10 + y) as u32)
    });
    assert!(result.is_ok());
    assert_eq!(m[2][3], 24);
}
