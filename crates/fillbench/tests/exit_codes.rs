//! Program-boundary behaviour: what reaches stdout and stderr, and which
//! status comes back, for success and both fatal conditions.

use fillbench::runner::{BenchConfig, Runner};
use fillbench_test_utils::fixtures::{parse_report, small_config};
use fillbench_test_utils::{FailingAllocator, OverAllocatingArray};

fn capture<F>(f: F) -> (i32, String, String)
where
    F: FnOnce(&mut Vec<u8>, &mut Vec<u8>) -> i32,
{
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = f(&mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn success_exits_zero_with_four_lines() {
    let mut runner = Runner::new(small_config()).unwrap();
    let (code, out, err) = capture(|out, err| {
        fillbench::run_to_exit_code::<_, _, Vec<i32>, _, _>(&mut runner, out, err)
    });
    assert_eq!(code, 0);
    assert_eq!(parse_report(&out).len(), 4);
    assert!(err.is_empty());
}

#[test]
fn allocation_failure_exits_minus_one() {
    let mut runner = Runner::new(small_config())
        .unwrap()
        .with_allocator(FailingAllocator::always());
    let (code, out, err) = capture(|out, err| {
        fillbench::run_to_exit_code::<_, _, Vec<i32>, _, _>(&mut runner, out, err)
    });
    assert_eq!(code, -1);
    assert!(out.is_empty());
    assert_eq!(err, "Fatal error with memory allocation\n");
}

#[test]
fn capacity_violation_exits_one() {
    let mut runner = Runner::new(BenchConfig::new(100, 2)).unwrap();
    let (code, out, err) = capture(|out, err| {
        fillbench::run_to_exit_code::<_, _, OverAllocatingArray, _, _>(&mut runner, out, err)
    });
    assert_eq!(code, 1);
    assert_eq!(out.lines().count(), 1);
    let line = err.strip_suffix('\n').unwrap();
    let n: usize = line
        .strip_prefix("Vector capacity changed to ")
        .unwrap()
        .parse()
        .unwrap();
    assert!(n > 100);
}
