use super::*;

#[test]
fn test_passes_result_through() {
    let result: Result<u32, String> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(result, Ok(7));
}

#[test]
fn test_non_tail_recursion_past_default_stack() {
    fn sum_to(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { n + sum_to(n - 1) })
    }

    assert_eq!(sum_to(200_000), 20_000_100_000);
}

#[test]
fn test_grows_on_spawned_thread() {
    // Background callback threads get small default stacks.
    fn depth(n: u32) -> u32 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { 1 + depth(n - 1) })
    }

    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(|| depth(50_000));
    let result = handle.map(|h| h.join());
    assert!(matches!(result, Ok(Ok(50_000))));
}
