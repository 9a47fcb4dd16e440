//! Stack growth for deep value graphs.
//!
//! Every recursive step of the engine (array element, object member) goes
//! through [`ensure_sufficient_stack`], so a finite but deeply nested value
//! compares without overflowing the native stack. Value graphs are acyclic
//! by construction, so recursion always bottoms out.
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: passthrough; the runtime manages its own stack.

/// Remaining stack below which a new segment is allocated (128KB).
///
/// One equality frame plus a member walk frame is a few hundred bytes, so
/// this leaves room for several hundred levels before the next check.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_closure_result() {
        assert_eq!(ensure_sufficient_stack(|| 7), 7);
    }

    #[test]
    fn test_deep_recursion() {
        fn depth(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
        }

        assert_eq!(depth(100_000), 100_000);
    }
}
