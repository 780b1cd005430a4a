/// Runs `f`, first growing the native stack if little of it is left.
///
/// Wraps the recursive entry points of the parser and the evaluator: user
/// function calls, statements and expressions. Nesting is then bounded by
/// memory and the call-depth limit rather than by the thread's stack.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Minimum stack space to keep available (100KB red zone).
    const RED_ZONE: usize = 100 * 1024;

    /// Stack space to allocate when growing (1MB).
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
