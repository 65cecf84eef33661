//! Stack growth guard for recursive descent.
//!
//! Both the Pratt parser and the tree-walking evaluator recurse once per
//! nesting level of the source program, so a deeply nested expression such
//! as `((((...))))` or `-(-(-(...)))` maps directly onto host stack depth.
//! Every recursive entry point wraps its body in [`ensure_sufficient_stack`],
//! which switches to a freshly allocated segment when the current one runs low.
//!
//! On `wasm32` the guard is a passthrough.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Nested {
        Leaf(i64),
        Negate(Box<Nested>),
    }

    fn build(depth: usize) -> Nested {
        let mut node = Nested::Leaf(7);
        for _ in 0..depth {
            node = Nested::Negate(Box::new(node));
        }
        node
    }

    fn eval(node: &Nested) -> i64 {
        ensure_sufficient_stack(|| match node {
            Nested::Leaf(n) => *n,
            Nested::Negate(inner) => -eval(inner),
        })
    }

    fn teardown(node: Nested) {
        // Iterative drop; the default recursive drop would overflow at depth.
        let mut current = node;
        while let Nested::Negate(inner) = current {
            current = *inner;
        }
    }

    #[test]
    fn test_shallow_nesting() {
        let tree = build(3);
        assert_eq!(eval(&tree), -7);
        teardown(tree);
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let tree = build(200_000);
        assert_eq!(eval(&tree), 7);
        teardown(tree);
    }

    #[test]
    fn test_passes_result_through() {
        let result: Result<u8, String> = ensure_sufficient_stack(|| Err("boom".to_string()));
        assert_eq!(result, Err("boom".to_string()));
    }
}
