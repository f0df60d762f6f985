//! Centralized limits and thresholds for tree walks.
//!
//! Every recursive walk over a node tree in this workspace is bounded by one of
//! these constants, so a pathological input degrades into an error instead of
//! a stack overflow.
//!
//! # Categories
//!
//! - **Recursion Depths**: how deep a walk may descend before it bails out
//! - **Stack Growth**: red zone and segment size handed to `stacker`

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Default maximum nesting depth for S-expression conversion.
///
/// A leaf node has depth 1; each unary, binary, sequence or function node adds
/// one level above its deepest child. Conversion of a tree deeper than this
/// returns `SexpError::DepthExceeded` instead of recursing further. The
/// converter grows its stack on demand (see [`STACK_RED_ZONE`]), so this limit
/// is about bounding memory, not about the size of the calling thread's stack.
///
/// # JavaScript example
///
/// ```javascript
/// // Deeply nested parenthesized expressions:
/// x = ((((((((((((((((((((((((((((((1))))))))))))))))))))))))))))));
///
/// // Long left-associative chains nest one level per operator:
/// s = a + b + c + d + e + f + g /* ... 10_000 operands ... */;
/// ```
pub const MAX_SEXP_DEPTH: u32 = 10_000;

// =============================================================================
// Stack Growth
// =============================================================================

/// Remaining stack (in bytes) below which a recursive walk allocates a new
/// stack segment before descending.
pub const STACK_RED_ZONE: usize = 64 * 1024;

/// Size (in bytes) of each stack segment allocated when the red zone is hit.
pub const STACK_GROW_SIZE: usize = 1024 * 1024;
