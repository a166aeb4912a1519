//! Centralized limits for the scanner and parser.

/// Maximum bracket nesting the parser descends into before giving up.
///
/// Type expressions and balanced runs recurse per nesting level; input
/// nested deeper than this is reported as a parse error instead of
/// overflowing the stack. The Go toolchain accepts far deeper nesting, so
/// valid but pathologically nested Go is rejected here.
pub const MAX_NESTING_DEPTH: u32 = 1000;

/// Average source bytes per token, used to pre-size the token buffer.
pub const SOURCE_BYTES_PER_TOKEN_HINT: usize = 4;
