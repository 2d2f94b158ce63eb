//! treeq - structural equality for expression trees
//!
//! Decides whether two expression trees are structurally equivalent and
//! hashes them consistently with that equivalence, so trees can be used as
//! cache and dictionary keys (deduplicating logically identical queries,
//! memoizing compiled delegates, ...).
//!
//! # Architecture
//!
//! ```text
//! b ──flatten──▶ candidate queue ─┐
//!                                 ├─▶ compare ─▶ Result<(), Mismatch>
//! a ──pre-order walk──────────────┘
//!
//! x ──hash_tree──▶ u64        (compare(a, b) ⇒ hash(a) == hash(b))
//! ```
//!
//! - [`flatten`]: pre-order listing of a tree's nodes
//! - [`compare`]: lock-step structural comparison against that listing
//! - [`hash`]: hash folding exactly the attributes comparison looks at
//! - [`comparer`]: `equals` / `hash_of` façade and a `HashMap` key wrapper
//!
//! Only syntactic structure is compared: `a + b` and `b + a` differ.

pub mod compare;
pub mod comparer;
pub mod flatten;
pub mod hash;

pub use compare::{check_structural_eq, structurally_equal, Attribute, Mismatch};
pub use comparer::{StructuralComparer, StructuralKey};
pub use flatten::{flatten, FlattenedTree};
pub use hash::hash_tree;

pub use treeq_ir::{ExprArena, ExprRef, NodeId};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=treeq=debug` (first mismatch of each comparison)
/// or `RUST_LOG=treeq=trace` (every comparison).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
