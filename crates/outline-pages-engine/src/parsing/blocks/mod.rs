//! # Block Parsing
//!
//! Two-phase block parsing over tab-indented outlines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    holding local facts (bullet indent, property line)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` groups lines into blocks and
//!    the header, then `tree` links parents, children and siblings
//!
//! ## Modules
//!
//! - **`types`**: `Block`, the arena entry for one outline node
//! - **`kinds`**: Syntax with owned delimiters (Bullet, Property, BlockRef, BlockQuote)
//! - **`classify`**: `OutlineLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` collecting lines into blocks
//! - **`tree`**: stack-based relation linking
//!
//! ## Key Invariants
//!
//! - Block numbers follow the order bullets appear in the source
//! - Relations are arena indices; a child's `parent` always lists it in `children`
//! - Sibling links only join blocks of equal indent

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod tree;
pub mod types;

pub use builder::{BlockBuilder, BuiltBlocks};
pub use classify::{LineClass, OutlineLineClassifier};
pub use types::{Block, BlockNum};
