//! Record model.
//!
//! # Data Flow
//! ```text
//! caller data / ScratchPool
//!     → fields.rs (copy, merge, errors, base fields)
//!     → level.rs (severity resolution)
//!     → emit (gate + write)
//!     → ScratchPool (cleared, reused)
//! ```

pub mod fields;
pub mod level;
pub mod pool;

pub use fields::Fields;
pub use level::{rank_name, Level};
pub use pool::{ScratchGuard, ScratchPool};
