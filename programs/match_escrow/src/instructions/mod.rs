pub mod initialize_match;
pub mod deposit;
pub mod end_match;
pub mod distribute_prizes;
pub mod emit_match_snapshot;

pub use initialize_match::*;
pub use deposit::*;
pub use end_match::*;
pub use distribute_prizes::*;
pub use emit_match_snapshot::*;
