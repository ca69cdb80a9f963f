pub mod initialize;
pub mod mint;
pub mod verify;
pub mod update_metadata;
pub mod revoke;

pub use initialize::*;
pub use mint::*;
pub use verify::*;
pub use update_metadata::*;
pub use revoke::*;
