pub mod kind;
pub mod version;

pub use kind::BumpKind;
pub use version::Version;
