pub mod pull;
pub mod push;
pub mod version;

pub use pull::Pull;
pub use push::Push;
pub use version::Version;
