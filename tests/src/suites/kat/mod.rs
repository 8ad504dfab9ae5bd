//! Re-export the public surface so callers can do
//! `use pwcrypt_tests::suites::kat::*;`.

pub mod engine;
pub mod loader;
pub mod model;
pub mod runner;

pub use engine::*;
pub use error::*;
pub use loader::*;
pub use model::*;
pub use runner::*;
