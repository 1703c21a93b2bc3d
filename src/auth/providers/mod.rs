//! Auth provider implementations.
//!
//! `LocalAuthProvider` keeps hashed credentials in process. It stands in for a
//! hosted auth service in the native front end and in tests.

pub mod local;

/// In-process provider backed by salted password hashes.
pub use local::{Credential, LocalAuthProvider};
