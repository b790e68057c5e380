//! Pieces shared by the server, the sync client and the binaries:
//! wire types, logging setup and startup environment checks.

pub mod types;
pub mod utils;
pub mod env;
