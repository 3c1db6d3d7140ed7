pub mod checksum;
pub mod env_var;
pub mod file_exists;
pub mod http;
pub mod registry;
pub mod types;

pub use checksum::FileChecksumCheck;
pub use env_var::EnvVarCheck;
pub use file_exists::FileExistsCheck;
pub use http::HttpReachableCheck;
pub use registry::{CheckRegistry, KindEntry, builtin_registry};
pub use types::{Check, CheckFailure, CheckRecord};
