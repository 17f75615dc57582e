pub mod bench;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod runner;
pub mod storage;

pub use bench::{encode_plain, encode_validated, run_plain, run_validated, PathKind, PathTiming};
pub use config::Config;
pub use error::{BenchError, BenchResult};
pub use model::{NewUser, SchemaValidationMode, User, UserSchemas, ValidatedUser, ValidatedUsers};
pub use report::{speed_ratio, BenchReport};
pub use runner::run;
pub use storage::TableName;
