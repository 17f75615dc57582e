pub mod schema;
pub mod user;

pub use schema::{ModelSchema, SchemaValidationError, SchemaValidationMode, ValidationViolation};
pub use user::{
    user_schema, NewUser, User, UserSchemas, ValidatedUser, ValidatedUsers,
    NAME_MAX_LEN, PHONE_MAX_LEN,
};
