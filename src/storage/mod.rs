pub mod pool;
pub mod schema;
pub mod seed;
pub mod table;
pub mod users;

pub use pool::connect;
pub use schema::{create_schema, ensure_schema};
pub use seed::{generate_users, insert_users, seed_users};
pub use table::TableName;
pub use users::{count_users, fetch_users};
