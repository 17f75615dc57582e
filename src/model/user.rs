//! User record shapes
//!
//! `User` is the plain record: whatever the driver hands back goes straight
//! into the struct. `ValidatedUser` can only be built through a schema check,
//! so `ValidatedUsers` can wrap a result list without checking it again.

use super::schema::{ModelSchema, SchemaValidationMode};
use crate::error::BenchResult;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Declared length of the `name` column
pub const NAME_MAX_LEN: usize = 30;
/// Declared length of the `phone_no` column
pub const PHONE_MAX_LEN: usize = 100;

/// Plain row from the users table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub phone_no: Option<String>,
}

/// Row to be inserted; `id` is assigned by storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub phone_no: Option<String>,
}

/// JSON Schema describing one user record
pub fn user_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string", "maxLength": NAME_MAX_LEN },
            "phone_no": {
                "anyOf": [
                    { "type": "string", "maxLength": PHONE_MAX_LEN },
                    { "type": "null" }
                ]
            },
            "id": { "type": ["integer", "null"] }
        },
        "required": ["name", "phone_no", "id"],
        "additionalProperties": false
    })
}

/// Compiled schema for user records
#[derive(Debug)]
pub struct UserSchemas {
    pub record: ModelSchema,
}

impl UserSchemas {
    pub fn compile(mode: SchemaValidationMode) -> BenchResult<Self> {
        Ok(Self {
            record: ModelSchema::new("User", user_schema(), mode)?,
        })
    }

    pub fn mode(&self) -> SchemaValidationMode {
        self.record.mode()
    }
}

/// User record validated on construction.
///
/// Field order is the declaration order of the model, which is also the key
/// order of its JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedUser {
    name: String,
    phone_no: Option<String>,
    id: Option<i32>,
}

impl ValidatedUser {
    pub fn new(
        name: String,
        phone_no: Option<String>,
        id: Option<i32>,
        schemas: &UserSchemas,
    ) -> BenchResult<Self> {
        let document = json!({
            "name": name,
            "phone_no": phone_no,
            "id": id,
        });
        schemas.record.validate(&document)?;

        Ok(Self { name, phone_no, id })
    }

    /// Re-validate a plain row
    pub fn from_record(user: User, schemas: &UserSchemas) -> BenchResult<Self> {
        Self::new(user.name, user.phone_no, Some(user.id), schemas)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_no(&self) -> Option<&str> {
        self.phone_no.as_deref()
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }
}

/// List-of-model wrapper.
///
/// Every element already passed validation when it was built, so wrapping
/// is free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUsers {
    users: Vec<ValidatedUser>,
}

impl ValidatedUsers {
    pub fn new(users: Vec<ValidatedUser>) -> Self {
        Self { users }
    }

    /// Export the wrapped list as JSON text
    pub fn dump_json(&self) -> BenchResult<String> {
        Ok(serde_json::to_string(&self.users)?)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenchError;

    fn strict() -> UserSchemas {
        UserSchemas::compile(SchemaValidationMode::Strict).unwrap()
    }

    #[test]
    fn test_plain_user_serializes_null_phone() {
        let user = User {
            id: 7,
            name: "Ada Lovelace".to_string(),
            phone_no: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"id":7,"name":"Ada Lovelace","phone_no":null}"#);
    }

    #[test]
    fn test_validated_user_key_order() {
        let user = ValidatedUser::new(
            "Ada Lovelace".to_string(),
            Some("555-010-0199".to_string()),
            Some(7),
            &strict(),
        )
        .unwrap();
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Ada Lovelace","phone_no":"555-010-0199","id":7}"#
        );
    }

    #[test]
    fn test_validated_user_accepts_boundaries() {
        let schemas = strict();
        let name = "n".repeat(NAME_MAX_LEN);
        let phone = "1".repeat(PHONE_MAX_LEN);
        assert!(ValidatedUser::new(name, Some(phone), None, &schemas).is_ok());
    }

    #[test]
    fn test_validated_user_rejects_long_name() {
        let result = ValidatedUser::new("n".repeat(NAME_MAX_LEN + 1), None, Some(1), &strict());
        match result {
            Err(BenchError::SchemaValidation(msg)) => assert!(msg.contains("/name")),
            other => panic!("expected schema validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validated_user_rejects_long_phone() {
        let result = ValidatedUser::new(
            "Ada".to_string(),
            Some("1".repeat(PHONE_MAX_LEN + 1)),
            Some(1),
            &strict(),
        );
        assert!(matches!(result, Err(BenchError::SchemaValidation(_))));
    }

    #[test]
    fn test_lenient_accepts_long_name() {
        let schemas = UserSchemas::compile(SchemaValidationMode::Lenient).unwrap();
        let user =
            ValidatedUser::new("n".repeat(NAME_MAX_LEN + 10), None, Some(1), &schemas).unwrap();
        assert_eq!(user.name().len(), NAME_MAX_LEN + 10);
    }

    #[test]
    fn test_from_record() {
        let user = User {
            id: 3,
            name: "Grace Hopper".to_string(),
            phone_no: Some("(555)010-7788".to_string()),
        };
        let validated = ValidatedUser::from_record(user, &strict()).unwrap();
        assert_eq!(validated.id(), Some(3));
        assert_eq!(validated.name(), "Grace Hopper");
        assert_eq!(validated.phone_no(), Some("(555)010-7788"));
    }

    #[test]
    fn test_list_wrapper_dump_json() {
        let schemas = strict();
        let users = vec![
            ValidatedUser::new("A".to_string(), None, Some(1), &schemas).unwrap(),
            ValidatedUser::new("B".to_string(), Some("1".to_string()), Some(2), &schemas)
                .unwrap(),
        ];
        let wrapped = ValidatedUsers::new(users);
        assert_eq!(wrapped.len(), 2);
        assert_eq!(
            wrapped.dump_json().unwrap(),
            r#"[{"name":"A","phone_no":null,"id":1},{"name":"B","phone_no":"1","id":2}]"#
        );
    }

    #[test]
    fn test_empty_list_wrapper() {
        let wrapped = ValidatedUsers::new(Vec::new());
        assert!(wrapped.is_empty());
        assert_eq!(wrapped.dump_json().unwrap(), "[]");
    }
}
