use serde::{Deserialize, Serialize};

/// A person whose age is checked against the accepted range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    name: String,
    age: u8,
}

impl UserRecord {
    pub fn new(name: impl Into<String>, age: u8) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_name_and_age() {
        let record = UserRecord::new("Alice", 25);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Alice", "age": 25}));

        let parsed: UserRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, record);
    }
}
