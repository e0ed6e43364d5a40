use crate::domain::model::UserRecord;

/// The fixed records checked on every run, in output order.
pub fn sample_records() -> Vec<UserRecord> {
    vec![
        UserRecord::new("Alice", 25),
        UserRecord::new("Bob", 15),
        UserRecord::new("Charlie", 130),
    ]
}
