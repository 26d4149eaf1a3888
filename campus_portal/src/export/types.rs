/// Pairing of a data-access key and a human-readable title, used to drive
/// tabular export. Keys may be dotted paths into nested records
/// (e.g. `course.code`).
#[derive(Debug, Clone)]
pub struct ColumnDescriptor {
    pub key: String,
    pub title: String,
}

impl ColumnDescriptor {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
        }
    }
}
