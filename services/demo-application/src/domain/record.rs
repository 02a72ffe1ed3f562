#[derive(Debug, serde::Serialize)]
pub struct Record {
    id: usize,
    label: String,
}

impl Record {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            label: format!("record-{id:06}"),
        }
    }
}
