use std::path::PathBuf;

#[derive(Debug)]
pub struct CheckReport {
    pub path: PathBuf,
    pub cards: usize,
    pub errors: Vec<String>,
}

impl CheckReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
