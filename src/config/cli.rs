use crate::domain::model::ProjectSummary;
use crate::utils::error::Result;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Where project rows are read from: a file path or `-` for stdin.
#[derive(Debug, Clone)]
pub struct InputSource {
    location: String,
}

impl InputSource {
    pub fn new(location: String) -> Self {
        Self { location }
    }

    pub fn is_stdin(&self) -> bool {
        self.location == "-"
    }

    pub fn read_raw(&self) -> Result<String> {
        if self.is_stdin() {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            return Ok(buffer);
        }

        Ok(fs::read_to_string(Path::new(&self.location))?)
    }

    pub fn read_projects(&self) -> Result<Vec<ProjectSummary>> {
        let raw = self.read_raw()?;
        let rows: Vec<ProjectSummary> = serde_json::from_str(&raw)?;
        tracing::debug!(count = rows.len(), source = %self.location, "Read project rows");
        Ok(rows)
    }
}
