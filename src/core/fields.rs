use std::collections::HashMap;

/// Flat view over a submitted form body. Scalar fields keep the last
/// value seen; the repeated `interests[]` key accumulates. All values
/// are stored trimmed.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    values: HashMap<String, String>,
    interests: Vec<String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an `application/x-www-form-urlencoded` body.
    pub fn parse(body: &[u8]) -> Self {
        let mut fields = Self::new();
        for (name, value) in url::form_urlencoded::parse(body) {
            fields.insert(&name, value.into_owned());
        }
        fields
    }

    pub fn insert(&mut self, name: &str, value: String) {
        let value = value.trim().to_string();
        if name == "interests[]" || name == "interests" {
            if !value.is_empty() {
                self.interests.push(value);
            }
        } else {
            self.values.insert(name.to_string(), value);
        }
    }

    /// Trimmed field value; empty string when absent.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }
}
