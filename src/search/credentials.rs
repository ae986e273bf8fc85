use serde::{
    Deserialize,
    Serialize,
};

use crate::persistence::{
    data_file_exists,
    get_data_file_path,
    load_json_or_default,
    save_json,
};

const CREDENTIALS_FILE: &str = "credentials.json";

/// Ordered list of API keys for the image-search collaborator, tried in
/// sequence when a key runs out of quota. Loaded once at startup; never
/// refreshed at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialPool {
    pub api_keys: Vec<String>,
}

impl CredentialPool {
    /// Loads the pool from the app data directory. On first run a template
    /// file is written so the user has a place to paste keys.
    pub fn load() -> Self {
        if !data_file_exists(CREDENTIALS_FILE) {
            let template = CredentialPool::default();
            if let Err(e) = save_json(&template, CREDENTIALS_FILE) {
                eprintln!("Failed to write credentials template: {}", e);
            }
        }

        let pool = load_json_or_default::<CredentialPool>(CREDENTIALS_FILE);
        if pool.is_empty() {
            eprintln!(
                "No API keys configured. Add keys to {}",
                get_data_file_path(CREDENTIALS_FILE).display()
            );
        }

        pool
    }

    pub fn keys(&self) -> &[String] {
        &self.api_keys
    }

    pub fn is_empty(&self) -> bool {
        self.api_keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.api_keys.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_ordered_key_list() {
        let pool: CredentialPool =
            serde_json::from_str(r#"{ "api_keys": ["key-a", "key-b", "key-c"] }"#).unwrap();
        assert_eq!(pool.keys(), ["key-a", "key-b", "key-c"]);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn empty_template_round_trips() {
        let json = serde_json::to_string(&CredentialPool::default()).unwrap();
        let pool: CredentialPool = serde_json::from_str(&json).unwrap();
        assert!(pool.is_empty());
    }
}
