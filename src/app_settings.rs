// Copyright © 2025 Nipun Kumar

use serde::{Deserialize, Serialize};

use crate::paging::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

/// Backend address used when nothing has been saved yet. Browser builds talk to
/// their own origin so the dev-server proxy can forward `/api/`.
#[cfg(target_arch = "wasm32")]
pub const DEFAULT_API_BASE: &str = "";
#[cfg(not(target_arch = "wasm32"))]
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5030";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub id: Option<u32>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            id: Some(1),
            api_base: default_api_base(),
            page_size: default_page_size(),
        }
    }
}

impl AppSettings {
    /// Normalizes values that may have been hand-edited or saved by an older
    /// build.
    pub fn sanitized(self) -> Self {
        let page_size = if PAGE_SIZE_OPTIONS.contains(&self.page_size) {
            self.page_size
        } else {
            DEFAULT_PAGE_SIZE
        };
        Self {
            id: self.id.or(Some(1)),
            api_base: self.api_base.trim().trim_end_matches('/').to_string(),
            page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let s: AppSettings = serde_json::from_str(r#"{ "id": 1 }"#).unwrap();
        assert_eq!(s.api_base, DEFAULT_API_BASE);
        assert_eq!(s.page_size, 10);
    }

    #[test]
    fn sanitized_rejects_unknown_page_sizes() {
        let s = AppSettings {
            id: None,
            api_base: " http://localhost:5030/ ".into(),
            page_size: 7,
        }
        .sanitized();
        assert_eq!(s.page_size, 10);
        assert_eq!(s.api_base, "http://localhost:5030");
        assert_eq!(s.id, Some(1));

        let s = AppSettings {
            page_size: 200,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(s.page_size, 200);
    }
}
