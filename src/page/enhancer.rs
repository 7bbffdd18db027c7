use std::collections::BTreeMap;

use serde::Serialize;

/// Columns holding team names; the widget must not sort on these.
const HOME_COLUMN: u8 = 3;
const AWAY_COLUMN: u8 = 4;

/// Declarative configuration for the client-side table widget.
///
/// Serialized to JSON and embedded in the page; the widget applies it
/// once the document has loaded. Purely presentational.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancerConfig {
    /// Initial sort as `[column, direction]` pairs; direction 0 is ascending.
    pub sort_list: Vec<[u8; 2]>,
    pub paging: bool,
    /// Per-column overrides, keyed by column index.
    pub headers: BTreeMap<u8, ColumnOptions>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColumnOptions {
    pub sorter: bool,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(HOME_COLUMN, ColumnOptions { sorter: false });
        headers.insert(AWAY_COLUMN, ColumnOptions { sorter: false });
        Self {
            sort_list: vec![[0, 0]],
            paging: false,
            headers,
        }
    }
}

impl EnhancerConfig {
    /// Whether the widget will offer sorting on the given column.
    pub fn sortable(&self, column: u8) -> bool {
        self.headers.get(&column).map_or(true, |o| o.sorter)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disables_sorting_on_exactly_home_and_away() {
        let config = EnhancerConfig::default();
        let sortable: Vec<bool> = (0..5).map(|c| config.sortable(c)).collect();
        assert_eq!(sortable, vec![true, true, true, false, false]);
    }

    #[test]
    fn defaults_to_first_column_ascending_without_paging() {
        let config = EnhancerConfig::default();
        assert_eq!(config.sort_list, vec![[0, 0]]);
        assert!(!config.paging);
    }

    #[test]
    fn serializes_to_the_widget_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&EnhancerConfig::default().to_json()).unwrap();
        assert_eq!(json["sortList"], serde_json::json!([[0, 0]]));
        assert_eq!(json["paging"], serde_json::json!(false));
        assert_eq!(json["headers"]["3"]["sorter"], serde_json::json!(false));
        assert_eq!(json["headers"]["4"]["sorter"], serde_json::json!(false));
        assert!(json["headers"].get("0").is_none());
    }
}
