// crates/citytree-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a [`CityTree`](crate::CityTree).
///
/// `count` is the running insert counter, `nodes` the number of cities
/// actually stored. They differ once duplicates or conflicts were offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    pub count: usize,
    pub nodes: usize,
    /// Longest root-to-leaf path in nodes.
    pub height: usize,
}

/// Renders a listing as a pretty-printed JSON array.
#[cfg(feature = "json")]
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> crate::error::Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| crate::error::CityError::Json(e.to_string()))
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use crate::City;

    #[test]
    fn listing_renders_as_json_array() {
        let cities = vec![City::new("Boston", "USA", Some("MA"), 50).unwrap()];
        let json = to_json_pretty(&cities).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "Boston");
        assert_eq!(value[0]["population"], 50);
    }
}
