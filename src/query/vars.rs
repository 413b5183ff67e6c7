//! Query variables.

use serde::{Deserialize, Serialize};

/// Query variables the resolver reads.
///
/// A variable counts as set whenever it is present, including a value of `0`
/// (midnight, minute zero).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryVars {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthnum: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    /// Week of the year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    /// Post type of a post type archive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_type: Option<String>,
    /// User id of an author archive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<u64>,
}

impl QueryVars {
    /// Time archive: any of hour, minute or second is set.
    pub fn is_time(&self) -> bool {
        self.hour.is_some() || self.minute.is_some() || self.second.is_some()
    }

    pub fn is_day(&self) -> bool {
        self.day.is_some()
    }

    pub fn is_week(&self) -> bool {
        self.w.is_some()
    }

    pub fn is_month(&self) -> bool {
        self.monthnum.is_some()
    }

    pub fn is_year(&self) -> bool {
        self.year.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_vars_match_no_granularity() {
        let vars = QueryVars::default();
        assert!(!vars.is_time());
        assert!(!vars.is_day());
        assert!(!vars.is_week());
        assert!(!vars.is_month());
        assert!(!vars.is_year());
    }

    #[test]
    fn zero_counts_as_set() {
        let vars = QueryVars {
            minute: Some(0),
            ..Default::default()
        };
        assert!(vars.is_time());
    }

    #[test]
    fn second_alone_is_time() {
        let vars = QueryVars {
            second: Some(15),
            ..Default::default()
        };
        assert!(vars.is_time());
    }

    #[test]
    fn deserializes_partial_yaml() {
        let vars: QueryVars = serde_yaml::from_str("year: 2024\nmonthnum: 5").unwrap();
        assert!(vars.is_year());
        assert!(vars.is_month());
        assert!(!vars.is_day());
    }
}
