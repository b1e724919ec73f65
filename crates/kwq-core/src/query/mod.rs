//! Query envelope
//!
//! A [`Query`] carries a keyword expression together with the bookkeeping a
//! profile or product server expects alongside it: header attributes, result
//! mode, propagation settings, the compiled where/select sets and the
//! results gathered for it.
//!
//! # Example
//!
//! ```rust
//! use kwq_core::query::Query;
//!
//! let query = Query::new("lat > 3 and lon < -92.6").unwrap();
//! assert_eq!(query.wheres.len(), 7);
//! assert_eq!(query.result_mode_id, "ATTRIBUTE");
//! ```

mod element;
mod result;

pub use element::{QueryElement, Role};
pub use result::QueryResult;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::QueryError;
use crate::parser::{self, ParserConfig};

/// Header of a query: data dictionary in use, status, revision and so on
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryHeader {
    pub id: String,
    pub title: String,
    pub desc: String,
    pub query_type: String,
    pub status: String,
    pub security: String,
    pub rev: String,
    pub data_dict: String,
}

impl Default for QueryHeader {
    fn default() -> Self {
        Self {
            id: "UNKNOWN".to_string(),
            title: "UNKNOWN".to_string(),
            desc: "UNKNOWN".to_string(),
            query_type: "QUERY".to_string(),
            status: "ACTIVE".to_string(),
            security: "UNKNOWN".to_string(),
            rev: "2005-10-01 SCK v0.0.0 Under Development".to_string(),
            data_dict: "UNKNOWN".to_string(),
        }
    }
}

/// A keyword query plus its header and compiled element sets.
///
/// Equality and ordering look at the header, result and propagation
/// settings, accepted MIME types, the select, from and where sets, and
/// finally the result set. The keyword text itself is not compared.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    pub header: QueryHeader,
    pub result_mode_id: String,
    pub prop_type: String,
    pub prop_levels: String,
    pub max_results: u32,
    pub mime_accept: Vec<String>,
    pub keyword_query: String,
    pub selects: Vec<QueryElement>,
    pub froms: Vec<QueryElement>,
    pub wheres: Vec<QueryElement>,
    pub result_set: QueryResult,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            header: QueryHeader::default(),
            result_mode_id: "ATTRIBUTE".to_string(),
            prop_type: "BROADCAST".to_string(),
            prop_levels: "N/A".to_string(),
            max_results: 1,
            mime_accept: Vec::new(),
            keyword_query: String::new(),
            selects: Vec::new(),
            froms: Vec::new(),
            wheres: Vec::new(),
            result_set: QueryResult::default(),
        }
    }
}

impl Query {
    /// Create a query from a keyword expression, compiling it into the
    /// where and select sets.
    pub fn new(keyword_query: impl Into<String>) -> Result<Self, QueryError> {
        Self::with_config(keyword_query, &ParserConfig::default())
    }

    /// Create with custom parser configuration
    pub fn with_config(
        keyword_query: impl Into<String>,
        config: &ParserConfig,
    ) -> Result<Self, QueryError> {
        let keyword_query = keyword_query.into();
        let (wheres, selects) = parser::parse_with_config(&keyword_query, config)?.into_parts();
        Ok(Self {
            keyword_query,
            wheres,
            selects,
            ..Self::default()
        })
    }

    /// Keep the keyword expression as text without compiling it
    pub fn unparsed(keyword_query: impl Into<String>) -> Self {
        Self {
            keyword_query: keyword_query.into(),
            ..Self::default()
        }
    }

    pub fn with_header(mut self, header: QueryHeader) -> Self {
        self.header = header;
        self
    }

    pub fn with_result_mode(mut self, result_mode_id: impl Into<String>) -> Self {
        self.result_mode_id = result_mode_id.into();
        self
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_mime_accept(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_accept.push(mime_type.into());
        self
    }

    pub fn to_json(&self) -> Result<String, QueryError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, QueryError> {
        Ok(serde_json::from_str(json)?)
    }

    #[allow(clippy::type_complexity)]
    fn comparison_key(
        &self,
    ) -> (
        &QueryHeader,
        &str,
        &str,
        &str,
        u32,
        &[String],
        &[QueryElement],
        &[QueryElement],
        &[QueryElement],
        &QueryResult,
    ) {
        (
            &self.header,
            &self.result_mode_id,
            &self.prop_type,
            &self.prop_levels,
            self.max_results,
            &self.mime_accept,
            &self.selects,
            &self.froms,
            &self.wheres,
            &self.result_set,
        )
    }
}

impl PartialEq for Query {
    fn eq(&self, other: &Self) -> bool {
        self.comparison_key() == other.comparison_key()
    }
}

impl Eq for Query {}

impl Ord for Query {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comparison_key().cmp(&other.comparison_key())
    }
}

impl PartialOrd for Query {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpressionParseError;

    #[test]
    fn test_defaults() {
        let q = Query::default();
        assert_eq!(q.header, QueryHeader::default());
        assert_eq!(q.result_mode_id, "ATTRIBUTE");
        assert_eq!(q.prop_type, "BROADCAST");
        assert_eq!(q.prop_levels, "N/A");
        assert_eq!(q.max_results, 1);
        assert!(q.mime_accept.is_empty());
        assert!(q.keyword_query.is_empty());
        assert!(q.wheres.is_empty() && q.selects.is_empty() && q.froms.is_empty());
        assert!(q.result_set.is_empty());
    }

    #[test]
    fn test_header_defaults() {
        let h = QueryHeader::default();
        assert_eq!(h.id, "UNKNOWN");
        assert_eq!(h.query_type, "QUERY");
        assert_eq!(h.status, "ACTIVE");
        assert_eq!(h.rev, "2005-10-01 SCK v0.0.0 Under Development");
        assert_eq!(h.data_dict, "UNKNOWN");
    }

    #[test]
    fn test_new_compiles_keyword_query() {
        let q = Query::new("x = 1 and RETURN = y").unwrap();
        assert_eq!(q.keyword_query, "x = 1 and RETURN = y");
        assert_eq!(
            q.wheres,
            vec![
                QueryElement::elem_name("x"),
                QueryElement::literal("1"),
                QueryElement::relop("EQ"),
            ]
        );
        assert_eq!(q.selects, vec![QueryElement::elem_name("y")]);
    }

    #[test]
    fn test_new_propagates_parse_errors() {
        let err = Query::new("LAT ~ fish").unwrap_err();
        assert!(matches!(
            err,
            QueryError::Parse(ExpressionParseError::UnknownRelationalOperator { .. })
        ));
    }

    #[test]
    fn test_unparsed_keeps_text_only() {
        let q = Query::unparsed("((broken");
        assert_eq!(q.keyword_query, "((broken");
        assert!(q.wheres.is_empty());
    }

    #[test]
    fn test_comparisons() {
        let a = Query::new("lat > 3 and lon < -92.6").unwrap();
        let b = Query::new("lat > 3 and lon < -92.6").unwrap();
        let c = Query::new("lat < 3 and lon > -92.6").unwrap();
        assert_eq!(a, b);
        assert!(a <= b && a >= b);
        // RELOP "GT" sorts before "LT"
        assert!(a < c);
        assert!(c > a);
        assert_ne!(a, c);
    }

    #[test]
    fn test_result_set_compared_last() {
        let a = Query::new("x = 1").unwrap();
        let mut b = a.clone();
        b.result_set.push(serde_json::json!("row"));
        assert_ne!(a, b);
        assert!(a < b);

        // Earlier keys win over the result set
        let c = Query::new("x = 2").unwrap();
        assert!(b < c);

        b.result_set.clear();
        assert_eq!(a, b);
    }

    #[test]
    fn test_keyword_text_not_compared() {
        let a = Query::new("x = 1").unwrap();
        let b = Query::new("x  =  1").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_builders() {
        let q = Query::unparsed("")
            .with_result_mode("PROFILE")
            .with_max_results(20)
            .with_mime_accept("text/plain")
            .with_mime_accept("*/*");
        assert_eq!(q.result_mode_id, "PROFILE");
        assert_eq!(q.max_results, 20);
        assert_eq!(q.mime_accept, vec!["text/plain", "*/*"]);
    }

    #[test]
    fn test_json_round_trip_preserves_elements() {
        let q = Query::new("not (a LIKE 'b%' or c isNot null)")
            .unwrap()
            .with_header(QueryHeader {
                title: "nulls".to_string(),
                ..QueryHeader::default()
            });
        let back = Query::from_json(&q.to_json().unwrap()).unwrap();
        assert_eq!(back, q);
        assert_eq!(back.keyword_query, q.keyword_query);
    }
}
