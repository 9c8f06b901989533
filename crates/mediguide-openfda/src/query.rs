//! Search expression shapes for the label endpoint.
//!
//! The fallback chain is an explicit ordered list of generators rather than
//! branching at call sites, so widening a search stays auditable: every
//! candidate term runs through [`QueryShape::ALL`] in priority order.
//!
//! Clauses are separated with spaces; the query serializer form-encodes
//! them as `+`, the boolean separator the endpoint expects.

/// One query shape against the label database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryShape {
    /// Quoted exact brand-or-generic-name match.
    Exact,
    /// Unquoted, broader brand-or-generic-name match.
    Broad,
    /// Substance-name match.
    Substance,
}

impl QueryShape {
    /// Fixed priority order tried for every candidate term.
    pub const ALL: [QueryShape; 3] = [QueryShape::Exact, QueryShape::Broad, QueryShape::Substance];

    /// Build the `search` expression for a candidate term.
    pub fn expression(&self, term: &str) -> String {
        match self {
            QueryShape::Exact => format!(
                "(openfda.brand_name:\"{term}\" openfda.generic_name:\"{term}\")"
            ),
            QueryShape::Broad => {
                format!("openfda.brand_name:{term} openfda.generic_name:{term}")
            }
            QueryShape::Substance => format!("openfda.substance_name:{term}"),
        }
    }
}

/// Prefix expression backing the suggestion lookup.
pub fn prefix_expression(term: &str) -> String {
    format!("openfda.brand_name:{term}*")
}
