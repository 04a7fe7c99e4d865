//! Audience segments and the deep links generated for them.

use std::fmt;

/// One of the three fixed audience categories.
///
/// The declaration order is the export order: sales, marketing, IT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Sales,
    Marketing,
    It,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Sales, Segment::Marketing, Segment::It];

    /// 1-based position used in workflow file names.
    pub fn part(self) -> u8 {
        match self {
            Segment::Sales => 1,
            Segment::Marketing => 2,
            Segment::It => 3,
        }
    }

    /// Uppercase label used in workflow file names.
    pub fn label(self) -> &'static str {
        match self {
            Segment::Sales => "SALES",
            Segment::Marketing => "MARKETING",
            Segment::It => "IT",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Segment::Sales => "Sales",
            Segment::Marketing => "Marketing",
            Segment::It => "IT",
        };
        f.write_str(name)
    }
}

/// Opaque identifier of a saved organization search in Apollo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchListId(String);

impl SearchListId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for SearchListId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for SearchListId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fully substituted deep links, one per segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTriple {
    pub sales: String,
    pub marketing: String,
    pub it: String,
}

impl LinkTriple {
    pub fn get(&self, segment: Segment) -> &str {
        match segment {
            Segment::Sales => &self.sales,
            Segment::Marketing => &self.marketing,
            Segment::It => &self.it,
        }
    }
}

/// Links produced for one batch, tagged with its 1-based batch number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchLinks {
    pub batch: usize,
    pub links: LinkTriple,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_order_and_parts() {
        let parts: Vec<u8> = Segment::ALL.iter().map(|s| s.part()).collect();
        let labels: Vec<&str> = Segment::ALL.iter().map(|s| s.label()).collect();

        assert_eq!(parts, vec![1, 2, 3]);
        assert_eq!(labels, vec!["SALES", "MARKETING", "IT"]);
    }

    #[test]
    fn test_link_triple_get() {
        let links = LinkTriple {
            sales: "A".to_string(),
            marketing: "B".to_string(),
            it: "C".to_string(),
        };

        assert_eq!(links.get(Segment::Sales), "A");
        assert_eq!(links.get(Segment::Marketing), "B");
        assert_eq!(links.get(Segment::It), "C");
    }

    #[test]
    fn test_search_list_id_display() {
        let id = SearchListId::from("65a1f0c2");
        assert_eq!(id.to_string(), "65a1f0c2");
        assert_eq!(id.into_inner(), "65a1f0c2");
    }
}
