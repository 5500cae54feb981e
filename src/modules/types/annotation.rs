//! Annotation values

use chrono::{DateTime, Utc};

/// An event annotation produced by a backend
///
/// An annotation whose `time_end` is later than `time` covers a region;
/// anything else marks a single point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub time: DateTime<Utc>,
    pub time_end: Option<DateTime<Utc>>,
    pub title: String,
    pub text: String,
    pub tags: Vec<String>,
}

impl Annotation {
    /// Create a point annotation
    pub fn point(time: DateTime<Utc>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            time,
            time_end: None,
            title: title.into(),
            text: text.into(),
            tags: Vec::new(),
        }
    }

    /// Create an annotation spanning `time..time_end`
    pub fn range(
        time: DateTime<Utc>,
        time_end: DateTime<Utc>,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            time_end: Some(time_end),
            ..Self::point(time, title, text)
        }
    }

    /// Add tags to the annotation
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// End of the covered region, if this is a range annotation
    pub fn region_end(&self) -> Option<DateTime<Utc>> {
        self.time_end.filter(|end| *end > self.time)
    }

    pub fn is_range(&self) -> bool {
        self.region_end().is_some()
    }

    /// Tags in wire form: `None` when there are none
    pub fn wire_tags(&self) -> Option<Vec<String>> {
        if self.tags.is_empty() {
            None
        } else {
            Some(self.tags.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_point_annotation() {
        let annotation = Annotation::point(at(1234), "title", "text");
        assert!(!annotation.is_range());
        assert_eq!(annotation.wire_tags(), None);
    }

    #[test]
    fn test_range_annotation() {
        let annotation =
            Annotation::range(at(1235), at(1237), "title", "text").with_tags(["outage"]);
        assert!(annotation.is_range());
        assert_eq!(annotation.region_end(), Some(at(1237)));
        assert_eq!(annotation.wire_tags(), Some(vec!["outage".to_string()]));
    }

    #[test]
    fn test_end_not_after_start_is_point() {
        assert!(!Annotation::range(at(10), at(10), "t", "x").is_range());
        assert!(!Annotation::range(at(10), at(5), "t", "x").is_range());
    }
}
