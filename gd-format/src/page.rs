//! Pagination trailer: the `total:offset:pageSize` segment.

use crate::{Error, Result};

/// Pagination metadata appended to browse responses after a `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Total number of elements known to the server
    pub total: u32,
    /// Offset of the first element of this page
    pub offset: u32,
    /// Maximum number of elements per page
    pub page_size: u32,
}

impl PageInfo {
    /// Parse a `total:offset:pageSize` trailer.
    ///
    /// Exactly three numeric fields are accepted; anything else is a
    /// malformed trailer.
    pub fn parse(raw: &str) -> Result<Self> {
        let fields: Vec<&str> = raw.split(':').collect();
        let [total, offset, page_size] = fields.as_slice() else {
            return Err(Error::invalid_page_info(raw));
        };

        let parse = |s: &str| s.parse::<u32>().map_err(|_| Error::invalid_page_info(raw));

        Ok(Self {
            total: parse(total)?,
            offset: parse(offset)?,
            page_size: parse(page_size)?,
        })
    }

    /// A trailer for endpoints that return everything in one page.
    #[must_use]
    pub fn single_page(total: u32) -> Self {
        Self {
            total,
            offset: 0,
            page_size: total.max(1),
        }
    }

    /// Total number of pages implied by the trailer.
    #[must_use]
    pub fn page_count(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }

    /// Whether a page exists after the given zero-indexed page number.
    #[must_use]
    pub fn has_more(&self, page: u32) -> bool {
        page + 1 < self.page_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trailer() {
        let info = PageInfo::parse("9999:40:10").unwrap();
        assert_eq!(info.total, 9999);
        assert_eq!(info.offset, 40);
        assert_eq!(info.page_size, 10);
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        assert!(PageInfo::parse("9999:40").is_err());
        assert!(PageInfo::parse("9999:40:10:2").is_err());
        assert!(PageInfo::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = PageInfo::parse("total:0:10").unwrap_err();
        assert_eq!(err, Error::invalid_page_info("total:0:10"));
    }

    #[test]
    fn test_page_count() {
        assert_eq!(PageInfo::parse("25:0:10").unwrap().page_count(), 3);
        assert_eq!(PageInfo::parse("30:0:10").unwrap().page_count(), 3);
        assert_eq!(PageInfo::parse("0:0:10").unwrap().page_count(), 0);
    }

    #[test]
    fn test_has_more() {
        let info = PageInfo::parse("25:0:10").unwrap();
        assert!(info.has_more(0));
        assert!(info.has_more(1));
        assert!(!info.has_more(2));
    }

    #[test]
    fn test_single_page() {
        let info = PageInfo::single_page(3);
        assert_eq!(info.page_count(), 1);
        assert!(!info.has_more(0));
    }
}
