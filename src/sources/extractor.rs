use scraper::{Html, Selector};

use crate::domain::Source;
use crate::errors::{ShopError, ShopResult};

/// Pulls option strings out of directory pages, one compiled rule per source.
pub struct ResultExtractor {
    stellar: Selector,
    sbs: Selector,
}

impl ResultExtractor {
    pub fn new() -> ShopResult<Self> {
        Ok(Self {
            stellar: compile(Source::StellarLifestyle)?,
            sbs: compile(Source::SbsTransit)?,
        })
    }

    fn selector(&self, source: Source) -> &Selector {
        match source {
            Source::StellarLifestyle => &self.stellar,
            Source::SbsTransit => &self.sbs,
        }
    }

    /// Text nodes directly under every element matching `source`'s rule, in
    /// document order. Nothing is trimmed or deduplicated; no match yields an
    /// empty list.
    pub fn extract(&self, source: Source, page: &str) -> Vec<String> {
        let document = Html::parse_document(page);

        document
            .select(self.selector(source))
            .flat_map(|element| {
                element
                    .children()
                    .filter_map(|child| child.value().as_text().map(|text| text.to_string()))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

fn compile(source: Source) -> ShopResult<Selector> {
    Selector::parse(source.extraction_rule()).map_err(|e| ShopError::Selector {
        source_tag: source.as_str().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const STELLAR_PAGE: &str = r#"
        <html><body>
          <h3 class="gb-headline gb-headline-d819c2b1 gb-headline-text">Shop1</h3>
          <div><h3 class="gb-headline">Not a shop</h3></div>
          <h3 class="gb-headline gb-headline-d819c2b1 gb-headline-text"> Shop2 <span>Level 1</span></h3>
        </body></html>
    "#;

    #[test]
    fn test_stellar_rule_takes_own_text_in_order() {
        let extractor = ResultExtractor::new().unwrap();

        let options = extractor.extract(Source::StellarLifestyle, STELLAR_PAGE);

        // Untrimmed, and the nested span's text is not an own text node
        assert_eq!(options, vec!["Shop1", " Shop2 "]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let extractor = ResultExtractor::new().unwrap();

        let options = extractor.extract(Source::StellarLifestyle, "<html><body><p>none</p></body></html>");
        assert!(options.is_empty());
    }

    #[test]
    fn test_empty_page_is_empty() {
        let extractor = ResultExtractor::new().unwrap();

        assert!(extractor.extract(Source::StellarLifestyle, "").is_empty());
        assert!(extractor.extract(Source::SbsTransit, "").is_empty());
    }

    #[test]
    fn test_sbs_rule_does_not_match_a_plain_shop_table() {
        let extractor = ResultExtractor::new().unwrap();
        let page = r#"<table><tr><td class="table shoptable tb-bus tbres tbbreak-app">Kiosk</td></tr></table>"#;

        assert!(extractor.extract(Source::SbsTransit, page).is_empty());
    }

    #[test]
    fn test_extraction_is_per_source() {
        let extractor = ResultExtractor::new().unwrap();

        assert!(extractor.extract(Source::SbsTransit, STELLAR_PAGE).is_empty());
    }
}
