/// A shop directory the crawler can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    StellarLifestyle,
    SbsTransit,
}

/// An outbound request for one station's listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Form-encoded POST.
    Form {
        url: String,
        fields: Vec<(String, String)>,
    },
    /// GET with query parameters.
    Get {
        url: String,
        query: Vec<(String, String)>,
    },
}

impl FetchRequest {
    pub fn url(&self) -> &str {
        match self {
            FetchRequest::Form { url, .. } | FetchRequest::Get { url, .. } => url,
        }
    }
}

impl std::fmt::Display for FetchRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchRequest::Form { url, fields } => {
                let body = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(fields)
                    .finish();
                write!(f, "POST {} [{}]", url, body)
            }
            FetchRequest::Get { url, query } => match url::Url::parse_with_params(url, query) {
                Ok(full) => write!(f, "GET {}", full),
                Err(_) => write!(f, "GET {}", url),
            },
        }
    }
}

impl Source {
    pub const ALL: [Source; 2] = [Source::StellarLifestyle, Source::SbsTransit];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::StellarLifestyle => "stellarlifestyle",
            Source::SbsTransit => "sbstransit",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            Source::StellarLifestyle => "https://stellarlifestyle.com.sg/shop-directory",
            Source::SbsTransit => "https://www.sbstransit.com.sg/Service/Shop",
        }
    }

    /// CSS selector whose matches' own text nodes are the listed options.
    ///
    /// The SBS Transit rule has never been checked against live markup and
    /// is not expected to match anything.
    pub fn extraction_rule(&self) -> &'static str {
        match self {
            Source::StellarLifestyle => "h3.gb-headline.gb-headline-d819c2b1.gb-headline-text",
            Source::SbsTransit => "td.table shoptable tb-bus tbres tbbreak-app",
        }
    }

    /// Build the request that searches this directory for `station`.
    pub fn request(&self, station: &str) -> FetchRequest {
        match self {
            Source::StellarLifestyle => FetchRequest::Form {
                url: self.endpoint().to_string(),
                fields: vec![("search_shop_station".to_string(), station.to_string())],
            },
            Source::SbsTransit => FetchRequest::Get {
                url: self.endpoint().to_string(),
                query: vec![("station".to_string(), station.to_string())],
            },
        }
    }

    pub fn output_file_name(&self) -> String {
        format!("{}_lifestyle.csv", self.as_str())
    }
}

impl std::str::FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stellarlifestyle" | "stellar" => Ok(Source::StellarLifestyle),
            "sbstransit" | "sbs" => Ok(Source::SbsTransit),
            _ => Err(format!("Unknown source: {}", s)),
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
