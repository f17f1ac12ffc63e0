//! Module rules and loader chains.

use std::fmt;

use regex::Regex;
use serde::{Serialize, Serializer};

/// An ordered list of loader specs.
///
/// Serialized in the bundler's inline form, joined with `!`. The rightmost
/// loader runs first, so `style!css!postcss` feeds postcss output to css
/// and css output to style.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoaderChain(Vec<String>);

impl LoaderChain {
    /// Parse an inline `!`-joined chain. Empty segments are dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use webpack_env::webpack::LoaderChain;
    ///
    /// let chain = LoaderChain::parse("style!css?sourceMap!postcss!stylus");
    /// assert_eq!(chain.loaders().len(), 4);
    /// assert_eq!(chain.to_string(), "style!css?sourceMap!postcss!stylus");
    /// ```
    pub fn parse(inline: &str) -> Self {
        Self(
            inline
                .split('!')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// A chain with a single loader.
    pub fn single(loader: impl Into<String>) -> Self {
        Self(vec![loader.into()])
    }

    /// Loader specs in declaration order.
    pub fn loaders(&self) -> &[String] {
        &self.0
    }

    /// Whether the chain has no loaders.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split off the first (outermost) loader.
    pub fn split_first(&self) -> Option<(LoaderChain, LoaderChain)> {
        let (first, rest) = self.0.split_first()?;
        Some((Self::single(first.clone()), Self(rest.to_vec())))
    }
}

impl fmt::Display for LoaderChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("!"))
    }
}

impl Serialize for LoaderChain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A chain split for stylesheet extraction.
///
/// `fallback_loader` is used for chunks that are not extracted, `loader`
/// produces the CSS written to standalone files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedChain {
    pub fallback_loader: LoaderChain,
    pub loader: LoaderChain,
}

/// What a rule applies to a matching file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RuleUse {
    /// Inline chain, output injected by the outermost loader.
    Chain(LoaderChain),
    /// Chain routed through the stylesheet-extraction plugin.
    Extract { extract: ExtractedChain },
}

impl RuleUse {
    /// Parse an inline chain.
    pub fn chain(inline: &str) -> Self {
        Self::Chain(LoaderChain::parse(inline))
    }

    /// Route this chain through stylesheet extraction.
    ///
    /// The outermost loader becomes the fallback and the remaining loaders
    /// the extracted chain. Already extracted uses are returned unchanged.
    pub fn extracted(self) -> Self {
        match self {
            Self::Chain(chain) => match chain.split_first() {
                Some((fallback_loader, loader)) => Self::Extract {
                    extract: ExtractedChain {
                        fallback_loader,
                        loader,
                    },
                },
                None => Self::Chain(chain),
            },
            extracted @ Self::Extract { .. } => extracted,
        }
    }

    /// Whether this use goes through stylesheet extraction.
    pub fn is_extracted(&self) -> bool {
        matches!(self, Self::Extract { .. })
    }
}

/// One file-type transform rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleRule {
    /// Regular expression source matched against the request path.
    pub test: String,
    /// Loaders applied to matching files.
    #[serde(rename = "loader")]
    pub use_: RuleUse,
    /// Only apply to paths matching this pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
    /// Never apply to paths matching this pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    /// Loader options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<serde_json::Value>,
}

impl ModuleRule {
    /// Create a rule applying the inline chain `loader` to files matching `test`.
    pub fn new(test: impl Into<String>, loader: &str) -> Self {
        Self {
            test: test.into(),
            use_: RuleUse::chain(loader),
            include: None,
            exclude: None,
            query: None,
        }
    }

    pub fn with_include(mut self, pattern: impl Into<String>) -> Self {
        self.include = Some(pattern.into());
        self
    }

    pub fn with_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude = Some(pattern.into());
        self
    }

    pub fn with_query(mut self, query: serde_json::Value) -> Self {
        self.query = Some(query);
        self
    }

    /// Whether the rule's test pattern matches `path`.
    ///
    /// Include and exclude filters are not consulted. An invalid pattern
    /// matches nothing.
    pub fn matches(&self, path: &str) -> bool {
        Regex::new(&self.test)
            .map(|re| re.is_match(path))
            .unwrap_or(false)
    }
}
