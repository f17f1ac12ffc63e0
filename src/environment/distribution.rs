//! Known deployment targets.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A deployment target for the web client.
///
/// The named variants are the distributions that carry special handling
/// somewhere in the resolution procedure. Anything else is kept verbatim
/// in [`Distribution::Other`] and takes the default branches.
///
/// # Example
///
/// ```
/// use webpack_env::environment::Distribution;
///
/// let dist: Distribution = "wechat".parse().unwrap();
/// assert_eq!(dist, Distribution::Wechat);
///
/// let other: Distribution = "partner-x".parse().unwrap();
/// assert_eq!(other.as_str(), "partner-x");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Distribution {
    /// Messaging platform embedded webview, shipped as an offline package.
    Dingtalk,
    /// The direct web client.
    Teambition,
    /// Logistics partner deployment served under `/sf`.
    Shunfeng,
    /// Content-management deployment served under `/cms`.
    Cms,
    /// WeChat embedded webview.
    Wechat,
    /// Any other distribution identifier.
    Other(String),
}

impl Distribution {
    /// The identifier as it appears in paths and environment variables.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Dingtalk => "dingtalk",
            Self::Teambition => "teambition",
            Self::Shunfeng => "shunfeng",
            Self::Cms => "cms",
            Self::Wechat => "wechat",
            Self::Other(name) => name,
        }
    }
}

impl FromStr for Distribution {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for Distribution {
    fn from(s: String) -> Self {
        match s.as_str() {
            "dingtalk" => Self::Dingtalk,
            "teambition" => Self::Teambition,
            "shunfeng" => Self::Shunfeng,
            "cms" => Self::Cms,
            "wechat" => Self::Wechat,
            _ => Self::Other(s),
        }
    }
}

impl From<Distribution> for String {
    fn from(d: Distribution) -> Self {
        match d {
            Distribution::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
