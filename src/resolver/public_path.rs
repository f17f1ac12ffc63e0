//! Public path decision table.
//!
//! | CDN   | Distribution                | Public path                           |
//! |-------|-----------------------------|---------------------------------------|
//! | true  | dingtalk                    | `https://ding.teambition.com/static/` |
//! | true  | teambition                  | `./static/`                           |
//! | true  | other                       | `./static`                            |
//! | false | shunfeng                    | `/sf/static/`                         |
//! | false | cms                         | `/cms/static/`                        |
//! | false | wechat + variant `default`  | `/weixin/static/`                     |
//! | false | other                       | `/static/`                            |
//!
//! For dingtalk behind the CDN, the app ships as an offline package: images
//! emitted by the url loader still come from the CDN host while other
//! loader assets use the local [`CDN_LOCAL_ROOT`].

use serde::Serialize;

use crate::environment::{Distribution, EnvSnapshot};

/// CDN host serving dingtalk images.
pub const DINGTALK_CDN_PATH: &str = "https://ding.teambition.com/static/";

/// Local directory treated as the CDN root.
pub const CDN_LOCAL_ROOT: &str = "./static";

/// Resolved asset URL prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicPath {
    /// `output.publicPath`.
    pub output: String,
    /// `fileLoader.publicPath`, set only when loader assets are served
    /// from a different place than the bundle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_loader: Option<String>,
}

impl PublicPath {
    fn to(output: &str) -> Self {
        Self {
            output: output.to_string(),
            file_loader: None,
        }
    }
}

/// Look up the public path for a snapshot.
pub fn public_path_for(env: &EnvSnapshot) -> PublicPath {
    resolve_public_path(env.cdn, &env.distribution, env.configuration.as_deref())
}

/// Look up the public path in the decision table.
///
/// # Example
///
/// ```
/// use webpack_env::environment::Distribution;
/// use webpack_env::resolver::resolve_public_path;
///
/// let path = resolve_public_path(false, &Distribution::Wechat, Some("default"));
/// assert_eq!(path.output, "/weixin/static/");
/// ```
pub fn resolve_public_path(
    cdn: bool,
    distribution: &Distribution,
    configuration: Option<&str>,
) -> PublicPath {
    let resolved = if cdn {
        match distribution {
            Distribution::Dingtalk => PublicPath {
                output: DINGTALK_CDN_PATH.to_string(),
                file_loader: Some(CDN_LOCAL_ROOT.to_string()),
            },
            Distribution::Teambition => PublicPath::to("./static/"),
            Distribution::Shunfeng
            | Distribution::Cms
            | Distribution::Wechat
            | Distribution::Other(_) => PublicPath::to(CDN_LOCAL_ROOT),
        }
    } else {
        match distribution {
            Distribution::Shunfeng => PublicPath::to("/sf/static/"),
            Distribution::Cms => PublicPath::to("/cms/static/"),
            Distribution::Wechat if configuration == Some("default") => {
                PublicPath::to("/weixin/static/")
            }
            // Other wechat variants share the generic prefix.
            Distribution::Wechat => PublicPath::to("/static/"),
            Distribution::Dingtalk | Distribution::Teambition | Distribution::Other(_) => {
                PublicPath::to("/static/")
            }
        }
    };

    tracing::debug!(
        cdn,
        distribution = %distribution,
        public_path = %resolved.output,
        "Resolved public path"
    );
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(name: &str) -> Distribution {
        name.parse().unwrap()
    }

    #[test]
    fn cdn_dingtalk_uses_external_host_and_local_loader_path() {
        let path = resolve_public_path(true, &dist("dingtalk"), None);
        assert_eq!(path.output, "https://ding.teambition.com/static/");
        assert_eq!(path.file_loader.as_deref(), Some("./static"));
    }

    #[test]
    fn cdn_teambition_uses_trailing_slash() {
        let path = resolve_public_path(true, &dist("teambition"), None);
        assert_eq!(path.output, "./static/");
        assert_eq!(path.file_loader, None);
    }

    #[test]
    fn cdn_other_uses_local_root_without_slash() {
        for name in ["shunfeng", "cms", "wechat", "unknown-dist"] {
            let path = resolve_public_path(true, &dist(name), Some("default"));
            assert_eq!(path.output, "./static", "distribution {name}");
            assert_eq!(path.file_loader, None);
        }
    }

    #[test]
    fn no_cdn_shunfeng() {
        assert_eq!(
            resolve_public_path(false, &dist("shunfeng"), None).output,
            "/sf/static/"
        );
    }

    #[test]
    fn no_cdn_cms() {
        assert_eq!(
            resolve_public_path(false, &dist("cms"), None).output,
            "/cms/static/"
        );
    }

    #[test]
    fn no_cdn_wechat_default_variant() {
        assert_eq!(
            resolve_public_path(false, &dist("wechat"), Some("default")).output,
            "/weixin/static/"
        );
    }

    #[test]
    fn no_cdn_wechat_other_variant_falls_back() {
        assert_eq!(
            resolve_public_path(false, &dist("wechat"), Some("staging")).output,
            "/static/"
        );
        assert_eq!(
            resolve_public_path(false, &dist("wechat"), None).output,
            "/static/"
        );
    }

    #[test]
    fn no_cdn_other_falls_back() {
        for name in ["dingtalk", "teambition", "unknown-dist"] {
            let path = resolve_public_path(false, &dist(name), None);
            assert_eq!(path.output, "/static/", "distribution {name}");
            assert_eq!(path.file_loader, None);
        }
    }

    #[test]
    fn configuration_only_matters_for_wechat() {
        for name in ["shunfeng", "cms", "dingtalk", "unknown-dist"] {
            for cdn in [true, false] {
                assert_eq!(
                    resolve_public_path(cdn, &dist(name), Some("default")),
                    resolve_public_path(cdn, &dist(name), None),
                );
            }
        }
    }

    #[test]
    fn public_path_for_reads_snapshot() {
        let env = EnvSnapshot::new("production", "wechat", "mobile").with_configuration("default");
        assert_eq!(public_path_for(&env).output, "/weixin/static/");
    }
}
