//! `scope`: which pages the crawl may visit and how fast.

use super::required_object;
use crate::checks::{expect_bool, expect_number, expect_one_of, is_http_url, is_truthy, NumberRule};
use crate::finding::Finding;
use crate::rules::{CrawlMode, DEFAULT_EXCLUDE_HINTS};
use crate::ConfigMap;
use serde_json::Value;

pub fn validate(config: &ConfigMap) -> Vec<Finding> {
    let scope = match required_object(config, "scope") {
        Ok(scope) => scope,
        Err(missing) => return vec![missing],
    };
    let mut findings = Vec::new();

    findings.extend(expect_one_of(scope, "crawl_mode", "scope", &CrawlMode::names()));
    let crawl_mode = scope
        .get("crawl_mode")
        .and_then(Value::as_str)
        .and_then(CrawlMode::parse);

    findings.extend(expect_number(scope, "max_pages", "scope", NumberRule::integer().min(1.0)));
    findings.extend(expect_number(scope, "max_depth", "scope", NumberRule::integer().min(0.0)));
    findings.extend(expect_bool(scope, "include_subdomains", "scope"));
    findings.extend(expect_bool(scope, "respect_robots_txt", "scope"));
    findings.extend(expect_number(
        scope,
        "crawl_delay_ms",
        "scope",
        NumberRule::integer().min(0.0),
    ));
    findings.extend(expect_number(
        scope,
        "requests_per_second",
        "scope",
        NumberRule::float().min(0.1),
    ));

    findings.extend(check_exclude_paths(scope));
    findings.extend(check_custom_urls(scope, crawl_mode));
    findings.extend(check_sitemap_url(scope, crawl_mode));

    findings
}

fn check_exclude_paths(scope: &ConfigMap) -> Option<Finding> {
    let paths: Option<Vec<&str>> = scope
        .get("exclude_paths")
        .and_then(Value::as_array)
        .and_then(|items| items.iter().map(Value::as_str).collect());

    match paths {
        None => Some(Finding::error("scope.exclude_paths", "must be a list of strings")),
        Some(paths) if !paths.iter().any(|p| DEFAULT_EXCLUDE_HINTS.contains(p)) => {
            Some(Finding::warning(
                "scope.exclude_paths",
                "does not include common low-value paths (/legal,/privacy,/terms,/careers,/login)",
            ))
        }
        Some(_) => None,
    }
}

fn check_custom_urls(scope: &ConfigMap, crawl_mode: Option<CrawlMode>) -> Option<Finding> {
    let urls = scope.get("custom_urls");

    if crawl_mode == Some(CrawlMode::CustomUrls) {
        return match urls.and_then(Value::as_array) {
            Some(list) if !list.is_empty() => {
                if list.iter().all(|u| is_http_url(Some(u))) {
                    None
                } else {
                    Some(Finding::error(
                        "scope.custom_urls",
                        "all entries must be http(s) URLs",
                    ))
                }
            }
            _ => Some(Finding::error(
                "scope.custom_urls",
                "required non-empty list when crawl_mode=custom_urls",
            )),
        };
    }

    urls.filter(|value| is_truthy(value)).map(|_| {
        Finding::warning("scope.custom_urls", "ignored unless crawl_mode=custom_urls")
    })
}

fn check_sitemap_url(scope: &ConfigMap, crawl_mode: Option<CrawlMode>) -> Option<Finding> {
    let sitemap_url = scope.get("sitemap_url");

    if crawl_mode == Some(CrawlMode::Sitemap) {
        return (!is_http_url(sitemap_url)).then(|| {
            Finding::error(
                "scope.sitemap_url",
                "required http(s) URL when crawl_mode=sitemap",
            )
        });
    }

    sitemap_url
        .filter(|value| is_truthy(value))
        .map(|_| Finding::warning("scope.sitemap_url", "ignored unless crawl_mode=sitemap"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_scope() -> Value {
        json!({
            "crawl_mode": "representative_sample",
            "max_pages": 12,
            "max_depth": 3,
            "include_subdomains": false,
            "respect_robots_txt": true,
            "crawl_delay_ms": 500,
            "requests_per_second": 1.5,
            "exclude_paths": ["/legal", "/blog/tag"]
        })
    }

    fn run(scope: Value) -> Vec<Finding> {
        let config = json!({ "scope": scope });
        validate(config.as_object().unwrap())
    }

    fn paths(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(|f| f.path.as_str()).collect()
    }

    #[test]
    fn test_valid_scope_has_no_findings() {
        assert!(run(valid_scope()).is_empty());
    }

    #[test]
    fn test_missing_scope_short_circuits() {
        let findings = validate(&ConfigMap::new());
        assert_eq!(findings, vec![Finding::error("scope", "missing required object")]);
    }

    #[test]
    fn test_unknown_crawl_mode() {
        let mut scope = valid_scope();
        scope["crawl_mode"] = json!("everything");
        let findings = run(scope);
        assert_eq!(paths(&findings), vec!["scope.crawl_mode"]);
        assert!(findings[0].message.starts_with("must be one of [\"bounded_full\""));
    }

    #[test]
    fn test_integer_fields_reject_floats_once_each() {
        for key in ["max_pages", "max_depth", "crawl_delay_ms"] {
            let mut scope = valid_scope();
            scope[key] = json!(2.5);
            let findings = run(scope);
            assert_eq!(findings.len(), 1, "{key}: {findings:?}");
            assert_eq!(findings[0].path, format!("scope.{key}"));
            assert_eq!(findings[0].message, "must be a number");
        }
    }

    #[test]
    fn test_numeric_minimums() {
        let mut scope = valid_scope();
        scope["max_pages"] = json!(0);
        scope["max_depth"] = json!(-1);
        scope["crawl_delay_ms"] = json!(-5);
        scope["requests_per_second"] = json!(0.01);
        let findings = run(scope);
        let messages: Vec<_> = findings.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["must be >= 1", "must be >= 0", "must be >= 0", "must be >= 0.1"]
        );
    }

    #[test]
    fn test_exclude_paths_shape_and_hint() {
        let mut scope = valid_scope();
        scope["exclude_paths"] = json!(["/legal", 3]);
        let findings = run(scope);
        assert_eq!(
            findings,
            vec![Finding::error("scope.exclude_paths", "must be a list of strings")]
        );

        let mut scope = valid_scope();
        scope["exclude_paths"] = json!([]);
        let findings = run(scope);
        assert_eq!(findings.len(), 1);
        assert!(!findings[0].is_error());

        let mut scope = valid_scope();
        scope.as_object_mut().unwrap().remove("exclude_paths");
        assert!(run(scope)[0].is_error());
    }

    #[test]
    fn test_custom_urls_required_when_selected() {
        let mut scope = valid_scope();
        scope["crawl_mode"] = json!("custom_urls");
        scope["custom_urls"] = json!([]);
        let findings = run(scope.clone());
        assert_eq!(
            findings,
            vec![Finding::error(
                "scope.custom_urls",
                "required non-empty list when crawl_mode=custom_urls"
            )]
        );

        scope["custom_urls"] = json!(["https://a.example/", "/relative"]);
        let findings = run(scope.clone());
        assert_eq!(findings[0].message, "all entries must be http(s) URLs");

        scope["custom_urls"] = json!(["https://a.example/", "http://b.example/"]);
        assert!(run(scope).is_empty());
    }

    #[test]
    fn test_custom_urls_ignored_warning() {
        let mut scope = valid_scope();
        scope["custom_urls"] = json!(["http://a"]);
        let findings = run(scope.clone());
        assert_eq!(
            findings,
            vec![Finding::warning(
                "scope.custom_urls",
                "ignored unless crawl_mode=custom_urls"
            )]
        );

        scope["custom_urls"] = json!([]);
        assert!(run(scope).is_empty());
    }

    #[test]
    fn test_sitemap_rules() {
        let mut scope = valid_scope();
        scope["crawl_mode"] = json!("sitemap");
        scope["sitemap_url"] = json!("sitemap.xml");
        assert_eq!(
            run(scope.clone()),
            vec![Finding::error(
                "scope.sitemap_url",
                "required http(s) URL when crawl_mode=sitemap"
            )]
        );

        scope["sitemap_url"] = json!("https://a.example/sitemap.xml");
        assert!(run(scope.clone()).is_empty());

        scope["crawl_mode"] = json!("bounded_full");
        assert_eq!(
            run(scope),
            vec![Finding::warning(
                "scope.sitemap_url",
                "ignored unless crawl_mode=sitemap"
            )]
        );
    }

    #[test]
    fn test_invalid_crawl_mode_skips_conditionals() {
        let mut scope = valid_scope();
        scope["crawl_mode"] = json!(null);
        scope["sitemap_url"] = json!("https://a.example/sitemap.xml");
        let findings = run(scope);
        assert_eq!(paths(&findings), vec!["scope.crawl_mode", "scope.sitemap_url"]);
        assert!(!findings[1].is_error());
    }
}
