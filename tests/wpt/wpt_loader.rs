/// Fixtures in the WPT (Web Platform Tests) layout
///
/// `url_parsing_cases.json` and `setter_cases.json` are curated cases written
/// in the format of `urltestdata.json` and `setters_tests.json` from
/// https://github.com/web-platform-tests/wpt/tree/master/url. They are not
/// the upstream files: expectations follow this crate's parser where it
/// differs from the current Standard.
use serde::Deserialize;
use std::collections::BTreeMap;

/// One entry of `url_parsing_cases.json`
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    UrlTest(Box<UrlTest>),
    /// Section headings are plain strings
    Comment(#[allow(dead_code)] String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct UrlTest {
    pub input: String,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub failure: bool,
    #[serde(flatten)]
    pub expected: Expected,
}

/// Getter values to compare, absent fields are not checked
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Expected {
    pub href: Option<String>,
    pub protocol: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub hostname: Option<String>,
    pub port: Option<String>,
    pub pathname: Option<String>,
    pub search: Option<String>,
    pub hash: Option<String>,
    pub origin: Option<String>,
}

/// One entry of `setter_cases.json`
#[derive(Debug, Deserialize, Clone)]
pub struct SetterTest {
    pub href: String,
    pub new_value: String,
    pub expected: Expected,
}

#[derive(Debug, Clone, Default)]
pub struct WptTestResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<WptFailure>,
}

#[derive(Debug, Clone)]
pub struct WptFailure {
    pub test_num: usize,
    pub input: String,
    pub base: Option<String>,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl WptTestResult {
    pub fn pass_rate(&self) -> f64 {
        let total = self.passed + self.failed;
        if total == 0 {
            0.0
        } else {
            (self.passed as f64 / total as f64) * 100.0
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Passed: {}, Failed: {}, Pass Rate: {:.2}%",
            self.passed,
            self.failed,
            self.pass_rate()
        )
    }

    pub fn report(&self) {
        println!("\n{}", self.summary());
        for failure in self.failures.iter().take(20) {
            println!("\nTest #{}: {}", failure.test_num, failure.field);
            println!("   Input: {:?}", failure.input);
            if let Some(base) = &failure.base {
                println!("   Base: {base:?}");
            }
            println!("   Expected: {:?}", failure.expected);
            println!("   Actual: {:?}", failure.actual);
        }
        if self.failures.len() > 20 {
            println!("\n... and {} more failures", self.failures.len() - 20);
        }
    }
}

pub fn load_url_tests() -> Vec<TestCase> {
    serde_json::from_str(include_str!("url_parsing_cases.json"))
        .expect("malformed url_parsing_cases.json")
}

/// Setter cases grouped by attribute name
pub fn load_setter_tests() -> Vec<(String, Vec<SetterTest>)> {
    let raw: BTreeMap<String, serde_json::Value> =
        serde_json::from_str(include_str!("setter_cases.json"))
            .expect("malformed setter_cases.json");

    raw.into_iter()
        .filter(|(attribute, _)| attribute != "comment")
        .map(|(attribute, cases)| {
            let cases: Vec<SetterTest> =
                serde_json::from_value(cases).expect("malformed setter case");
            (attribute, cases)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_load() {
        let tests = load_url_tests();
        assert!(tests.iter().any(|t| matches!(t, TestCase::Comment(_))));
        assert!(
            tests
                .iter()
                .any(|t| matches!(t, TestCase::UrlTest(u) if u.failure))
        );

        let setters = load_setter_tests();
        let attributes: Vec<&str> = setters.iter().map(|(a, _)| a.as_str()).collect();
        assert_eq!(
            attributes,
            vec![
                "hash", "host", "hostname", "password", "pathname", "port", "protocol",
                "search", "username"
            ]
        );
    }

    #[test]
    fn test_wpt_result() {
        let result = WptTestResult {
            passed: 80,
            failed: 20,
            failures: Vec::new(),
        };
        assert_eq!(result.pass_rate(), 80.0);
        assert!(result.summary().contains("80.00%"));
    }
}
