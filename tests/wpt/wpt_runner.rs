/// WPT test runner
///
/// Runs the URL parsing and setter fixtures against `weburl::Url`
use super::wpt_loader::{Expected, SetterTest, TestCase, WptFailure, WptTestResult};
use weburl::Url;

/// Getter mismatches as `(field, expected, actual)`
pub fn compare(url: &Url, expected: &Expected) -> Vec<(&'static str, String, String)> {
    let checks: [(&'static str, &Option<String>, String); 11] = [
        ("href", &expected.href, url.href().to_string()),
        ("protocol", &expected.protocol, url.protocol().to_string()),
        ("username", &expected.username, url.username().to_string()),
        ("password", &expected.password, url.password().to_string()),
        ("host", &expected.host, url.host().to_string()),
        ("hostname", &expected.hostname, url.hostname().to_string()),
        ("port", &expected.port, url.port().to_string()),
        ("pathname", &expected.pathname, url.pathname().to_string()),
        ("search", &expected.search, url.search().to_string()),
        ("hash", &expected.hash, url.hash().to_string()),
        ("origin", &expected.origin, url.origin()),
    ];

    checks
        .into_iter()
        .filter_map(|(field, expected, actual)| match expected {
            Some(expected) if *expected != actual => Some((field, expected.clone(), actual)),
            _ => None,
        })
        .collect()
}

/// Run parsing fixtures and return results
pub fn run_wpt_tests(tests: Vec<TestCase>) -> WptTestResult {
    let mut result = WptTestResult::default();
    let mut test_num = 0;

    for test in tests {
        let TestCase::UrlTest(test) = test else {
            continue;
        };
        test_num += 1;

        let failure = |field: &str, expected: &str, actual: String| WptFailure {
            test_num,
            input: test.input.clone(),
            base: test.base.clone(),
            field: field.to_string(),
            expected: expected.to_string(),
            actual,
        };

        let parsed = Url::parse(&test.input, test.base.as_deref());
        match (parsed, test.failure) {
            (Err(_), true) => result.passed += 1,
            (Ok(url), true) => {
                result.failed += 1;
                result
                    .failures
                    .push(failure("parsing", "failure", url.href().to_string()));
            }
            (Err(err), false) => {
                result.failed += 1;
                result
                    .failures
                    .push(failure("parsing", "success", err.to_string()));
            }
            (Ok(url), false) => {
                let mismatches = compare(&url, &test.expected);
                if mismatches.is_empty() {
                    result.passed += 1;
                } else {
                    result.failed += 1;
                    for (field, expected, actual) in mismatches {
                        result.failures.push(failure(field, &expected, actual));
                    }
                }
            }
        }
    }

    result
}

/// Apply `new_value` through the setter named by `attribute`
pub fn apply_setter(url: &mut Url, attribute: &str, new_value: &str) {
    match attribute {
        "protocol" => {
            url.set_protocol(new_value);
        }
        "username" => {
            url.set_username(new_value);
        }
        "password" => {
            url.set_password(new_value);
        }
        "host" => {
            url.set_host(new_value);
        }
        "hostname" => {
            url.set_hostname(new_value);
        }
        "port" => {
            url.set_port(new_value);
        }
        "pathname" => {
            url.set_pathname(new_value);
        }
        "search" => url.set_search(new_value),
        "hash" => url.set_hash(new_value),
        other => panic!("unknown setter {other}"),
    }
}

/// Run setter fixtures and return results
pub fn run_setter_tests(groups: Vec<(String, Vec<SetterTest>)>) -> WptTestResult {
    let mut result = WptTestResult::default();
    let mut test_num = 0;

    for (attribute, cases) in groups {
        for case in cases {
            test_num += 1;
            let input = format!("{attribute} = {:?} on {}", case.new_value, case.href);

            let Ok(mut url) = Url::parse(&case.href, None) else {
                result.failed += 1;
                result.failures.push(WptFailure {
                    test_num,
                    input,
                    base: None,
                    field: "parsing".to_string(),
                    expected: "success".to_string(),
                    actual: "parse error".to_string(),
                });
                continue;
            };

            apply_setter(&mut url, &attribute, &case.new_value);

            let mismatches = compare(&url, &case.expected);
            if mismatches.is_empty() {
                result.passed += 1;
                continue;
            }
            result.failed += 1;
            for (field, expected, actual) in mismatches {
                result.failures.push(WptFailure {
                    test_num,
                    input: input.clone(),
                    base: None,
                    field: field.to_string(),
                    expected,
                    actual,
                });
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_reports_only_listed_fields() {
        let url = Url::parse("http://example.com/a?b#c", None).unwrap();
        let expected = Expected {
            pathname: Some("/a".to_string()),
            search: Some("?x".to_string()),
            ..Expected::default()
        };
        let mismatches = compare(&url, &expected);
        assert_eq!(
            mismatches,
            vec![("search", "?x".to_string(), "?b".to_string())]
        );
    }
}
