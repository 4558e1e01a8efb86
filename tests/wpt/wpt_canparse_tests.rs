/// `Url::can_parse` cases
///
/// The first block mirrors url-statics-canparse.any.js from web-platform-tests,
/// with JavaScript `undefined` input mapped to the empty string.
use weburl::Url;

const CAN_PARSE_TESTS: &[(Option<&str>, Option<&str>, bool)] = &[
    (None, None, false),
    (Some("aaa:b"), None, true),
    (None, Some("aaa:b"), false),
    (None, Some("https://test:test/"), false),
    (Some("aaa:/b"), None, true),
    (None, Some("aaa:/b"), true),
    (Some("https://test:test"), None, false),
    (Some("a"), Some("https://b/"), true),
    // Opaque bases only accept a fragment
    (Some("b"), Some("aaa:b"), false),
    (Some("#frag"), Some("aaa:b"), true),
    (Some("http://a<b/"), None, false),
    (Some("http://example.com:65536/"), None, false),
    // The base is parsed first, even for absolute input
    (Some("https://example.com/"), Some("not a url"), false),
];

#[test]
fn test_wpt_canparse_suite() {
    let failures: Vec<String> = CAN_PARSE_TESTS
        .iter()
        .filter_map(|&(input, base, expected)| {
            let actual = Url::can_parse(input.unwrap_or(""), base);
            (actual != expected).then(|| {
                format!("can_parse({input:?}, {base:?}) = {actual}, expected {expected}")
            })
        })
        .collect();

    assert!(failures.is_empty(), "{failures:#?}");
}
