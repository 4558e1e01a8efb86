#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Whole-crate properties
///
/// - Parsing a serialization reproduces it
/// - IPv4 and IPv6 hosts canonicalize in one pass
/// - Setters only touch their own component
/// - Encode sets nest as documented
/// - Walk-through scenarios on the URL record
use weburl::percent_encode::{
    is_c0_control_percent_encode, is_component_percent_encode, is_fragment_percent_encode,
    is_path_percent_encode, is_query_percent_encode, is_special_query_percent_encode,
    is_urlencoded_percent_encode, is_userinfo_percent_encode,
};
use weburl::{Host, ParseError, Url, UrlPath, basic_url_parse, parse_host, serialize_host};

const MESSY_INPUTS: &[&str] = &[
    "HTTP://User:Pa ss@EXAMPLE.com:80/a/./b/../c d?e f#g h",
    "https://example.com/%2e%2E/x/.%2e/y",
    "http://0x7f.0.0.1:8080",
    "http://[0:0:0:0:0:ffff:c0a8:1]/",
    "https://m\u{fc}nchen.example/stra\u{df}e?q=\u{e9}#\u{2603}",
    "file:///C|/Windows/../System32",
    "file://localhost/etc/hosts",
    "file:c:\\temp\\x.txt",
    "non-spec:/.//p",
    "web+demo:/..//not-a-host/",
    "sc://\u{f1}/%zz?x'y#z",
    "mailto:someone@example.com?subject=hi there",
    "data:space  ?q",
    "javascript:alert('x')#y",
    "blob:https://example.com/uuid",
    "ws://example.com/?a'b",
    "foo://",
    "foo:///",
    "a:",
];

#[test]
fn test_serialization_is_idempotent() {
    for input in MESSY_INPUTS {
        let url = Url::parse(input, None).unwrap_or_else(|e| panic!("{input:?}: {e}"));
        let again = Url::parse(url.href(), None).unwrap();
        assert_eq!(again.href(), url.href(), "{input:?}");
        // "C|" drops the host on the first pass, so records settle one parse later
        let third = Url::parse(again.href(), None).unwrap();
        assert_eq!(third.record(), again.record(), "{input:?}");
    }
}

#[test]
fn test_ipv4_canonical_form() {
    let cases = [
        ("http://0x7f.1/", "127.0.0.1"),
        ("http://0300.0250.0.1/", "192.168.0.1"),
        ("http://3232235521/", "192.168.0.1"),
        ("http://192.168.257/", "192.168.1.1"),
        ("http://1.2.3.4./", "1.2.3.4"),
    ];
    for (input, host) in cases {
        let url = Url::parse(input, None).unwrap();
        assert_eq!(url.hostname(), host, "{input}");
        assert!(matches!(url.record().host, Some(Host::Ipv4(_))));

        let canonical = Url::parse(&format!("http://{host}/"), None).unwrap();
        assert_eq!(canonical.record().host, url.record().host, "{input}");
    }
}

#[test]
fn test_ipv6_canonical_form_is_stable() {
    let inputs = [
        "[0:0:0:0:0:0:0:1]",
        "[2001:DB8:0:0:1:0:0:1]",
        "[::ffff:192.168.0.1]",
        "[1:0:0:2::3:0]",
        "[::]",
    ];
    for input in inputs {
        let host = parse_host(input, false).unwrap();
        let serialized = serialize_host(&host);
        let reparsed = parse_host(&serialized, false).unwrap();
        assert_eq!(reparsed, host, "{input}");
        assert_eq!(serialize_host(&reparsed), serialized, "{input}");
    }
    assert_eq!(
        serialize_host(&parse_host("[2001:DB8:0:0:1:0:0:1]", false).unwrap()),
        "[2001:db8::1:0:0:1]"
    );
}

#[test]
fn test_protocol_setter_scope() {
    let mut url = Url::parse("https://u:p@example.com:8443/a/b?c=d#e", None).unwrap();

    // Crossing between special and non-special is refused outright
    let before = url.href().to_string();
    assert!(!url.set_protocol("foo"));
    assert_eq!(url.href(), before);

    assert!(url.set_protocol("wss"));
    assert_eq!(url.username(), "u");
    assert_eq!(url.password(), "p");
    assert_eq!(url.host(), "example.com:8443");
    assert_eq!(url.pathname(), "/a/b");
    assert_eq!(url.search(), "?c=d");
    assert_eq!(url.hash(), "#e");
}

#[test]
fn test_setters_leave_other_components_alone() {
    let original = Url::parse("https://u:p@example.com:8443/a/b?c=d#e", None).unwrap();

    let mut url = original.clone();
    url.set_search("x=1");
    assert_eq!(url.pathname(), original.pathname());
    assert_eq!(url.hash(), original.hash());

    let mut url = original.clone();
    url.set_hash("frag");
    assert_eq!(url.search(), original.search());

    let mut url = original.clone();
    assert!(url.set_pathname("/z"));
    assert_eq!(url.host(), original.host());
    assert_eq!(url.search(), original.search());

    let mut url = original.clone();
    assert!(url.set_hostname("example.org"));
    assert_eq!(url.port(), original.port());
    assert_eq!(url.username(), original.username());
}

#[test]
fn test_encode_sets_nest() {
    let chain: [fn(u8) -> bool; 6] = [
        is_c0_control_percent_encode,
        is_query_percent_encode,
        is_path_percent_encode,
        is_userinfo_percent_encode,
        is_component_percent_encode,
        is_urlencoded_percent_encode,
    ];
    for byte in 0..=u8::MAX {
        for pair in chain.windows(2) {
            assert!(!pair[0](byte) || pair[1](byte), "byte {byte:#04x}");
        }
        assert!(!is_c0_control_percent_encode(byte) || is_fragment_percent_encode(byte));
        assert!(!is_query_percent_encode(byte) || is_special_query_percent_encode(byte));
    }
    assert!(!is_path_percent_encode(b'^'));
    assert!(is_userinfo_percent_encode(b'^'));
}

#[test]
fn test_scenario_default_port_and_dot_segments() {
    let record = basic_url_parse("https://example.com:80/a/../b?x=1#frag", None, None).unwrap();
    assert_eq!(record.host, Some(Host::Domain("example.com".to_string())));
    // 80 is not the https default
    assert_eq!(record.port, Some(80));
    assert_eq!(record.path, UrlPath::Segments(vec!["b".to_string()]));
    assert_eq!(record.query.as_deref(), Some("x=1"));
    assert_eq!(record.fragment.as_deref(), Some("frag"));

    let url = Url::parse("https://example.com:443/a/../b?x=1#frag", None).unwrap();
    assert_eq!(url.record().port, None);
    assert_eq!(url.href(), "https://example.com/b?x=1#frag");
}

#[test]
fn test_scenario_file_empty_host() {
    let record = basic_url_parse("file:///C:/demo", None, None).unwrap();
    assert_eq!(record.scheme, "file");
    assert_eq!(record.host, Some(Host::empty()));
    assert_eq!(
        record.path,
        UrlPath::Segments(vec!["C:".to_string(), "demo".to_string()])
    );
    assert_eq!(record.serialize(false), "file:///C:/demo");
}

#[test]
fn test_scenario_hosts() {
    let host = parse_host("[::1]", false).unwrap();
    assert_eq!(host, Host::Ipv6([0, 0, 0, 0, 0, 0, 0, 1]));
    assert_eq!(serialize_host(&host), "[::1]");

    let url = Url::parse("h://.", None).unwrap();
    assert_eq!(url.record().host, Some(Host::Opaque(".".to_string())));
    assert_eq!(url.href(), "h://.");
}

#[test]
fn test_scenario_port_setter_and_failure() {
    let mut url = Url::parse("https://x/", None).unwrap();
    url.set_port("443");
    assert_eq!(url.record().port, None);
    assert_eq!(url.host(), "x");

    assert_eq!(
        Url::parse("not a url", None),
        Err(ParseError::RelativeUrlWithoutBase)
    );
}
