use weburl::{ParseError, Url};

fn main() -> Result<(), ParseError> {
    // Parse a URL and read its components
    let mut url = Url::parse("https://EXAMPLE.com:8080/a/./b/../path?query=value#hash", None)?;

    println!("URL: {}", url.href()); // https://example.com:8080/a/path?query=value#hash
    println!("Protocol: {}", url.protocol()); // https:
    println!("Host: {}", url.host()); // example.com:8080
    println!("Port: {}", url.port()); // 8080
    println!("Pathname: {}", url.pathname()); // /a/path
    println!("Search: {}", url.search()); // ?query=value
    println!("Hash: {}", url.hash()); // #hash
    println!("Origin: {}", url.origin()); // https://example.com:8080
    println!();

    // Resolve a relative reference
    let relative = Url::parse("../other?x=1", Some(url.href()))?;
    println!("Relative: {}", relative.href()); // https://example.com:8080/other?x=1

    // Setters mirror the URL interface attributes
    url.set_port("443");
    url.set_hash("");
    println!("After setters: {}", url.href()); // https://example.com/a/path?query=value

    Ok(())
}
