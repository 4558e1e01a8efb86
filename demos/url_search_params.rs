/// `UrlSearchParams` usage example
use weburl::{ParseError, Url, UrlSearchParams};

fn main() -> Result<(), ParseError> {
    // Parse a query string
    let mut params = UrlSearchParams::parse("name=John&age=30&city=Tokyo");

    println!("name: {:?}", params.get("name")); // Some("John")
    println!("age: {:?}", params.get("age")); // Some("30")
    println!();

    // Append a new parameter
    params.append("country", "Japan");
    println!("After append: {params}"); // name=John&age=30&city=Tokyo&country=Japan

    // Set replaces the first occurrence and drops the rest
    params.set("age", "31");
    println!("After set: {params}"); // name=John&age=31&city=Tokyo&country=Japan

    // Delete a parameter
    params.delete("city", None);
    println!("After delete: {params}"); // name=John&age=31&country=Japan

    // Sort parameters by name
    params.sort();
    println!("After sort: {params}"); // age=31&country=Japan&name=John
    println!();

    for (key, value) in params.iter() {
        println!("  {key} = {value}");
    }
    println!();

    // Write the parameters back into a URL
    let mut url = Url::parse("https://example.com/search#results", None)?;
    params.append("q", "rust url");
    url.set_search_params(&params);
    println!("URL: {}", url.href()); // https://example.com/search?age=31&country=Japan&name=John&q=rust+url#results

    Ok(())
}
