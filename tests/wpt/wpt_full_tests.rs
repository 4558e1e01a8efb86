/// Full WPT fixture runs
use super::wpt_loader::{load_setter_tests, load_url_tests};
use super::wpt_runner::{run_setter_tests, run_wpt_tests};

#[test]
fn test_full_wpt_suite() {
    let tests = load_url_tests();
    println!("\nRunning {} WPT entries...", tests.len());

    let result = run_wpt_tests(tests);
    result.report();

    assert_eq!(
        result.failed, 0,
        "WPT parsing fixtures failed. Run with `-- --nocapture` for details."
    );
    assert!(result.passed >= 120, "only {} cases ran", result.passed);
}

#[test]
fn test_wpt_setters_suite() {
    let result = run_setter_tests(load_setter_tests());
    result.report();

    assert_eq!(
        result.failed, 0,
        "WPT setter fixtures failed. Run with `-- --nocapture` for details."
    );
    assert!(result.passed >= 40, "only {} cases ran", result.passed);
}
