//! End-to-end runs of the `pagectl` binary

use std::process::Command;

fn pagectl(args: &[&str]) -> String {
    let out = Command::new(env!("CARGO_BIN_EXE_pagectl"))
        .args(args)
        .output()
        .expect("failed to run pagectl");
    assert!(
        out.status.success(),
        "pagectl {:?} failed: {}",
        args,
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout).expect("utf-8 output")
}

#[test]
fn html_output_escapes_result_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.json");
    std::fs::write(&path, r#"[{"doc_id": "1", "name": "Tom & Jerry <Deluxe>"}]"#).unwrap();

    let html = pagectl(&["--results", path.to_str().unwrap(), "--format", "html"]);
    assert!(html.contains("<li>1 | Tom &amp; Jerry &lt;Deluxe&gt; | N/A | N/A</li>"));
    assert!(!html.contains("<Deluxe>"));
    assert!(html.contains("<button class=\"active\" data-page=\"1\">1</button>"));
}

#[test]
fn text_output_lists_page_and_controls() {
    let text = pagectl(&[
        "--results",
        "tests/goldens/results.json",
        "--page-size",
        "3",
        "--page",
        "2",
    ]);
    assert!(text.contains("Showing 4-6 of 8"));
    assert!(text.contains("6 | Team Fortress 2 | Free to Play | Oct 10, 2007"));
    assert!(text.trim_end().ends_with("Previous 1 [2] 3 Next"));
}

#[cfg(feature = "host")]
#[test]
fn host_page_receives_results_and_controls() {
    let html = pagectl(&[
        "--results",
        "tests/goldens/results.json",
        "--host",
        "tests/goldens/pages/search.html",
        "--page-size",
        "3",
        "--page",
        "3",
    ]);
    assert!(html.contains(concat!(
        "<ul id=\"results\"><li>Showing 7-8 of 8</li>",
        "<li>7 | Counter-Strike | N/A | N/A</li>",
        "<li>8 | Dota 2 | Free to Play | N/A</li></ul>"
    )));
    assert!(!html.contains("Portal"));
    assert!(html.contains("<button class=\"active\" data-page=\"3\">3</button>"));
    assert!(html.contains("<button data-page=\"4\" disabled>Next</button>"));
}

#[test]
fn out_of_range_page_fails() {
    let out = Command::new(env!("CARGO_BIN_EXE_pagectl"))
        .args(["--results", "tests/goldens/results.json", "--page", "9"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("out of range"));
}
