//! Snapshot tests for rendered templates.
//!
//! These tests verify the complete output of each built-in template.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::fs;

use tempfile::TempDir;
use tmpl_codegen::Generator;

/// Render a template the way it is written to disk.
fn render(filename: &str, deps: &[&str]) -> String {
    let lines = Generator::new(filename, deps.iter().copied())
        .expect("Failed to classify filename")
        .preview();

    lines.iter().map(|l| format!("{}\n", l)).collect()
}

#[test]
fn test_cpp_template() {
    insta::assert_snapshot!(render("awesome.cpp", &["iostream", "vector", "string"]), @"
    #include <iostream>
    #include <vector>
    #include <string>

    using namespace std;

    int main(int argc, char * argv[])
    {

    \treturn 0;
    }
    ");
}

#[test]
fn test_c_template() {
    insta::assert_snapshot!(render("something.c", &["stdio.h"]), @"
    #include <stdio.h>

    int main(int argc, char * argv[])
    {

    \treturn 0;
    }
    ");
}

#[test]
fn test_header_template() {
    insta::assert_snapshot!(render("awesome.h", &["vector", "string"]), @"
    #ifndef AWESOME_H
    #def AWESOME_H

    #include <vector>
    #include <string>

    #endif // AWESOME_H
    ");
}

#[test]
fn test_java_template() {
    insta::assert_snapshot!(render("something.java", &["util.*", "math.*"]), @"
    import java.util.*;
    import java.math.*;

    public class something {

    \tpublic static void main(String[] args) {




    \t}
    }
    ");
}

#[test]
fn test_written_file_matches_preview() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Widget.h");
    let filename = path.to_string_lossy().into_owned();

    Generator::new(filename.as_str(), ["string"])
        .unwrap()
        .generate()
        .unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "#ifndef WIDGET_H\n#def WIDGET_H\n\n#include <string>\n\n#endif // WIDGET_H\n"
    );
}

#[test]
fn test_rerun_destroys_prior_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Main.java");
    let filename = path.to_string_lossy().into_owned();

    fs::write(&path, "class Old {}\n// user edits\n").unwrap();
    Generator::new(filename.as_str(), Vec::<String>::new())
        .unwrap()
        .generate()
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("\npublic class Main {\n"));
    assert!(!content.contains("user edits"));
}
