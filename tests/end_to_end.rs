//! End-to-end scenarios: collect a folder, transform every page, inspect
//! the derived outputs on disk.

use pagesynth::collect::PageSet;
use pagesynth::output::RunReport;
use pagesynth::transform::{PageTransformer, TransformError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn folder_with_files(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(tmp.path().join(name), content).unwrap();
    }
    tmp
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name))
        .unwrap_or_else(|err| panic!("cannot read {name}: {err}"))
}

#[test]
fn root_document_substituted_line_by_line() {
    let tmp = folder_with_files(&[
        ("index.html", "<html><body><p>Foo</p></body></html>\n"),
        ("dictionary.csv", "Foo,Bar\n"),
    ]);
    let before = fs::read(tmp.path().join("index.html")).unwrap();

    let mut transformer = PageTransformer::new();
    transformer
        .transform(&tmp.path().join("index.html"))
        .unwrap();

    let out = read(tmp.path(), "index_2.html");
    assert!(out.contains("Bar"));
    assert!(!out.contains("Foo"));

    let after = fs::read(tmp.path().join("index.html")).unwrap();
    assert_eq!(before, after, "original must stay byte-identical");
}

#[test]
fn chapter_merge_builds_article_from_companion() {
    // Nine-line companion: the chapter marker sits on line 5 (0-indexed),
    // so everything through it is front matter; the next non-blank line is
    // the heading and the trailing blank line is dropped.
    let companion = "書名\n作者\n\n手機掃碼閱讀\n廣告\n第一章\nTitle\nPara A\nPara B\n\n";
    let tmp = folder_with_files(&[
        (
            "chapter1.html",
            "<html><body><main class=\"x\">OLD</main></body></html>",
        ),
        ("chapter1.txt", companion),
    ]);

    let mut transformer = PageTransformer::new();
    transformer
        .transform(&tmp.path().join("chapter1.html"))
        .unwrap();

    let out = read(tmp.path(), "chapter1_2.html");
    assert!(!out.contains("OLD"));
    assert!(!out.contains("第一章"));
    assert!(out.contains(
        "<main>\n\
         <h2>Title</h2>\n\
         <div style=\"margin-bottom:20px;\">Para A</div>\n\
         <div style=\"margin-bottom:20px;\">Para B</div>\n\
         </main></article>"
    ));
    assert!(out.contains("<article id=\"content\""));
}

#[test]
fn missing_companion_fails_that_page_only() {
    let tmp = folder_with_files(&[
        ("chapter1.html", "<main>a</main>"),
        ("chapter2.html", "<main>b</main>"),
        ("chapter2.txt", "banner\nTitle\n"),
    ]);

    let mut pages = PageSet::new();
    pages.add(tmp.path()).unwrap();

    let mut transformer = PageTransformer::new();
    let mut report = RunReport::default();
    for path in pages.iter() {
        match transformer.transform(path) {
            Ok(strategy) => report.record_success(path, strategy),
            Err(err) => {
                assert!(matches!(err, TransformError::MissingCompanion(_)));
                report.record_failure(path, &err);
            }
        }
    }

    assert_eq!(report.total, 2);
    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed, 1);
    assert!(!tmp.path().join("chapter1_2.html").exists());
    assert!(tmp.path().join("chapter2_2.html").exists());
}

#[test]
fn folder_batch_processes_every_original_once() {
    let tmp = folder_with_files(&[
        ("index.html", "home Foo\n"),
        ("chapter1.html", "<main>one</main>"),
        ("chapter1.txt", "banner\nChapter One\nText\n"),
        ("chapter1_2.html", "stale derived output"),
        ("dictionary.csv", "Foo,Bar\nhome,index.html\n"),
    ]);

    let mut pages = PageSet::new();
    pages.add(tmp.path()).unwrap();
    assert_eq!(pages.len(), 2, "derived file must not be collected");

    let mut transformer = PageTransformer::new();
    for path in pages.iter() {
        transformer.transform(path).unwrap();
    }

    // The root remap rule: a replacement of index.html points at the
    // derived output instead.
    assert_eq!(read(tmp.path(), "index_2.html"), "index_2.html Bar\n");

    let chapter = read(tmp.path(), "chapter1_2.html");
    assert!(chapter.contains("<h2>Chapter One</h2>"));
}

#[test]
fn second_collection_still_skips_derived_outputs() {
    let tmp = folder_with_files(&[
        ("chapter1.html", "<main>x</main>"),
        ("chapter1.txt", "banner\nTitle\n"),
    ]);

    let mut pages = PageSet::new();
    pages.add(tmp.path()).unwrap();
    let mut transformer = PageTransformer::new();
    for path in pages.iter() {
        transformer.transform(path).unwrap();
    }

    let mut again = PageSet::new();
    again.add(tmp.path()).unwrap();
    let names: Vec<_> = again
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["chapter1.html"]);
}
