//! Integration tests for the highlighting pipeline.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use rvhl::{DocsOptions, Error, Format, Highlighter, LanguageRegistry, tokenize};

const TRAP_HANDLER: &str = "\
    .section .text
    .globl trap_entry
    .p2align 2
trap_entry:
    csrrw sp, sscratch, sp      # swap stacks
    addi sp, sp, -256
    sd ra, 8(sp)
    csrr t0, scause
    bltz t0, 1f
    call handle_exception
1:
    ld ra, 8(sp)
    addi sp, sp, 256
    sret
";

fn highlighter() -> Highlighter {
    Highlighter::new(LanguageRegistry::with_builtins().expect("builtins register"))
}

fn categories(text: &str) -> Vec<(String, &'static str)> {
    let highlighter = highlighter();
    let language = highlighter.language("riscv").unwrap();
    tokenize(&language.grammar, text)
        .into_iter()
        .filter_map(|t| t.category().map(|c| (t.text.to_string(), c)))
        .collect()
}

#[test]
fn test_trap_handler_is_lossless() {
    let highlighter = highlighter();
    let language = highlighter.language("riscv").unwrap();
    let tokens = tokenize(&language.grammar, TRAP_HANDLER);
    let rebuilt: String = tokens.iter().map(|t| t.text).collect();
    assert_eq!(rebuilt, TRAP_HANDLER);
}

#[test]
fn test_trap_handler_categories() {
    let found = categories(TRAP_HANDLER);
    let has = |text: &str, category: &str| {
        found
            .iter()
            .any(|(t, c)| t.as_str() == text && *c == category)
    };

    assert!(has(".section", "tag"));
    assert!(has(".globl", "tag"));
    assert!(has(".p2align", "tag"));
    assert!(has("trap_entry:", "operator"));
    assert!(has("csrrw", "keyword"));
    assert!(has("sscratch", "class-name"));
    assert!(has("scause", "class-name"));
    assert!(has("# swap stacks\n", "comment"));
    assert!(has("sd", "keyword"));
    assert!(has("bltz", "important"));
    assert!(has("call", "important"));
    assert!(has("1:", "operator"));
    assert!(has("256", "number"));
    assert!(has("sret", "keyword"));
    assert!(has("handle_exception", "operator"));
}

#[test]
fn test_highlight_file_html() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("boot.S");
    fs::write(&path, "_start:\n    j main\n").unwrap();

    let html = rvhl::highlight_file(&highlighter(), &path, "riscv", Format::Html).unwrap();
    assert!(html.contains("<span class=\"token labels operator\">_start:</span>"));
    assert!(html.contains("<span class=\"token pseudo-instructions important\">j</span>"));
}

#[test]
fn test_highlight_missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.S");
    let err = rvhl::highlight_file(&highlighter(), &path, "riscv", Format::Html).unwrap_err();
    assert!(matches!(err, Error::File { .. }));
    assert!(err.to_string().contains("missing.S"));
}

#[test]
fn test_process_docs() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();

    let chapter = src.path().join("chapter1.md");
    fs::write(
        &chapter,
        "# Trap\n\n```riscv\ncsrw stvec, t0\n```\n\n```rust\nfn main() {}\n```\n",
    )
    .unwrap();
    let notes = src.path().join("notes.md");
    fs::write(&notes, "No code here.\n").unwrap();

    let done = AtomicUsize::new(0);
    let options = DocsOptions::new(out.path()).with_jobs(2);
    let report = rvhl::process_docs(&highlighter(), &[chapter, notes], &options, |_| {
        done.fetch_add(1, Ordering::Relaxed);
    })
    .unwrap();

    assert_eq!(done.load(Ordering::Relaxed), 2);
    assert_eq!(report.documents.len(), 2);
    assert_eq!(report.highlighted(), 1);
    assert_eq!(report.skipped(), 1);

    let written = fs::read_to_string(out.path().join("chapter1.md")).unwrap();
    assert!(written.contains("<span class=\"token csr-instructions keyword\">csrw</span>"));
    assert!(written.contains("```rust\nfn main() {}\n```\n"));
    assert_eq!(
        fs::read_to_string(out.path().join("notes.md")).unwrap(),
        "No code here.\n"
    );
}

#[test]
fn test_process_docs_rejects_duplicate_names() {
    let out = tempfile::tempdir().unwrap();
    let inputs = [PathBuf::from("a/intro.md"), PathBuf::from("b/intro.md")];
    let err = rvhl::process_docs(
        &highlighter(),
        &inputs,
        &DocsOptions::new(out.path()),
        |_| {},
    )
    .unwrap_err();
    assert!(matches!(err, Error::DuplicateOutput(ref p) if p.ends_with("intro.md")));
}
