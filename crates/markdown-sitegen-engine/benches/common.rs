// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`, plus a [link](page.html).\n\n- Bullet point\n- Another item\n\n1. first\n2. second\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

/// A document whose quotes nest `depth` levels deep.
#[allow(dead_code)]
pub fn generate_nested_quotes(depth: usize) -> String {
    (0..depth).fold("innermost *text*".to_string(), |inner, level| {
        let body = format!("level {level}\n\n{inner}");
        body.lines()
            .map(|line| format!("> {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    })
}
