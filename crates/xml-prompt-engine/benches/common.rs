// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Role\n\n## Instructions\n\nAnswer with **care** and cite `sources`.\n\n- Rule one\n  - Nested rule\n- Rule two\n\n> Quoted context\n\n| Key | Value |\n|-----|-------|\n| a | 1 |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_list(depth: usize) -> String {
    let mut content = String::new();
    for level in 0..depth {
        content.push_str(&"  ".repeat(level));
        content.push_str(&format!("- Item at level {level}\n"));
    }
    content
}
