// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_lesson_content(size: usize) -> String {
    let base = "# Lesson Title\n\n## Objectives\n1. Explain the **water cycle**\n2. Draw a *diagram*\n\n| Phase | Minutes |\n|---|---|\n| Engage | 5 |\n| Explore | 20 |\n\n- [ ] Worksheet\n- Beakers & water\n---\nTeacher notes with <angle brackets> and *emphasis*.\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_marker_heavy_content(lines: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        content.push_str(&"*".repeat(i % 7 + 1));
        content.push_str(" x | y ** z\n");
    }
    content
}
