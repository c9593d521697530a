// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_outline(roots: usize, depth: usize) -> String {
    let mut content = String::from("title:: Benchmark\nname:: bench\n\n");
    let mut counter = 0usize;

    for root in 0..roots {
        content.push_str(&format!("- Root {root} with **bold** and *italic* -> text\n"));
        generate_nested_blocks(&mut content, 1, depth, &mut counter);
    }

    content
}

#[allow(dead_code)]
fn generate_nested_blocks(content: &mut String, level: usize, depth: usize, counter: &mut usize) {
    if level > depth {
        return;
    }

    let indent = "\t".repeat(level);
    for i in 0..3 {
        *counter += 1;
        content.push_str(&format!("{indent}- Item {level}.{i} ~~old~~ new\n"));
        if i == 0 {
            content.push_str(&format!("{indent}  id:: {}\n", fake_uuid(*counter)));
        } else {
            content.push_str(&format!("{indent}  see (({}))\n", fake_uuid(*counter - i)));
        }
        generate_nested_blocks(content, level + 1, depth, counter);
    }
}

#[allow(dead_code)]
fn fake_uuid(n: usize) -> String {
    format!("{:08x}-0000-4000-8000-{:012x}", n, n)
}
