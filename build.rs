use std::process::Command;

// `git rev-parse <args> HEAD`, or "unknown" outside a checkout
fn rev_parse(args: &[&str]) -> String {
    Command::new("git")
        .arg("rev-parse")
        .args(args)
        .arg("HEAD")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |hash| hash.trim().to_string())
}

fn main() {
    // shown by `cruciverb --version` and the wasm debug report
    println!("cargo:rustc-env=GIT_HASH={}", rev_parse(&["--short"]));
    println!("cargo:rerun-if-changed=.git/HEAD");
}
