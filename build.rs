use std::process::Command;

fn git_hash() -> String {
    let unknown = String::from("unknown");

    // staged but uncommitted changes don't belong to any commit
    let clean = Command::new("git")
        .args(["diff", "--cached", "--exit-code"])
        .status()
        .map_or(false, |s| s.success());

    if !clean {
        return unknown;
    }

    Command::new("git")
        .args(["rev-parse", "--verify", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or(unknown)
}

fn main() {
    // embed git hash as environment variable GIT_HASH for use in --version
    println!("cargo:rustc-env=GIT_HASH={}", git_hash());
    println!("cargo:rerun-if-changed=build.rs");
}
