// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries Skia needs when the painter is compiled in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager reads the registry (RegOpenKeyExW and friends).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
