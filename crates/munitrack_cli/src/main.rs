//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `munitrack_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("munitrack_core version={}", munitrack_core::core_version());
    println!(
        "amount_in_words(1234.5)={}",
        munitrack_core::amount_in_words(1234.5)
    );
}
