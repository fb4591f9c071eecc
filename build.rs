// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use std::env;
use std::fs;
use std::path::Path;

/// True if `feature` is listed in comma-separated `CARGO_CFG_TARGET_FEATURE`
fn has_feature(list: &str, feature: &str) -> bool {
    list.split(',').any(|f| f == feature)
}

/// Parses `SIMD_LANES_OVERRIDE="W32,W64"`, e.g. `"8,4"`.
fn parse_override(val: &str) -> Option<(usize, usize)> {
    let parts: Vec<usize> = val
        .split(',')
        .map(|s| s.trim().parse::<usize>())
        .collect::<Result<_, _>>()
        .ok()?;
    match parts.as_slice() {
        [w32, w64] if w32.is_power_of_two() && w64.is_power_of_two() => Some((*w32, *w64)),
        _ => None,
    }
}

fn main() {
    // Target triple features supplied by `cargo` (`--print cfg`)
    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let feats = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();

    // Only the float widths are needed here:
    // w32 == lanes of f32, w64 == lanes of f64.
    let (w32, w64) = match env::var("SIMD_LANES_OVERRIDE").ok() {
        Some(val) => match parse_override(&val) {
            Some(lanes) => {
                println!("cargo:warning=SIMD_LANES_OVERRIDE applied: {:?}", lanes);
                lanes
            }
            None => panic!(
                "Invalid SIMD_LANES_OVERRIDE. Expected 2 comma-separated powers of two, e.g. \"8,4\""
            ),
        },
        None => match arch.as_str() {
            "x86_64" | "x86" => {
                if has_feature(&feats, "avx512f") {
                    (16, 8)
                } else if has_feature(&feats, "avx2") {
                    (8, 4)
                } else if has_feature(&feats, "sse2") {
                    (4, 2)
                } else {
                    (2, 1)
                }
            }
            "aarch64" => {
                if has_feature(&feats, "neon") {
                    (4, 2)
                } else {
                    (2, 1)
                }
            }
            "wasm32" => {
                if has_feature(&feats, "simd128") {
                    (4, 2)
                } else {
                    (2, 1)
                }
            }
            _ => (2, 1),
        },
    };

    let out_dir = env::var("OUT_DIR").expect("cargo always sets OUT_DIR for build scripts");
    let out_path = Path::new(&out_dir).join("simd_lanes.rs");

    fs::write(
        &out_path,
        format!(
            "
/// Auto-generated SIMD lane widths from build.rs

/// SIMD lane count for f32 elements.
/// Determined at build time from the target features,
/// or overridden via `SIMD_LANES_OVERRIDE`.
#[allow(dead_code)]
pub const W32: usize = {w32};

/// SIMD lane count for f64 elements.
/// Determined at build time from the target features,
/// or overridden via `SIMD_LANES_OVERRIDE`.
#[allow(dead_code)]
pub const W64: usize = {w64};
"
        ),
    )
    .expect("failed to write simd_lanes.rs");

    println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_ARCH");
    println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_FEATURE");
    println!("cargo:rerun-if-env-changed=SIMD_LANES_OVERRIDE");
}
