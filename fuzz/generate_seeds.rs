#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 2x3, canonical layout
    fs::write(format!("{dir}/grid_2x3.ebf"), b"eb2 3\n1 2 3\n4 5 6\n").unwrap();

    // 1x1 with trailing text
    fs::write(format!("{dir}/grid_1x1_trailer.ebf"), b"eb1 1 255 end\n").unwrap();

    // Irregular whitespace
    fs::write(format!("{dir}/grid_ws.ebf"), b"eb \t2\r\n2\x0b0 1\x0c2 3\n").unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_magic.bin"), b"eb").unwrap();
    fs::write(format!("{dir}/swapped_magic.bin"), b"be1 1 0").unwrap();
    fs::write(format!("{dir}/too_few.bin"), b"eb2 2 1 2 3").unwrap();
    fs::write(format!("{dir}/too_many.bin"), b"eb1 2 1 2 3").unwrap();
    fs::write(format!("{dir}/huge_dims.bin"), b"eb262144 262144 0").unwrap();
    fs::write(format!("{dir}/negative.bin"), b"eb1 1 -1").unwrap();

    println!("Generated seed corpus in {dir}/");
}
