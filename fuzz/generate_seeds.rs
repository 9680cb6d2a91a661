#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // PBM ASCII 2x2
    fs::write(format!("{dir}/p1_2x2.pbm"), b"P1\n# seed\n2 2\n0 1\n1 0\n").unwrap();

    // PGM ASCII 2x2, maxval 15
    fs::write(format!("{dir}/p2_2x2.pgm"), b"P2\n2 2\n15\n0 15 7 8\n").unwrap();

    // PPM ASCII 1x1 with inline comment
    fs::write(format!("{dir}/p3_1x1.ppm"), b"P3\n1 1\n3\n3 2 # c\n1\n").unwrap();

    // PBM binary 3x2 (padded rows)
    fs::write(format!("{dir}/p4_3x2.pbm"), b"P4\n3 2\n\xa0\x60").unwrap();

    // PGM binary 3x2
    let pgm = b"P5\n3 2\n255\n\x00\x40\x80\xc0\xff\x64";
    fs::write(format!("{dir}/p5_3x2.pgm"), pgm).unwrap();

    // PGM binary 16-bit 1x2
    fs::write(format!("{dir}/p5_16bit.pgm"), b"P5\n1 2\n65535\n\x00\x00\xff\xff").unwrap();

    // PPM binary 2x2
    let ppm = b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80";
    fs::write(format!("{dir}/p6_2x2.ppm"), ppm).unwrap();

    // PPM binary 16-bit 1x1
    let ppm16 = b"P6\n1 1\n1000\n\x03\xe8\x01\xf4\x00\x00";
    fs::write(format!("{dir}/p6_16bit.ppm"), ppm16).unwrap();

    println!("Seeds written to {dir}/");
}
