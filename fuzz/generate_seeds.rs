#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp24(width: i32, height: i32, extra: &[u8], pixels: &[u8]) -> Vec<u8> {
    let offset = 54 + extra.len() as u32;
    let total = offset + pixels.len() as u32;
    let mut bmp = vec![0u8; 54];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&total.to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&offset.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&(40 + extra.len() as u32).to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    bmp[34..38].copy_from_slice(&(pixels.len() as u32).to_le_bytes());
    bmp.extend_from_slice(extra);
    bmp.extend_from_slice(pixels);
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 1x1: 3 pixel bytes + 1 padding
    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp24(1, 1, &[], &[0xff, 0, 0, 0])).unwrap();

    // 2x2: 6 pixel bytes + 2 padding per row
    let rows = [10, 20, 30, 40, 50, 60, 0, 0, 70, 80, 90, 100, 110, 120, 0, 0];
    fs::write(format!("{dir}/bmp_2x2.bmp"), bmp24(2, 2, &[], &rows)).unwrap();

    // 4x1: no padding
    let row = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120];
    fs::write(format!("{dir}/bmp_4x1.bmp"), bmp24(4, 1, &[], &row)).unwrap();

    // V5 header: 84 extra header bytes before the pixel array
    fs::write(format!("{dir}/bmp_v5_1x1.bmp"), bmp24(1, 1, &[0u8; 84], &[1, 2, 3, 0])).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/top_down.bmp"), bmp24(1, -1, &[], &[1, 2, 3, 0])).unwrap();
    fs::write(format!("{dir}/truncated.bmp"), bmp24(2, 2, &[], &[1, 2, 3])).unwrap();

    println!("Generated seed corpus in {dir}/");
}
