#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header probe and full decode must never panic, under either strictness
    let _ = bmpfx::ImageInfo::from_bytes(data);
    let _ = bmpfx::decode_bmp(data, enough::Unstoppable);
    let _ = bmpfx::DecodeRequest::new(data)
        .with_permissiveness(bmpfx::BmpPermissiveness::Strict)
        .decode(enough::Unstoppable);
});
