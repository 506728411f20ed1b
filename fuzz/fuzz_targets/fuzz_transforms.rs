#![no_main]
use libfuzzer_sys::fuzz_target;
use bmpfx::*;

fuzz_target!(|data: &[u8]| {
    // First bytes pick the shape and parameters, the rest become samples
    let [w, h, window, gamma, rest @ ..] = data else {
        return;
    };
    let (w, h) = (u32::from(*w % 16) + 1, u32::from(*h % 16) + 1);
    let pixels: Vec<RGB8> = (0..(w * h) as usize)
        .map(|i| {
            let at = |k: usize| rest.get(i * 3 + k).copied().unwrap_or(0);
            RGB8::new(at(0), at(1), at(2))
        })
        .collect();
    let buf = PixelBuffer::from_pixels(w, h, pixels).unwrap();

    let mut twice = buf.clone();
    negative(&mut twice);
    negative(&mut twice);
    assert_eq!(twice, buf);

    let mut gray = buf.clone();
    grayscale(&mut gray);
    let mut gray2 = gray.clone();
    grayscale(&mut gray2);
    assert_eq!(gray, gray2);

    let mut g = buf.clone();
    let _ = gamma_correction(&mut g, f64::from(*gamma) / 32.0);

    let mut m = buf.clone();
    match median_filter(&mut m, usize::from(*window % 12)) {
        Ok(()) => assert_eq!((m.width(), m.height()), (w, h)),
        Err(_) => assert_eq!(m, buf),
    }
});
