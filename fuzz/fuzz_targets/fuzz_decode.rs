#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Lenient decode must never panic, and never return more pixels than the header promised
    if let Ok(image) = netpbm_view::decode(data) {
        assert!(image.pixels().len() as u64 <= image.expected_len());
    }

    let limits = netpbm_view::Limits {
        max_pixels: Some(1 << 16),
        ..Default::default()
    };
    let _ = netpbm_view::DecodeRequest::new(data)
        .with_limits(&limits)
        .strict(true)
        .decode(enough::Unstoppable);
    let _ = netpbm_view::probe(data);
});
