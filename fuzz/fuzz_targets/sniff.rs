#![no_main]
use libfuzzer_sys::fuzz_target;
use plain_types::filetype;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Image decoding must fail cleanly and leave the position untouched
    let mut stream = Cursor::new(data);
    let _ = filetype::is_image(&mut stream);
    assert_eq!(stream.position(), 0);
});
