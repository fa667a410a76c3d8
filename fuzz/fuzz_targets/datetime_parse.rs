#![no_main]
use libfuzzer_sys::fuzz_target;
use plain_types::DateTime;

fuzz_target!(|data: &str| {
    if let Ok(dt) = DateTime::parse(data) {
        let again = DateTime::parse(&dt.to_string()).expect("printed form parses");
        assert!(again.equal(&dt));
    }
});
