#![no_main]
use libfuzzer_sys::fuzz_target;
use plain_types::Date;

fuzz_target!(|data: &str| {
    // Whatever parses must print back in canonical form and parse again
    if let Ok(d) = Date::parse(data) {
        let again = Date::parse(&d.to_string()).expect("canonical form parses");
        assert_eq!(again, d);
    }
});
