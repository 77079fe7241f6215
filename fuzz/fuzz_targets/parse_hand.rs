#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate holdem_coach;

use std::str;

use holdem_coach::core::Hand;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(h) = Hand::new_from_str(s) {
            // Whatever parsed has to print and parse back to the same hand.
            let again = Hand::new_from_str(&h.to_string()).unwrap();
            assert_eq!(h, again);
        }
    }
});
