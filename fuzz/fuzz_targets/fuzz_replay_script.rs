#![no_main]

use libfuzzer_sys::fuzz_target;
use roady::ReplayScript;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(script) = ReplayScript::parse(text) {
            let _ = script.intents("roadnode");
        }
    }
});
