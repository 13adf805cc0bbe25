//! Fuzz target for `configure`.
//!
//! Feeds arbitrary option maps to the builder. It must never panic, and
//! every snapshot it accepts must satisfy the documented invariants.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_configure
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wrkrs_config::{OptionKey, Options, configure};

#[derive(Debug, Arbitrary)]
struct FuzzOptions {
    known: Vec<(u8, String)>,
    unknown: Vec<(String, String)>,
}

impl FuzzOptions {
    fn to_options(&self) -> Options {
        let known = self.known.iter().map(|(index, value)| {
            let key = OptionKey::ALL[*index as usize % OptionKey::ALL.len()];
            (key.as_str().to_string(), value.clone())
        });
        known.chain(self.unknown.iter().cloned()).collect()
    }
}

fuzz_target!(|input: FuzzOptions| {
    let options = input.to_options();

    if let Ok(config) = configure(&options) {
        assert!(!config.server().is_empty());
        assert!(!config.process_id().is_empty());

        let namespace = config.namespace();
        assert!(namespace.is_empty() || (namespace.ends_with(':') && !namespace.ends_with("::")));

        assert!(config.pool().max_idle() >= 1);
        assert!(config.poll_interval_secs() > 0);
        assert!(config.dial_timeout_ms() > 0);
        assert!(config.read_timeout_ms() > 0);
        assert!(config.write_timeout_ms() > 0);
    }
});
