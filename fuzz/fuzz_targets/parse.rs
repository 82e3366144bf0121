#![no_main]

use libfuzzer_sys::fuzz_target;
use packal::diagnostics::Diagnostics;
use packal::lexer::{self, BufferConfig};
use packal::parser;

fuzz_target!(|data: &[u8]| {
    // The front end takes raw bytes; no UTF-8 filtering needed.
    let mut sink = Diagnostics::new();
    let _ = lexer::lex(data, &mut sink);

    let mut sink = Diagnostics::new();
    let _ = parser::parse(data, &mut sink);

    // Small buffers exercise the refill path on every few bytes.
    if let Ok(config) = BufferConfig::new(7, 3) {
        let mut sink = Diagnostics::new();
        let _ = parser::parse_with_config(data, config, &mut sink);
    }
});
