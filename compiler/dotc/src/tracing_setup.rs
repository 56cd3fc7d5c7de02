//! Tracing subscriber for the CLI.
//!
//! Logging is off unless `RUST_LOG` is set or `-v` is given. `-v` enables
//! DEBUG for the lexer crates; `-vv` enables TRACE, which together with the
//! tracing observer logs every rule match. Output goes to stderr as a
//! hierarchical tree so spans nest under the `tokenize` call.

use tracing_subscriber::{prelude::*, EnvFilter};

pub fn init(verbose: u8) {
    let filter = match verbose {
        0 => match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => return,
        },
        1 => EnvFilter::new("dot_lexer_core=debug,dot_lexer=debug,dot_lex=debug"),
        _ => EnvFilter::new("dot_lexer_core=trace,dot_lexer=trace,dot_lex=trace"),
    };

    let layer = tracing_tree::HierarchicalLayer::new(2)
        .with_targets(true)
        .with_bracketed_fields(true);

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}
