//! Demonstrates framing JSON messages off a stream that carries no length
//! prefix and no delimiter.
//!
//! A peer writes JSON-RPC style messages back to back. The reader receives
//! them in chunks whose boundaries have nothing to do with message
//! boundaries, here simulated by a fixed array. Each chunk is fed one
//! character at a time; the reassembler hands back a message on exactly the
//! character that completes it, and the reader resets it before continuing
//! with the rest of the chunk.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonframe --example socket_framing
//! ```

#![allow(clippy::needless_raw_string_hashes)]

use jsonframe::{ParserOptions, StreamingReassembler};

fn main() {
    // In real life this would come from the network.
    let simulated_stream: [&str; 6] = [
        // 0 – first message, cut mid-key
        r#"{"jsonrpc":"2.0","meth"#,
        // 1 – first message ends, second begins in the same chunk
        r#"od":"subscribe","id":1}{"jsonrpc":"2.0","#,
        // 2 – a pretty-printed result; whitespace is dropped
        "\"result\": [\n  \"ticks\",\n  42\n],\n",
        // 3
        r#""id":1}"#,
        // 4 – a string holding braces does not confuse framing
        r#"{"jsonrpc":"2.0","method":"log","params":["} not the end {"]}"#,
        // 5 – a corrupt message
        r#"{"jsonrpc":"2.0" "id":2}"#,
    ];

    let mut reassembler = StreamingReassembler::new(ParserOptions {
        max_buffer_len: Some(64 * 1024),
        ..ParserOptions::default()
    });

    for chunk in simulated_stream {
        for c in chunk.chars() {
            match reassembler.feed(c) {
                Ok(Some(message)) => {
                    println!("message: {message}");
                    reassembler.reset();
                }
                Ok(None) => {}
                Err(err) => {
                    // The stream cannot be resynchronised mid-message; a real
                    // reader would drop the connection here.
                    eprintln!("protocol error: {err}");
                    return;
                }
            }
        }
    }

    if !reassembler.is_idle() {
        println!("{} characters still pending", reassembler.buffered_len());
    }
}
