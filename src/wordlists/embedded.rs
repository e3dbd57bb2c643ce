//! Embedded dictionary generated at build time
//!
//! The build script reads `data/words.txt` and produces the `WORDS` const.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
