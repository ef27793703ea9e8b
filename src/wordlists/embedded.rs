//! Word lists compiled into the binary at build time

include!(concat!(env!("OUT_DIR"), "/secrets.rs"));
include!(concat!(env!("OUT_DIR"), "/accepted.rs"));
