mod client;

pub use client::{Link, YadiskClient, YadiskError};
