//! A privately owned sequence exposed only through copy-on-read access.

mod objects;

pub use objects::ObjectCollection;
