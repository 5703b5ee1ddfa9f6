//! Books domain module.
//!
//! A book tracks how far it has been read. Reading only moves forward and never
//! past the last page.

pub mod book;

pub use book::{Book, BookCommand, BookEvent, BookId, PagesRead, ReadPages};
