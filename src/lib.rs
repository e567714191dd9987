//! Device media indexing with an on-disk thumbnail cache: query the platform
//! media index, normalize the records, and serve re-orderable listings of a
//! device's video and audio libraries.

pub mod access;
pub mod config;
pub mod dispatch;
pub mod index;
pub mod media;
pub mod thumbs;
