//! End-to-end integration tests over the fully wired application.

mod helpers;

mod files;
mod thumbnails;
mod visibility;
