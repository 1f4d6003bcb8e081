//! Built-in job handler implementations.

pub mod thumbnails;

pub use thumbnails::ThumbnailJobHandler;
