pub mod assets;
pub mod audio;
pub mod content;
pub mod dispatch;
pub mod event;
pub mod feed;
pub mod governance;
pub mod manifest;
pub mod motion;
pub mod registry;
pub mod shared;
pub mod sync;
pub mod tracks;
pub mod trust;
