//! Workspace entities split into domain-specific modules.

pub mod checklist;
pub mod common;
pub mod expense;
pub mod journal;
pub mod media;
pub mod notification;
pub mod place;
pub mod playlist;
pub mod post;
pub mod trip;
pub mod user;

pub use checklist::*;
pub use common::*;
pub use expense::*;
pub use journal::*;
pub use media::*;
pub use notification::*;
pub use place::*;
pub use playlist::*;
pub use post::*;
pub use trip::*;
pub use user::*;
