//! Display side of the viewer: navigation state, per-variant frames and the
//! text renderer that draws them.

mod frame;
mod navigator;
mod viewer;

pub use frame::{Frame, render_frame};
pub use navigator::Navigator;
pub use viewer::{Command, TextViewer};
