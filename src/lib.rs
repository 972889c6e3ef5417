//! umlboard: the scene graph and interaction engine of a small UML diagram
//! editor.
//!
//! The crate keeps an ordered scene of shapes, connection lines, and
//! composite groups, hit tests pointer events against drawn geometry, and
//! turns tool gestures into scene edits. It renders to a display list and
//! reports damaged regions to a [`Host`](editor::Host) rather than painting
//! pixels itself, so it embeds under any UI stack and drives fully from
//! tests.
//!
//! Typical use: construct an [`Editor`](editor::Editor) with a canvas size
//! and a host, feed it pointer events and commands, and replay the display
//! list from [`Editor::render`](editor::Editor::render) whenever the host is
//! asked to redraw.

pub mod commands;
pub mod constants;
pub mod damage;
pub mod editor;
pub mod element;
pub mod geometry;
pub mod input;
pub mod render;
pub mod scene;
pub mod selection;
pub mod spatial;

pub use editor::{Editor, Host};
pub use element::{Element, Endpoint, LineKind, PortSide, ShapeKind};
pub use geometry::{Point, Rect, Size};
pub use input::{Mode, SelectState, Tool};
pub use render::{DrawCommand, DrawList};
pub use scene::{Scene, SceneError};
