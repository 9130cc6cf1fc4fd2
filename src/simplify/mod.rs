//! Polyline simplification and merging.
//!
//! Everything here works on [`FastPolyline`], a polyline stored in a
//! canonical direction so that equal paths compare and hash equal
//! regardless of the direction they were drawn in.

mod fast_polyline;
mod lcs;
mod line_set;
mod pipeline;
mod rdp;
mod sharp_turns;

pub use fast_polyline::FastPolyline;
pub use lcs::{CommonSubstring, LcsMatrix};
pub use line_set::{Line, LineSet};
pub use pipeline::optimize_polylines;
pub use rdp::{rdp, rdp_indices};
pub use sharp_turns::is_sharp_turn;
