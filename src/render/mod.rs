//! Render models: pure data handed to an external renderer.
//!
//! Variants compute a `RenderModel` from their state; the session wraps it in
//! a `Frame` together with the status line, the winner banner, the sensor's
//! throw list and motion flags. Drawing is someone else's job.

pub mod model;
pub mod frame;

pub use model::{
    CricketBoard, CricketRow, KillerBoard, KillerRow, MarkCell, RenderModel, SnakesBoard,
    SnakesCell, SnakesRow, TurnDartRow, WinnerBanner, X01Board, X01Row,
};
pub use frame::{Frame, LegView, ThrowRow};
