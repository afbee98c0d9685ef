pub mod controller;
pub mod mode_ctx;
pub mod modes;
pub mod storage;
pub mod themes;
pub mod toggle;

pub mod prelude {
    pub use super::mode_ctx::{ModeCtx, ModeCtxSub, ModeState, WithMode};
    pub use super::toggle::ModeToggle;
}
