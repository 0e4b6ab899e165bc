// DOM contract with web/index.html plus web-only tuning.

pub const CANVAS_ID: &str = "app-canvas";
pub const CAPTION_HEADING_ID: &str = "caption-heading";
pub const CAPTION_SUB_ID: &str = "caption-sub";

pub const SPARKLE_SEED: u64 = 42;
