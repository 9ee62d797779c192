use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Fraction of an element that has to be inside the viewport before it counts as entered.
pub const VISIBILITY_THRESHOLD: f64 = 0.2;

/// How long the entrance transition takes once a section has entered.
pub const ENTRANCE_DURATION_MS: u32 = 600;

/// Extra delay added per card when a grid reveals its cards one after another.
pub const STAGGER_STEP_MS: u32 = 100;

pub const COUNT_UP_DURATION_MS: u32 = 2000;

// ~60 frames per second
pub const COUNT_UP_TICK_MS: u32 = 16;
