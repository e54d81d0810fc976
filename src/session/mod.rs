/// Deterministic frame clock.
pub mod clock;
/// Scripted pointer and keyboard input.
pub mod script;
/// Headless session loop tying the app, host, assets and renderer together.
pub mod runner;
/// Frame consumers.
pub mod sink;
