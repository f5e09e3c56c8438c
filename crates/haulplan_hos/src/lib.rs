pub mod log;
pub mod policy;
pub mod state;
pub mod synthesizer;
pub mod trip;
