//! Contact Audio - stamina and audio feedback driven by contact sensors
//!
//! Three overlapping contact channels (Lip, Mouth, Throat) report discrete
//! start/end transitions. The orchestrator turns the elapsed spans between
//! those transitions into adjustments of a saturating stamina counter and
//! dispatches categorized audio clips through a host playback sink.

pub mod audio;
pub mod clock;
pub mod core;
pub mod orchestrator;
pub mod stamina;
pub mod timing;
