//! Integration testing module
//!
//! - Probe pipeline behaviour over scripted containers
//! - End-to-end probes of real files through FFmpeg
//! - Concurrent batch probing

pub mod probe_scenarios;
