// Health probes

pub mod controllers;
