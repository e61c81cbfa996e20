//! RecipeKit Status Tool
//!
//! Provides runtime status information about the RecipeKit service.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::ServerConfig;

/// Status response
#[derive(Debug, Serialize)]
pub struct RecipeKitStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub config: ServerConfig,
}

/// Tracks service start time for uptime reporting
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
    config: ServerConfig,
}

impl StatusTracker {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
            config,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> RecipeKitStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        RecipeKitStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            started_at: self.started_at,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            config: self.config,
        }
    }
}
