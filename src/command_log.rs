use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::SaveError;
use crate::side::Side;

/// Robot commands that can be recorded
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Immediate placement at (x, y)
    Place { x: i32, y: i32 },
    /// One step to the given side
    Step { side: Side },
    /// Wall query and its answer
    QueryWall { side: Side, wall: bool },
    /// Marker dropped in the current cell
    Mark,
    /// Marker query and its answer
    QueryMarker { marker: bool },
    /// Temperature measurement and its value
    MeasureTemperature { value: i32 },
}

/// Recorded command with a timestamp
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedCommand {
    /// Milliseconds since the log was created
    pub timestamp_ms: u64,
    pub command: Command,
}

/// Command logger for a robot session
pub struct CommandLog {
    start_time: Instant,
    commands: Vec<LoggedCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        CommandLog {
            start_time: Instant::now(),
            commands: Vec::new(),
        }
    }

    /// Record a command with the current timestamp
    pub fn log(&mut self, command: Command) {
        let timestamp_ms = self.start_time.elapsed().as_millis() as u64;
        self.commands.push(LoggedCommand {
            timestamp_ms,
            command,
        });
    }

    pub fn commands(&self) -> &[LoggedCommand] {
        &self.commands
    }

    /// Save the log to a JSON file
    pub fn save_to_file(&self, path: &str) -> Result<(), SaveError> {
        let json = serde_json::to_string_pretty(&self.commands)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Print the log to the console
    pub fn print(&self) {
        println!("\n=== Command Log ({} commands) ===", self.commands.len());
        for (i, logged) in self.commands.iter().enumerate() {
            println!(
                "[{:6}ms] #{:3} {:?}",
                logged.timestamp_ms,
                i + 1,
                logged.command
            );
        }
        println!("=== End of Log ===\n");
    }

    /// Summary statistics as a printable string
    pub fn summary(&self) -> String {
        let mut steps = 0;
        let mut wall_queries = 0;
        let mut marks = 0;
        let mut marker_queries = 0;
        let mut measurements = 0;
        let mut placements = 0;

        for logged in &self.commands {
            match logged.command {
                Command::Place { .. } => placements += 1,
                Command::Step { .. } => steps += 1,
                Command::QueryWall { .. } => wall_queries += 1,
                Command::Mark => marks += 1,
                Command::QueryMarker { .. } => marker_queries += 1,
                Command::MeasureTemperature { .. } => measurements += 1,
            }
        }

        let duration = self.commands.last().map(|c| c.timestamp_ms).unwrap_or(0);

        format!(
            "Session Duration: {}ms\n\
             Total Commands: {}\n\
             Movement: {} steps, {} placements\n\
             Sensing: {} wall queries, {} marker queries, {} measurements\n\
             Markers Dropped: {}",
            duration,
            self.commands.len(),
            steps,
            placements,
            wall_queries,
            marker_queries,
            measurements,
            marks
        )
    }
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}
