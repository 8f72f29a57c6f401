// Job Sort constants (no magic values)

/// Token separating a job name from its dependency ("a => b")
pub const JOB_SEPARATOR: &str = "=>";

/// Line that ends interactive input (compared case-insensitively)
pub const EXIT_SENTINEL: &str = "EXIT";

