// Dependency-first job ordering

use crate::domain::error::{JobError, Result};
use crate::domain::{JobRecord, VisitState};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Step of the depth-first walk for one record
#[derive(Debug, Clone, Copy)]
enum Phase {
    /// First arrival: check state, then descend into the dependency
    Enter,
    /// Dependency chain finished: emit the job
    Exit,
}

/// Order jobs so every resolvable dependency precedes its dependent
///
/// Depth-first post-order walk started from each record in input order, so
/// unrelated jobs keep their relative input order. The walk uses an explicit
/// stack of `(record index, phase)` pairs and visits jobs in the same order a
/// recursive traversal would.
///
/// Rules:
/// - a dependency naming no input job is treated as already satisfied
/// - a job reached again while still on the current path is a cycle
/// - states are keyed by name: only the first record carrying a name is
///   followed, later records with that name are skipped once it is done
///
/// # Errors
/// `JobError::CircularDependency` when the dependency graph has a cycle.
pub fn sort_jobs(jobs: &[JobRecord]) -> Result<Vec<JobRecord>> {
    let mut by_name: HashMap<&str, usize> = HashMap::with_capacity(jobs.len());
    for (index, job) in jobs.iter().enumerate() {
        by_name.entry(job.name.as_str()).or_insert(index);
    }

    let mut states: HashMap<&str, VisitState> = HashMap::with_capacity(jobs.len());
    let mut sorted = Vec::with_capacity(jobs.len());
    let mut stack: Vec<(usize, Phase)> = Vec::new();

    for root in 0..jobs.len() {
        stack.push((root, Phase::Enter));

        while let Some((index, phase)) = stack.pop() {
            let job = &jobs[index];
            let name = job.name.as_str();

            match phase {
                Phase::Enter => match states.get(name).copied() {
                    Some(VisitState::Done) => {}
                    Some(VisitState::InProgress) => {
                        warn!(job = %name, "Circular dependency detected");
                        return Err(JobError::CircularDependency);
                    }
                    None => {
                        states.insert(name, VisitState::InProgress);
                        stack.push((index, Phase::Exit));

                        if let Some(dependency) = job.dependency() {
                            match by_name.get(dependency) {
                                Some(&dep_index) => stack.push((dep_index, Phase::Enter)),
                                None => debug!(
                                    job = %name,
                                    dependency = %dependency,
                                    "Dependency not in input set, ignoring"
                                ),
                            }
                        }
                    }
                },
                Phase::Exit => {
                    let state = states.entry(name).or_insert(VisitState::InProgress);
                    *state = state.complete(name)?;
                    debug!(job = %name, position = sorted.len(), "Job ordered");
                    sorted.push(job.clone());
                }
            }
        }
    }

    Ok(sorted)
}
