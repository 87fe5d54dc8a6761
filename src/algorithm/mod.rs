/// Generation loop with retries and attempt accounting
pub mod executor;
/// Boundary strips, compatibility and compositing
pub mod matching;
/// Lattice walk committing one fragment per anchor
pub mod placement;
/// Candidate sets and uniform random selection
pub mod selection;
/// Degenerate area and connectivity checks
pub mod validation;
