//! Search problem contract trait.

/// Trait for problems that can be explored by [`crate::search::search`].
///
/// A problem supplies the four decisions of a backtracking search (which
/// moves exist, how a move extends a path, when a path is accepted, when a
/// path is hopeless) and the engine supplies everything else.
///
/// # Contract
///
/// - `extend` must return a fresh state. The engine hands the same parent to
///   every sibling candidate, so a parent observed after `extend` must be
///   unchanged.
/// - `candidates` must be deterministic: same state → same candidates in the
///   same order. The order decides discovery order only, never which
///   solutions exist.
/// - `is_goal` is checked before `is_prunable`. A goal state is recorded and
///   not descended into.
/// - Goal and prune values (targets, keywords) belong to `self`. They are
///   never read from globals.
pub trait SearchProblemV1 {
    /// Path plus whatever accumulator the prune test needs.
    type State;
    /// One legal move from a state.
    type Candidate;
    /// Canonical form of an accepted path; keys the dedup set.
    type Solution: Ord + Clone;

    /// Stable identifier, echoed in reports.
    fn problem_id(&self) -> &str;

    /// The root state (empty path).
    fn root(&self) -> Self::State;

    /// Enumerate the legal next moves from `state`, in exploration order.
    fn candidates(&self, state: &Self::State) -> Vec<Self::Candidate>;

    /// Produce the child state reached by applying `candidate` to `state`.
    fn extend(&self, state: &Self::State, candidate: &Self::Candidate) -> Self::State;

    /// True when `state` exactly satisfies the objective.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// True when no completion of `state` can reach the goal.
    fn is_prunable(&self, state: &Self::State) -> bool;

    /// Convert an accepted state into its canonical solution.
    fn solution(&self, state: &Self::State) -> Self::Solution;

    /// JSON form of a solution, used for the solution-set digest.
    ///
    /// Numbers must be integers; the digest is computed over canonical bytes.
    fn solution_json(&self, solution: &Self::Solution) -> serde_json::Value;
}
