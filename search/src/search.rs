//! Search entry point and depth-first traversal.

use std::collections::BTreeSet;
use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, trace};

use crate::contract::SearchProblemV1;
use crate::digest::solution_set_digest;
use crate::error::SearchError;
use crate::node::SearchNodeV1;
use crate::policy::{DedupPolicyV1, SearchPolicyV1};
use crate::report::{SearchReportV1, SearchStatsV1, TerminationReasonV1};

/// Result of a search execution.
///
/// Always carries a report, however the search terminated. Solutions are in
/// discovery order; with [`DedupPolicyV1::CanonicalTuple`] each appears once.
#[derive(Debug, Clone)]
pub struct SearchResult<T> {
    pub solutions: Vec<T>,
    pub report: SearchReportV1,
}

impl<T> SearchResult<T> {
    /// Returns `true` if no solution was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Number of accepted solutions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solutions.len()
    }
}

/// Whether the traversal goes on.
enum Flow {
    Continue,
    Stop(TerminationReasonV1),
}

/// Outcome of entering one node.
enum Step<C> {
    Stop(TerminationReasonV1),
    /// Goal, pruned or cut off: nothing to expand.
    Leaf,
    Expand(Vec<C>),
}

/// A node on the current path and the candidates not yet tried from it.
struct Frame<S, C> {
    node: SearchNodeV1<S>,
    candidates: std::vec::IntoIter<C>,
}

/// Accumulator for one search call.
///
/// Created fresh by [`search`] and dropped when it returns, so nothing found
/// by one call can leak into the next.
struct Explorer<'a, P: SearchProblemV1> {
    problem: &'a P,
    policy: &'a SearchPolicyV1,
    solutions: Vec<P::Solution>,
    seen: BTreeSet<P::Solution>,
    stats: SearchStatsV1,
    next_node_id: u64,
}

impl<'a, P: SearchProblemV1> Explorer<'a, P> {
    fn new(problem: &'a P, policy: &'a SearchPolicyV1) -> Self {
        Self {
            problem,
            policy,
            solutions: Vec::new(),
            seen: BTreeSet::new(),
            stats: SearchStatsV1::default(),
            next_node_id: 1,
        }
    }

    /// Depth-first traversal on an explicit stack of frames, so path length
    /// is bounded by memory rather than by the thread's call stack.
    fn run(&mut self, root: SearchNodeV1<P::State>) -> Flow {
        let mut stack: Vec<Frame<P::State, P::Candidate>> = Vec::new();
        match self.enter(&root) {
            Step::Stop(reason) => return Flow::Stop(reason),
            Step::Leaf => return Flow::Continue,
            Step::Expand(candidates) => stack.push(Frame {
                node: root,
                candidates: candidates.into_iter(),
            }),
        }

        while let Some(frame) = stack.last_mut() {
            let Some(candidate) = frame.candidates.next() else {
                stack.pop();
                continue;
            };
            let child_state = self.problem.extend(&frame.node.state, &candidate);
            let child = frame.node.child(self.next_node_id, child_state);
            self.next_node_id += 1;
            match self.enter(&child) {
                Step::Stop(reason) => return Flow::Stop(reason),
                Step::Leaf => {}
                Step::Expand(candidates) => stack.push(Frame {
                    node: child,
                    candidates: candidates.into_iter(),
                }),
            }
        }
        Flow::Continue
    }

    /// Visit one node: budget, goal, prune, depth cutoff, then candidates.
    fn enter(&mut self, node: &SearchNodeV1<P::State>) -> Step<P::Candidate> {
        if self.stats.nodes_expanded >= self.policy.max_expansions {
            return Step::Stop(TerminationReasonV1::ExpansionBudgetExceeded);
        }
        self.stats.nodes_expanded += 1;
        self.stats.deepest_depth = self.stats.deepest_depth.max(node.depth);

        if self.problem.is_goal(&node.state) {
            return match self.accept(node) {
                Flow::Continue => Step::Leaf,
                Flow::Stop(reason) => Step::Stop(reason),
            };
        }

        if self.problem.is_prunable(&node.state) {
            self.stats.branches_pruned += 1;
            trace!(node_id = node.node_id, depth = node.depth, "pruned");
            return Step::Leaf;
        }

        if self.policy.max_depth.is_some_and(|limit| node.depth >= limit) {
            self.stats.depth_cutoffs += 1;
            return Step::Leaf;
        }

        let candidates = self.problem.candidates(&node.state);
        self.stats.candidates_generated += candidates.len() as u64;
        Step::Expand(candidates)
    }

    fn accept(&mut self, node: &SearchNodeV1<P::State>) -> Flow {
        self.stats.goals_reached += 1;
        let solution = self.problem.solution(&node.state);

        if self.policy.dedup == DedupPolicyV1::CanonicalTuple
            && !self.seen.insert(solution.clone())
        {
            self.stats.duplicates_suppressed += 1;
            trace!(node_id = node.node_id, "duplicate solution suppressed");
            return Flow::Continue;
        }

        trace!(node_id = node.node_id, depth = node.depth, "solution accepted");
        self.solutions.push(solution);

        match self.policy.max_solutions {
            Some(limit) if self.solutions.len() as u64 >= limit => {
                Flow::Stop(TerminationReasonV1::SolutionLimitReached)
            }
            _ => Flow::Continue,
        }
    }
}

/// Run a depth-first backtracking search from `problem.root()`.
///
/// Candidates are explored in the order `candidates()` returns them. Goal
/// states are recorded and not descended into; prunable states are
/// abandoned; every other state is extended once per candidate.
///
/// All runtime terminations return `Ok`. A panic raised by a problem
/// callback is caught here and reported as
/// [`TerminationReasonV1::InternalPanic`] together with the solutions
/// accepted before it.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] for pre-flight policy validation
/// failures and [`SearchError::NonCanonicalSolution`] if a solution encodes
/// to a float.
pub fn search<P: SearchProblemV1>(
    problem: &P,
    policy: &SearchPolicyV1,
) -> Result<SearchResult<P::Solution>, SearchError> {
    policy.validate()?;
    debug!(
        problem_id = problem.problem_id(),
        dedup = policy.dedup.as_str(),
        "search started"
    );

    let mut explorer = Explorer::new(problem, policy);
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let root = SearchNodeV1::root(problem.root());
        explorer.run(root)
    }));

    let termination_reason = match outcome {
        Ok(Flow::Continue) => TerminationReasonV1::Exhausted,
        Ok(Flow::Stop(reason)) => reason,
        Err(payload) => TerminationReasonV1::InternalPanic {
            detail: panic_detail(payload.as_ref()),
        },
    };

    let Explorer {
        solutions, stats, ..
    } = explorer;

    let solution_digest = solution_set_digest(&solutions, |s| problem.solution_json(s))
        .map_err(|e| SearchError::NonCanonicalSolution {
            detail: e.to_string(),
        })?;

    debug!(
        problem_id = problem.problem_id(),
        solutions = solutions.len(),
        nodes = stats.nodes_expanded,
        pruned = stats.branches_pruned,
        termination = termination_reason.as_str(),
        "search finished"
    );

    let report = SearchReportV1 {
        problem_id: problem.problem_id().to_string(),
        policy: policy.clone(),
        stats,
        termination_reason,
        solution_count: solutions.len() as u64,
        solution_digest,
    };
    Ok(SearchResult { solutions, report })
}

fn panic_detail(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
