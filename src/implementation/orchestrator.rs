// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the orchestrator: the piece that puts everything
//! together. It obtains the agents and tasks from a data provider, rates every
//! pair, runs the configured solver and turns the resulting mapping back into
//! named assignments.

use derive_builder::Builder;
use tracing::{debug, info, warn};

use crate::{Assignment, AssignmentSolver, Cutoff, DataProvider, Error,
    NoCutoff, Outcome, Result, Roster, ScoreFunction, ScoreMatrix, Strategy, SuitabilityScore,
    run_parallel, total_score};

/// This is how you configure an orchestrator.
///
/// # Example
/// ```
/// # use shipmatch::*;
/// let config = OrchestratorConfigBuilder::default()
///     .strategy(Strategy::Greedy)
///     .nb_threads(2)
///     .build()
///     .unwrap();
/// assert_eq!(Strategy::Greedy, config.strategy);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct OrchestratorConfig {
    /// The solving strategy (optimal by default)
    #[builder(default)]
    pub strategy: Strategy,
    /// The number of threads used when several runs are carried out at once
    /// (as many as there are hardware threads by default)
    #[builder(default="num_cpus::get()")]
    pub nb_threads: usize,
}
impl Default for OrchestratorConfig {
    fn default() -> Self {
        OrchestratorConfig {
            strategy: Strategy::default(),
            nb_threads: num_cpus::get(),
        }
    }
}
impl From<Strategy> for OrchestratorConfig {
    fn from(strategy: Strategy) -> Self {
        OrchestratorConfig { strategy, ..Default::default() }
    }
}

/// The orchestrator holds no state about the runs it performs: each run is an
/// independent computation over fresh inputs. It can thus be shared among
/// threads.
pub struct AssignmentOrchestrator<'a> {
    /// The rule used to rate each (agent, task) pair
    scorer: &'a (dyn ScoreFunction + Send + Sync),
    /// A cutoff heuristic meant to decide when to give up a run
    cutoff: &'a (dyn Cutoff + Send + Sync),
    /// Which solver to use, and how many threads for batches
    config: OrchestratorConfig,
}

impl AssignmentOrchestrator<'static> {
    /// Creates an orchestrator using the suitability score and no cutoff.
    pub fn new(config: OrchestratorConfig) -> Self {
        Self::custom(&SuitabilityScore, &NoCutoff, config)
    }
}

impl<'a> AssignmentOrchestrator<'a> {
    pub fn custom(
        scorer: &'a (dyn ScoreFunction + Send + Sync),
        cutoff: &'a (dyn Cutoff + Send + Sync),
        config: OrchestratorConfig,
    ) -> Self {
        AssignmentOrchestrator { scorer, cutoff, config }
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Fetches the data from the given provider and computes the assignment.
    /// A provider failure is reported as `Error::DataRetrieval`; an empty
    /// list of agents or tasks yields an empty outcome.
    pub fn run(&self, provider: &dyn DataProvider) -> Result<Outcome> {
        let roster = provider.fetch()?;
        self.assign(&roster)
    }

    /// Computes the assignment of the given roster.
    ///
    /// # Example
    /// ```
    /// # use shipmatch::*;
    /// let roster = InMemoryProvider::new(["Al", "Bob"], ["100 Main", "12 Elm"]).fetch().unwrap();
    /// let outcome = AssignmentOrchestrator::new(Strategy::Optimal.into()).assign(&roster).unwrap();
    /// assert_eq!(2, outcome.assignments.len());
    /// assert_eq!("Al", outcome.assignments[0].agent_name);
    /// ```
    pub fn assign(&self, roster: &Roster) -> Result<Outcome> {
        let Roster { agents, tasks } = roster;
        if agents.is_empty() || tasks.is_empty() {
            debug!(agents = agents.len(), tasks = tasks.len(), "nothing to assign");
            return Ok(Outcome::default());
        }

        let matrix = ScoreMatrix::build(agents, tasks, self.scorer);
        debug!(agents = agents.len(), tasks = tasks.len(), strategy = %self.config.strategy,
            "score matrix built");

        let mapping = match self.config.strategy.solve(&matrix, self.cutoff) {
            Ok(mapping) => mapping,
            Err(Error::Aborted) => {
                warn!(strategy = %self.config.strategy, "assignment aborted by cutoff");
                return Err(Error::Aborted);
            }
            Err(e) => return Err(e),
        };

        let total = total_score(&matrix, &mapping);
        info!(total_score = total, strategy = %self.config.strategy, "assignment computed");

        Ok(Outcome {
            assignments: Self::assemble(roster, &matrix, &mapping),
            total_score: total,
        })
    }

    /// Runs one independent assignment per provider, spreading the runs over
    /// the configured number of threads. The results are returned in the
    /// order of the providers.
    pub fn run_all(&self, providers: &[&(dyn DataProvider + Sync)]) -> Vec<Result<Outcome>> {
        debug!(runs = providers.len(), threads = self.config.nb_threads, "batch started");
        run_parallel(providers, self.config.nb_threads, |p| self.run(*p))
    }

    /// Turns the mapping back into named records, in the order of the agents.
    /// Entries that fall outside of the roster are dropped.
    fn assemble(roster: &Roster, matrix: &ScoreMatrix, mapping: &[Option<usize>]) -> Vec<Assignment> {
        mapping.iter()
            .enumerate()
            .filter_map(|(a, t)| {
                let t     = (*t)?;
                let agent = roster.agents.get(a)?;
                let task  = roster.tasks.get(t)?;
                let score = matrix.get(a, t)?;
                Some(Assignment {
                    agent_name: agent.name.clone(),
                    task_descriptor: task.descriptor.clone(),
                    score,
                })
            })
            .collect()
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_orchestrator {
    use crate::*;

    struct FailingProvider;
    impl DataProvider for FailingProvider {
        fn fetch(&self) -> std::result::Result<Roster, ProviderError> {
            Err(ProviderError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")))
        }
    }

    /// A rule that reproduces the matrix [[10, 9], [9, 1]] for agents "a0",
    /// "a1" and tasks "t0", "t1".
    fn divergent(a: &Agent, t: &Task) -> f64 {
        match (a.name.as_str(), t.descriptor.as_str()) {
            ("a0", "t0") => 10.0,
            ("a1", "t1") => 1.0,
            _ => 9.0,
        }
    }

    #[test]
    fn empty_agents_is_an_empty_outcome() {
        let provider = InMemoryProvider::new(Vec::<String>::new(), ["100 Main"]);
        let outcome  = AssignmentOrchestrator::new(OrchestratorConfig::default()).run(&provider).unwrap();
        assert!(outcome.is_empty());
        assert_eq!(0.0, outcome.total_score);
    }
    #[test]
    fn empty_tasks_is_an_empty_outcome() {
        let provider = InMemoryProvider::new(["Al"], Vec::<String>::new());
        let outcome  = AssignmentOrchestrator::new(OrchestratorConfig::default()).run(&provider).unwrap();
        assert!(outcome.is_empty());
    }
    #[test]
    fn provider_failure_is_not_an_empty_outcome() {
        let result = AssignmentOrchestrator::new(OrchestratorConfig::default()).run(&FailingProvider);
        assert!(matches!(result, Err(Error::DataRetrieval(ProviderError::Io(_)))));
    }
    #[test]
    fn records_carry_names_descriptors_and_scores() {
        let provider = InMemoryProvider::new(["Al"], ["100 Main"]);
        let outcome  = AssignmentOrchestrator::new(OrchestratorConfig::default()).run(&provider).unwrap();
        assert_eq!(vec![Assignment {
            agent_name: "Al".to_string(),
            task_descriptor: "100 Main".to_string(),
            score: 2.25,
        }], outcome.assignments);
        assert_eq!(2.25, outcome.total_score);
    }
    #[test]
    fn strategy_is_taken_from_the_configuration() {
        let provider = InMemoryProvider::new(["a0", "a1"], ["t0", "t1"]);

        let greedy = AssignmentOrchestrator::custom(&divergent, &NoCutoff, Strategy::Greedy.into());
        let greedy = greedy.run(&provider).unwrap();
        assert_eq!(11.0, greedy.total_score);
        assert_eq!("t0", greedy.assignments[0].task_descriptor);

        let exact = AssignmentOrchestrator::custom(&divergent, &NoCutoff, Strategy::Optimal.into());
        let exact = exact.run(&provider).unwrap();
        assert_eq!(18.0, exact.total_score);
        assert_eq!("t1", exact.assignments[0].task_descriptor);
        assert_eq!("t0", exact.assignments[1].task_descriptor);
    }
    #[test]
    fn output_follows_agent_order() {
        let provider = InMemoryProvider::new(["a0", "a1"], ["t0", "t1"]);
        let orch     = AssignmentOrchestrator::custom(&divergent, &NoCutoff, Strategy::Optimal.into());
        let names: Vec<String> = orch.run(&provider).unwrap()
            .assignments.into_iter().map(|a| a.agent_name).collect();
        assert_eq!(vec!["a0", "a1"], names);
    }
    #[test]
    fn more_agents_than_tasks_leaves_one_out() {
        let provider = InMemoryProvider::new(["Al", "Bob", "Eve"], ["100 Main", "12 Elm"]);
        for strategy in [Strategy::Greedy, Strategy::Optimal] {
            let outcome = AssignmentOrchestrator::new(strategy.into()).run(&provider).unwrap();
            assert_eq!(2, outcome.assignments.len());
            let tasks: Vec<&str> = outcome.assignments.iter().map(|a| a.task_descriptor.as_str()).collect();
            assert!(tasks.contains(&"100 Main"));
            assert!(tasks.contains(&"12 Elm"));
        }
    }
    #[test]
    fn raised_cutoff_aborts_the_run() {
        let flag = StopFlag::new();
        flag.raise();
        let provider = InMemoryProvider::new(["Al"], ["100 Main"]);
        let orch     = AssignmentOrchestrator::custom(&SuitabilityScore, &flag, OrchestratorConfig::default());
        assert!(matches!(orch.run(&provider), Err(Error::Aborted)));
    }
    #[test]
    fn nan_scores_are_a_failure_not_an_empty_outcome() {
        let nan = |_: &Agent, _: &Task| f64::NAN;
        let provider = InMemoryProvider::new(["Al"], ["100 Main"]);
        let orch     = AssignmentOrchestrator::custom(&nan, &NoCutoff, OrchestratorConfig::default());
        assert!(matches!(orch.run(&provider), Err(Error::SolverInvariant(_))));
    }
    #[test]
    fn run_all_keeps_the_order_of_the_providers() {
        let a = InMemoryProvider::new(["Al"], ["100 Main"]);
        let b = InMemoryProvider::new(Vec::<String>::new(), ["100 Main"]);
        let c = FailingProvider;
        let providers: Vec<&(dyn DataProvider + Sync)> = vec![&a, &b, &c];

        let config = OrchestratorConfigBuilder::default().nb_threads(3).build().unwrap();
        let results = AssignmentOrchestrator::new(config).run_all(&providers);
        assert_eq!(3, results.len());
        assert_eq!(2.25, results[0].as_ref().unwrap().total_score);
        assert!(results[1].as_ref().unwrap().is_empty());
        assert!(results[2].is_err());
    }
    #[test]
    fn builder_defaults() {
        let config = OrchestratorConfigBuilder::default().build().unwrap();
        assert_eq!(Strategy::Optimal, config.strategy);
        assert!(config.nb_threads >= 1);
    }
}
