use super::ExampleReport;

use std::fmt;

/// Defines how much per-example detail
/// each epoch snapshot keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportingLevel {
    /// Keeps the report of every example.
    AllExamples,
    /// Keeps only the report with the highest loss.
    WorstExample,
    /// Keeps no reports, only statistics.
    NoExamples,
}

/// A snapshot of one training epoch.
#[derive(Clone, Debug)]
pub struct EpochLog {
    pub epoch: usize,
    pub examples: Vec<ExampleReport>,
    pub converged_count: usize,
    pub example_count: usize,
    pub loss: Stats,
    pub iterations: Stats,
}

impl fmt::Display for EpochLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EpochLog {{\n\
            \tepoch: {:?}\n\
            \tconverged: {}/{}\n\
            \tloss: {:?}\n\
            \titerations: {:?}\n\
            {}\
            }}",
            self.epoch,
            self.converged_count,
            self.example_count,
            self.loss,
            self.iterations,
            self.examples
                .iter()
                .map(|report| format!("\t{:?}\n", report))
                .collect::<Vec<_>>()
                .join("")
        )
    }
}

/// A struct for reporting basic statistical data.
#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub maximum: f32,
    pub minimum: f32,
    pub mean: f32,
    pub median: f32,
}

impl Stats {
    /// Returns statistics about numbers in a sequence.
    ///
    /// An empty sequence yields NaN for every field.
    ///
    /// # Examples
    /// ```
    /// use nodenet::training::logging::Stats;
    ///
    /// let stats = Stats::from([-2.0, -1.0, 0.5, 1.0, 1.5].iter().copied());
    /// assert_eq!(stats.maximum, 1.5);
    /// assert_eq!(stats.minimum, -2.0);
    /// assert_eq!(stats.mean, 0.0);
    /// assert_eq!(stats.median, 0.5);
    /// ```
    pub fn from(data: impl Iterator<Item = f32>) -> Stats {
        let mut data: Vec<f32> = data.collect();
        if data.is_empty() {
            return Stats {
                maximum: f32::NAN,
                minimum: f32::NAN,
                mean: f32::NAN,
                median: f32::NAN,
            };
        }
        data.sort_unstable_by(f32::total_cmp);

        let mid = data.len() / 2;
        let median = if data.len() % 2 == 0 {
            (data[mid - 1] + data[mid]) / 2.0
        } else {
            data[mid]
        };
        Stats {
            maximum: data[data.len() - 1],
            minimum: data[0],
            mean: data.iter().sum::<f32>() / data.len() as f32,
            median,
        }
    }
}

/// A log of training progress over successive epochs.
#[derive(Clone, Debug)]
pub struct TrainingLogger {
    reporting_level: ReportingLevel,
    logs: Vec<EpochLog>,
}

impl TrainingLogger {
    /// Returns a logger with the appropiate reporting level.
    pub fn new(reporting_level: ReportingLevel) -> TrainingLogger {
        TrainingLogger {
            reporting_level,
            logs: vec![],
        }
    }

    /// Stores a snapshot of the reports produced by one epoch.
    ///
    /// # Examples
    /// ```
    /// use nodenet::training::ExampleReport;
    /// use nodenet::training::logging::{ReportingLevel, TrainingLogger};
    ///
    /// let mut logger = TrainingLogger::new(ReportingLevel::NoExamples);
    /// let reports = [
    ///     ExampleReport { iterations: 12, loss: 5e-7, converged: true },
    ///     ExampleReport { iterations: 100, loss: 0.25, converged: false },
    /// ];
    /// logger.log(0, &reports);
    ///
    /// let log = logger.last().unwrap();
    /// assert_eq!(log.converged_count, 1);
    /// assert_eq!(log.iterations.mean, 56.0);
    /// assert!(log.examples.is_empty());
    /// ```
    pub fn log(&mut self, epoch: usize, reports: &[ExampleReport]) {
        let examples = match self.reporting_level {
            ReportingLevel::AllExamples => reports.to_vec(),
            ReportingLevel::WorstExample => reports
                .iter()
                .max_by(|a, b| a.loss.total_cmp(&b.loss))
                .copied()
                .into_iter()
                .collect(),
            ReportingLevel::NoExamples => vec![],
        };
        self.logs.push(EpochLog {
            epoch,
            examples,
            converged_count: reports.iter().filter(|r| r.converged).count(),
            example_count: reports.len(),
            loss: Stats::from(reports.iter().map(|r| r.loss)),
            iterations: Stats::from(reports.iter().map(|r| r.iterations as f32)),
        });
    }

    /// Iterate over all logged snapshots.
    pub fn iter(&self) -> impl Iterator<Item = &EpochLog> {
        self.logs.iter()
    }

    /// Returns the most recent snapshot, if any.
    pub fn last(&self) -> Option<&EpochLog> {
        self.logs.last()
    }
}
