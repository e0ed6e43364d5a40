use crate::config::AgeBounds;
use crate::core::report::Outcome;
use crate::domain::model::UserRecord;
use crate::utils::error::AppError;
use crate::utils::validation::AgeValidator;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub accepted: usize,
    pub rejected: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.accepted + self.rejected
    }
}

/// Checks records one at a time and writes one line per record.
pub struct Driver {
    validator: AgeValidator,
}

impl Driver {
    pub fn new(validator: AgeValidator) -> Self {
        Self { validator }
    }

    pub fn with_bounds(bounds: AgeBounds) -> Result<Self, AppError> {
        Ok(Self::new(AgeValidator::new(bounds)?))
    }

    /// Rejected records are reported on `out` and do not stop the run;
    /// only a failed write does.
    pub fn run<I, W>(&self, records: I, out: &mut W) -> Result<RunSummary, AppError>
    where
        I: IntoIterator<Item = UserRecord>,
        W: Write,
    {
        let mut summary = RunSummary::default();

        for record in records {
            tracing::debug!("Validating {:?}", record);
            let result = self.validator.validate(record);
            let outcome = Outcome::from_result(&result);

            if outcome.is_accepted() {
                summary.accepted += 1;
            } else {
                summary.rejected += 1;
            }

            writeln!(out, "{}", outcome)?;
        }

        out.flush()?;

        tracing::info!(
            "Checked {} records: {} accepted, {} rejected",
            summary.total(),
            summary.accepted,
            summary.rejected
        );

        Ok(summary)
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(AgeValidator::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_empty_run_writes_nothing() {
        let mut out = Vec::new();
        let summary = Driver::default().run(Vec::new(), &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(summary.total(), 0);
    }

    #[test]
    fn test_write_failure_aborts_run() {
        let result = Driver::default().run(vec![UserRecord::new("Alice", 25)], &mut BrokenPipe);
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        assert!(matches!(
            Driver::with_bounds(AgeBounds::new(90, 10)),
            Err(AppError::Validation(_))
        ));
    }
}
