//! Operating-state summary and verdict

use crate::constants::UNSTABLE_VERDICT_FRACTION;
use std::fmt;

/// Categorical verdict for one analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Normal,
    UndervoltageRisk,
    OvervoltageRisk,
    NoOperationDetected,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Verdict::Normal => "normal",
            Verdict::UndervoltageRisk => "undervoltage risk",
            Verdict::OvervoltageRisk => "overvoltage risk",
            Verdict::NoOperationDetected => "no operation detected",
        };
        write!(f, "{}", text)
    }
}

/// Qualitative summary of operating-state analysis.
///
/// Durations are expressed as sample counts since sampling is irregular.
/// Operating samples without a voltage reading are "unclassified" and sit
/// outside the stability ratios.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperationSummary {
    /// Samples with reference current above the operating threshold
    pub operating_samples: usize,
    /// Samples at or below the operating threshold (or with no current reading)
    pub idle_samples: usize,
    /// Operating samples with voltage inside the stability band
    pub stable_samples: usize,
    /// Operating samples with voltage below the band
    pub undervoltage_samples: usize,
    /// Operating samples with voltage above the band
    pub overvoltage_samples: usize,
    /// Operating samples with no voltage reading to classify
    pub unclassified_samples: usize,
}

impl OperationSummary {
    /// Operating samples that carried a voltage reading
    pub fn classified_samples(&self) -> usize {
        self.stable_samples + self.undervoltage_samples + self.overvoltage_samples
    }

    /// Share of classified samples inside the stability band
    pub fn stable_ratio(&self) -> f64 {
        let classified = self.classified_samples();
        if classified == 0 {
            0.0
        } else {
            self.stable_samples as f64 / classified as f64
        }
    }

    /// Categorical verdict for this summary
    pub fn verdict(&self) -> Verdict {
        if self.operating_samples == 0 {
            return Verdict::NoOperationDetected;
        }

        let classified = self.classified_samples();
        if classified > 0 {
            let undervoltage_share = self.undervoltage_samples as f64 / classified as f64;
            let overvoltage_share = self.overvoltage_samples as f64 / classified as f64;
            if undervoltage_share >= UNSTABLE_VERDICT_FRACTION
                && undervoltage_share >= overvoltage_share
            {
                return Verdict::UndervoltageRisk;
            }
            if overvoltage_share >= UNSTABLE_VERDICT_FRACTION {
                return Verdict::OvervoltageRisk;
            }
        }

        Verdict::Normal
    }

    /// One-line human description, used as the `analise_operacao` KPI.
    ///
    /// The no-operation case renders as the bare verdict so consumers can
    /// match on it directly.
    pub fn describe(&self) -> String {
        let verdict = self.verdict();
        if verdict == Verdict::NoOperationDetected {
            return verdict.to_string();
        }

        let classified = self.classified_samples();
        if classified == 0 {
            return format!(
                "{}: {} operating samples, {} idle; voltage stability not assessed",
                verdict, self.operating_samples, self.idle_samples
            );
        }

        format!(
            "{}: {} operating samples, {} idle; {} of {} classified stable ({:.1}%)",
            verdict,
            self.operating_samples,
            self.idle_samples,
            self.stable_samples,
            classified,
            self.stable_ratio() * 100.0
        )
    }
}
