use crate::core::calculators;
use crate::core::types::{
    DateOfBirth, Language, NumerologyReport, Reduced, ReportEntry, ResultKey, ResultValue,
};
use crate::input::prepare_name;
use chrono::{Datelike, Local};
use tracing::debug;

/// Knobs for a calculation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineConfig {
    /// Year used for the personal year number; `None` reads the local clock.
    pub current_year: Option<u32>,
    pub language: Language,
}

/// Runs the full reading: name preparation, every calculator, and report assembly.
pub struct NumerologyEngine {
    config: EngineConfig,
}

impl NumerologyEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn current_year(&self) -> u32 {
        self.config
            .current_year
            .unwrap_or_else(|| Local::now().year().unsigned_abs())
    }

    /// Computes every number for a raw (mixed case, possibly accented) name.
    pub fn calculate(&self, raw_name: &str, dob: DateOfBirth) -> NumerologyReport {
        let name = prepare_name(raw_name);
        let current_year = self.current_year();
        debug!(%name, ?dob, current_year, "calculating numerology");

        let life_path = calculators::life_path(dob);
        let expression = calculators::expression(&name);
        let soul_urge = calculators::soul_urge(&name);
        let attitude = calculators::attitude(&name);
        let karmic_debt =
            calculators::karmic_debt(&[life_path, expression, soul_urge, attitude]);

        let values = [
            (ResultKey::LifePath, reduced(life_path)),
            (ResultKey::Expression, reduced(expression)),
            (ResultKey::SoulUrge, reduced(soul_urge)),
            (ResultKey::Attitude, reduced(attitude)),
            (ResultKey::Personality, ResultValue::Number(calculators::personality(&name))),
            (ResultKey::Destiny, ResultValue::Number(calculators::destiny(&name))),
            (ResultKey::Balance, ResultValue::Number(calculators::balance(&name))),
            (ResultKey::CoreStrength, ResultValue::Digits(calculators::core_strength(&name))),
            (
                ResultKey::PersonalYear,
                ResultValue::Number(calculators::personal_year(dob, current_year)),
            ),
            (ResultKey::LessonDebt, ResultValue::Digits(calculators::lesson_debt(&name))),
            (ResultKey::KarmicDebt, ResultValue::Digits(karmic_debt)),
        ];

        let entries = values
            .into_iter()
            .map(|(key, value)| ReportEntry {
                key,
                label: key.label(self.config.language),
                display: value.to_string(),
                value,
            })
            .collect();

        NumerologyReport {
            name,
            date_of_birth: dob,
            current_year,
            entries,
        }
    }
}

impl Default for NumerologyEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn reduced(value: Reduced) -> ResultValue {
    ResultValue::Reduced(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> NumerologyEngine {
        NumerologyEngine::with_config(EngineConfig {
            current_year: Some(2026),
            language: Language::English,
        })
    }

    #[test]
    fn entries_follow_the_fixed_order() {
        let report = engine().calculate("Nguyễn Văn An", DateOfBirth::new(29, 11, 1990));
        let keys: Vec<ResultKey> = report.entries.iter().map(|e| e.key).collect();
        assert_eq!(keys, ResultKey::ALL.to_vec());
    }

    #[test]
    fn full_reading() {
        let report = engine().calculate("Nguyễn Văn An", DateOfBirth::new(29, 11, 1990));
        assert_eq!(report.name, "NGUYEN VAN AN");
        let shown: Vec<&str> = report.entries.iter().map(|e| e.display.as_str()).collect();
        assert_eq!(
            shown,
            vec!["5", "3", "1", "2", "6", "1", "1", "5", "5", "2, 6, 8, 9", "None"]
        );
    }

    #[test]
    fn empty_name_does_not_panic() {
        let report = engine().calculate("", DateOfBirth::new(1, 1, 2000));
        assert_eq!(report.display(ResultKey::Expression), "0");
        assert_eq!(report.display(ResultKey::CoreStrength), "None");
        assert_eq!(report.display(ResultKey::LessonDebt), "1, 2, 3, 4, 5, 6, 7, 8, 9");
    }

    #[test]
    fn karmic_life_path_is_shown_but_not_listed_as_debt() {
        let report = engine().calculate("An", DateOfBirth::new(9, 2, 2000));
        assert_eq!(report.display(ResultKey::LifePath), "4 (13)");
        assert_eq!(report.display(ResultKey::KarmicDebt), "None");
    }

    #[test]
    fn labels_follow_language() {
        let engine = NumerologyEngine::with_config(EngineConfig {
            current_year: Some(2026),
            language: Language::Vietnamese,
        });
        let report = engine.calculate("An", DateOfBirth::new(1, 1, 2000));
        assert_eq!(report.entries[0].label, "Sứ Mệnh Cuộc Đời");
        assert_eq!(report.entries[10].label, "Nợ Nghiệp");
    }

    #[test]
    fn clock_year_is_used_without_override() {
        let report = NumerologyEngine::new().calculate("An", DateOfBirth::new(1, 1, 2000));
        assert_eq!(report.current_year, Local::now().year().unsigned_abs());
    }
}
