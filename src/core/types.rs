// src/core/types.rs
use serde::Serialize;
use std::fmt;

/// A date of birth as typed by the user. The parts are kept unreduced and no
/// calendar check is made; only their digits matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateOfBirth {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl DateOfBirth {
    pub fn new(day: u32, month: u32, year: u32) -> Self {
        Self { day, month, year }
    }
}

/// Output of the karmic-aware reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reduced {
    Digit(u32),
    Master(u32),
    /// A karmic number (`source`) together with the digit it reduces to.
    Karmic { digit: u32, source: u32 },
}

impl fmt::Display for Reduced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reduced::Digit(n) | Reduced::Master(n) => write!(f, "{n}"),
            Reduced::Karmic { digit, source } => write!(f, "{digit} ({source})"),
        }
    }
}

/// The value of one report line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultValue {
    /// A plain number, reduced or not depending on the calculation.
    Number(u32),
    Reduced(Reduced),
    /// A list of digits; shown as "None" when empty.
    Digits(Vec<u32>),
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultValue::Number(n) => write!(f, "{n}"),
            ResultValue::Reduced(r) => write!(f, "{r}"),
            ResultValue::Digits(digits) if digits.is_empty() => f.write_str("None"),
            ResultValue::Digits(digits) => {
                let joined: Vec<String> = digits.iter().map(u32::to_string).collect();
                f.write_str(&joined.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Vietnamese,
}

/// The result lines, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKey {
    LifePath,
    Expression,
    SoulUrge,
    Attitude,
    Personality,
    Destiny,
    Balance,
    CoreStrength,
    PersonalYear,
    LessonDebt,
    KarmicDebt,
}

impl ResultKey {
    pub const ALL: [ResultKey; 11] = [
        ResultKey::LifePath,
        ResultKey::Expression,
        ResultKey::SoulUrge,
        ResultKey::Attitude,
        ResultKey::Personality,
        ResultKey::Destiny,
        ResultKey::Balance,
        ResultKey::CoreStrength,
        ResultKey::PersonalYear,
        ResultKey::LessonDebt,
        ResultKey::KarmicDebt,
    ];

    pub fn label(self, language: Language) -> &'static str {
        match language {
            Language::English => match self {
                ResultKey::LifePath => "Life Path",
                ResultKey::Expression => "Expression",
                ResultKey::SoulUrge => "Soul Urge",
                ResultKey::Attitude => "Attitude",
                ResultKey::Personality => "Personality",
                ResultKey::Destiny => "Destiny",
                ResultKey::Balance => "Balance",
                ResultKey::CoreStrength => "Core Strength",
                ResultKey::PersonalYear => "Personal Year",
                ResultKey::LessonDebt => "Lesson Debt",
                ResultKey::KarmicDebt => "Karmic Debt",
            },
            Language::Vietnamese => match self {
                ResultKey::LifePath => "Sứ Mệnh Cuộc Đời",
                ResultKey::Expression => "Tố Chất Tiềm Ẩn",
                ResultKey::SoulUrge => "Động Lực Bên Trong",
                ResultKey::Attitude => "Thái Độ Bên Ngoài",
                ResultKey::Personality => "Phản Ứng Ban Đầu",
                ResultKey::Destiny => "Mong Muốn Ban Đầu",
                ResultKey::Balance => "Số Cân Bằng",
                ResultKey::CoreStrength => "Năng Lượng Thành Phần Nổi Trội",
                ResultKey::PersonalYear => "Năm Thần Số",
                ResultKey::LessonDebt => "Nợ Bài Học",
                ResultKey::KarmicDebt => "Nợ Nghiệp",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub key: ResultKey,
    pub label: &'static str,
    pub value: ResultValue,
    /// `value` as it is shown to the user.
    pub display: String,
}

/// All derived numbers for one name and date of birth, in fixed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumerologyReport {
    pub name: String,
    pub date_of_birth: DateOfBirth,
    pub current_year: u32,
    pub entries: Vec<ReportEntry>,
}

impl NumerologyReport {
    pub fn get(&self, key: ResultKey) -> Option<&ResultValue> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    /// The displayed value for `key`, or an empty string if it is missing.
    pub fn display(&self, key: ResultKey) -> &str {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.display.as_str())
            .unwrap_or("")
    }
}
