//! Date rule and the supported date patterns.
//!
//! The `Date` rule takes the pattern the value is written in (`Date:dd-MM-yy`),
//! splits the value on that pattern's separator, re-orders the parts into the
//! configured canonical pattern and parses the result strictly, so impossible
//! calendar dates such as `02/30/2020` are rejected.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::ValidatorConfig;
use crate::error::ConfigurationError;
use crate::rule::{ChainFlow, Rule, RuleContext, RuleOutcome};

// ============================================================================
// DATE PATTERN
// ============================================================================

/// One of the supported date layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DatePattern {
    /// `MM-dd-yyyy`
    MonthDayYearDash,
    /// `MM-dd-yy`
    MonthDayShortYearDash,
    /// `dd-MM-yyyy`
    DayMonthYearDash,
    /// `dd-MM-yy`
    DayMonthShortYearDash,
    /// `MM/dd/yyyy`
    MonthDayYearSlash,
    /// `MM/dd/yy`
    MonthDayShortYearSlash,
    /// `dd/MM/yyyy`
    DayMonthYearSlash,
    /// `dd/MM/yy`
    DayMonthShortYearSlash,
}

/// Position of a date component within a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component {
    Month,
    Day,
    Year,
}

impl DatePattern {
    /// Every supported pattern.
    pub const ALL: [Self; 8] = [
        Self::MonthDayYearDash,
        Self::MonthDayShortYearDash,
        Self::DayMonthYearDash,
        Self::DayMonthShortYearDash,
        Self::MonthDayYearSlash,
        Self::MonthDayShortYearSlash,
        Self::DayMonthYearSlash,
        Self::DayMonthShortYearSlash,
    ];

    /// The pattern as written in rule tokens.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MonthDayYearDash => "MM-dd-yyyy",
            Self::MonthDayShortYearDash => "MM-dd-yy",
            Self::DayMonthYearDash => "dd-MM-yyyy",
            Self::DayMonthShortYearDash => "dd-MM-yy",
            Self::MonthDayYearSlash => "MM/dd/yyyy",
            Self::MonthDayShortYearSlash => "MM/dd/yy",
            Self::DayMonthYearSlash => "dd/MM/yyyy",
            Self::DayMonthShortYearSlash => "dd/MM/yy",
        }
    }

    /// Separator between the components.
    #[must_use]
    pub fn separator(self) -> char {
        match self {
            Self::MonthDayYearDash
            | Self::MonthDayShortYearDash
            | Self::DayMonthYearDash
            | Self::DayMonthShortYearDash => '-',
            Self::MonthDayYearSlash
            | Self::MonthDayShortYearSlash
            | Self::DayMonthYearSlash
            | Self::DayMonthShortYearSlash => '/',
        }
    }

    fn components(self) -> [Component; 3] {
        use Component::{Day, Month, Year};
        match self {
            Self::MonthDayYearDash
            | Self::MonthDayShortYearDash
            | Self::MonthDayYearSlash
            | Self::MonthDayShortYearSlash => [Month, Day, Year],
            Self::DayMonthYearDash
            | Self::DayMonthShortYearDash
            | Self::DayMonthYearSlash
            | Self::DayMonthShortYearSlash => [Day, Month, Year],
        }
    }

    /// `chrono` format string matching this pattern's layout.
    ///
    /// The year is always parsed with `%Y`: a two-digit year is taken
    /// literally (`20` is the year 20), as the re-ordered canonical form
    /// carries the year text unchanged.
    #[must_use]
    pub fn chrono_format(self) -> &'static str {
        match (self.components()[0], self.separator()) {
            (Component::Month, '-') => "%m-%d-%Y",
            (Component::Month, _) => "%m/%d/%Y",
            (_, '-') => "%d-%m-%Y",
            (_, _) => "%d/%m/%Y",
        }
    }

    /// Number of digits the year is written with.
    #[must_use]
    pub fn year_digits(self) -> usize {
        match self {
            Self::MonthDayShortYearDash
            | Self::DayMonthShortYearDash
            | Self::MonthDayShortYearSlash
            | Self::DayMonthShortYearSlash => 2,
            _ => 4,
        }
    }

    /// Splits `text` into (month, day, year) according to this pattern.
    ///
    /// Returns `None` when the text does not have at least three parts, or
    /// when a part is not plain ASCII digits of the expected width: month
    /// and day take one or two digits, the year exactly
    /// [`year_digits`](Self::year_digits).
    fn split<'t>(self, text: &'t str) -> Option<(&'t str, &'t str, &'t str)> {
        let parts: Vec<&str> = text.split(self.separator()).collect();
        if parts.len() < 3 {
            return None;
        }

        let (mut month, mut day, mut year) = ("", "", "");
        for (component, part) in self.components().into_iter().zip(parts) {
            match component {
                Component::Month => month = part,
                Component::Day => day = part,
                Component::Year => year = part,
            }
        }

        let year_width = self.year_digits();
        let well_formed = all_digits(month, 1..=2)
            && all_digits(day, 1..=2)
            && all_digits(year, year_width..=year_width);
        well_formed.then_some((month, day, year))
    }

    /// Joins (month, day, year) into this pattern's layout.
    fn join(self, month: &str, day: &str, year: &str) -> String {
        let sep = self.separator();
        let [first, second, _] = self.components();
        match (first, second) {
            (Component::Month, _) => format!("{month}{sep}{day}{sep}{year}"),
            _ => format!("{day}{sep}{month}{sep}{year}"),
        }
    }
}

/// Returns true if `part` is only ASCII digits and its length is in `width`.
fn all_digits(part: &str, width: RangeInclusive<usize>) -> bool {
    width.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatePattern {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.as_str() == s)
            .ok_or_else(|| ConfigurationError::InvalidParameter {
                rule: Date::NAME.to_owned(),
                param: s.to_owned(),
                reason: "unsupported date pattern".to_owned(),
            })
    }
}

impl TryFrom<String> for DatePattern {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DatePattern> for String {
    fn from(pattern: DatePattern) -> Self {
        pattern.as_str().to_owned()
    }
}

// ============================================================================
// DATE RULE
// ============================================================================

/// The value must be a real calendar date written in the given pattern.
///
/// # Examples
///
/// ```
/// use fieldrules_validator::rule::{Rule, RuleContext};
/// use fieldrules_validator::rules::{Date, DatePattern};
/// use fieldrules_validator::ValidatorConfig;
/// use serde_json::json;
///
/// let date = Date::new(DatePattern::MonthDayYearSlash, &ValidatorConfig::default());
///
/// let ok = json!("02/20/2020");
/// assert!(date.validate(&RuleContext::new("dob", &ok)).valid);
///
/// let leap = json!("02/30/2020");
/// let outcome = date.validate(&RuleContext::new("dob", &leap));
/// assert_eq!(outcome.message, "The dob must be a valid date in the MM/dd/yyyy format");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pattern: DatePattern,
    canonical: DatePattern,
}

impl Date {
    /// Name this rule is registered under.
    pub const NAME: &'static str = "Date";

    /// Creates a date rule for values written in `pattern`.
    #[must_use]
    pub fn new(pattern: DatePattern, config: &ValidatorConfig) -> Self {
        Self {
            pattern,
            canonical: config.canonical_date_pattern,
        }
    }

    /// Builds the rule from its textual parameters.
    pub fn from_params(
        params: &[String],
        config: &ValidatorConfig,
    ) -> Result<Self, ConfigurationError> {
        ConfigurationError::check_arity(Self::NAME, params, 1)?;
        let pattern = params[0].parse::<DatePattern>()?;
        Ok(Self::new(pattern, config))
    }

    /// Pattern values are expected in.
    #[must_use]
    pub fn pattern(&self) -> DatePattern {
        self.pattern
    }

    /// Parses `text`, written in this rule's pattern, into a date.
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<NaiveDate> {
        let Some((month, day, year)) = self.pattern.split(text) else {
            tracing::trace!(
                value = text,
                pattern = %self.pattern,
                "date does not match the expected layout"
            );
            return None;
        };

        let canonical = self.canonical.join(month, day, year);
        NaiveDate::parse_from_str(&canonical, self.canonical.chrono_format()).ok()
    }
}

impl Rule for Date {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn default_message(&self) -> &str {
        "The :key must be a valid date in the :format format"
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        if self.parse(&ctx.text()).is_some() {
            RuleOutcome::pass()
        } else {
            ctx.fail(
                self,
                &[(":format", self.pattern.as_str())],
                ChainFlow::Continue,
            )
        }
    }
}
