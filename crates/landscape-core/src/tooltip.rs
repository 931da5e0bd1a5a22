//! Tooltip text for a hovered lecture.

use crate::constants::{DATABASE_DATE, DESCRIPTION_CUT_OFFSET, NOT_FOUND};
use crate::error::{LandscapeError, Result};
use crate::language::LanguageTable;
use crate::point::Point;
use crate::time::format_duration;
use std::borrow::Cow;
use std::fmt::Write;

#[derive(Clone, Debug)]
pub struct TooltipFormatter {
    /// Date of the database snapshot the view counts come from.
    pub database_date: String,
    pub languages: LanguageTable,
}

impl Default for TooltipFormatter {
    fn default() -> Self {
        Self::new(LanguageTable::common())
    }
}

impl TooltipFormatter {
    pub fn new(languages: LanguageTable) -> Self {
        Self {
            database_date: DATABASE_DATE.to_string(),
            languages,
        }
    }

    pub fn with_database_date(mut self, date: impl Into<String>) -> Self {
        self.database_date = date.into();
        self
    }

    /// Builds the HTML shown in the tooltip box.
    pub fn create_text(&self, point: &Point) -> Result<String> {
        let author = point
            .author
            .as_ref()
            .map(|a| a.join(", "))
            .unwrap_or_else(|| NOT_FOUND.to_string());
        let organization = point
            .organization
            .as_deref()
            .filter(|o| !o.is_empty())
            .unwrap_or(NOT_FOUND);

        let mut text = String::new();
        _ = write!(text, "<b>Lecture title:</b> {}<br>", point.title);
        _ = write!(text, "<b>Presenter:</b> {}<br>", author);
        _ = write!(text, "<b>Organization:</b> {}<br><br>", organization);

        if let Some(description) = point.description.as_deref().filter(|d| !d.is_empty()) {
            _ = write!(
                text,
                "<b>Description: </b>{}<br><br>",
                truncate_description(description)
            );
        }

        let language = self
            .languages
            .name(&point.language)
            .ok_or_else(|| LandscapeError::UnknownLanguage(point.language.clone()))?;
        _ = write!(text, "The lecture is in {}. ", language);

        if let Some(categories) = &point.categories {
            // grammar follows the full list even though the first entry is not shown
            let single = categories.len() == 1;
            let noun = if single { "category" } else { "categories" };
            let verb = if single { "was" } else { "were" };
            let shown = categories.get(1..).unwrap_or_default().join(", ");
            _ = write!(
                text,
                "The main {} of the lecture {} <b>{}</b>. ",
                noun, verb, shown
            );
        }

        _ = write!(
            text,
            concat!(
                "It was published in {} and it's duration is {}. ",
                "There have been <b>{}</b> views until {}. "
            ),
            published_date(&point.published),
            format_duration(point.duration.whole_seconds()),
            point.views,
            self.database_date
        );
        Ok(text)
    }
}

/// Cuts at the first `.` at or after character 300 and appends an ellipsis.
pub fn truncate_description(description: &str) -> Cow<'_, str> {
    let dot = description
        .char_indices()
        .skip(DESCRIPTION_CUT_OFFSET)
        .find(|(_, c)| *c == '.');
    match dot {
        Some((byte, _)) => Cow::Owned(format!("{}...", &description[..=byte])),
        None => Cow::Borrowed(description),
    }
}

/// `2012-05-31T12:00:00` becomes `31.05.2012`.
pub fn published_date(published: &str) -> String {
    let date = published.split('T').next().unwrap_or_default();
    date.split('-').rev().collect::<Vec<_>>().join(".")
}
