//! Plain-text page model the console front end prints.

use std::fmt;

use super::banner::Banner;
use super::pagination::PaginationControls;
use crate::domain::FieldErrors;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }
        widths
    }
}

fn write_row<'a>(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize],
    cells: impl Iterator<Item = &'a str>,
) -> fmt::Result {
    for (i, (cell, width)) in cells.zip(widths.iter().copied()).enumerate() {
        if i > 0 {
            f.write_str(" | ")?;
        }
        write!(f, "{cell:<width$}")?;
    }
    writeln!(f)
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        write_row(f, &widths, self.headers.iter().copied())?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_row(f, &widths, rule.iter().map(String::as_str))?;
        for row in &self.rows {
            write_row(f, &widths, row.iter().map(String::as_str))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Heading(String),
    Lines(Vec<String>),
    Table(Table),
    /// "No items" state; distinct from an error banner.
    Empty(String),
    Pagination(PaginationControls),
    FieldErrors(Vec<(String, String)>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub title: String,
    pub banners: Vec<Banner>,
    pub sections: Vec<Section>,
}

impl Screen {
    pub fn new(title: impl Into<String>, banners: Vec<Banner>) -> Self {
        Self {
            title: title.into(),
            banners,
            sections: Vec::new(),
        }
    }

    pub fn push(&mut self, section: Section) -> &mut Self {
        self.sections.push(section);
        self
    }

    pub fn heading(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Section::Heading(text.into()))
    }

    pub fn lines(&mut self, lines: Vec<String>) -> &mut Self {
        self.push(Section::Lines(lines))
    }

    /// The table, or `empty` when it has no rows.
    pub fn table_or_empty(&mut self, table: Table, empty: &str) -> &mut Self {
        if table.rows.is_empty() {
            self.push(Section::Empty(empty.to_string()))
        } else {
            self.push(Section::Table(table))
        }
    }

    pub fn field_errors(&mut self, errors: &FieldErrors) -> &mut Self {
        if errors.is_empty() {
            return self;
        }
        let errors = errors
            .iter()
            .map(|(field, message)| (field.to_string(), message.to_string()))
            .collect();
        self.push(Section::FieldErrors(errors))
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.sections.iter().filter_map(|s| match s {
            Section::Table(table) => Some(table),
            _ => None,
        })
    }

    pub fn is_empty_state(&self) -> bool {
        self.sections.iter().any(|s| matches!(s, Section::Empty(_)))
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        for banner in &self.banners {
            writeln!(f, "{banner}")?;
        }
        for section in &self.sections {
            writeln!(f)?;
            match section {
                Section::Heading(text) => {
                    writeln!(f, "{text}")?;
                    writeln!(f, "{}", "-".repeat(text.chars().count()))?;
                }
                Section::Lines(lines) => {
                    for line in lines {
                        writeln!(f, "{line}")?;
                    }
                }
                Section::Table(table) => write!(f, "{table}")?,
                Section::Empty(message) => writeln!(f, "{message}")?,
                Section::Pagination(controls) => writeln!(f, "{controls}")?,
                Section::FieldErrors(errors) => {
                    for (field, message) in errors {
                        writeln!(f, "  {field}: {message}")?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_columns_are_padded() {
        let mut table = Table::new(vec!["ID", "Name"]);
        table.row(vec!["1".into(), "Plumbing".into()]);
        let text = table.to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("ID | Name    "));
        assert_eq!(lines.next(), Some("-- | --------"));
        assert_eq!(lines.next(), Some("1  | Plumbing"));
    }

    #[test]
    fn empty_table_renders_the_empty_state() {
        let mut screen = Screen::new("Locations", vec![]);
        screen.table_or_empty(Table::new(vec!["City"]), "No locations found.");
        assert!(screen.is_empty_state());
        assert!(screen.to_string().contains("No locations found."));
    }
}
