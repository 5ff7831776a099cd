use crate::error::{CinemapError, Result};
use crate::models::FilmEntry;
use crate::utils::constants::{BANNER_LINE_COUNT, TRAILER_LINE_COUNT};
use encoding_rs::WINDOWS_1252;
use std::path::Path;

pub struct FilmographyReader {
    banner_lines: usize,
    trailer_lines: usize,
}

impl FilmographyReader {
    pub fn new() -> Self {
        Self {
            banner_lines: BANNER_LINE_COUNT,
            trailer_lines: TRAILER_LINE_COUNT,
        }
    }

    pub fn with_banner_lines(mut self, banner_lines: usize) -> Self {
        self.banner_lines = banner_lines;
        self
    }

    pub fn with_trailer_lines(mut self, trailer_lines: usize) -> Self {
        self.trailer_lines = trailer_lines;
        self
    }

    /// Read the locations export and return the entries released in `year`,
    /// in file order
    pub fn read_films(&self, path: &Path, year: u16) -> Result<Vec<FilmEntry>> {
        let text = self.read_to_string(path)?;
        let lines: Vec<&str> = text.trim().split('\n').collect();

        if lines.len() <= self.banner_lines + self.trailer_lines {
            return Ok(Vec::new());
        }

        let data_lines = &lines[self.banner_lines..lines.len() - self.trailer_lines];

        let mut entries = Vec::new();
        for line in data_lines {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(entry) = self.parse_film_line(line, year)? {
                entries.push(entry);
            }
        }

        tracing::debug!("matched {} entries for year {}", entries.len(), year);

        Ok(entries)
    }

    /// Whole-file read, decoded as UTF-8 when valid and as Windows-1252
    /// otherwise (the IMDb exports are Latin-1)
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)?;

        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(err) => {
                tracing::debug!(
                    "{} is not valid UTF-8, decoding as Windows-1252",
                    path.display()
                );
                let (text, _, _) = WINDOWS_1252.decode(err.as_bytes());
                Ok(text.into_owned())
            }
        }
    }

    /// Parse a single data line, returning the entry when its year matches
    ///
    /// Line format: `Title (Year[/N]) [{episode}] [(TV)]<TAB>location[<TAB>(qualifier)]`
    fn parse_film_line(&self, line: &str, year: u16) -> Result<Option<FilmEntry>> {
        let fields: Vec<&str> = line.split('\t').collect();
        let title_section = self.strip_episode_info(fields[0]);

        let mut tokens: Vec<&str> = title_section.split_whitespace().collect();
        if tokens.len() < 2 {
            return Err(CinemapError::InvalidFormat(format!(
                "Cannot split title and year in line: '{}'",
                line
            )));
        }

        // `(2015) (TV)` style suffix: the year token is second-to-last
        if tokens[tokens.len() - 2].contains('(') {
            tokens.pop();
        }

        let year_token = tokens[tokens.len() - 1];
        if parse_year(year_token) != Some(year) {
            return Ok(None);
        }

        let title = tokens[..tokens.len() - 1].join(" ");
        let location = self.extract_location(&fields, line)?;

        Ok(Some(FilmEntry::new(title, location.to_string())))
    }

    /// A `{...}` episode block after the year truncates the title section
    fn strip_episode_info<'a>(&self, title_section: &'a str) -> &'a str {
        match title_section.find('{') {
            Some(brace) if title_section.find('(').map_or(true, |paren| brace > paren) => {
                title_section[..brace].trim_end()
            }
            _ => title_section,
        }
    }

    /// The location is the last non-empty tab field, skipping a trailing
    /// fully-parenthesised qualifier such as `(studio)` or `(uncredited)`
    fn extract_location<'a>(&self, fields: &[&'a str], line: &str) -> Result<&'a str> {
        let mut non_empty = fields[1..]
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .rev();

        let last = non_empty.next().ok_or_else(|| {
            CinemapError::InvalidFormat(format!("No location field in line: '{}'", line))
        })?;

        if is_qualifier(last) {
            non_empty.next().ok_or_else(|| {
                CinemapError::InvalidFormat(format!(
                    "Only a qualifier after the title in line: '{}'",
                    line
                ))
            })
        } else {
            Ok(last)
        }
    }
}

impl Default for FilmographyReader {
    fn default() -> Self {
        Self::new()
    }
}

/// The year is the 4 characters after `(`; anything else never matches
fn parse_year(token: &str) -> Option<u16> {
    let rest = token.strip_prefix('(')?;
    let digits: String = rest.chars().take(4).collect();
    if digits.len() == 4 {
        digits.parse().ok()
    } else {
        None
    }
}

fn is_qualifier(field: &str) -> bool {
    field.starts_with('(') && field.ends_with(')')
}
