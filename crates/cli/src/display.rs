//! Console formatting for result lists and the movie detail view.
//!
//! Everything writes to a caller-supplied `Write` so the interactive menu can
//! be driven from in-memory buffers in tests.

use anyhow::Result;
use colored::Colorize;
use data_loader::MovieRecord;
use std::io::Write;

/// How a numbered result line describes its movie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Title,
    TitleAndRating,
    TitleAndRevenue,
}

impl Label {
    fn render(self, movie: &MovieRecord) -> String {
        match self {
            Label::Title => movie.title.clone(),
            Label::TitleAndRating => format!("{} - {}", movie.title, movie.user_rating),
            Label::TitleAndRevenue => format!("{} - ${}", movie.title, movie.revenue),
        }
    }
}

pub fn print_header(out: &mut impl Write, text: &str) -> Result<()> {
    writeln!(out, "{}", text.bold().blue())?;
    Ok(())
}

/// Print movies numbered from 1
pub fn print_movies(out: &mut impl Write, movies: &[&MovieRecord], label: Label) -> Result<()> {
    for (idx, movie) in movies.iter().enumerate() {
        writeln!(out, "{}. {}", (idx + 1).to_string().green(), label.render(movie))?;
    }
    Ok(())
}

/// Print index keys (cast names, genres) numbered from 1
pub fn print_keys(out: &mut impl Write, keys: &[&str]) -> Result<()> {
    for (idx, key) in keys.iter().enumerate() {
        writeln!(out, "{}. {}", (idx + 1).to_string().green(), key)?;
    }
    Ok(())
}

/// Full detail view of one movie
pub fn print_movie_info(out: &mut impl Write, movie: &MovieRecord) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}Title: {}", "• ".green(), movie.title.bold())?;
    writeln!(out, "{}Tagline: {}", "• ".green(), movie.tagline)?;
    writeln!(out, "{}Runtime: {} minutes", "• ".green(), movie.runtime)?;
    writeln!(out, "{}Year: {}", "• ".green(), movie.year)?;
    writeln!(out, "{}Directed by: {}", "• ".green(), movie.director)?;
    writeln!(out, "{}Cast: {}", "• ".green(), movie.cast_text())?;
    writeln!(out, "{}Genres: {}", "• ".green(), movie.genre_text())?;
    writeln!(out, "{}Overview: {}", "• ".green(), movie.overview)?;
    writeln!(out, "{}User rating: {}", "• ".cyan(), movie.user_rating)?;
    writeln!(out, "{}Box office revenue: {}", "• ".cyan(), movie.revenue)?;
    Ok(())
}

/// Result list as a pretty JSON array
pub fn print_json(out: &mut impl Write, movies: &[&MovieRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, movies)?;
    writeln!(out)?;
    Ok(())
}

/// Index keys as a pretty JSON array
pub fn print_keys_json(out: &mut impl Write, keys: &[&str]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, keys)?;
    writeln!(out)?;
    Ok(())
}
