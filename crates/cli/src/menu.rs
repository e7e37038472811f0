//! Interactive text menu over the query and ranking engines.
//!
//! The menu owns all user-facing state: prompts, 1-based numbering and
//! validation of the numbers typed back. The engines only ever see plain
//! query parameters. End of input at any prompt quits the menu.

use crate::display::{self, Label};
use anyhow::Result;
use data_loader::MovieRecord;
use search::sort;
use search::{IndexKind, QueryEngine, RankBy, RankingEngine};
use std::io::{BufRead, Write};
use tracing::debug;

/// One option of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    SearchTitles,
    SearchKeywords,
    SearchCast,
    SearchGenre,
    ListGenres,
    TopRated,
    TopRevenue,
    Quit,
}

impl MenuOption {
    /// Map the text typed at the main prompt to an option
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "t" => Some(MenuOption::SearchTitles),
            "k" => Some(MenuOption::SearchKeywords),
            "c" => Some(MenuOption::SearchCast),
            "g" => Some(MenuOption::SearchGenre),
            "gen" => Some(MenuOption::ListGenres),
            "r" => Some(MenuOption::TopRated),
            "h" => Some(MenuOption::TopRevenue),
            "q" => Some(MenuOption::Quit),
            _ => None,
        }
    }
}

/// Interactive menu reading commands from `input` and writing to `output`
pub struct Menu<'a, R, W> {
    query: &'a QueryEngine,
    ranking: &'a RankingEngine,
    input: R,
    output: W,
    /// Length of the top-rated and top-revenue listings
    top_n: usize,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(
        query: &'a QueryEngine,
        ranking: &'a RankingEngine,
        input: R,
        output: W,
        top_n: usize,
    ) -> Self {
        Self {
            query,
            ranking,
            input,
            output,
            top_n,
        }
    }

    /// Run the main loop until the user quits or input ends
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the movie collection!")?;
        writeln!(self.output, "Total: {} movies", self.query.catalog().len())?;

        loop {
            self.print_main_menu()?;
            let Some(choice) = self.prompt("Enter choice: ")? else {
                break;
            };

            let keep_going = match MenuOption::parse(&choice) {
                Some(MenuOption::Quit) => false,
                Some(option) => {
                    debug!("Menu option {:?}", option);
                    self.process_option(option)?
                }
                None => {
                    writeln!(self.output, "Invalid choice!")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    fn print_main_menu(&mut self) -> Result<()> {
        display::print_header(&mut self.output, "------------ Main Menu ----------")?;
        writeln!(self.output, "- search (t)itles")?;
        writeln!(self.output, "- search (k)eywords")?;
        writeln!(self.output, "- search (c)ast")?;
        writeln!(self.output, "- search (g)enre")?;
        writeln!(self.output, "- see all movies of a (gen)re")?;
        writeln!(self.output, "- list top {} (r)ated movies", self.top_n)?;
        writeln!(self.output, "- list top {} (h)ighest revenue movies", self.top_n)?;
        writeln!(self.output, "- (q)uit")?;
        Ok(())
    }

    /// Returns false once input has ended
    fn process_option(&mut self, option: MenuOption) -> Result<bool> {
        // Copy the engine references out of `self` so results borrow from
        // them rather than from the menu.
        let query = self.query;
        let ranking = self.ranking;

        match option {
            MenuOption::SearchTitles => {
                let Some(term) = self.prompt("Enter a title search term: ")? else {
                    return Ok(false);
                };
                let results = query.search_titles(&term);
                self.pick_movie(&results, Label::Title)
            }
            MenuOption::SearchKeywords => {
                let Some(term) = self.prompt("Enter a keyword search term: ")? else {
                    return Ok(false);
                };
                let results = query.search_keywords(&term);
                self.pick_movie(&results, Label::Title)
            }
            MenuOption::SearchCast => {
                let Some(term) = self.prompt("Who do you want to search for? ")? else {
                    return Ok(false);
                };
                let names = query.match_cast_names(&term);
                if names.is_empty() {
                    writeln!(self.output, "No cast members match '{}'.", term)?;
                    return Ok(true);
                }
                display::print_keys(&mut self.output, &names)?;
                let Some(choice) = self.prompt_number("What is your choice? ", names.len())? else {
                    return Ok(false);
                };

                let mut results = query.lookup_cast(names[choice - 1]);
                sort::sort_records(&mut results, sort::by_title);
                self.pick_movie(&results, Label::Title)
            }
            MenuOption::SearchGenre => {
                let genres = query.list_keys(IndexKind::Genre);
                if genres.is_empty() {
                    writeln!(self.output, "No genres in the collection.")?;
                    return Ok(true);
                }
                display::print_keys(&mut self.output, &genres)?;
                let Some(choice) =
                    self.prompt_number("Which genre would you like to look into? ", genres.len())?
                else {
                    return Ok(false);
                };

                let mut results = query.lookup_genre(genres[choice - 1]);
                sort::sort_records(&mut results, sort::by_title);
                self.pick_movie(&results, Label::Title)
            }
            MenuOption::ListGenres => {
                let genres = query.list_keys(IndexKind::Genre);
                display::print_keys(&mut self.output, &genres)?;
                Ok(true)
            }
            MenuOption::TopRated => {
                let results = ranking.top(RankBy::Rating, self.top_n);
                self.pick_movie(&results, Label::TitleAndRating)
            }
            MenuOption::TopRevenue => {
                let results = ranking.top(RankBy::Revenue, self.top_n);
                self.pick_movie(&results, Label::TitleAndRevenue)
            }
            MenuOption::Quit => Ok(false),
        }
    }

    /// Number the results, let the user pick one and show its details.
    ///
    /// Returns false once input has ended.
    fn pick_movie(&mut self, results: &[&MovieRecord], label: Label) -> Result<bool> {
        if results.is_empty() {
            writeln!(self.output, "No movies found.")?;
            return Ok(true);
        }

        display::print_movies(&mut self.output, results, label)?;
        writeln!(self.output, "Which movie would you like to learn more about?")?;
        let Some(choice) = self.prompt_number("Enter number: ", results.len())? else {
            return Ok(false);
        };

        display::print_movie_info(&mut self.output, results[choice - 1])?;
        writeln!(self.output, "\n ** Press Enter to Return to Main Menu **")?;
        Ok(self.read_line()?.is_some())
    }

    /// Ask until the user enters a number in `1..=max`
    fn prompt_number(&mut self, text: &str, max: usize) -> Result<Option<usize>> {
        loop {
            let Some(answer) = self.prompt(text)? else {
                return Ok(None);
            };
            match answer.trim().parse::<usize>() {
                Ok(n) if (1..=max).contains(&n) => return Ok(Some(n)),
                _ => writeln!(self.output, "Please enter a number from 1 to {}.", max)?,
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next input line without its line ending, or None at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        Ok(Some(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::MovieCatalog;
    use std::sync::Arc;

    const DATA: &str = "title,cast,director,tagline,keywords,overview,runtime,genres,user_rating,year,revenue\n\
        Zeta,Ann Lee|Bob Ray,Dir,Tag Z,robot|future,Zeta overview,101,Science Fiction,5.0,2001,300\n\
        Alpha,Bob Ray,Dir,Tag A,heist,Alpha overview,102,Crime|Drama,9.0,2002,100\n\
        Beta,Cy Twombly,Dir,Tag B,robot,Beta overview,103,Drama,9.0,2003,200\n";

    fn engines() -> (QueryEngine, RankingEngine) {
        let catalog = Arc::new(MovieCatalog::load_from_reader(DATA.as_bytes()).unwrap());
        (QueryEngine::new(catalog.clone()), RankingEngine::new(catalog))
    }

    fn run_session(input: &str) -> String {
        colored::control::set_override(false);
        let (query, ranking) = engines();
        let mut output = Vec::new();
        Menu::new(&query, &ranking, input.as_bytes(), &mut output, 2)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_options() {
        assert_eq!(MenuOption::parse("gen"), Some(MenuOption::ListGenres));
        assert_eq!(MenuOption::parse("g"), Some(MenuOption::SearchGenre));
        assert_eq!(MenuOption::parse("x"), None);
        assert_eq!(MenuOption::parse("T"), None);
    }

    #[test]
    fn test_quit_immediately() {
        let out = run_session("q\n");
        assert!(out.contains("Total: 3 movies"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let out = run_session("");
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_invalid_choice() {
        let out = run_session("zzz\nq\n");
        assert!(out.contains("Invalid choice!"));
    }

    #[test]
    fn test_title_search_and_detail() {
        let out = run_session("t\nA\n1\n\nq\n");
        assert!(out.contains("1. Alpha\n2. Beta\n3. Zeta\n"));
        assert!(out.contains("Title: Alpha"));
        assert!(out.contains("Tagline: Tag A"));
    }

    #[test]
    fn test_selection_reprompts_until_in_range() {
        let out = run_session("k\nrobot\n0\n7\nabc\n2\n\nq\n");
        assert!(out.contains("1. Beta\n2. Zeta\n"));
        assert_eq!(out.matches("Please enter a number from 1 to 2.").count(), 3);
        assert!(out.contains("Title: Zeta"));
    }

    #[test]
    fn test_cast_search_sorted_by_title() {
        let out = run_session("c\nbob\n1\n1\n\nq\n");
        assert!(out.contains("1. Bob Ray\n"));
        assert!(out.contains("1. Alpha\n2. Zeta\n"));
        assert!(out.contains("Title: Alpha"));
    }

    #[test]
    fn test_cast_search_no_match() {
        let out = run_session("c\nnobody\nq\n");
        assert!(out.contains("No cast members match 'nobody'."));
    }

    #[test]
    fn test_genre_pick() {
        let out = run_session("g\n2\n2\n\nq\n");
        assert!(out.contains("1. Crime\n2. Drama\n3. Science Fiction\n"));
        assert!(out.contains("1. Alpha\n2. Beta\n"));
        assert!(out.contains("Title: Beta"));
    }

    #[test]
    fn test_top_rated_listing() {
        let out = run_session("r\n1\n\nq\n");
        assert!(out.contains("1. Alpha - 9\n2. Beta - 9\n"));
        assert!(!out.contains("3. Zeta"));
    }

    #[test]
    fn test_top_revenue_listing() {
        let out = run_session("h\n2\n\nq\n");
        assert!(out.contains("1. Zeta - $300\n2. Beta - $200\n"));
        assert!(out.contains("Title: Beta"));
    }

    #[test]
    fn test_empty_results_skip_selection() {
        let out = run_session("t\nnothing matches\nq\n");
        assert!(out.contains("No movies found."));
        assert!(!out.contains("Enter number:"));
    }
}
