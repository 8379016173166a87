use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::config::Config;
use crate::math::equation::{self, Equation, Outcome};
use crate::math::{parsefmt, ExpressionError, Rational};

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Expression(#[from] ExpressionError),
    #[error("Cannot store a truth value in \"{0}\"")]
    NotANumber(String),
    #[error("Variables file error: {0}")]
    Io(#[from] io::Error),
}

// contains state that outlives a single expression
pub struct State {
    pub variables: HashMap<String, Rational>,
    pub vars_path: PathBuf,
    pub config: Config,
    pub dirty: bool,
}

impl State {
    pub fn new(config: Config, vars_path: PathBuf) -> Self {
        Self { variables: HashMap::new(), vars_path, config, dirty: false }
    }

    /// Evaluate `name = <expression>` or a bare expression.
    pub fn evaluate(&mut self, line: &str) -> Result<Outcome, SessionError> {
        if let Some((name, expression)) = assignment(line) {
            let outcome = Equation::parse(expression, &self.variables)?.eval()?;
            let Outcome::Number(value) = &outcome else {
                return Err(SessionError::NotANumber(name.to_owned()));
            };
            log::debug!("storing {} = {}", name, value);
            self.variables.insert(name.to_owned(), value.clone());
            self.dirty = true;
            return Ok(outcome);
        }

        Ok(Equation::parse(line, &self.variables)?.eval()?)
    }

    pub fn display(&self, outcome: &Outcome) -> String {
        let decimal_places = self.config.show_decimal.then_some(self.config.decimal_places);
        outcome.display(self.config.base, decimal_places)
    }

    pub fn write_vars(&mut self) -> io::Result<()> {
        let mut names: Vec<&String> = self.variables.keys().collect();
        names.sort();

        let mut out = String::new();
        for name in names {
            out += format!("{}\n{}\n", name, self.variables[name]).as_str();
        }
        fs::write(&self.vars_path, out)?;
        self.dirty = false;
        Ok(())
    }

    /// Replace the variables with the ones stored at `vars_path`. A missing file leaves them
    /// untouched.
    pub fn read_vars(&mut self) -> io::Result<()> {
        let data = match fs::read_to_string(&self.vars_path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(err),
        };

        self.variables = HashMap::new();
        let lines: Vec<&str> = data.lines().collect();
        for pair in lines.chunks(2) {
            let [name, value] = pair else {
                log::warn!("Ignoring trailing line in {}", self.vars_path.display());
                continue;
            };
            if !equation::is_name(name) {
                log::warn!("Ignoring variable with invalid name \"{}\"", name);
                continue;
            }
            match parsefmt::parse(value) {
                Ok(n) => {
                    self.variables.insert((*name).to_owned(), n);
                },
                Err(err) => log::warn!("Ignoring variable \"{}\": {}", name, err),
            }
        }
        Ok(())
    }
}

fn assignment(line: &str) -> Option<(&str, &str)> {
    let (name, expression) = line.split_once('=')?;
    let name = name.trim();
    // `x == y` is a comparison
    if expression.starts_with('=') || !equation::is_name(name) {
        return None;
    }
    Some((name, expression))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    fn state(dir: &TempDir) -> State {
        State::new(Config::default(), dir.path().join("vars"))
    }

    #[test]
    fn assignment_and_lookup() {
        let dir = TempDir::new("rationals-session").unwrap();
        let mut state = state(&dir);

        assert_eq!(state.evaluate("half = 1/2").unwrap(), Outcome::Number(crate::ratio!(1, 2)));
        assert!(state.dirty);
        assert_eq!(state.evaluate("half + 1/3").unwrap(), Outcome::Number(crate::ratio!(5, 6)));
        assert_eq!(state.evaluate("half == 2/4").unwrap(), Outcome::Truth(true));
        assert!(matches!(state.evaluate("flag = 1 < 2"), Err(SessionError::NotANumber(_))));
        assert!(matches!(
            state.evaluate("missing * 2"),
            Err(SessionError::Expression(ExpressionError::UnknownVariable(_)))
        ));
    }

    #[test]
    fn comparisons_are_not_assignments() {
        assert_eq!(assignment("x == 1"), None);
        assert_eq!(assignment("x <= 1"), None);
        assert_eq!(assignment("1/2 = 3"), None);
        assert_eq!(assignment(" y = 1 + 2"), Some(("y", " 1 + 2")));
    }

    #[test]
    fn vars_round_trip() {
        let dir = TempDir::new("rationals-session").unwrap();
        let mut state = state(&dir);
        state.evaluate("b = -6/4").unwrap();
        state.evaluate("a = 2").unwrap();
        state.write_vars().unwrap();
        assert!(!state.dirty);

        assert_eq!(fs::read_to_string(&state.vars_path).unwrap(), "a\n2\nb\n-3/2\n");

        let mut restored = State::new(Config::default(), state.vars_path.clone());
        restored.read_vars().unwrap();
        assert_eq!(restored.variables, state.variables);
    }

    #[test]
    fn bad_entries_are_skipped() {
        let dir = TempDir::new("rationals-session").unwrap();
        let mut state = state(&dir);
        fs::write(&state.vars_path, "good\n1/3\nbad\n1/0\n9lives\n2\nlonely\n").unwrap();

        state.read_vars().unwrap();
        assert_eq!(state.variables.len(), 1);
        assert_eq!(state.variables["good"], crate::ratio!(1, 3));
    }

    #[test]
    fn missing_vars_file_is_not_an_error() {
        let dir = TempDir::new("rationals-session").unwrap();
        let mut state = state(&dir);
        state.variables.insert("kept".to_owned(), crate::ratio!(1));

        state.read_vars().unwrap();
        assert_eq!(state.variables.len(), 1);
    }

    #[test]
    fn display_uses_config() {
        let dir = TempDir::new("rationals-session").unwrap();
        let mut state = state(&dir);
        state.config.show_decimal = true;
        state.config.decimal_places = 3;

        let outcome = state.evaluate("1/3 + 1/3").unwrap();
        assert_eq!(state.display(&outcome), "2/3 (0.667)");
    }
}
