//! Runner configuration, read from TOML.
//!
//! ```toml
//! source = "dominion.c"
//! coverage_file = "dominion.c.gcov"
//! prepare = ["gcc -o {name} {name}.c dominion.o -coverage"]
//! coverage = ["gcov dominion.c > /dev/null"]
//!
//! [[programs]]
//! name = "unittest1"
//! cases = 48
//! ```
//!
//! Commands run through `sh -c` in `workdir`. `{name}` and `{case}` are
//! replaced by the program name and case number before each run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TarantulaError;
use crate::suite::Suite;

fn default_workdir() -> PathBuf {
    PathBuf::from(".")
}

fn default_case_command() -> String {
    "./{name} {case} > /dev/null".to_string()
}

/// One numbered-case program.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramSpec {
    pub name: String,

    /// Exit status 0 is a pass.
    #[serde(default = "default_case_command")]
    pub command: String,

    /// Cases are numbered 1 to `cases`.
    pub cases: usize,
}

impl ProgramSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, cases: usize) -> Self {
        Self {
            name: name.into(),
            command: default_case_command(),
            cases,
        }
    }

    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TarantulaConfig {
    /// Listing to color, relative to `workdir`.
    pub source: PathBuf,

    /// Coverage annotations for `source`, rewritten after every case.
    pub coverage_file: PathBuf,

    #[serde(default = "default_workdir")]
    pub workdir: PathBuf,

    /// Run before every case.
    #[serde(default)]
    pub prepare: Vec<String>,

    /// Run after every case to refresh `coverage_file`.
    #[serde(default)]
    pub coverage: Vec<String>,

    pub programs: Vec<ProgramSpec>,
}

impl Default for TarantulaConfig {
    /// The historical gcc/gcov pipeline over every suite.
    fn default() -> Self {
        Self {
            source: PathBuf::from("dominion.c"),
            coverage_file: PathBuf::from("dominion.c.gcov"),
            workdir: default_workdir(),
            prepare: vec![
                "rm -f dominion.o *.gcov *.gcda *.gcno *.so {name}".to_string(),
                "gcc -c dominion.c -g -Wall -fpic -coverage -lm".to_string(),
                "gcc -o {name} {name}.c -g dominion.o rngs.o interface.o -Wall -fpic -coverage -lm"
                    .to_string(),
            ],
            coverage: vec!["gcov dominion.c > /dev/null".to_string()],
            programs: Suite::ALL
                .iter()
                .map(|suite| ProgramSpec::new(suite.name(), suite.case_count()))
                .collect(),
        }
    }
}

impl TarantulaConfig {
    pub fn from_path(path: &Path) -> Result<Self, TarantulaError> {
        let data = fs::read_to_string(path).map_err(|source| TarantulaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&data)
    }

    pub fn from_toml(data: &str) -> Result<Self, TarantulaError> {
        let config: TarantulaConfig = toml::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TarantulaError> {
        if self.programs.is_empty() {
            return Err(TarantulaError::Config("no programs configured".to_string()));
        }
        if let Some(program) = self.programs.iter().find(|p| p.cases == 0) {
            return Err(TarantulaError::Config(format!(
                "program `{}` has no cases",
                program.name
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn source_path(&self) -> PathBuf {
        self.workdir.join(&self.source)
    }

    #[must_use]
    pub fn coverage_path(&self) -> PathBuf {
        self.workdir.join(&self.coverage_file)
    }

    /// Cases over all programs.
    #[must_use]
    pub fn total_cases(&self) -> usize {
        self.programs.iter().map(|p| p.cases).sum()
    }
}

/// Fill `{name}` and `{case}` in a command template.
#[must_use]
pub fn substitute(template: &str, name: &str, case: usize) -> String {
    template
        .replace("{name}", name)
        .replace("{case}", &case.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_programs() {
        let config = TarantulaConfig::default();
        let counts: Vec<(&str, usize)> = config
            .programs
            .iter()
            .map(|p| (p.name.as_str(), p.cases))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("unittest1", 48),
                ("unittest2", 18),
                ("unittest3", 49),
                ("unittest4", 77),
                ("cardtest4", 4),
                ("randomtestadventurer", 50),
                ("randomtestcard1", 50),
                ("randomtestcard2", 50),
            ]
        );
        assert_eq!(config.total_cases(), 346);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_defaults() {
        let config = TarantulaConfig::from_toml(
            r#"
            source = "engine.c"
            coverage_file = "engine.c.gcov"

            [[programs]]
            name = "unittest9"
            cases = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.workdir, PathBuf::from("."));
        assert!(config.prepare.is_empty());
        assert_eq!(config.programs[0].command, "./{name} {case} > /dev/null");
        assert_eq!(config.coverage_path(), PathBuf::from("./engine.c.gcov"));
    }

    #[test]
    fn test_rejects_bad_config() {
        assert!(matches!(
            TarantulaConfig::from_toml("source = 3"),
            Err(TarantulaError::Config(_))
        ));
        let no_cases = r#"
            source = "a.c"
            coverage_file = "a.c.gcov"
            programs = [{ name = "t", cases = 0 }]
        "#;
        assert!(matches!(
            TarantulaConfig::from_toml(no_cases),
            Err(TarantulaError::Config(msg)) if msg.contains("`t`")
        ));
    }

    #[test]
    fn test_substitute() {
        assert_eq!(
            substitute("./{name} {case} > /dev/null", "unittest2", 17),
            "./unittest2 17 > /dev/null"
        );
    }
}
