use colored::Colorize;

use crate::core::engine::Outcome;

pub trait OutcomeReporter {
    fn report(&self, outcome: &Outcome);
}

/// Prints confirmation lines for a finished command to stdout.
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    /// Builds the headline for an outcome, without colour.
    ///
    /// Every outcome is followed by a second line with the ignore-file
    /// location, see `location_line`.
    pub fn headline(outcome: &Outcome) -> String {
        match outcome {
            Outcome::TemplateWritten { lang, .. } => format!("成功生成{lang}模板的.gitignore文件"),
            Outcome::TemplateAlreadyPresent { lang, .. } => {
                format!("警告: .gitignore文件已存在且可能包含{lang}模板内容")
            }
            Outcome::EntryAdded { entry, .. } => {
                format!("成功添加路径到.gitignore: {}", String::from_utf8_lossy(entry))
            }
            Outcome::EntryAlreadyPresent { entry, .. } => {
                format!("路径已存在于.gitignore中: {}", String::from_utf8_lossy(entry))
            }
        }
    }

    pub fn location_line(outcome: &Outcome) -> String {
        format!("文件位置: {}", outcome.ignore_file().display())
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeReporter for ConsoleReporter {
    fn report(&self, outcome: &Outcome) {
        let headline = Self::headline(outcome);
        let headline = if outcome.changed() {
            headline.green().bold()
        } else {
            headline.yellow()
        };
        println!("{headline}");
        println!("{}", Self::location_line(outcome).dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_headlines() {
        let written = Outcome::TemplateWritten {
            lang: "go".to_string(),
            path: PathBuf::from("/p/.gitignore"),
        };
        assert_eq!(ConsoleReporter::headline(&written), "成功生成go模板的.gitignore文件");
        assert_eq!(ConsoleReporter::location_line(&written), "文件位置: /p/.gitignore");

        let present = Outcome::EntryAlreadyPresent {
            entry: b"bar/".to_vec(),
            path: PathBuf::from("/p/.gitignore"),
        };
        assert_eq!(
            ConsoleReporter::headline(&present),
            "路径已存在于.gitignore中: bar/"
        );
    }
}
