use nexuslex::lexer::keywords::KeywordTable;
use rustyline::completion::Pair;

use super::COMMANDS;

pub fn complete_line(keywords: &KeywordTable, line: &str, pos: usize) -> (usize, Vec<Pair>) {
    let safe_pos = pos.min(line.len());
    let prefix = &line[..safe_pos];

    if prefix.starts_with('.') && !prefix.contains(' ') {
        let commands = COMMANDS
            .iter()
            .map(|(name, _)| *name)
            .filter(|name| name.starts_with(prefix))
            .collect::<Vec<_>>();
        return (0, pairs(&commands));
    }

    let start = word_start(prefix);
    let needle = &prefix[start..];
    if needle.is_empty() {
        return (start, Vec::new());
    }
    let words = keywords
        .words()
        .into_iter()
        .filter(|kw| kw.starts_with(needle))
        .collect::<Vec<_>>();

    (start, pairs(&words))
}

fn pairs(values: &[&str]) -> Vec<Pair> {
    values
        .iter()
        .map(|v| Pair {
            display: (*v).to_string(),
            replacement: (*v).to_string(),
        })
        .collect()
}

fn word_start(prefix: &str) -> usize {
    prefix
        .char_indices()
        .rev()
        .find(|(_, ch)| !is_ident_char(*ch))
        .map_or(0, |(idx, ch)| idx + ch.len_utf8())
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacements(line: &str) -> Vec<String> {
        complete_line(&KeywordTable::default(), line, line.len())
            .1
            .into_iter()
            .map(|p| p.replacement)
            .collect()
    }

    #[test]
    fn completes_keywords_from_word_start() {
        assert_eq!(replacements("declare int X = 1; con"), vec!["condition", "continue"]);
        assert_eq!(replacements("fin"), vec!["finish"]);
    }

    #[test]
    fn completes_commands() {
        assert_eq!(replacements(".lo"), vec![".load"]);
    }
}
