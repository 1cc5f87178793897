use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// parse `key=value` resource text. `#` lines and blank lines are skipped,
/// only the first `=` splits, key side is trimmed. lines without `=` are skipped.
pub fn parse_properties(text : &'_ str) -> HashMap<String, String> {
    let mut map = HashMap::<String, String>::new();

    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(eq_pos) = trimmed.find('=') {
            let key = trimmed[..eq_pos].trim();
            let value = &trimmed[eq_pos + 1..];
            if key.is_empty() {
                continue;
            }
            map.insert(key.to_string(), value.to_string());
        }
    }

    map
}

pub fn load_properties(prop_file_path : &Path) -> Result<HashMap<String, String>, std::io::Error> {
    let prop_file = File::open(prop_file_path)?;
    let buf_reader = BufReader::new(prop_file);

    let mut text = String::new();
    for line_result in buf_reader.lines() {
        let line = line_result?;
        text.push_str(line.as_str());
        text.push('\n');
    }

    Ok(parse_properties(text.as_str()))
}

#[cfg(test)]
mod properties_tests {
    use super::parse_properties;

    #[test]
    fn test_parse_basic() {
        let map = parse_properties("I001=こんにちは {0}\nI002=bye {0}");

        assert_eq!(map.len(), 2);
        assert_eq!(map["I001"], "こんにちは {0}");
        assert_eq!(map["I002"], "bye {0}");
    }

    #[test]
    fn test_parse_skip_comment_and_blank() {
        let map = parse_properties("# comment line\n\nI001=hello\n   # indented comment\n");

        assert_eq!(map.len(), 1);
        assert_eq!(map["I001"], "hello");
    }

    #[test]
    fn test_parse_first_eq_splits() {
        let map = parse_properties("K1=a=b=c");

        assert_eq!(map["K1"], "a=b=c");
    }

    #[test]
    fn test_parse_no_eq_line_skipped() {
        let map = parse_properties("broken line\nK1=ok");

        assert_eq!(map.len(), 1);
        assert_eq!(map["K1"], "ok");
    }

    #[test]
    fn test_parse_value_keeps_spaces() {
        let map = parse_properties("K1 = padded value ");

        assert_eq!(map["K1"], " padded value ");
    }
}
