//! Writes a compiled dictionary out as `{"STROKE/STROKE": "word", ...}`,
//! the format steno dictionary software (e.g. Plover) expects.

use std::io::{self, Write};

use crate::pipeline::DictionaryEntry;

pub fn write_dictionary<W: Write>(entries: &[DictionaryEntry], mut writer: W) -> io::Result<()> {
    writeln!(writer, "{{")?;

    let total: usize = entries.iter().map(|(_, s)| s.len()).sum();
    let mut written = 0;

    for (word, sequences) in entries {
        for sequence in sequences {
            written += 1;
            let comma = if written < total { "," } else { "" };
            writeln!(
                writer,
                "{}: {}{}",
                json_string(&sequence.to_string()),
                json_string(word),
                comma
            )?;
        }
    }

    writeln!(writer, "}}")?;
    Ok(())
}

fn json_string(s: &str) -> String {
    serde_json::to_string(s).expect("strings always serialize")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steno::{Stroke, StrokeSequence};
    use std::str::FromStr;

    #[test]
    fn writes_stroke_to_word_mapping() {
        let entries = vec![("cat".to_string(), vec![StrokeSequence::from_strokes(vec![
            Stroke::from_str("KAT").unwrap(),
        ])])];
        let mut out = Vec::new();
        write_dictionary(&entries, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"KAT\": \"cat\""));
        assert!(text.trim_end().ends_with('}'));
    }
}
