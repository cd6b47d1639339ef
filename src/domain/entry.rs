//! Parsing of `form lemma tag` dictionary lines

/// One line of a morphological dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    pub form: &'a str,
    pub lemma: &'a str,
    pub tag: &'a str,
}

impl<'a> Entry<'a> {
    /// Parse a line into an entry.
    ///
    /// Returns `Ok(None)` for blank lines. When the line does not hold exactly
    /// three whitespace-separated fields, the error carries the field count;
    /// the caller attaches the file and line position.
    pub fn parse(line: &'a str) -> Result<Option<Self>, usize> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => Ok(None),
            [form, lemma, tag] => Ok(Some(Entry {
                form: *form,
                lemma: *lemma,
                tag: *tag,
            })),
            _ => Err(fields.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triple() {
        let entry = Entry::parse("canciones canción NCFP000").unwrap().unwrap();
        assert_eq!(entry.form, "canciones");
        assert_eq!(entry.lemma, "canción");
        assert_eq!(entry.tag, "NCFP000");
    }

    #[test]
    fn test_parse_tolerates_carriage_return() {
        let entry = Entry::parse("casa casa NCFS000\r").unwrap().unwrap();
        assert_eq!(entry.tag, "NCFS000");
    }

    #[test]
    fn test_parse_blank_lines() {
        assert_eq!(Entry::parse(""), Ok(None));
        assert_eq!(Entry::parse("   \t"), Ok(None));
    }

    #[test]
    fn test_parse_wrong_field_count() {
        assert_eq!(Entry::parse("casa"), Err(1));
        assert_eq!(Entry::parse("casa casa"), Err(2));
        assert_eq!(Entry::parse("casa casa NCFS000 extra"), Err(4));
    }
}
