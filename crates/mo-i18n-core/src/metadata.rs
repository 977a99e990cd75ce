use alloc::string::String;
use alloc::vec::Vec;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogMetadata {
    fields: Vec<(String, String)>,
}

impl CatalogMetadata {
    pub fn parse(header: &[u8]) -> Self {
        let text = String::from_utf8_lossy(header);
        let mut fields = Vec::new();
        for line in text.lines() {
            let Some((name, value)) = line.split_once(':') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            fields.push((String::from(name), String::from(value.trim())));
        }
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn language_team(&self) -> Option<&str> {
        self.get("Language-Team").filter(|value| !value.is_empty())
    }

    pub fn language(&self) -> Option<&str> {
        self.get("Language").filter(|value| !value.is_empty())
    }

    pub fn plural_forms(&self) -> Option<&str> {
        self.get("Plural-Forms")
    }

    pub fn charset(&self) -> Option<&str> {
        let content_type = self.get("Content-Type")?;
        content_type.split(';').find_map(|param| {
            let (key, value) = param.split_once('=')?;
            if key.trim().eq_ignore_ascii_case("charset") {
                Some(value.trim())
            } else {
                None
            }
        })
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::CatalogMetadata;

    const HEADER: &[u8] = b"Project-Id-Version: Jazz\xc2\xb2 Resurrection\n\
Language-Team: Czech <cs@example.org>\n\
Language: cs\n\
MIME-Version: 1.0\n\
Content-Type: text/plain; charset=UTF-8\n\
Plural-Forms: nplurals=3; plural=(n==1) ? 0 : (n>=2 && n<=4) ? 1 : 2;\n";

    #[test]
    fn reads_known_fields() {
        let metadata = CatalogMetadata::parse(HEADER);
        assert_eq!(metadata.language_team(), Some("Czech <cs@example.org>"));
        assert_eq!(metadata.language(), Some("cs"));
        assert_eq!(metadata.charset(), Some("UTF-8"));
        assert_eq!(
            metadata.plural_forms(),
            Some("nplurals=3; plural=(n==1) ? 0 : (n>=2 && n<=4) ? 1 : 2;")
        );
        assert_eq!(metadata.get("project-id-version"), Some("Jazz² Resurrection"));
    }

    #[test]
    fn blank_team_is_absent() {
        let metadata = CatalogMetadata::parse(b"Language-Team: \nLanguage: de\n");
        assert_eq!(metadata.language_team(), None);
        assert_eq!(metadata.language(), Some("de"));
    }

    #[test]
    fn skips_lines_without_separator() {
        let metadata = CatalogMetadata::parse(b"garbage\n: empty name\nX-Key: 1\n");
        assert_eq!(metadata.fields().count(), 1);
        assert_eq!(metadata.get("x-key"), Some("1"));
    }
}
