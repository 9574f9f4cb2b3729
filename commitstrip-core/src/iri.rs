use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped before an IRI is handed to the HTTP client, on top of
/// the non-ASCII characters the encoder always escapes. Reserved URI
/// delimiters and `%` itself are left alone so that an already-encoded
/// locator passes through unchanged.
const IRI_ESCAPE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Converts an International Resource Identifier to an ASCII-safe URI.
///
/// CommitStrip titles are French, so image locators routinely carry accented
/// characters. The conversion is idempotent and never fails; a malformed
/// locator simply round-trips.
pub fn iri_to_uri(iri: &str) -> String {
    utf8_percent_encode(iri, IRI_ESCAPE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_non_ascii() {
        assert_eq!(
            iri_to_uri("http://host/strips/le-d%C3%A9ploiement é.jpg"),
            "http://host/strips/le-d%C3%A9ploiement%20%C3%A9.jpg"
        );
    }

    #[test]
    fn ascii_passes_through() {
        let uri = "http://host/path/image.jpg?x=1&y=2#frag";
        assert_eq!(iri_to_uri(uri), uri);
    }

    #[test]
    fn idempotent() {
        let iri = "http://héhé.example/ça va/très bien.jpg";
        let once = iri_to_uri(iri);
        assert_eq!(iri_to_uri(&once), once);
    }
}
