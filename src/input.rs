// src/input.rs
//! User-editable submission state and keyword normalization

/// A resume document picked by the user.
#[derive(Debug, Clone)]
pub struct DocumentInput {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl DocumentInput {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Everything the user has entered so far. Mutated only by input handlers;
/// submissions read it through `RequestBuilder`, which takes a snapshot.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub document: Option<DocumentInput>,
    pub job_description: String,
    pub keywords_raw: String,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_document(&mut self, document: DocumentInput) {
        self.document = Some(document);
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.job_description = text.into();
    }

    pub fn set_keywords(&mut self, raw: impl Into<String>) {
        self.keywords_raw = raw.into();
    }
}

/// Split a raw comma-separated keyword string into trimmed, non-empty tokens.
/// Order is preserved and duplicates are kept; the service decides what to do
/// with repeats.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .map(|k| k.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keywords() {
        assert_eq!(split_keywords("a, b ,,c"), vec!["a", "b", "c"]);
        assert_eq!(split_keywords(""), Vec::<String>::new());
        assert_eq!(split_keywords(",,,"), Vec::<String>::new());
        assert_eq!(split_keywords("  rust  "), vec!["rust"]);
    }

    #[test]
    fn test_split_keywords_keeps_order_and_duplicates() {
        assert_eq!(split_keywords("b,a,b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_split_keywords_idempotent() {
        let first = split_keywords("a, b ,,c, a");
        let rejoined = first.join(",");
        assert_eq!(split_keywords(&rejoined), first);
    }
}
