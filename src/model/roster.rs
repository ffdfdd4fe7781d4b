/// The ordered collection of names plus the "currently editing" cursor.
///
/// Display order is storage order and duplicates are allowed. All mutation
/// goes through `ops::roster_ops`, which keeps the cursor valid: a cursor,
/// when set, always points at a live entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub(crate) names: Vec<String>,
    pub(crate) editing: Option<usize>,
}

impl Roster {
    pub fn new() -> Self {
        Roster::default()
    }

    /// Seed a roster from raw names. Each name is trimmed; names that trim
    /// to nothing are skipped, matching the add validation rule.
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let names = names
            .into_iter()
            .filter_map(|n| {
                let trimmed = n.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect();
        Roster {
            names,
            editing: None,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(|s| s.as_str())
    }

    /// Index of the entry currently open for editing, if any.
    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    /// Count label for the header row. Always the total roster size,
    /// regardless of any active search filter.
    pub fn count_label(&self) -> String {
        let n = self.names.len();
        if n == 1 {
            "1 student".to_string()
        } else {
            format!("{} students", n)
        }
    }
}
